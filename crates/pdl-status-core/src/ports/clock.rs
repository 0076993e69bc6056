//! Clock port - 時刻の抽象化
//!
//! - **SystemClock**: 本番用（ローカルタイムゾーンの現在時刻）
//! - **FixedClock**: テスト用（常に同じ時刻を返す）

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};

use crate::domain::StatusError;

/// Clock は現在時刻を提供
///
/// # テスト容易性
/// - trait により時刻を差し替え可能
/// - テストでは FixedClock を使用
pub trait Clock {
    fn now(&self) -> Result<DateTime<FixedOffset>, StatusError>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Result<DateTime<FixedOffset>, StatusError> {
        (**self).now()
    }
}

/// SystemClock はシステム時計をローカル時刻で読む
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<DateTime<FixedOffset>, StatusError> {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| StatusError::clock_unavailable(e.to_string()))?;
        let secs = i64::try_from(since_epoch.as_secs())
            .map_err(|_| StatusError::clock_unavailable("seconds since epoch overflow i64"))?;
        let utc = DateTime::<Utc>::from_timestamp(secs, since_epoch.subsec_nanos())
            .ok_or_else(|| StatusError::clock_unavailable("timestamp out of range"))?;

        Ok(utc.with_timezone(&Local).fixed_offset())
    }
}

/// FixedClock は常に同じ時刻を返す
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new<Tz: TimeZone>(at: DateTime<Tz>) -> Self {
        Self {
            at: at.fixed_offset(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<DateTime<FixedOffset>, StatusError> {
        Ok(self.at)
    }
}
