//! StatusReportBuilder - レコードの構築
//!
//! スナップショット（静的な内容）と Clock（時刻）を組み合わせるだけ。
//! 副作用は時計の読み取りのみ。

use chrono::SubsecRound;
use tracing::debug;

use crate::domain::{StatusError, StatusRecord, StatusSnapshot};
use crate::ports::{Clock, SystemClock};

/// StatusReportBuilder は StatusRecord を作る
///
/// # 使用例
/// ```
/// use pdl_status_core::app::StatusReportBuilder;
///
/// let record = StatusReportBuilder::system().build().unwrap();
/// assert_eq!(record.development_requirements.len(), 3);
/// ```
pub struct StatusReportBuilder<C> {
    clock: C,
    snapshot: StatusSnapshot,
}

impl StatusReportBuilder<SystemClock> {
    /// システム時計 + 既定スナップショット
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> StatusReportBuilder<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            snapshot: StatusSnapshot::default_ref().clone(),
        }
    }

    /// 既定の内容を差し替える
    pub fn with_snapshot(mut self, snapshot: StatusSnapshot) -> Self {
        self.snapshot = snapshot;
        self
    }

    pub fn snapshot(&self) -> &StatusSnapshot {
        &self.snapshot
    }

    /// レコードを作る
    ///
    /// 時計は1回だけ読む。出力がマイクロ秒精度なので、ここで切り捨てておく。
    pub fn build(&self) -> Result<StatusRecord, StatusError> {
        let now = self.clock.now()?.trunc_subsecs(6);
        debug!(
            project = %self.snapshot.project_name,
            last_updated = %now,
            "building status record"
        );
        Ok(self.snapshot.clone().into_record(now))
    }
}
