//! Errors - エラー型
//!
//! レポート生成で起こり得る失敗は少ない:
//! - 時刻が取得できない（実運用ではほぼ起こらない）
//! - レコードの形が出力契約を満たさない（プログラミングミス）
//! - 出力先への書き込み失敗

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StatusError {
    #[error("system clock unavailable: {reason}")]
    ClockUnavailable { reason: String },

    #[error("invalid record shape: {message}")]
    InvalidRecordShape { message: String },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl StatusError {
    pub fn clock_unavailable(reason: impl Into<String>) -> Self {
        Self::ClockUnavailable {
            reason: reason.into(),
        }
    }

    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidRecordShape {
            message: message.into(),
        }
    }
}
