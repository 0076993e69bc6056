//! Status tokens - フェーズとコンポーネントの状態
//!
//! どちらも JSON 上は SCREAMING_SNAKE_CASE のトークンとして出力されます。

use serde::{Deserialize, Serialize};
use std::fmt;

/// PhaseStatus はプロジェクト全体のフェーズ進捗
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseStatus {
    Initializing,
    InProgress,
    Blocked,
    Completed,
}

impl PhaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseStatus::Initializing => "INITIALIZING",
            PhaseStatus::InProgress => "IN_PROGRESS",
            PhaseStatus::Blocked => "BLOCKED",
            PhaseStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ComponentStatus は development_requirements の各コンポーネントの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentStatus {
    NotStarted,
    BasicImplementation,
    PartialAnalytics,
    PartiallyImplemented,
    Completed,
}

impl ComponentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentStatus::NotStarted => "NOT_STARTED",
            ComponentStatus::BasicImplementation => "BASIC_IMPLEMENTATION",
            ComponentStatus::PartialAnalytics => "PARTIAL_ANALYTICS",
            ComponentStatus::PartiallyImplemented => "PARTIALLY_IMPLEMENTED",
            ComponentStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::initializing(PhaseStatus::Initializing)]
    #[case::in_progress(PhaseStatus::InProgress)]
    #[case::blocked(PhaseStatus::Blocked)]
    #[case::completed(PhaseStatus::Completed)]
    fn phase_status_serializes_as_token(#[case] status: PhaseStatus) {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{status}\""));
    }

    #[rstest]
    #[case::not_started(ComponentStatus::NotStarted)]
    #[case::basic(ComponentStatus::BasicImplementation)]
    #[case::partial_analytics(ComponentStatus::PartialAnalytics)]
    #[case::partially_implemented(ComponentStatus::PartiallyImplemented)]
    #[case::completed(ComponentStatus::Completed)]
    fn component_status_serializes_as_token(#[case] status: ComponentStatus) {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{status}\""));
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert!(serde_json::from_str::<PhaseStatus>("\"PAUSED\"").is_err());
    }
}
