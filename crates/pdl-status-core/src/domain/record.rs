//! StatusRecord - レポート本体
//!
//! フィールドの宣言順がそのまま JSON のキー順になります。

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::errors::StatusError;
use super::status::{ComponentStatus, PhaseStatus};

/// completed_infrastructure 配下の値
///
/// 文字列、文字列のリスト、またはネストしたセクションのいずれか。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfraNode {
    Text(String),
    List(Vec<String>),
    Section(IndexMap<String, InfraNode>),
}

impl From<&str> for InfraNode {
    fn from(value: &str) -> Self {
        InfraNode::Text(value.to_string())
    }
}

impl From<IndexMap<String, InfraNode>> for InfraNode {
    fn from(value: IndexMap<String, InfraNode>) -> Self {
        InfraNode::Section(value)
    }
}

impl<const N: usize> From<[(&str, InfraNode); N]> for InfraNode {
    fn from(entries: [(&str, InfraNode); N]) -> Self {
        InfraNode::Section(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }
}

/// 未完了コンポーネントの作業項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevelopmentRequirement {
    pub status: ComponentStatus,
    pub location: String,
    pub needs: Vec<String>,
}

impl DevelopmentRequirement {
    pub fn new(status: ComponentStatus, location: &str, needs: &[&str]) -> Self {
        Self {
            status,
            location: location.to_string(),
            needs: needs.iter().map(|n| n.to_string()).collect(),
        }
    }
}

/// StatusRecord は1回の実行で生成されるプロジェクト状況のスナップショット
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusRecord {
    pub project_name: String,
    pub project_path: String,
    pub current_phase: String,
    pub phase_status: PhaseStatus,
    #[serde(with = "iso8601")]
    pub last_updated: DateTime<FixedOffset>,
    pub completed_infrastructure: IndexMap<String, InfraNode>,
    pub development_requirements: IndexMap<String, DevelopmentRequirement>,
    pub next_actions: Vec<String>,
}

impl StatusRecord {
    /// 出力契約のチェック
    ///
    /// レコードはビルダーが組み立てるので、ここで失敗するのはプログラミングミス。
    pub fn validate(&self) -> Result<(), StatusError> {
        if self.project_name.trim().is_empty() {
            return Err(StatusError::invalid_shape("project_name is empty"));
        }

        validate_section(&self.completed_infrastructure, "completed_infrastructure")?;

        for (name, requirement) in self.development_requirements.iter() {
            if name.is_empty() {
                return Err(StatusError::invalid_shape(
                    "development_requirements has an empty component name",
                ));
            }
            if requirement.needs.is_empty() {
                return Err(StatusError::invalid_shape(format!(
                    "development_requirements.{name}.needs is empty"
                )));
            }
            if requirement.needs.iter().any(|n| n.trim().is_empty()) {
                return Err(StatusError::invalid_shape(format!(
                    "development_requirements.{name}.needs contains a blank entry"
                )));
            }
        }

        if self.next_actions.iter().any(|a| a.trim().is_empty()) {
            return Err(StatusError::invalid_shape(
                "next_actions contains a blank entry",
            ));
        }

        Ok(())
    }
}

fn validate_section(section: &IndexMap<String, InfraNode>, path: &str) -> Result<(), StatusError> {
    for (key, node) in section.iter() {
        if key.is_empty() {
            return Err(StatusError::invalid_shape(format!("{path} has an empty key")));
        }
        if let InfraNode::Section(inner) = node {
            validate_section(inner, &format!("{path}.{key}"))?;
        }
    }
    Ok(())
}

/// last_updated の (de)serialize
///
/// マイクロ秒精度・オフセット付きの ISO-8601 (RFC 3339) 文字列。
/// 小数部が 0 でも常に6桁出力し、UTC オフセットも必ず付ける
/// （例: `2025-03-14T09:26:53.000000-05:00`）。
/// オフセットなしのローカル時刻は読み戻したときに時点が確定しないため使わない。
pub mod iso8601 {
    use chrono::{DateTime, FixedOffset, SecondsFormat};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn format(value: &DateTime<FixedOffset>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Micros, false)
    }

    pub fn serialize<S: Serializer>(
        value: &DateTime<FixedOffset>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw).map_err(de::Error::custom)
    }
}
