//! Snapshot - レポートの静的な内容
//!
//! タイムスタンプ以外のすべてのフィールドはここで定数として持ちます。
//! ビルダーはこれに時刻を足して StatusRecord を作るだけです。

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;

use super::record::{DevelopmentRequirement, InfraNode, StatusRecord};
use super::status::{ComponentStatus, PhaseStatus};

static DEFAULT_SNAPSHOT: LazyLock<StatusSnapshot> = LazyLock::new(StatusSnapshot::caesar);

/// StatusSnapshot は last_updated を除いた StatusRecord
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub project_name: String,
    pub project_path: String,
    pub current_phase: String,
    pub phase_status: PhaseStatus,
    pub completed_infrastructure: IndexMap<String, InfraNode>,
    pub development_requirements: IndexMap<String, DevelopmentRequirement>,
    pub next_actions: Vec<String>,
}

impl StatusSnapshot {
    /// プロセス内で一度だけ作られる既定のスナップショット
    pub fn default_ref() -> &'static StatusSnapshot {
        &DEFAULT_SNAPSHOT
    }

    /// Caesar Token DEX/Wallet/App の現状
    pub fn caesar() -> Self {
        let smart_contracts = InfraNode::from([
            (
                "dex_factory",
                InfraNode::from("0xAe0DfF19f44D3544139d900a3f9f6c03C6764538"),
            ),
            (
                "caesar_token",
                InfraNode::from(
                    "0x6299744254422aadb6a57183f47eaae1678cf86cc58a0c78dfc4fd2caa3ba2a4",
                ),
            ),
            ("network", InfraNode::from("Sepolia Testnet")),
        ]);

        let frontend_applications = InfraNode::from([
            ("dex_interface", InfraNode::from("React/TypeScript - BUILT")),
            ("cross_chain_bridge", InfraNode::from("LayerZero V2 - BUILT")),
            ("analytics_dashboard", InfraNode::from("Real-time charts - BUILT")),
            (
                "wallet_integration",
                InfraNode::from("RainbowKit multi-chain - BUILT"),
            ),
        ]);

        let completed_infrastructure = IndexMap::from([
            ("phase_3_status".to_string(), InfraNode::from("COMPLETED")),
            ("smart_contracts".to_string(), smart_contracts),
            ("frontend_applications".to_string(), frontend_applications),
        ]);

        let development_requirements = IndexMap::from([
            (
                "agora_dex".to_string(),
                DevelopmentRequirement::new(
                    ComponentStatus::PartiallyImplemented,
                    "scrolls-app/agora-dex/",
                    &[
                        "Enhanced trading features",
                        "Advanced analytics",
                        "DAO integration",
                        "Mobile optimization",
                        "Production deployment",
                    ],
                ),
            ),
            (
                "satchel_wallet".to_string(),
                DevelopmentRequirement::new(
                    ComponentStatus::BasicImplementation,
                    "scrolls-app/satchel-wallet/",
                    &[
                        "Hardware wallet support",
                        "Advanced Caesar optimizations",
                        "DeFi protocol integrations",
                        "Portfolio management",
                        "Security enhancements",
                    ],
                ),
            ),
            (
                "tablets_ui".to_string(),
                DevelopmentRequirement::new(
                    ComponentStatus::PartialAnalytics,
                    "scrolls-app/tablets-ui/",
                    &[
                        "Complete portfolio dashboard",
                        "Advanced token analytics",
                        "Mining interface",
                        "Performance monitoring",
                        "Cross-chain bridge UI enhancement",
                    ],
                ),
            ),
        ]);

        let next_actions = [
            "Initialize PDL repository tracking",
            "Create comprehensive roadmap for ecosystem expansion",
            "Delegate to appropriate specialized agents",
            "Set up parallel development workflows",
            "Plan integration testing strategy",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self {
            project_name: "Caesar Token DEX/Wallet/App Development".to_string(),
            project_path: "/home/persist/repos/work/vazio/caesar".to_string(),
            current_phase: "Assessment & Planning".to_string(),
            phase_status: PhaseStatus::Initializing,
            completed_infrastructure,
            development_requirements,
            next_actions,
        }
    }

    /// 時刻を付けて StatusRecord にする
    pub fn into_record(self, last_updated: DateTime<FixedOffset>) -> StatusRecord {
        StatusRecord {
            project_name: self.project_name,
            project_path: self.project_path,
            current_phase: self.current_phase,
            phase_status: self.phase_status,
            last_updated,
            completed_infrastructure: self.completed_infrastructure,
            development_requirements: self.development_requirements,
            next_actions: self.next_actions,
        }
    }
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self::default_ref().clone()
    }
}
