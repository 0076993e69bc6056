//! pdl-status-core
//!
//! Caesar Token DEX/Wallet/App 開発のプロジェクト状況レポートを組み立てる。
//!
//! # モジュール構成
//! - **domain**: StatusRecord, ステータストークン, 既定スナップショット, エラー
//! - **ports**: Clock（時刻の差し替え）
//! - **app**: StatusReportBuilder と JSON 出力

pub mod app;
pub mod domain;
pub mod ports;

pub use app::{ReportConfig, StatusReportBuilder};
pub use domain::{StatusError, StatusRecord};
