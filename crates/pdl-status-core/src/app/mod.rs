//! App - アプリケーション層
//!
//! # 主要コンポーネント
//! - **StatusReportBuilder**: スナップショット + 時刻から StatusRecord を作る
//! - **render**: StatusRecord を整形済み JSON にする
//! - **ReportConfig**: 出力設定（インデント幅）

pub mod builder;
pub mod config;
pub mod render;

pub use self::builder::StatusReportBuilder;
pub use self::config::{Indent, ParseIndentError, ReportConfig};
pub use self::render::{reformat, render, write_report};
