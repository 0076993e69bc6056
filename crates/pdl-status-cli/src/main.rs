//! pdl-status
//!
//! プロジェクト状況レポートを JSON で標準出力に書く。
//! ログは標準エラーのみ。

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use pdl_status_core::app::{Indent, ReportConfig, StatusReportBuilder, write_report};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Print the Caesar project status report as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Indent width of the JSON document (2 or 4)
    #[arg(long, env = "PDL_STATUS_INDENT", default_value = "2")]
    indent: Indent,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn report_config(&self) -> ReportConfig {
        ReportConfig::default().with_indent(self.indent)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let record = StatusReportBuilder::system()
        .build()
        .context("failed to build status record")?;

    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, &record, &args.report_config())
        .context("failed to write status report")?;

    info!(project = %record.project_name, "status report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_defaults() {
        let args = Args::try_parse_from(["pdl-status"]).unwrap();
        assert!(!args.verbose);
        assert_eq!(args.report_config(), ReportConfig::default());
    }

    #[test]
    fn indent_flag_selects_four_spaces() {
        let args = Args::try_parse_from(["pdl-status", "--indent", "4", "-v"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.report_config().indent, Indent::Four);
    }

    #[test]
    fn unsupported_indent_is_rejected() {
        assert!(Args::try_parse_from(["pdl-status", "--indent", "3"]).is_err());
    }

    #[test]
    fn args_are_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
