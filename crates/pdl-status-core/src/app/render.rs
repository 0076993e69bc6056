//! Render - StatusRecord を整形済み JSON にする

use std::io::Write;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use super::config::ReportConfig;
use crate::domain::{StatusError, StatusRecord};

/// レコードを検証して整形済み JSON 文字列にする
///
/// キー順は構築順のまま。形が不正な場合は `InvalidRecordShape`。
pub fn render(record: &StatusRecord, config: &ReportConfig) -> Result<String, StatusError> {
    record.validate()?;

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(config.indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record
        .serialize(&mut serializer)
        .map_err(|e| StatusError::invalid_shape(e.to_string()))?;

    let text = String::from_utf8(buf).map_err(|e| StatusError::invalid_shape(e.to_string()))?;
    debug!(bytes = text.len(), indent = config.indent.width(), "rendered status record");
    Ok(text)
}

/// 整形済み JSON を書き込み、末尾に改行を付ける
pub fn write_report<W: Write>(
    writer: &mut W,
    record: &StatusRecord,
    config: &ReportConfig,
) -> Result<(), StatusError> {
    let text = render(record, config)?;
    writeln!(writer, "{text}")?;
    writer.flush()?;
    Ok(())
}

/// 出力済みドキュメントを読み戻して、同じ規則で再出力する
///
/// `render` の出力に対してはバイト単位で同一の文字列になる。
pub fn reformat(text: &str, config: &ReportConfig) -> Result<String, StatusError> {
    let record: StatusRecord =
        serde_json::from_str(text).map_err(|e| StatusError::invalid_shape(e.to_string()))?;
    render(&record, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Indent, StatusReportBuilder};
    use crate::ports::FixedClock;
    use chrono::{FixedOffset, TimeZone};
    use rstest::rstest;

    fn fixed_record() -> StatusRecord {
        let at = FixedOffset::east_opt(-5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 3, 14, 9, 26, 53)
            .unwrap();
        StatusReportBuilder::new(FixedClock::new(at)).build().unwrap()
    }

    #[test]
    fn two_space_output_starts_like_the_record() {
        let text = render(&fixed_record(), &ReportConfig::default()).unwrap();
        let expected_head = "{\n  \"project_name\": \"Caesar Token DEX/Wallet/App Development\",\n  \"project_path\": \"/home/persist/repos/work/vazio/caesar\",\n  \"current_phase\": \"Assessment & Planning\",\n  \"phase_status\": \"INITIALIZING\",\n  \"last_updated\": \"2025-03-14T09:26:53.000000-05:00\",\n  \"completed_infrastructure\": {\n    \"phase_3_status\": \"COMPLETED\",\n";
        assert!(text.starts_with(expected_head), "unexpected head:\n{text}");
        assert!(text.ends_with("\n}"));
    }

    #[test]
    fn four_space_indent_is_honored() {
        let config = ReportConfig::default().with_indent(Indent::Four);
        let text = render(&fixed_record(), &config).unwrap();
        assert!(text.contains("\n    \"project_name\""));
        assert!(text.contains("\n        \"phase_3_status\""));
    }

    #[rstest]
    #[case::two(Indent::Two)]
    #[case::four(Indent::Four)]
    fn reformat_is_byte_identical(#[case] indent: Indent) {
        let config = ReportConfig::default().with_indent(indent);
        let text = render(&fixed_record(), &config).unwrap();
        assert_eq!(reformat(&text, &config).unwrap(), text);
    }

    #[test]
    fn reformat_rejects_garbage() {
        let err = reformat("{\"project_name\": 1}", &ReportConfig::default()).unwrap_err();
        assert!(matches!(err, StatusError::InvalidRecordShape { .. }));
    }

    #[test]
    fn invalid_record_is_not_rendered() {
        let mut record = fixed_record();
        record.project_name = String::new();
        let err = render(&record, &ReportConfig::default()).unwrap_err();
        assert!(matches!(err, StatusError::InvalidRecordShape { .. }));
    }

    #[test]
    fn write_report_appends_newline() {
        let record = fixed_record();
        let mut out = Vec::new();
        write_report(&mut out, &record, &ReportConfig::default()).unwrap();

        let written = String::from_utf8(out).unwrap();
        let rendered = render(&record, &ReportConfig::default()).unwrap();
        assert_eq!(written, format!("{rendered}\n"));
    }
}
