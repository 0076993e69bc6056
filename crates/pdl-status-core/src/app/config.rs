//! ReportConfig - 出力設定
//!
//! 必須の設定はない。すべて既定値で有効な出力になる。

use std::str::FromStr;

/// JSON のインデント幅
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Two,
    Four,
}

impl Indent {
    pub fn width(&self) -> usize {
        match self {
            Indent::Two => 2,
            Indent::Four => 4,
        }
    }

    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            Indent::Two => b"  ",
            Indent::Four => b"    ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported indent `{0}` (expected 2 or 4)")]
pub struct ParseIndentError(String);

impl FromStr for Indent {
    type Err = ParseIndentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2" => Ok(Indent::Two),
            "4" => Ok(Indent::Four),
            other => Err(ParseIndentError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfig {
    pub indent: Indent,
}

impl ReportConfig {
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_is_two_spaces() {
        let config = ReportConfig::default();
        assert_eq!(config.indent, Indent::Two);
        assert_eq!(config.indent.as_bytes(), b"  ");
    }

    #[rstest]
    #[case::two("2", Indent::Two)]
    #[case::four("4", Indent::Four)]
    #[case::padded(" 4 ", Indent::Four)]
    fn parses_supported_widths(#[case] raw: &str, #[case] expected: Indent) {
        assert_eq!(raw.parse::<Indent>().unwrap(), expected);
    }

    #[rstest]
    #[case::zero("0")]
    #[case::three("3")]
    #[case::tab("tab")]
    fn rejects_other_widths(#[case] raw: &str) {
        let err = raw.parse::<Indent>().unwrap_err();
        assert!(err.to_string().contains("expected 2 or 4"));
    }

    #[test]
    fn width_round_trips_through_from_str() {
        for indent in [Indent::Two, Indent::Four] {
            assert_eq!(indent.width().to_string().parse::<Indent>().unwrap(), indent);
        }
    }

    #[test]
    fn width_matches_bytes() {
        for indent in [Indent::Two, Indent::Four] {
            assert_eq!(indent.width(), indent.as_bytes().len());
        }
    }
}
