//! The banner at the top of every generated document

use chrono::{DateTime, FixedOffset};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %z";

/// Generation stamp shared by all documents of one run.
///
/// The same header text is written verbatim into every document so that
/// outputs of one run can be compared byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub generated_at: DateTime<FixedOffset>,
    pub source: String,
}

impl Header {
    pub fn new(source: impl Into<String>, generated_at: DateTime<FixedOffset>) -> Self {
        Header {
            generated_at,
            source: source.into(),
        }
    }

    pub fn timestamp(&self) -> String {
        self.generated_at.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn render(&self) -> String {
        let mut out = String::from("<!--\n");
        out.push_str(&format!("\tGenerated on:\t{}\n", self.timestamp()));
        out.push_str(&format!("\tFrom:\t{}\n", self.source));
        out.push_str("\n\tDO NOT MANUALLY EDIT THIS FILE.\n");
        out.push_str("\tYOUR CHANGES WILL BE LOST NEXT TIME IT'S GENERATED\n");
        out.push_str("-->\n\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_time() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-03-01T09:30:00+01:00").unwrap()
    }

    #[test]
    fn test_timestamp_keeps_offset() {
        let header = Header::new("Makefile", fixed_time());
        assert_eq!(header.timestamp(), "2024-03-01 09:30:00 +0100");
    }

    #[test]
    fn test_render_is_an_html_comment() {
        let text = Header::new("build/Makefile", fixed_time()).render();
        assert!(text.starts_with("<!--\n"));
        assert!(text.ends_with("-->\n\n"));
        assert!(text.contains("\tFrom:\tbuild/Makefile\n"));
        assert!(text.contains("DO NOT MANUALLY EDIT THIS FILE."));
    }
}
