use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context;
use markup_ranges_engine::{Range, RangeError, check_bounds};
use serde::Deserialize;

/// Set of style names attached to a range.
pub type Styles = BTreeSet<String>;

/// A document file: text plus style ranges, as written in TOML.
#[derive(Debug, Deserialize)]
pub struct Document {
    pub text: String,
    #[serde(default)]
    pub ranges: Vec<RawRange>,
}

/// A range as read from disk, before validation.
#[derive(Debug, Deserialize)]
pub struct RawRange {
    pub offset: i64,
    pub length: i64,
    pub style: String,
}

impl Document {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document at {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse document at {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validated ranges, each carrying its single style.
    pub fn styled_ranges(&self) -> Result<Vec<Range<Styles>>, RangeError> {
        let ranges = self
            .ranges
            .iter()
            .map(|raw| {
                Range::try_new(raw.offset, raw.length, Styles::from([raw.style.clone()]))
            })
            .collect::<Result<Vec<_>, _>>()?;
        check_bounds(&self.text, &ranges)?;
        Ok(ranges)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    const DOC: &str = r#"
text = "Hello World"

[[ranges]]
offset = 0
length = 5
style = "bold"

[[ranges]]
offset = 3
length = 5
style = "italic"
"#;

    #[test]
    fn parses_text_and_ranges() {
        let doc = Document::parse(DOC).unwrap();
        assert_eq!(doc.text, "Hello World");
        assert_eq!(
            doc.styled_ranges().unwrap(),
            vec![
                Range::new(0, 5, Styles::from(["bold".to_string()])),
                Range::new(3, 5, Styles::from(["italic".to_string()])),
            ]
        );
    }

    #[test]
    fn ranges_are_optional() {
        let doc = Document::parse("text = \"plain\"").unwrap();
        assert!(doc.styled_ranges().unwrap().is_empty());
    }

    #[test]
    fn negative_offsets_are_rejected() {
        let doc = Document::parse(
            "text = \"abc\"\n[[ranges]]\noffset = -1\nlength = 2\nstyle = \"bold\"\n",
        )
        .unwrap();
        assert_eq!(
            doc.styled_ranges(),
            Err(RangeError::NegativeOffset { offset: -1 })
        );
    }

    #[test]
    fn ranges_past_the_text_are_rejected() {
        let doc = Document::parse(
            "text = \"abc\"\n[[ranges]]\noffset = 2\nlength = 2\nstyle = \"bold\"\n",
        )
        .unwrap();
        assert!(matches!(
            doc.styled_ranges(),
            Err(RangeError::OutOfBounds { text_len: 3, .. })
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Document::load(&temp_dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn load_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.toml");
        std::fs::write(&path, DOC).unwrap();

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.ranges.len(), 2);
        assert_eq!(doc.ranges[1].style, "italic");
    }
}
