//! Frontmatter parsing from markdown documents.

use super::types::Frontmatter;
use thiserror::Error;

/// Errors that can occur during frontmatter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Whether a line is a frontmatter delimiter (`---`, surrounding whitespace ignored).
pub fn is_delimiter(line: &str) -> bool {
    line.trim() == "---"
}

/// Find the index of the closing `---` for a frontmatter block.
///
/// Frontmatter must open on the first line:
/// ```markdown
/// ---
/// tags: [daily]
/// ---
/// # Document content
/// ```
/// Returns `None` when the first line is not a delimiter or the block is never
/// closed, in which case the document has no frontmatter.
pub fn find_closing_delimiter(lines: &[&str]) -> Option<usize> {
    let (first, rest) = lines.split_first()?;
    if !is_delimiter(first) {
        return None;
    }
    rest.iter().position(|line| is_delimiter(line)).map(|i| i + 1)
}

/// Parse the YAML between the delimiters into key/value fields.
pub fn parse_fields(yaml: &str) -> Result<Frontmatter, FrontmatterParseError> {
    if yaml.trim().is_empty() {
        return Ok(Frontmatter::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_delimiter_found() {
        let lines = ["---", "title: Hello", "---", "# Content"];
        assert_eq!(find_closing_delimiter(&lines), Some(2));
    }

    #[test]
    fn delimiter_tolerates_whitespace() {
        let lines = ["---  ", "title: Hello", "  ---", "body"];
        assert_eq!(find_closing_delimiter(&lines), Some(2));
    }

    #[test]
    fn no_frontmatter_when_first_line_is_not_delimiter() {
        let lines = ["# Hello", "---", "tags: [a]", "---"];
        assert_eq!(find_closing_delimiter(&lines), None);
    }

    #[test]
    fn unterminated_block_is_not_frontmatter() {
        let lines = ["---", "tags: [a]", "no closing"];
        assert_eq!(find_closing_delimiter(&lines), None);
    }

    #[test]
    fn empty_block() {
        let lines = ["---", "---", "body"];
        assert_eq!(find_closing_delimiter(&lines), Some(1));
        assert!(parse_fields("").unwrap().fields.is_empty());
    }

    #[test]
    fn parse_multiple_fields() {
        let fm = parse_fields("title: Test\ndate: 2024-01-15\ntags:\n  - rust\n  - cli").unwrap();
        assert_eq!(fm.fields.get("title").and_then(|v| v.as_str()), Some("Test"));
        assert!(fm.fields.contains_key("tags"));
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let err = parse_fields("tags: [unclosed").unwrap_err();
        assert!(err.to_string().starts_with("invalid YAML frontmatter"));
    }
}
