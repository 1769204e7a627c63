//! Tag extraction from note content.
//!
//! The note is walked line by line with a small state machine. A leading
//! frontmatter block is parsed as YAML at the end; fenced code blocks and
//! markdown headers never contribute tags.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::matcher::matches_tag;
use super::types::{TagBlock, TagLocation, TagOccurrence};
use crate::frontmatter;

// `#` at line start or after whitespace, then a letter, then letters, digits,
// `_`, `-` or `/` (the slash makes hierarchical tags like `#area/topic`).
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)#([A-Za-z][A-Za-z0-9_/-]*)").unwrap());

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6}\s").unwrap());

/// Code fence delimiter; a block closes only on the fence that opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fence {
    Backtick,
    Tilde,
}

impl Fence {
    fn marker(self) -> &'static str {
        match self {
            Self::Backtick => "```",
            Self::Tilde => "~~~",
        }
    }

    fn opening(trimmed: &str) -> Option<Self> {
        [Self::Backtick, Self::Tilde].into_iter().find(|f| trimmed.starts_with(f.marker()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Frontmatter,
    Body,
    CodeBlock(Fence),
}

/// Extract every tag occurrence from a note.
///
/// Inline tags come first in the order they appear, followed by frontmatter
/// tags in the order they are listed.
///
/// The first `---` line outside fenced code opens a frontmatter block and the
/// next one closes it; later `---` lines are ordinary body text. Lines inside
/// the block are never scanned inline, so an unclosed block hides the rest of
/// the note. Only a closed block opening on the first line is parsed as YAML.
pub fn extract_tags(content: &str) -> Vec<TagOccurrence> {
    let lines = note_lines(content);

    let mut state = ScanState::Body;
    let mut frontmatter_seen = false;
    let mut occurrences = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        state = match state {
            ScanState::Frontmatter if frontmatter::is_delimiter(line) => ScanState::Body,
            ScanState::Frontmatter => ScanState::Frontmatter,
            ScanState::CodeBlock(fence) if trimmed.starts_with(fence.marker()) => {
                ScanState::Body
            }
            ScanState::CodeBlock(fence) => ScanState::CodeBlock(fence),
            ScanState::Body if !frontmatter_seen && frontmatter::is_delimiter(line) => {
                frontmatter_seen = true;
                ScanState::Frontmatter
            }
            ScanState::Body => match Fence::opening(trimmed) {
                Some(fence) => ScanState::CodeBlock(fence),
                None => {
                    occurrences.extend(inline_tags(line, idx + 1));
                    ScanState::Body
                }
            },
        };
    }

    if let Some(end) = frontmatter::find_closing_delimiter(&lines) {
        occurrences.extend(frontmatter_tags(&lines[1..end].join("\n")));
    }

    occurrences
}

/// Split a note into lines, dropping the `\r` of CRLF line endings.
pub fn note_lines(content: &str) -> Vec<&str> {
    content.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)).collect()
}

fn inline_tags(line: &str, line_number: usize) -> Vec<TagOccurrence> {
    if HEADER_RE.is_match(line.trim()) {
        return Vec::new();
    }

    TAG_RE
        .captures_iter(line)
        .filter_map(|cap| {
            let whole = cap.get(0)?;
            let tag = cap.get(1)?.as_str();
            if is_hex_code(tag) {
                return None;
            }
            Some(TagOccurrence::inline(tag, line_number, whole.as_str()))
        })
        .collect()
}

fn frontmatter_tags(yaml: &str) -> Vec<TagOccurrence> {
    match frontmatter::parse_fields(yaml) {
        Ok(fm) => fm.tags().into_vec().into_iter().map(TagOccurrence::frontmatter).collect(),
        Err(e) => {
            debug!("ignoring frontmatter tags: {e}");
            Vec::new()
        }
    }
}

/// Whether a candidate tag looks like a CSS hex color rather than a tag.
///
/// - 3 characters, all hex digits (`fff`, `abc`, `123`): color.
/// - 6 characters, all hex letters with no decimal digit (`aabbcc`): color.
///   `abc123` has digits and is kept as a tag.
///
/// Real tags such as `#add` or `#decade` are dropped by this rule too.
pub fn is_hex_code(s: &str) -> bool {
    let all_hex = s.chars().all(|c| c.is_ascii_hexdigit());
    match s.len() {
        3 => all_hex,
        6 => all_hex && !s.chars().any(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Whether the note carries `tag` anywhere (case-insensitive, no subtags).
pub fn has_tag(content: &str, tag: &str) -> bool {
    extract_tags(content).iter().any(|o| matches_tag(&o.tag, tag, false))
}

/// All occurrences of exactly `tag` (case-insensitive) in the note.
pub fn find_tag_lines(content: &str, tag: &str) -> Vec<TagOccurrence> {
    extract_tags(content).into_iter().filter(|o| matches_tag(&o.tag, tag, false)).collect()
}

/// Every inline line carrying `tag`, with `context_lines` lines on each side.
///
/// Only the first matching tag of a line is reported. Windows are clamped to
/// the note and come back in line order.
pub fn find_tag_blocks(
    content: &str,
    tag: &str,
    context_lines: usize,
    include_subtags: bool,
) -> Vec<TagBlock> {
    let lines = note_lines(content);
    let mut blocks: Vec<TagBlock> = Vec::new();

    for occ in extract_tags(content) {
        if occ.location != TagLocation::Inline || !matches_tag(&occ.tag, tag, include_subtags) {
            continue;
        }
        if blocks.last().is_some_and(|b| b.line_number == occ.line_number) {
            continue;
        }

        let idx = occ.line_number - 1;
        let start = idx.saturating_sub(context_lines);
        let end = (idx + context_lines + 1).min(lines.len());
        blocks.push(TagBlock {
            tag: occ.tag,
            line_number: occ.line_number,
            start_line: start + 1,
            end_line: end,
            lines: lines[start..end].iter().map(|l| l.to_string()).collect(),
        });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tag_names(content: &str) -> Vec<String> {
        extract_tags(content).into_iter().map(|o| o.tag).collect()
    }

    fn frontmatter_names(content: &str) -> Vec<String> {
        extract_tags(content)
            .into_iter()
            .filter(|o| o.location == TagLocation::Frontmatter)
            .map(|o| o.tag)
            .collect()
    }

    #[test]
    fn simple_inline_tag() {
        let tags = extract_tags("This is a note with #daily tag");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].tag, "daily");
        assert_eq!(tags[0].location, TagLocation::Inline);
        assert_eq!(tags[0].line_number, 1);
        assert_eq!(tags[0].matched_text, "#daily");
    }

    #[test]
    fn multiple_tags_on_one_line() {
        assert_eq!(
            tag_names("Meeting notes #work #urgent #follow-up"),
            vec!["work", "urgent", "follow-up"]
        );
    }

    #[test]
    fn tags_on_multiple_lines_keep_line_numbers() {
        let tags = extract_tags("Line one with #first\nLine two with #second");
        let lines: Vec<_> = tags.iter().map(|o| (o.tag.as_str(), o.line_number)).collect();
        assert_eq!(lines, vec![("first", 1), ("second", 2)]);
    }

    #[test]
    fn tag_at_start_of_line_and_hierarchical() {
        assert_eq!(
            tag_names("#morning routine\nreading #programming/philosophy today"),
            vec!["morning", "programming/philosophy"]
        );
    }

    #[test]
    fn hash_must_follow_whitespace() {
        assert_eq!(
            tag_names("#one#two and a#b and http://x.com/#anchor"),
            vec!["one"]
        );
    }

    #[test]
    fn no_tags() {
        assert!(extract_tags("This note has no tags at all").is_empty());
        assert!(extract_tags("").is_empty());
    }

    #[test]
    fn headers_never_contribute_tags() {
        assert!(extract_tags("# Header #notReallyATag").is_empty());
        assert_eq!(
            tag_names("# Header 1\n## Header 2\n   ### Indented #x\nContent with #real-tag"),
            vec!["real-tag"]
        );
    }

    #[test]
    fn seven_hashes_is_not_a_header() {
        assert_eq!(tag_names("####### not a header #tag"), vec!["tag"]);
    }

    #[test]
    fn fenced_code_is_excluded() {
        let tags = extract_tags("```\n#fake\n```\n#real");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].tag, "real");
        assert_eq!(tags[0].line_number, 4);
    }

    #[test]
    fn tilde_fence_is_excluded() {
        assert_eq!(tag_names("~~~python\n#fake\n~~~\n#real"), vec!["real"]);
    }

    #[test]
    fn fence_closes_only_on_same_delimiter() {
        assert_eq!(tag_names("```\n~~~\n#hidden\n```\n#shown"), vec!["shown"]);
        assert_eq!(tag_names("~~~\n```\n#hidden\n~~~\n#shown"), vec!["shown"]);
    }

    #[test]
    fn unclosed_fence_hides_rest_of_note() {
        assert!(extract_tags("```rust\n#a\n#b").is_empty());
    }

    #[test]
    fn fence_line_itself_is_skipped() {
        assert_eq!(tag_names("```  #lang\ncode\n```\nafter #ok"), vec!["ok"]);
    }

    #[test]
    fn hex_colors_are_dropped() {
        assert_eq!(
            tag_names("Color #fff and #aabbcc and #123\nBut #design tag is real"),
            vec!["design"]
        );
    }

    #[test]
    fn tags_cannot_start_with_a_digit() {
        let names = tag_names("#123abc is not a tag, #abc123 is");
        assert_eq!(names, vec!["abc123"]);
    }

    #[test]
    fn frontmatter_flow_and_block_lists_match() {
        let flow = "---\ntags: [a, b]\n---\nbody";
        let block = "---\ntags:\n  - a\n  - b\n---\nbody";
        for content in [flow, block] {
            let tags = extract_tags(content);
            let got: Vec<_> =
                tags.iter().map(|o| (o.tag.as_str(), o.location, o.line_number)).collect();
            assert_eq!(
                got,
                vec![("a", TagLocation::Frontmatter, 0), ("b", TagLocation::Frontmatter, 0)]
            );
        }
    }

    #[test]
    fn frontmatter_single_string() {
        assert_eq!(frontmatter_names("---\ntags: single-tag\n---\nContent"), vec!["single-tag"]);
    }

    #[test]
    fn frontmatter_empty_and_absent() {
        assert!(frontmatter_names("---\ntags: []\n---\nContent").is_empty());
        assert!(frontmatter_names("---\ntitle: x\n---\nContent").is_empty());
        assert!(frontmatter_names("This note has no frontmatter\nJust plain content").is_empty());
    }

    #[test]
    fn frontmatter_lines_are_not_scanned_inline() {
        let tags = extract_tags("---\ntitle: '#notinline'\n---\nbody");
        assert!(tags.is_empty());
    }

    #[test]
    fn invalid_frontmatter_yields_no_frontmatter_tags() {
        let tags = extract_tags("---\ntags: [broken\n---\nbody #still-found");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].tag, "still-found");
        assert_eq!(tags[0].line_number, 4);
    }

    #[test]
    fn inline_tags_precede_frontmatter_tags() {
        let content = "---\ntags: [daily, work]\n---\nThis is my #morning routine\nNeed to check #emails and #calendar";
        let tags = extract_tags(content);
        let got: Vec<_> = tags.iter().map(|o| (o.tag.as_str(), o.line_number)).collect();
        assert_eq!(
            got,
            vec![("morning", 4), ("emails", 5), ("calendar", 5), ("daily", 0), ("work", 0)]
        );
    }

    #[test]
    fn first_rule_pair_in_body_hides_the_lines_between() {
        let tags = extract_tags("intro #a\n---\n#b\n---\n#c");
        let got: Vec<_> =
            tags.iter().map(|o| (o.tag.as_str(), o.location, o.line_number)).collect();
        assert_eq!(got, vec![("a", TagLocation::Inline, 1), ("c", TagLocation::Inline, 5)]);
    }

    #[test]
    fn unclosed_frontmatter_hides_the_rest_of_the_note() {
        assert!(extract_tags("---\ntags: [a]\ntext #b").is_empty());
        assert!(extract_tags("intro\n---\n#b\nmore #c").is_empty());
    }

    #[test]
    fn rules_after_frontmatter_are_body_text() {
        let content = "---\ntags: [fm]\n---\n#a\n---\n#b\n---\n#c";
        assert_eq!(tag_names(content), vec!["a", "b", "c", "fm"]);
    }

    #[test]
    fn rule_pair_in_body_is_not_parsed_as_yaml() {
        assert!(frontmatter_names("intro\n---\ntags: [hidden]\n---\nbody").is_empty());
    }

    #[test]
    fn rule_inside_fenced_code_does_not_open_frontmatter() {
        assert_eq!(tag_names("```\n---\n```\n#a\n---\n#b\n---\n#c"), vec!["a", "c"]);
    }

    #[test]
    fn crlf_lines() {
        let tags = extract_tags("---\r\ntags: [fm]\r\n---\r\nbody #inline\r\n");
        let got: Vec<_> = tags.iter().map(|o| o.tag.as_str()).collect();
        assert_eq!(got, vec!["inline", "fm"]);
    }

    #[rstest]
    #[case("fff", true)]
    #[case("FFF", true)]
    #[case("abc", true)]
    #[case("ABC", true)]
    #[case("123", true)]
    #[case("aabbcc", true)]
    #[case("AAbbCC", true)]
    #[case("abc123", false)]
    #[case("daily", false)]
    #[case("work", false)]
    #[case("project-alpha", false)]
    #[case("ff", false)]
    #[case("ggg", false)]
    #[case("fffff", false)]
    fn hex_code_detection(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_hex_code(input), expected);
    }

    // Known limitation: real words spelled only with a-f of length 3 or 6
    // are indistinguishable from colors and get dropped.
    #[test]
    fn hex_heuristic_drops_some_real_words() {
        assert_eq!(tag_names("#add #bad #decade #fade"), vec!["fade"]);
    }

    #[test]
    fn has_tag_is_case_insensitive() {
        let content = "Note with #daily and #work tags";
        assert!(has_tag(content, "daily"));
        assert!(has_tag(content, "DAILY"));
        assert!(has_tag(content, "work"));
        assert!(!has_tag(content, "nonexistent"));
    }

    #[test]
    fn find_tag_lines_returns_every_occurrence() {
        let content = "Line 1 has #first tag\nLine 2 is empty\nLine 3 has #second tag\nLine 4 also has #first tag again";
        let found = find_tag_lines(content, "first");
        let lines: Vec<_> = found.iter().map(|o| o.line_number).collect();
        assert_eq!(lines, vec![1, 4]);
    }

    #[test]
    fn find_tag_blocks_windows_each_tagged_line() {
        let content = "one\ntwo #work\nthree\nfour\nfive #work six";
        let blocks = find_tag_blocks(content, "work", 1, false);
        assert_eq!(
            blocks,
            vec![
                TagBlock {
                    tag: "work".into(),
                    line_number: 2,
                    start_line: 1,
                    end_line: 3,
                    lines: vec!["one".into(), "two #work".into(), "three".into()],
                },
                TagBlock {
                    tag: "work".into(),
                    line_number: 5,
                    start_line: 4,
                    end_line: 5,
                    lines: vec!["four".into(), "five #work six".into()],
                },
            ]
        );
    }

    #[test]
    fn find_tag_blocks_reports_first_match_per_line() {
        let blocks = find_tag_blocks("#Work/a and #work/b\n#work", "work", 0, true);
        let got: Vec<_> = blocks.iter().map(|b| (b.tag.as_str(), b.line_number)).collect();
        assert_eq!(got, vec![("Work/a", 1), ("work", 2)]);
        assert_eq!(blocks[0].lines, vec!["#Work/a and #work/b"]);
    }

    #[test]
    fn find_tag_blocks_respects_subtag_flag() {
        let content = "#work/sub here";
        assert!(find_tag_blocks(content, "work", 0, false).is_empty());
        assert_eq!(find_tag_blocks(content, "work", 0, true).len(), 1);
    }

    #[test]
    fn find_tag_blocks_skips_frontmatter_and_code() {
        let content = "---\ntags: [work]\n---\n```\n#work\n```\nbody #work";
        let blocks = find_tag_blocks(content, "work", 0, false);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].line_number, 7);
    }

    #[test]
    fn crlf_note_lines_are_clean() {
        assert_eq!(note_lines("a\r\nb\r\n"), vec!["a", "b", ""]);
        let blocks = find_tag_blocks("a\r\n#x\r\nb", "x", 1, false);
        assert_eq!(blocks[0].lines, vec!["a", "#x", "b"]);
    }
}
