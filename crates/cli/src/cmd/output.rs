//! Text and JSON rendering of search reports.

use std::fmt::Write;

use mdtag_core::search::{SearchReport, SearchResults};

/// Headline, then a blank line and one entry per result.
///
/// An empty report is the headline alone.
pub fn render_text(report: &SearchReport) -> String {
    let mut out = format!("{}\n", report.headline());
    if report.is_empty() {
        return out;
    }
    out.push('\n');

    match &report.results {
        SearchResults::Names(notes) => {
            for note in notes {
                let _ = writeln!(out, "{}", note.display());
            }
        }
        SearchResults::Locations(hits) => {
            for hit in hits {
                let _ = writeln!(out, "📄 {}:{} #{}", hit.note.display(), hit.line_number, hit.tag);
            }
        }
        SearchResults::Lines(hits) => {
            for hit in hits {
                let _ =
                    writeln!(out, "📄 {}:{}\n{}\n", hit.note.display(), hit.line_number, hit.context);
            }
        }
        SearchResults::Blocks(hits) => {
            for hit in hits {
                let _ =
                    writeln!(out, "📄 {}:{}\n{}\n", hit.note.display(), hit.line_number, hit.block);
            }
        }
    }

    out
}

/// Pretty JSON of the whole report.
pub fn render_json(report: &SearchReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Directory entries as a bullet list.
pub fn render_entries(entries: &[String]) -> String {
    entries.iter().map(|e| format!("• {e}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdtag_core::search::{BlockHit, LineHit, LocationHit};
    use mdtag_core::tags::LocationFilter;

    fn report(results: SearchResults) -> SearchReport {
        SearchReport {
            tag: "work".into(),
            location: LocationFilter::All,
            include_subtags: false,
            results,
        }
    }

    #[test]
    fn empty_report_is_just_the_headline() {
        insta::assert_snapshot!(
            render_text(&report(SearchResults::Lines(vec![]))),
            @"No lines found with tag '#work'"
        );
    }

    #[test]
    fn names() {
        let r = report(SearchResults::Names(vec!["a.md".into(), "dir/b.md".into()]));
        insta::assert_snapshot!(render_text(&r), @r"
        Found 2 notes with tag '#work'

        a.md
        dir/b.md
        ");
    }

    #[test]
    fn locations() {
        let r = report(SearchResults::Locations(vec![
            LocationHit { note: "a.md".into(), line_number: 0, tag: "work".into() },
            LocationHit { note: "b.md".into(), line_number: 12, tag: "work/sub".into() },
        ]));
        insta::assert_snapshot!(render_text(&r), @r"
        Found 2 notes with tag '#work'

        📄 a.md:0 #work
        📄 b.md:12 #work/sub
        ");
    }

    #[test]
    fn lines_and_blocks_share_layout() {
        let lines = report(SearchResults::Lines(vec![LineHit {
            note: "a.md".into(),
            line_number: 5,
            tag: "work".into(),
            start_line: 4,
            end_line: 6,
            context: "four\nfive #work\nsix".into(),
        }]));
        let blocks = report(SearchResults::Blocks(vec![BlockHit {
            note: "a.md".into(),
            line_number: 5,
            tag: "work".into(),
            start_line: 4,
            end_line: 6,
            block: "four\nfive #work\nsix".into(),
        }]));

        assert_eq!(
            render_text(&lines),
            "Found 1 occurrences of '#work'\n\n📄 a.md:5\nfour\nfive #work\nsix\n\n"
        );
        assert_eq!(
            render_text(&blocks),
            "Found 1 blocks with tag '#work'\n\n📄 a.md:5\nfour\nfive #work\nsix\n\n"
        );
    }

    #[test]
    fn json_carries_format_and_hits() {
        let r = report(SearchResults::Names(vec!["a.md".into()]));
        let value: serde_json::Value = serde_json::from_str(&render_json(&r).unwrap()).unwrap();
        assert_eq!(value["tag"], "work");
        assert_eq!(value["location"], "all");
        assert_eq!(value["format"], "names");
        assert_eq!(value["hits"][0], "a.md");
    }

    #[test]
    fn entries_are_bulleted() {
        let entries = vec!["Projects/".to_string(), "note.md".to_string()];
        assert_eq!(render_entries(&entries), "• Projects/\n• note.md\n");
    }
}
