//! Tag extraction and matching.
//!
//! Tags are written inline as `#label` (hierarchical as `#parent/child`) or
//! listed under the `tags` key of a note's frontmatter.

pub mod extractor;
pub mod matcher;
pub mod types;

pub use extractor::{
    extract_tags, find_tag_blocks, find_tag_lines, has_tag, is_hex_code, note_lines,
};
pub use matcher::{LocationFilter, matches_tag};
pub use types::{TagBlock, TagLocation, TagOccurrence};
