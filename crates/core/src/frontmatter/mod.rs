//! Frontmatter detection and parsing.
//!
//! A note carries YAML frontmatter when its very first line is `---` and a
//! later line closes the block with another `---`. The block is parsed as YAML;
//! only the `tags` key matters to search, and it is normalized once through
//! [`FrontmatterTags`].

pub mod parser;
pub mod types;

pub use parser::{FrontmatterParseError, find_closing_delimiter, is_delimiter, parse_fields};
pub use types::{Frontmatter, FrontmatterTags};
