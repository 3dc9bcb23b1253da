//! XML documentation example-code extractor
//!
//! Extracts example source-code snippets embedded in compiler-generated API
//! documentation XML (the conventional `doc/members/member/example/code`
//! shape). Each snippet is tagged with the documented member's name and has
//! blank lines stripped, ready for a downstream documentation or
//! test-generation pipeline.
//!
//! # Example
//!
//! ```no_run
//! use xmldoc_examples::ExampleCodeParser;
//!
//! let parser = ExampleCodeParser::new();
//! let examples = parser.parse_files("build/docs/*.xml").unwrap();
//! for example in &examples {
//!     println!("{:?}: {}", example.member_name, example.code);
//! }
//! ```

pub mod parser;
pub mod types;

pub use parser::{clean_code, ExampleCodeParser};
pub use types::ExampleCode;

use std::path::PathBuf;
use thiserror::Error;

/// Extraction errors
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Xml file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("XML parse error in {}: {source}", .path.display())]
    Xml {
        path: PathBuf,
        source: roxmltree::Error,
    },
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Glob error: {0}")]
    Glob(#[from] glob::GlobError),
}
