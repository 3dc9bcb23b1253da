//! Parser for extracting example code from documentation XML

use glob::glob;
use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;

use crate::types::ExampleCode;
use crate::ExtractError;

/// Parser for documentation XML example code
///
/// Walks the conventional `doc/members/member/example/code` element path of
/// compiler-generated documentation files and yields one [`ExampleCode`] per
/// `code` element, tagged with the enclosing member's `name` attribute.
pub struct ExampleCodeParser;

impl ExampleCodeParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse example code from a single documentation XML file
    ///
    /// Results are in document order and fully materialized before the file
    /// handle is released. A well-formed file without the documentation
    /// element path yields an empty vector.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<Vec<ExampleCode>, ExtractError> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(ExtractError::InvalidArgument(
                "empty xml file path supplied".to_string(),
            ));
        }

        if !path.exists() {
            return Err(ExtractError::FileNotFound(path.to_path_buf()));
        }

        let source = fs::read_to_string(path).map_err(|e| ExtractError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let document = Document::parse(&source).map_err(|e| ExtractError::Xml {
            path: path.to_path_buf(),
            source: e,
        })?;

        // The documentation format is not schema-strict: repeated <members>
        // or <example> siblings are all visited, in document order.
        let mut results = Vec::new();
        for doc in document.root().children().filter(|n| n.has_tag_name("doc")) {
            for members in doc.children().filter(|n| n.has_tag_name("members")) {
                for member in members.children().filter(|n| n.has_tag_name("member")) {
                    let member_name = member.attribute("name").map(|s| s.to_string());
                    for example in member.children().filter(|n| n.has_tag_name("example")) {
                        for code in example.children().filter(|n| n.has_tag_name("code")) {
                            results.push(ExampleCode::new(
                                member_name.clone(),
                                clean_code(&text_content(&code)),
                            ));
                        }
                    }
                }
            }
        }

        Ok(results)
    }

    /// Parse example code from all files matching a glob pattern
    ///
    /// Files are processed in the order the glob expansion yields them
    /// (alphabetical). The first failing file aborts the whole batch; a
    /// pattern matching zero files yields an empty vector.
    pub fn parse_files(&self, pattern: &str) -> Result<Vec<ExampleCode>, ExtractError> {
        if pattern.trim().is_empty() {
            return Err(ExtractError::InvalidArgument(
                "empty glob pattern supplied".to_string(),
            ));
        }

        let mut results = Vec::new();
        for entry in glob(pattern)? {
            let path = entry?;
            results.extend(self.parse(&path)?);
        }

        Ok(results)
    }
}

impl Default for ExampleCodeParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Concatenated text of all descendant text nodes of an element
fn text_content(node: &Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Normalize raw `code` element text
///
/// Splits on any carriage-return or line-feed, drops lines that are empty or
/// whitespace-only, and rejoins with `\r\n`. Retained lines keep their
/// original order and are not trimmed or de-indented.
pub fn clean_code(raw: &str) -> String {
    raw.split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\r\n")
}
