//! Core types for xmldoc-examples

use serde::{Deserialize, Serialize};

/// An example code snippet extracted from documentation XML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleCode {
    /// The `name` attribute of the enclosing `member` element, if present
    pub member_name: Option<String>,
    /// The cleaned example source text
    pub code: String,
}

impl ExampleCode {
    pub fn new(member_name: Option<String>, code: impl Into<String>) -> Self {
        Self {
            member_name,
            code: code.into(),
        }
    }
}
