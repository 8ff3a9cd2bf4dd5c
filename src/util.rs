//! Defines the `Error` type for the conceptual library

use std::io;
use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, ConceptualError>;

#[derive(Debug, Error)]
pub enum ConceptualError {

    /// Malformed or inconsistent textual structure. `line` is 1-based.
    #[error("format error at line {line}: {msg}")]
    Format { line: usize, msg: String },

    /// An identifier that must be unique within its namespace was seen twice
    #[error("duplicate identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("a node named {0} already exists")]
    DuplicateNode(String),

    #[error("an edge named {0} already exists")]
    DuplicateEdge(String),

    /// An edge references a node that is not in the graph
    #[error("no node named {0}")]
    UnknownNode(String),

    #[error("no edge named {0}")]
    UnknownEdge(String),

    /// A factor references a variable id that was never declared
    #[error("variable x{0} is not declared")]
    UnknownVariable(usize),

    /// A factor has no name in the catalog
    #[error("factor f{0} is not declared")]
    UnknownFactor(usize),

    /// A decoded value index has no label in the variable's domain
    #[error("variable x{variable} has no value with index {index}")]
    UnknownValue { variable: usize, index: usize },

    /// The cardinality of a variable in a factor disagrees with its number of value labels
    #[error("variable x{variable} declared with cardinality {declared} but has {labels} value labels")]
    CardinalityMismatch { variable: usize, declared: usize, labels: usize },

    /// A mixed-radix index or digit is out of bounds
    #[error("index out of range: {0}")]
    Range(String),

    #[error(transparent)]
    Io(#[from] io::Error),

}

impl ConceptualError {

    pub(crate) fn format<S: Into<String>>(line: usize, msg: S) -> Self {
        ConceptualError::Format { line, msg: msg.into() }
    }

}
