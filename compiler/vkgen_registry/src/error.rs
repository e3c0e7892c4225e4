//! Fatal registry errors.

use thiserror::Error;

/// A malformed registry document.
///
/// Every variant aborts the compilation. Line numbers are 1-based positions
/// of the offending element in the source text.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("malformed registry document: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("expected <registry> root element, found <{found}>")]
    UnexpectedRoot { found: String },

    #[error("<{element}> at line {line} is missing the `{attribute}` attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
        line: u32,
    },

    #[error("<{element}> at line {line} has no <{child}> child")]
    MissingChild {
        element: &'static str,
        child: &'static str,
        line: u32,
    },

    #[error("<command> at line {line} has neither a <proto> nor an `alias` attribute")]
    MissingProto { line: u32 },

    #[error("command `{name}` declared twice (second declaration at line {line})")]
    DuplicateCommand { name: String, line: u32 },

    #[error("alias `{name}` at line {line} refers to undeclared command `{target}`")]
    UnresolvedAlias {
        name: String,
        target: String,
        line: u32,
    },
}
