//! The `error` module contains `PepperError`, the error enumeration used to communicate
//! library errors.

use std::convert::From;
use thiserror::Error;

/// The list of errors that the library can generate.
#[derive(Error, Debug)]
pub enum PepperError {
    #[error("IO error: {0}")]
    IO(std::io::Error),

    /// An error indicating that JSON parsing failed.
    #[error("JSON error occurred: {0}")]
    JSON(serde_json::Error),

    /// An error reported by the external Python parser.  The text is the parser's own
    /// diagnostic output, passed through untouched.
    #[error("{0}")]
    UpstreamParse(String),

    /// An error indicating that the tool could not start the Python interpreter used to parse
    /// source files.
    #[error("Unable to run Python parser '{0}'")]
    ParserNotFound(String),

    /// An error indicating that the syntax tree contains a node kind the formatter does not
    /// represent.
    #[error("Unsupported construct: {0}")]
    UnsupportedConstruct(String),

    /// An error indicating that a node lacks a child or field that the grammar guarantees.
    #[error("Malformed syntax tree: {0}")]
    MalformedTree(String),

    /// An error indicating that the syntax tree nests deeper than the configured limit.
    #[error("Syntax tree exceeds the maximum nesting depth of {0}")]
    TreeTooDeep(usize),

    /// An error indicating that the tool received a configuration file that does not have the
    /// correct file extension.
    #[error("Configuration file {0} does not have the correct extension")]
    ConfigFileBadExtension(String),

    /// An error indicating that a configuration file key holds a value the tool cannot use.
    #[error("Configuration file {0} contains an invalid value for key {1}")]
    ConfigFileInvalidValue(String, String),

    /// An error indicating the tool could not tell whether an input file holds source code or
    /// a JSON encoded syntax tree.
    #[error("Unable to determine the contents of input file {0}")]
    InputNotRecognized(String),
}

impl From<std::io::Error> for PepperError {
    fn from(e: std::io::Error) -> Self {
        PepperError::IO(e)
    }
}

impl From<serde_json::Error> for PepperError {
    fn from(e: serde_json::Error) -> Self {
        PepperError::JSON(e)
    }
}
