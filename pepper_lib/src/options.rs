//! The `options` module contains [`FormatOptions`], the settings that control how the formatter
//! lays out code and how the tool reaches the Python parser.

use crate::error::PepperError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Number of spaces for one level of indentation.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Calls with at least this many arguments render one argument per line.
pub const DEFAULT_CALL_WRAP_THRESHOLD: usize = 5;

/// The interpreter used to parse source files.
pub const DEFAULT_PYTHON: &str = "python3";

/// The deepest syntax tree nesting the loader accepts.
pub const MAX_TREE_DEPTH: usize = 512;

/// How the formatter decides to wrap nested expressions in parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParenthesizeMode {
    /// Wrap an operation only when its parent is an operation of the same node kind.
    #[default]
    SameKind,

    /// Wrap any expression that binds less tightly than its position requires.
    Precedence,
}

impl FromStr for ParenthesizeMode {
    type Err = PepperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "same-kind" => Ok(ParenthesizeMode::SameKind),
            "precedence" => Ok(ParenthesizeMode::Precedence),
            _ => Err(PepperError::ConfigFileInvalidValue(
                String::from(s),
                String::from("parenthesize"),
            )),
        }
    }
}

impl fmt::Display for ParenthesizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ParenthesizeMode::SameKind => "same-kind",
            ParenthesizeMode::Precedence => "precedence",
        };

        write!(f, "{}", text)
    }
}

/// The layout and parser settings for one formatting session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FormatOptions {
    /// Spaces per indentation level.
    pub indent_width: usize,

    /// Argument count at which calls switch to the aligned multi-line layout.
    pub call_wrap_threshold: usize,

    pub parenthesize: ParenthesizeMode,

    /// Path or name of the Python interpreter.
    pub python: String,

    /// Maximum nesting depth accepted when loading a tree.
    pub max_depth: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            indent_width: DEFAULT_INDENT_WIDTH,
            call_wrap_threshold: DEFAULT_CALL_WRAP_THRESHOLD,
            parenthesize: ParenthesizeMode::default(),
            python: String::from(DEFAULT_PYTHON),
            max_depth: MAX_TREE_DEPTH,
        }
    }
}
