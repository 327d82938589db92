//! # Pepper Lib
//!
//! `pepper_lib` turns Python syntax trees back into canonically formatted Python source.
//!
//! ## Pepper Lib Design
//!
//! `pepper_lib` provides the pieces an application needs to:
//! - Recognize whether an input holds Python source or a JSON encoded syntax tree.
//! - Parse source with the Python interpreter's own parser.
//! - Load the JSON encoded tree into the typed nodes in [`ast`].
//! - Render the tree with consistent spacing, quoting, wrapping and blank lines.
//!
//! Rendering walks the tree with the [`node_printer::NodePrinter`] trait.  Each node writes its
//! tokens through a per-conversion [`node_printer::Formatter`], which keeps the chain of
//! ancestors used to decide where parentheses are needed.

pub use self::ast::Module;
pub use self::error::PepperError;
pub use self::options::{FormatOptions, ParenthesizeMode};
pub use self::pretty_printer::PrettyPrinter;
pub use self::python::parser::PythonParser;
pub use self::recognizer::{FileType, Recognizer};
pub use self::unparser::Pepper;

pub mod ast;
pub mod config_file;
pub mod error;
pub mod json;
pub mod json_ast;
pub mod node_printer;
mod node_printer_helpers;
mod operators;
pub mod options;
mod precedence;
pub mod pretty_printer;
pub mod python;
pub mod recognizer;
pub mod unparser;
mod utility;
