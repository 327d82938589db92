//! The `python` module contains the Python specific pieces of the formatter: the bridge to the
//! interpreter's parser and the node printers.

pub mod parser;
pub mod pretty_printer;
