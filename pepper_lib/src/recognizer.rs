//! The `recognizer` module contains the code that checks a file's contents in order to determine
//! if the file contains Python source code or a JSON encoded Python syntax tree.

use crate::error::PepperError;
use crate::json::{json_from_str, JSONAccess};
use crate::json_ast::AST_TYPE_KEY;
use log::debug;
use std::ffi::OsStr;
use std::path::Path;

/// Enumeration of possible file types that a [`Recognizer`] can identify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Source,
    AST,
}

/// Provides facilities for identifying whether an input holds source text or a syntax tree.
#[derive(Debug, Default)]
pub struct Recognizer;

impl Recognizer {
    pub fn new() -> Recognizer {
        Recognizer
    }

    /// Return true if `text` is a JSON object whose root node is a `Module`.
    fn is_ast_text(text: &str) -> bool {
        match json_from_str(text) {
            Ok(value) => value.get_str_for_key(AST_TYPE_KEY) == Some("Module"),
            Err(_) => false,
        }
    }

    /// Return the kind of content in `text`.
    ///
    /// # Arguments
    ///
    /// * `text` - The contents of an input.
    pub fn recognize_text(&self, text: &str) -> FileType {
        if Recognizer::is_ast_text(text.trim_start()) {
            FileType::AST
        } else {
            FileType::Source
        }
    }

    /// Return the kind of content in the file at `file_name`.  A `.json` extension always means
    /// a syntax tree.
    ///
    /// # Arguments
    ///
    /// * `file_name` - The path to the file in the file system.
    ///
    /// # Errors
    ///
    /// Returns [`PepperError::InputNotRecognized`] when the file is not UTF-8 text.
    pub fn recognize_file(&self, file_name: &str) -> Result<FileType, PepperError> {
        if Path::new(file_name).extension() == Some(OsStr::new("json")) {
            debug!("Treating {file_name} as a syntax tree by extension");
            return Ok(FileType::AST);
        }

        let bytes = std::fs::read(file_name)?;
        let text = match std::str::from_utf8(&bytes) {
            Ok(text) => text,
            Err(_) => return Err(PepperError::InputNotRecognized(String::from(file_name))),
        };

        let file_type = self.recognize_text(text);
        debug!("Recognized {file_name} as {file_type:?}");
        Ok(file_type)
    }
}
