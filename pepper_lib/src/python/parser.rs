//! The `python::parser` module runs the Python interpreter's own `ast` module to turn source text
//! into a syntax tree.
//!
//! The interpreter receives the source on standard input and prints the tree as JSON, one object
//! per node with an `ast_type` key naming the node kind.

use crate::ast::Module;
use crate::error::PepperError;
use crate::json::json_from_slice;
use crate::json_ast::module_from_json;
use crate::options::{FormatOptions, DEFAULT_PYTHON, MAX_TREE_DEPTH};
use crate::utility::shell_execute_with_input;
use log::debug;
use serde_json::Value;
use std::io::ErrorKind;

/// Python program that parses standard input and writes the tree as JSON to standard output.
///
/// Constants carry the name of their Python type in `type`.  String values pass through as JSON
/// strings and every other constant is written as its `repr` text so that numbers keep their
/// exact spelling.
pub static DUMP_SCRIPT: &str = r#"import ast, json, sys

def dump(node):
    if isinstance(node, ast.AST):
        fields = {"ast_type": type(node).__name__}
        for name, value in ast.iter_fields(node):
            fields[name] = dump(value)
        if isinstance(node, ast.Constant):
            fields["type"] = type(node.value).__name__
            fields["value"] = node.value if isinstance(node.value, str) else repr(node.value)
        return fields
    if isinstance(node, list):
        return [dump(item) for item in node]
    if isinstance(node, (str, int, float, bool)) or node is None:
        return node
    return repr(node)

json.dump(dump(ast.parse(sys.stdin.buffer.read())), sys.stdout)
"#;

/// The bridge to the external Python parser.
pub struct PythonParser {
    /// Name or path of the interpreter.
    pub interpreter: String,

    /// Deepest nesting accepted when building the tree.
    pub max_depth: usize,
}

impl Default for PythonParser {
    fn default() -> Self {
        PythonParser::new(DEFAULT_PYTHON)
    }
}

impl PythonParser {
    /// Create a parser that runs `interpreter`.
    ///
    /// # Arguments
    ///
    /// * `interpreter` - The name or path of the Python interpreter.
    pub fn new(interpreter: &str) -> PythonParser {
        PythonParser {
            interpreter: String::from(interpreter),
            max_depth: MAX_TREE_DEPTH,
        }
    }

    /// Create a parser from the interpreter and depth limit in `options`.
    pub fn from_options(options: &FormatOptions) -> PythonParser {
        PythonParser {
            interpreter: options.python.clone(),
            max_depth: options.max_depth,
        }
    }

    /// Parse `source` and return the JSON encoding of its syntax tree.
    ///
    /// # Arguments
    ///
    /// * `source` - The Python source text.
    ///
    /// # Errors
    ///
    /// Returns [`PepperError::ParserNotFound`] when the interpreter cannot be started and
    /// [`PepperError::UpstreamParse`] with the interpreter's diagnostic text when parsing fails.
    pub fn parse_source_to_json(&self, source: &str) -> Result<Value, PepperError> {
        debug!(
            "Parsing {} bytes of source with {}",
            source.len(),
            self.interpreter
        );

        let arguments = vec![String::from("-c"), String::from(DUMP_SCRIPT)];
        let output = match shell_execute_with_input(&self.interpreter, arguments, source.as_bytes())
        {
            Ok(output) => output,
            Err(PepperError::IO(e)) if e.kind() == ErrorKind::NotFound => {
                return Err(PepperError::ParserNotFound(self.interpreter.clone()))
            }
            Err(e) => return Err(e),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            debug!("Parser exited with {}", output.status);
            return Err(PepperError::UpstreamParse(stderr));
        }

        json_from_slice(&output.stdout)
    }

    /// Parse `source` into a [`Module`].
    ///
    /// # Arguments
    ///
    /// * `source` - The Python source text.
    pub fn parse_source(&self, source: &str) -> Result<Module, PepperError> {
        let value = self.parse_source_to_json(source)?;
        module_from_json(&value, self.max_depth)
    }

}
