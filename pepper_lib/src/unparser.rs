//! The `unparser` module contains [`Pepper`], the entry point that turns a Python syntax tree back
//! into canonically formatted source text.

use crate::ast::Module;
use crate::error::PepperError;
use crate::json_ast::module_from_json;
use crate::node_printer::Formatter;
use crate::options::FormatOptions;
use crate::pretty_printer::PrettyPrinter;
use crate::python::parser::PythonParser;
use log::debug;
use serde_json::Value;

/// The formatter.  One instance may format any number of trees, one at a time.
pub struct Pepper {
    printer: PrettyPrinter,
    options: FormatOptions,
}

impl Default for Pepper {
    fn default() -> Self {
        Pepper::new(FormatOptions::default())
    }
}

impl Pepper {
    /// Create a new formatter.
    ///
    /// # Arguments
    ///
    /// * `options` - The [`FormatOptions`] that control layout and parsing.
    pub fn new(options: FormatOptions) -> Pepper {
        Pepper {
            printer: PrettyPrinter::new(options.indent_width),
            options,
        }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Render `module` as source text.
    ///
    /// The output buffer is empty again when the function returns, whether or not rendering
    /// succeeds.  No partial output is returned on error.
    ///
    /// # Arguments
    ///
    /// * `module` - The syntax tree to render.
    pub fn render(&mut self, module: &Module) -> Result<String, PepperError> {
        self.printer.reset();
        let result = {
            let mut f = Formatter::new(&mut self.printer, &self.options);
            f.render(module)
        };
        match result {
            Ok(()) => Ok(self.printer.take_contents()),
            Err(e) => {
                self.printer.reset();
                Err(e)
            }
        }
    }

    /// Render the JSON encoded syntax tree in `value`.
    ///
    /// # Arguments
    ///
    /// * `value` - The JSON encoding of a `Module`.
    pub fn render_json(&mut self, value: &Value) -> Result<String, PepperError> {
        let module = module_from_json(value, self.options.max_depth)?;
        self.render(&module)
    }

    /// Parse `source` with the configured Python interpreter and render the result.
    ///
    /// # Arguments
    ///
    /// * `source` - The Python source text.
    pub fn convert(&mut self, source: &str) -> Result<String, PepperError> {
        let module = PythonParser::from_options(&self.options).parse_source(source)?;
        self.render(&module)
    }

    /// Return true if `source` is already in canonical form.  A single newline ending the
    /// source is allowed.
    ///
    /// # Arguments
    ///
    /// * `source` - The Python source text.
    pub fn check_formatted(&mut self, source: &str) -> Result<bool, PepperError> {
        let formatted = self.convert(source)?;
        let canonical = matches_formatted(&formatted, source);
        debug!("Source is canonical: {canonical}");
        Ok(canonical)
    }
}

/// Return true if `source` is the formatted text, optionally followed by one newline.
fn matches_formatted(formatted: &str, source: &str) -> bool {
    source.strip_suffix('\n').unwrap_or(source) == formatted
}
