//! The `formatting` module provides the services behind the `format`, `ast` and `config`
//! commands: reading the input file or standard input, running the formatter and writing the
//! result to the output file or standard output.

use crate::format_settings::FormatSettings;
use crate::{AstCLArgs, ConfigCLArgs, FormatCLArgs};
use pepper_lib::config_file::ConfigurationFileDetails;
use pepper_lib::error::PepperError;
use pepper_lib::json::{json_from_str, pretty_json_string};
use pepper_lib::{FileType, Pepper, PythonParser, Recognizer};
use std::io::{IsTerminal, Read, Write};

/// The name that selects standard input or standard output in place of a file.
static STDIO_NAME: &str = "-";

fn is_stdio(name: &Option<String>) -> bool {
    match name {
        Some(name) => name == STDIO_NAME,
        None => true,
    }
}

/// Read the whole input.  Standard input is used when `input` is absent or `-`.
///
/// # Arguments
///
/// * `input` - The path to the input file.
fn read_input(input: &Option<String>) -> Result<String, PepperError> {
    match input {
        Some(file_name) if !is_stdio(input) => Ok(std::fs::read_to_string(file_name)?),
        _ => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                log::warn!("Reading Python source from the terminal, end the input with Ctrl-D");
            }
            let mut text = String::new();
            stdin.read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Write `text` to the output.  Standard output is used when `output` is absent or `-`.
///
/// # Arguments
///
/// * `output` - The path to the output file.
/// * `text` - The text to write.
fn write_output(output: &Option<String>, text: &str) -> Result<(), PepperError> {
    match output {
        Some(file_name) if !is_stdio(output) => {
            let mut f = std::fs::File::create(file_name)?;
            f.write_all(text.as_bytes())?;
            log::info!("Wrote {} bytes to {}", text.len(), file_name);
        }
        _ => {
            let mut stdout = std::io::stdout();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Decide whether the input text holds a syntax tree.
///
/// # Arguments
///
/// * `args` - The [`FormatCLArgs`] object.
/// * `text` - The input text.
fn input_is_ast(args: &FormatCLArgs, text: &str) -> Result<bool, PepperError> {
    if args.ast {
        return Ok(true);
    }
    let recognizer = Recognizer::new();
    let file_type = match &args.input {
        Some(file_name) if !is_stdio(&args.input) => recognizer.recognize_file(file_name)?,
        _ => recognizer.recognize_text(text),
    };
    Ok(file_type == FileType::AST)
}

/// Format the input named in `args`.
///
/// Returns `Ok(false)` when `--check` finds input that is not canonical.
///
/// # Arguments
///
/// * `args` - The [`FormatCLArgs`] object.
pub fn format_input(args: FormatCLArgs) -> Result<bool, PepperError> {
    let settings = FormatSettings {
        config: args.config.clone(),
        python: args.python.clone(),
        precedence_parens: args.precedence_parens,
        call_wrap_threshold: args.call_wrap_threshold,
    };
    let mut pepper = Pepper::new(settings.to_options()?);

    let text = read_input(&args.input)?;
    let is_ast = input_is_ast(&args, &text)?;

    if args.check {
        if is_ast {
            log::warn!("--check compares source text, ignoring it for a syntax tree input");
        } else {
            let canonical = pepper.check_formatted(&text)?;
            if !canonical {
                eprintln!(
                    "{} is not formatted",
                    args.input.as_deref().unwrap_or("<stdin>")
                );
            }
            return Ok(canonical);
        }
    }

    let formatted = if is_ast {
        let value = json_from_str(&text)?;
        pepper.render_json(&value)?
    } else {
        pepper.convert(&text)?
    };

    write_output(&args.output, &formatted)?;
    Ok(true)
}

/// Write the parser's JSON syntax tree for the input named in `args`.
///
/// # Arguments
///
/// * `args` - The [`AstCLArgs`] object.
pub fn dump_ast(args: AstCLArgs) -> Result<(), PepperError> {
    let parser = match &args.python {
        Some(python) => PythonParser::new(python),
        None => PythonParser::default(),
    };
    let text = read_input(&args.input)?;
    let value = parser.parse_source_to_json(&text)?;
    let pretty = pretty_json_string(&value)?;
    write_output(&args.output, &(pretty + "\n"))
}

/// Write a configuration file holding the settings given on the command line.
///
/// # Arguments
///
/// * `args` - The [`ConfigCLArgs`] object.
pub fn write_config(args: ConfigCLArgs) -> Result<(), PepperError> {
    let settings = FormatSettings {
        config: None,
        python: args.python,
        precedence_parens: args.precedence_parens,
        call_wrap_threshold: args.call_wrap_threshold,
    };
    let mut details = ConfigurationFileDetails {
        options: settings.to_options()?,
    };
    if let Some(indent_width) = args.indent_width {
        details.options.indent_width = indent_width;
    }

    match &args.output {
        Some(file_name) if !is_stdio(&args.output) => {
            details.write_to_file_as_json(file_name)?;
            log::info!("Wrote configuration to {}", file_name);
            Ok(())
        }
        _ => details.write_to_stream_as_json(&mut std::io::stdout()),
    }
}
