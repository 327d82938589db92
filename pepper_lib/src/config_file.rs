/// The `config_file` module contains code for reading a Pepper configuration file.
/// Pepper uses configuration files to let the user keep layout and parser settings for a
/// project in one place instead of repeating them on the command line.
use crate::error::PepperError;
use crate::json::*;
use crate::options::{FormatOptions, ParenthesizeMode};
use serde_json::Value;
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// The extension used for pepper configuration files.
pub static CONFIG_FILE_EXTENSION: &str = "pepper";

/// The key for the number of spaces in one indentation level.
pub static INDENT_WIDTH_KEY: &str = "indent-width";

/// The key for the argument count at which calls wrap.
pub static CALL_WRAP_THRESHOLD_KEY: &str = "call-wrap-threshold";

/// The key for the parenthesization mode, `"same-kind"` or `"precedence"`.
pub static PARENTHESIZE_KEY: &str = "parenthesize";

/// The key for the Python interpreter used to parse source files.
pub static PYTHON_KEY: &str = "python";

/// The key for the deepest syntax tree nesting to accept.
pub static MAX_DEPTH_KEY: &str = "max-depth";

/// Configuration details loaded from a .pepper configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigurationFileDetails {
    /// The settings from the file.  Keys missing from the file keep their default values.
    pub options: FormatOptions,
}

/// Read a non-negative integer setting.
fn read_count(value: &Value, key: &str, config_file: &str) -> Result<Option<usize>, PepperError> {
    if !value.contains_key(key) {
        return Ok(None);
    }
    match value.get_int_for_key(key) {
        Some(n) if n >= 0 => Ok(Some(n as usize)),
        _ => Err(PepperError::ConfigFileInvalidValue(
            String::from(config_file),
            String::from(key),
        )),
    }
}

/// Read a string setting.
fn read_str<'v>(
    value: &'v Value,
    key: &str,
    config_file: &str,
) -> Result<Option<&'v str>, PepperError> {
    if !value.contains_key(key) {
        return Ok(None);
    }
    match value.get_str_for_key(key) {
        Some(s) => Ok(Some(s)),
        None => Err(PepperError::ConfigFileInvalidValue(
            String::from(config_file),
            String::from(key),
        )),
    }
}

impl ConfigurationFileDetails {
    /// Create a new configuration details object by loading the configuration from a JSON
    /// file.  The file must have the extension ".pepper".
    ///
    /// # Arguments
    ///
    /// * `config_file` - The path to the configuration file in the file system.
    pub fn new_from_file(config_file: &str) -> Result<ConfigurationFileDetails, PepperError> {
        let extension = Path::new(config_file).extension();
        if extension != Some(OsStr::new(CONFIG_FILE_EXTENSION)) {
            return Err(PepperError::ConfigFileBadExtension(String::from(
                config_file,
            )));
        }

        let json_value = load_json_from_file_with_name(config_file)?;
        ConfigurationFileDetails::new_from_json(&json_value, config_file)
    }

    /// Create a new configuration details object from the JSON object `value`.
    ///
    /// # Arguments
    ///
    /// * `value` - The JSON object holding the settings.
    /// * `config_file` - The name reported in errors.
    pub fn new_from_json(
        value: &Value,
        config_file: &str,
    ) -> Result<ConfigurationFileDetails, PepperError> {
        if !value.is_object() {
            return Err(PepperError::ConfigFileInvalidValue(
                String::from(config_file),
                String::from("<root>"),
            ));
        }

        let mut details = ConfigurationFileDetails::default();

        if let Some(indent_width) = read_count(value, INDENT_WIDTH_KEY, config_file)? {
            details.options.indent_width = indent_width;
        }

        if let Some(threshold) = read_count(value, CALL_WRAP_THRESHOLD_KEY, config_file)? {
            details.options.call_wrap_threshold = threshold;
        }

        if let Some(mode) = read_str(value, PARENTHESIZE_KEY, config_file)? {
            details.options.parenthesize = match ParenthesizeMode::from_str(mode) {
                Ok(m) => m,
                Err(_) => {
                    return Err(PepperError::ConfigFileInvalidValue(
                        String::from(config_file),
                        String::from(PARENTHESIZE_KEY),
                    ))
                }
            };
        }

        if let Some(python) = read_str(value, PYTHON_KEY, config_file)? {
            details.options.python = String::from(python);
        }

        if let Some(max_depth) = read_count(value, MAX_DEPTH_KEY, config_file)? {
            details.options.max_depth = max_depth;
        }

        Ok(details)
    }

    /// Helper function to get the configuration as a JSON object.
    fn convert_to_json(&self) -> Result<Value, PepperError> {
        Ok(serde_json::to_value(&self.options)?)
    }

    /// Create a configuration file in JSON form and write it to the path at `config_file`.
    ///
    /// # Arguments
    ///
    /// * `config_file` - The path in the file system to write the configuration file.
    pub fn write_to_file_as_json(&self, config_file: &str) -> Result<(), PepperError> {
        let config_file_path = Path::new(config_file);

        // Try to create the parent directory if it does not exist.
        if let Some(parent) = config_file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut f = std::fs::File::create(config_file_path)?;
        self.write_to_stream_as_json(&mut f)
    }

    /// Convert a configuration to JSON and write the JSON to `stream`.
    ///
    /// # Arguments
    ///
    /// * `stream` - The stream that will receive the JSON.
    pub fn write_to_stream_as_json(&self, stream: &mut dyn Write) -> Result<(), PepperError> {
        let json_value = self.convert_to_json()?;
        let pretty_json = pretty_json_string(&json_value)?;
        writeln!(stream, "{pretty_json}")?;
        Ok(())
    }
}
