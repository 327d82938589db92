//! The `format_settings` module provides the [`FormatSettings`] type that merges the command line
//! settings with an optional configuration file into a [`FormatOptions`] object.

use pepper_lib::config_file::ConfigurationFileDetails;
use pepper_lib::error::PepperError;
use pepper_lib::{FormatOptions, ParenthesizeMode};

pub struct FormatSettings {
    /// Path to a .pepper configuration file.
    pub config: Option<String>,

    /// Python interpreter, overrides the configuration file.
    pub python: Option<String>,

    /// Use precedence based parenthesization, overrides the configuration file.
    pub precedence_parens: bool,

    /// Call wrap threshold, overrides the configuration file.
    pub call_wrap_threshold: Option<usize>,
}

impl FormatSettings {
    /// Return the options from the configuration file, if any, with the command line settings
    /// applied on top.
    pub fn to_options(&self) -> Result<FormatOptions, PepperError> {
        let mut options = match &self.config {
            Some(config_file) => ConfigurationFileDetails::new_from_file(config_file)?.options,
            None => FormatOptions::default(),
        };

        if let Some(python) = &self.python {
            options.python = python.clone();
        }

        if self.precedence_parens {
            options.parenthesize = ParenthesizeMode::Precedence;
        }

        if let Some(threshold) = self.call_wrap_threshold {
            options.call_wrap_threshold = threshold;
        }

        Ok(options)
    }
}
