//! The main module contains the code to process the command line for the pepper program and
//! run the formatter.

mod format_settings;
mod formatting;

use crate::formatting::{dump_ast, format_input, write_config};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use env_logger::{Builder, Env, TimestampPrecision, DEFAULT_FILTER_ENV};
use std::io::Write;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Canonical formatter for Python source and syntax trees.")]
#[command(propagate_version = true)]
struct PepperCommand {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    Format(FormatCLArgs),
    Ast(AstCLArgs),
    Config(ConfigCLArgs),
}

/// Arguments for formatting Python source or a JSON syntax tree.
#[derive(Args, Debug, Clone)]
pub struct FormatCLArgs {
    /// Input file, standard input when absent or `-`
    pub input: Option<String>,

    /// Output file, standard output when absent or `-`
    pub output: Option<String>,

    /// Read the input as a JSON syntax tree (detected automatically for .json files)
    #[arg(long)]
    pub ast: bool,

    /// Report whether the input is already formatted instead of writing output
    #[arg(long)]
    pub check: bool,

    /// Python interpreter used to parse source
    #[arg(long)]
    pub python: Option<String>,

    /// Parenthesize by operator precedence instead of by node kind
    #[arg(long)]
    pub precedence_parens: bool,

    /// Calls with at least this many arguments put one argument per line
    #[arg(long)]
    pub call_wrap_threshold: Option<usize>,

    /// Configuration (.pepper) file, command line flags take precedence
    #[arg(long)]
    pub config: Option<String>,
}

/// Arguments for writing the parser's JSON syntax tree.
#[derive(Args, Debug, Clone)]
pub struct AstCLArgs {
    /// Input file, standard input when absent or `-`
    pub input: Option<String>,

    /// Output file, standard output when absent or `-`
    pub output: Option<String>,

    /// Python interpreter used to parse source
    #[arg(long)]
    pub python: Option<String>,
}

/// Arguments for writing a configuration file.
#[derive(Args, Debug, Clone)]
pub struct ConfigCLArgs {
    /// Configuration (.pepper) file to write, standard output when absent or `-`
    pub output: Option<String>,

    /// Spaces per indentation level
    #[arg(long)]
    pub indent_width: Option<usize>,

    /// Python interpreter used to parse source
    #[arg(long)]
    pub python: Option<String>,

    /// Parenthesize by operator precedence instead of by node kind
    #[arg(long)]
    pub precedence_parens: bool,

    /// Calls with at least this many arguments put one argument per line
    #[arg(long)]
    pub call_wrap_threshold: Option<usize>,
}

/// Return the logger configuration.  The filter comes from the environment variable named by
/// `filter_variable` and shows warnings when the variable is unset.
fn logger_builder(filter_variable: &str) -> Builder {
    let mut builder = Builder::from_env(Env::default().filter_or(filter_variable, "warn"));
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .format_timestamp(Some(TimestampPrecision::Seconds));
    builder
}

fn main() -> ExitCode {
    let _ = logger_builder(DEFAULT_FILTER_ENV).try_init();

    let pepper_command = PepperCommand::parse();
    let result = match &pepper_command.command {
        Commands::Format(format_args) => format_input(format_args.clone()),
        Commands::Ast(ast_args) => dump_ast(ast_args.clone()).map(|_| true),
        Commands::Config(config_args) => write_config(config_args.clone()).map(|_| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("pepper: {}", e);
            ExitCode::FAILURE
        }
    }
}
