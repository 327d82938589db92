//! The `utility` module contains `shell_execute_with_input`, used by the parser bridge to run the
//! Python interpreter.

use crate::error::PepperError;
use std::io::{ErrorKind, Write};
use std::process::{Command, Output, Stdio};

/// Execute a command, write `input` to its standard input and collect its output.
///
/// # Arguments
///
/// * `command` - The command to execute.
/// * `arguments` - The array of arguments to the command.
/// * `input` - The bytes written to the child's standard input before it is closed.
///
/// # Errors
///
/// Returns [`PepperError::IO`] if the command cannot be started or its output cannot be read.
/// A child that exits before reading all of `input` is not an error.
pub fn shell_execute_with_input(
    command: &str,
    arguments: Vec<String>,
    input: &[u8],
) -> Result<Output, PepperError> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    } else {
        Command::new(command)
    };

    let mut child = cmd
        .args(arguments)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        match stdin.write_all(input) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
            Err(e) => return Err(PepperError::from(e)),
        }
        // Dropping stdin closes the pipe so the child sees end of file.
    }

    Ok(child.wait_with_output()?)
}
