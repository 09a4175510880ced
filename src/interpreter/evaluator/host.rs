use std::{
    io::{self, Write},
    process::Command,
};

/// Runs external commands for the `run` builtin.
pub trait CommandRunner {
    /// Runs `command` and returns everything it wrote to standard output.
    ///
    /// A command that starts and exits with a non-zero status is not an
    /// error; only failing to start it is.
    fn run(&mut self, command: &str) -> io::Result<String>;
}

/// Runs commands through the platform shell: `sh -c` on Unix, `cmd /C` on
/// Windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &str) -> io::Result<String> {
        let output = if cfg!(windows) {
            Command::new("cmd").args(["/C", command]).output()?
        } else {
            Command::new("sh").args(["-c", command]).output()?
        };
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Everything the evaluator touches outside the program itself.
///
/// # Example
/// ```
/// use nixi::interpreter::evaluator::host::{CommandRunner, Host};
///
/// struct Canned;
///
/// impl CommandRunner for Canned {
///     fn run(&mut self, _command: &str) -> std::io::Result<String> {
///         Ok("canned\n".to_string())
///     }
/// }
///
/// let host = Host::new(Box::new(std::io::sink()), Box::new(Canned));
/// ```
pub struct Host {
    /// Where `echo` writes.
    pub output: Box<dyn Write>,
    /// What `run` executes commands with.
    pub runner: Box<dyn CommandRunner>,
}

impl Host {
    /// Creates a host from an output sink and a command runner.
    #[must_use]
    pub fn new(output: Box<dyn Write>, runner: Box<dyn CommandRunner>) -> Self {
        Self { output, runner }
    }

    /// A host writing to standard output and running commands through the
    /// system shell.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(Box::new(io::stdout()), Box::new(ShellRunner))
    }
}
