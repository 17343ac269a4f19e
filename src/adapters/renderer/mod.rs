//! External renderer process
//!
//! The renderer is an opaque command-line program. This module knows how to run a
//! [`RenderCommand`] and capture its result; building the arguments is the job of
//! [`crate::core::export::invoker`].

pub mod process;

use async_trait::async_trait;
use std::ffi::{OsStr, OsString};
use std::fmt;

pub use process::ProcessRunner;

/// A fully built program invocation, never passed through a shell
///
/// Program and arguments are kept as OS strings so paths reach the renderer
/// byte for byte, even when they are not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl RenderCommand {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Value following `flag`, if the flag is present
    pub fn flag_value(&self, flag: &str) -> Option<&OsStr> {
        self.args
            .iter()
            .position(|a| a.as_os_str() == OsStr::new(flag))
            .and_then(|i| self.args.get(i + 1))
            .map(OsString::as_os_str)
    }

    /// [`flag_value`](Self::flag_value) as UTF-8; `None` if it is not valid UTF-8
    pub fn flag_str(&self, flag: &str) -> Option<&str> {
        self.flag_value(flag).and_then(OsStr::to_str)
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a.as_os_str() == OsStr::new(flag))
    }
}

/// Readable command line for logs; arguments with spaces or quotes are quoted
///
/// Bytes that are not valid UTF-8 are shown as U+FFFD.
impl fmt::Display for RenderCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, &self.program.to_string_lossy())?;
        for arg in &self.args {
            f.write_str(" ")?;
            write_quoted(f, &arg.to_string_lossy())?;
        }
        Ok(())
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '\'' || c == '"');
    if needs_quotes {
        write!(f, "'{}'", value.replace('\'', r"'\''"))
    } else {
        f.write_str(value)
    }
}

/// Captured result of one finished renderer process
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs renderer commands to completion
///
/// `Err` means the process could not be started. A process that started and
/// failed is reported through [`CommandOutput::exit_code`].
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &RenderCommand) -> std::io::Result<CommandOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_plain() {
        let cmd = RenderCommand::new("xvfb-run").args(["-a", "/usr/bin/drawio"]);
        assert_eq!(cmd.to_string(), "xvfb-run -a /usr/bin/drawio");
    }

    #[test]
    fn test_display_quotes_spaces_and_quotes() {
        let cmd = RenderCommand::new("drawio")
            .arg("--output")
            .arg("/data/images/a.drawio_l1 core.png")
            .arg("it's");
        assert_eq!(
            cmd.to_string(),
            r"drawio --output '/data/images/a.drawio_l1 core.png' 'it'\''s'"
        );
    }

    #[test]
    fn test_flag_value() {
        let cmd = RenderCommand::new("drawio").args(["--format", "png", "--transparent"]);
        assert_eq!(cmd.flag_value("--format"), Some(OsStr::new("png")));
        assert_eq!(cmd.flag_str("--format"), Some("png"));
        assert_eq!(cmd.flag_value("--transparent"), None);
        assert!(cmd.has_flag("--transparent"));
        assert!(!cmd.has_flag("--scale"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument_is_kept_verbatim() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"/data/sch\xe9ma.drawio");
        let cmd = RenderCommand::new("drawio").arg("--export").arg(raw);

        assert_eq!(cmd.flag_value("--export"), Some(raw));
        assert_eq!(cmd.flag_str("--export"), None);
        assert_eq!(cmd.to_string(), "drawio --export /data/sch\u{fffd}ma.drawio");
    }

    #[test]
    fn test_output_success() {
        let ok = CommandOutput {
            exit_code: Some(0),
            ..CommandOutput::default()
        };
        assert!(ok.success());
        assert!(!CommandOutput::default().success());
    }
}
