//! External process execution

use prefetch_core::{PrefetchError, Result};
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Exit code and captured text of a finished process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Process exit code, -1 when terminated by a signal
    pub exit_code: i32,
    pub output: String,
}

impl CommandOutput {
    pub fn new(exit_code: i32, output: impl Into<String>) -> Self {
        Self {
            exit_code,
            output: output.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.output.lines()
    }
}

/// Runs a command to completion.
///
/// A non-zero exit code is returned as data, only a failure to launch the
/// process is an error.
pub trait CommandRunner {
    fn run(
        &self,
        command: &[String],
        directory: Option<&Path>,
        merge_stderr: bool,
    ) -> Result<CommandOutput>;
}

/// Runs commands with `std::process`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        command: &[String],
        directory: Option<&Path>,
        merge_stderr: bool,
    ) -> Result<CommandOutput> {
        let Some((program, args)) = command.split_first() else {
            return Err(PrefetchError::CommandSpawn {
                program: String::new(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "empty command"),
            });
        };

        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null());
        if let Some(dir) = directory {
            cmd.current_dir(dir);
        }

        log::debug!("Running {}", command.join(" "));
        let out = cmd.output().map_err(|source| PrefetchError::CommandSpawn {
            program: program.clone(),
            source,
        })?;

        // stdout first, then stderr: the build tool writes diagnostics to stderr
        let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&out.stderr);
        if merge_stderr {
            output.push_str(&stderr);
        } else if !stderr.is_empty() {
            log::debug!("{} stderr: {}", program, stderr.trim_end());
        }

        let exit_code = out.status.code().unwrap_or(-1);
        log::debug!("{} exited with {}", program, exit_code);
        Ok(CommandOutput { exit_code, output })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_is_spawn_error() {
        let err = SystemRunner.run(&[], None, false).unwrap_err();
        assert!(matches!(err, PrefetchError::CommandSpawn { .. }));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let command = vec!["definitely-not-a-real-program-xyz".to_string()];
        let err = SystemRunner.run(&command, None, true).unwrap_err();
        assert!(matches!(err, PrefetchError::CommandSpawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_data_and_stderr_is_merged() {
        let command: Vec<String> = ["sh", "-c", "echo out; echo err >&2; exit 3"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let merged = SystemRunner.run(&command, None, true).unwrap();
        assert_eq!(merged.exit_code, 3);
        assert!(!merged.success());
        assert!(merged.output.contains("out"));
        assert!(merged.output.contains("err"));

        let separate = SystemRunner.run(&command, None, false).unwrap();
        assert_eq!(separate.output, "out\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_working_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let command = vec!["pwd".to_string()];
        let out = SystemRunner.run(&command, Some(tmp.path()), false).unwrap();
        let reported = std::path::PathBuf::from(out.output.trim_end());
        assert_eq!(
            reported.canonicalize().unwrap(),
            tmp.path().canonicalize().unwrap()
        );
    }
}
