// ABOUTME: Multiplexer implementation backed by the tmux command-line client.
// ABOUTME: Each operation is one blocking tmux invocation.

use std::process::Command;

use pb_core::{ResizeCommand, Snapshot};

use crate::{parse_snapshot, resize_args, Multiplexer, MuxError, PANE_FORMAT};

pub struct Tmux {
    program: String,
}

impl Default for Tmux {
    fn default() -> Self {
        Self {
            program: "tmux".to_string(),
        }
    }
}

impl Tmux {
    /// Run tmux with `args` and return its stdout
    fn run<S: AsRef<str>>(&self, args: &[S]) -> Result<String, MuxError> {
        let args: Vec<&str> = args.iter().map(|arg| arg.as_ref()).collect();
        tracing::debug!(program = %self.program, ?args, "running tmux");

        let output = Command::new(&self.program).args(&args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MuxError::NotAvailable(self.program.clone())
            } else {
                MuxError::Io(e)
            }
        })?;

        if !output.status.success() {
            return Err(MuxError::CommandFailed {
                command: format!("{} {}", self.program, args.join(" ")),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| MuxError::Malformed {
            line: 0,
            reason: "tmux output is not valid UTF-8".to_string(),
        })
    }
}

impl Multiplexer for Tmux {
    fn list_panes(&self) -> Result<Snapshot, MuxError> {
        let output = self.run(&["list-panes", "-F", PANE_FORMAT])?;
        let snapshot = parse_snapshot(&output)?;
        tracing::debug!(panes = snapshot.panes().len(), "read pane snapshot");
        Ok(snapshot)
    }

    fn resize_panes(&self, commands: &[ResizeCommand]) -> Result<(), MuxError> {
        self.run(resize_args(commands).as_slice())?;
        Ok(())
    }
}
