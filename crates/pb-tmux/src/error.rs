// ABOUTME: Failures talking to tmux.
// ABOUTME: Carries the exit status of a failed tmux call so it can become the process exit code.

#[derive(Debug, thiserror::Error)]
pub enum MuxError {
    #[error("{0} is not installed or not on PATH")]
    NotAvailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{command} failed: {stderr}")]
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("Malformed pane listing at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

impl MuxError {
    /// Exit status reported by tmux, if the failure came from a tmux process that exited
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            MuxError::CommandFailed { status, .. } => *status,
            _ => None,
        }
    }
}
