//! CLI-level errors (wraps crate errors)

use thiserror::Error;

use crate::errors::ZtreeError;
use crate::traversal::Order;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Ztree(#[from] ZtreeError),

    #[error("{order} visited {visited} nodes ({distinct} distinct), expected {expected}")]
    Mismatch {
        order: Order,
        visited: usize,
        distinct: usize,
        expected: usize,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Ztree(ZtreeError::Output(e))
    }
}

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Ztree(e) => match e {
                ZtreeError::Config { .. } => crate::exitcode::CONFIG,
                ZtreeError::Output(_) => crate::exitcode::IOERR,
            },
            CliError::Mismatch { .. } => crate::exitcode::SOFTWARE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_each_error_kind_when_mapping_then_sysexits_code() {
        let config = CliError::from(ZtreeError::Config {
            message: "bad".into(),
        });
        let io = CliError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        let mismatch = CliError::Mismatch {
            order: Order::Preorder,
            visited: 3,
            distinct: 2,
            expected: 3,
        };

        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);
        assert_eq!(io.exit_code(), crate::exitcode::IOERR);
        assert_eq!(mismatch.exit_code(), crate::exitcode::SOFTWARE);
        assert_eq!(
            mismatch.to_string(),
            "preorder visited 3 nodes (2 distinct), expected 3"
        );
    }
}
