//! Crate-level errors (config loading and console output)

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZtreeError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type ZtreeResult<T> = Result<T, ZtreeError>;
