use thiserror::Error;
use vc_core::CoreError;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid configuration: {0}")]
    Config(#[from] CoreError),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
