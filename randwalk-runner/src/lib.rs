use randwalk_config::ConfigError;
use randwalk_core::FieldError;
use randwalk_transport::TransportError;
use thiserror::Error;

pub mod cli;
pub mod driver;

pub use driver::{Driver, Pacer, SpinPacer, StopFlag};

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to install Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),
}
