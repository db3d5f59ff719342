//! Output side of the loop: turning a field into bytes and getting those
//! bytes onto a display surface.

use log::info;
use randwalk_config::{SenderType, SerializerType, TransportSettings};
use std::io::{self, Write};
use thiserror::Error;

pub mod sender;
pub mod serializer;

pub use sender::{Sender, StdioSender, TerminalSender};
pub use serializer::{AsciiSerializer, JsonSerializer, Serializer};

// --- Error Type ---
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to serialize frame: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write to output: {0}")]
    Io(#[from] io::Error),
}

/// Create the appropriate serializer based on config
pub fn create_serializer(settings: &TransportSettings) -> Box<dyn Serializer> {
    match settings.serializer {
        SerializerType::Ascii => Box::new(AsciiSerializer),
        SerializerType::Json => Box::new(JsonSerializer),
    }
}

/// Create the appropriate sender based on config, writing to `out`.
pub fn create_sender<W: Write + 'static>(settings: &TransportSettings, out: W) -> Box<dyn Sender> {
    match settings.sender {
        SenderType::Terminal => {
            info!("Drawing frames to the terminal");
            Box::new(TerminalSender::new(out))
        }
        SenderType::Stdio => {
            info!("Streaming frames to standard output");
            Box::new(StdioSender::new(out))
        }
    }
}
