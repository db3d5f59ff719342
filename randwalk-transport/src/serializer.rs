use randwalk_core::{Entity, Field};
use serde::Serialize;

use crate::TransportError;

/// Turns the current field into the text written for one frame.
pub trait Serializer {
    fn serialize(&self, field: &Field, tick: u64) -> Result<String, TransportError>;
}

/// The bordered ASCII frame.
pub struct AsciiSerializer;

impl Serializer for AsciiSerializer {
    fn serialize(&self, field: &Field, _tick: u64) -> Result<String, TransportError> {
        Ok(field.render())
    }
}

#[derive(Serialize, Debug)]
struct FieldState<'a> {
    tick: u64,
    width: i32,
    height: i32,
    entities: &'a [Entity],
}

/// One JSON object per frame, for feeding other tools.
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn serialize(&self, field: &Field, tick: u64) -> Result<String, TransportError> {
        let state = FieldState {
            tick,
            width: field.width(),
            height: field.height(),
            entities: field.entities(),
        };
        Ok(serde_json::to_string(&state)?)
    }
}
