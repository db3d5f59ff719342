use serde::Serialize;

use crate::{Entity, FieldError};

/// Rule drawn above the first row.
pub const TOP_RULE: char = '_';
/// Rule drawn below the last row.
pub const BOTTOM_RULE: char = '‾';
/// Left and right walls.
pub const WALL: char = '|';
/// Cell with no entity on it.
pub const BLANK: char = ' ';

/// Largest buffer `render` reserves up front; bigger frames grow as written.
const MAX_PREALLOC: usize = 1 << 20;

/// Byte capacity to reserve for a frame, capped at `MAX_PREALLOC`.
fn frame_capacity(width: usize, height: usize) -> usize {
    width
        .checked_add(3)
        .and_then(|w| w.checked_mul(height.checked_add(2)?))
        .and_then(|cells| cells.checked_mul(BOTTOM_RULE.len_utf8()))
        .map_or(MAX_PREALLOC, |bytes| bytes.min(MAX_PREALLOC))
}

/// Validated field dimensions, passed to entities by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Result<Self, FieldError> {
        if width <= 0 || height <= 0 {
            return Err(FieldError::InvalidDimensions { width, height });
        }
        Ok(Bounds { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Clamp-to-edge on each axis. Never wraps or reflects.
    pub fn clamp(&self, x: i32, y: i32) -> (i32, i32) {
        (x.clamp(0, self.width - 1), y.clamp(0, self.height - 1))
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }
}

/// The bounded area and the entities drawn on it.
///
/// Insertion order is draw priority: when several entities share a cell the
/// one added first is shown.
#[derive(Debug, Clone)]
pub struct Field {
    bounds: Bounds,
    entities: Vec<Entity>,
}

impl Field {
    pub fn new(width: i32, height: i32) -> Result<Self, FieldError> {
        Self::with_entities(width, height, Vec::new())
    }

    /// Build a field that takes ownership of an existing collection.
    pub fn with_entities(
        width: i32,
        height: i32,
        entities: Vec<Entity>,
    ) -> Result<Self, FieldError> {
        let bounds = Bounds::new(width, height)?;
        Ok(Field { bounds, entities })
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    /// Glyph of the first entity standing on `(x, y)`, if any.
    pub fn glyph_at(&self, x: i32, y: i32) -> Option<char> {
        self.entities
            .iter()
            .find(|e| e.x() == x && e.y() == y)
            .map(Entity::glyph)
    }

    /// Draw the field as `height + 2` newline-terminated lines.
    pub fn render(&self) -> String {
        let width = self.bounds.width as usize;
        let height = self.bounds.height as usize;
        let mut out = String::with_capacity(frame_capacity(width, height));

        out.push(' ');
        out.extend(std::iter::repeat(TOP_RULE).take(width));
        out.push('\n');

        for y in 0..self.bounds.height {
            out.push(WALL);
            for x in 0..self.bounds.width {
                out.push(self.glyph_at(x, y).unwrap_or(BLANK));
            }
            out.push(WALL);
            out.push('\n');
        }

        out.push(' ');
        out.extend(std::iter::repeat(BOTTOM_RULE).take(width));
        out.push('\n');

        out
    }
}
