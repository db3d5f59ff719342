use rand::Rng;
use serde::Serialize;
use std::fmt;

use crate::Bounds;

/// Unit step choices for a single axis: left/up, stay, right/down.
pub const STEP_CHOICES: [i32; 3] = [-1, 0, 1];

/// Sample one of `STEP_CHOICES` uniformly.
pub fn sample_step<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    STEP_CHOICES[rng.gen_range(0..STEP_CHOICES.len())]
}

/// A single moving point on the field.
///
/// The position can only change through [`Entity::move_by`], so any bounds
/// passed in are always honoured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    x: i32,
    y: i32,
    glyph: char,
}

impl Entity {
    pub fn new(x: i32, y: i32, glyph: char) -> Self {
        Entity { x, y, glyph }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Apply a positional delta.
    ///
    /// Without bounds the entity moves freely. With bounds each axis is
    /// clamped to the nearest edge independently.
    pub fn move_by(&mut self, dx: i32, dy: i32, bounds: Option<Bounds>) {
        let new_x = self.x.saturating_add(dx);
        let new_y = self.y.saturating_add(dy);

        let (new_x, new_y) = match bounds {
            Some(bounds) => bounds.clamp(new_x, new_y),
            None => (new_x, new_y),
        };

        self.x = new_x;
        self.y = new_y;
    }

    /// Take one random unit step inside `bounds` using the thread-local RNG.
    pub fn random_step(&mut self, bounds: Bounds) {
        self.random_step_with(&mut rand::thread_rng(), bounds);
    }

    /// Take one random unit step inside `bounds` drawing from `rng`.
    ///
    /// `dx` and `dy` are drawn independently, so all nine combinations
    /// (including staying put) are equally likely.
    pub fn random_step_with<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Bounds) {
        let dx = sample_step(rng);
        let dy = sample_step(rng);
        self.move_by(dx, dy, Some(bounds));
    }

    /// Human-readable position line, handy when debugging a run.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The coordinates of the Point are ({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn bounds(width: i32, height: i32) -> Bounds {
        Bounds::new(width, height).unwrap()
    }

    #[test]
    fn move_past_far_edge_clamps_to_last_index() {
        let mut entity = Entity::new(2, 2, 'X');
        entity.move_by(5, 5, Some(bounds(3, 3)));
        assert_eq!(entity.position(), (2, 2));
    }

    #[test]
    fn move_past_origin_clamps_to_zero() {
        let mut entity = Entity::new(0, 0, 'X');
        entity.move_by(-1, -1, Some(bounds(3, 3)));
        assert_eq!(entity.position(), (0, 0));
    }

    #[test]
    fn move_without_bounds_is_unclamped() {
        let mut entity = Entity::new(1, 1, 'X');
        entity.move_by(1, -1, None);
        assert_eq!(entity.position(), (2, 0));

        entity.move_by(-10, -10, None);
        assert_eq!(entity.position(), (-8, -10));
    }

    #[test]
    fn move_clamps_each_axis_independently() {
        let mut entity = Entity::new(1, 1, 'X');
        entity.move_by(10, -10, Some(bounds(4, 6)));
        assert_eq!(entity.position(), (3, 0));
    }

    #[test]
    fn zero_move_inside_bounds_is_identity() {
        let b = bounds(5, 4);
        for x in 0..5 {
            for y in 0..4 {
                let mut entity = Entity::new(x, y, 'X');
                entity.move_by(0, 0, Some(b));
                assert_eq!(entity.position(), (x, y));
            }
        }
    }

    #[test]
    fn extreme_deltas_stay_in_bounds() {
        let b = bounds(7, 2);
        for (dx, dy) in [(i32::MAX, i32::MIN), (i32::MIN, i32::MAX), (123, -456)] {
            let mut entity = Entity::new(3, 1, 'X');
            entity.move_by(dx, dy, Some(b));
            assert!(b.contains(entity.x(), entity.y()), "{:?}", entity.position());
        }
    }

    #[test]
    fn random_step_from_origin_never_goes_negative() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = bounds(10, 10);
        for _ in 0..500 {
            let mut entity = Entity::new(0, 0, 'X');
            entity.random_step_with(&mut rng, b);
            assert!(entity.x() >= 0 && entity.y() >= 0);
            assert!(entity.x() <= 1 && entity.y() <= 1);
        }
    }

    #[test]
    fn thread_rng_step_from_origin_stays_in_bounds() {
        let b = bounds(4, 4);
        for _ in 0..200 {
            let mut entity = Entity::new(0, 0, 'X');
            entity.random_step(b);
            assert!(b.contains(entity.x(), entity.y()), "{:?}", entity.position());
            assert!(entity.x() <= 1 && entity.y() <= 1);
        }
    }

    #[test]
    fn random_walk_stays_in_one_by_one_field() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut entity = Entity::new(0, 0, 'X');
        for _ in 0..100 {
            entity.random_step_with(&mut rng, bounds(1, 1));
            assert_eq!(entity.position(), (0, 0));
        }
    }

    #[test]
    fn random_step_reaches_all_nine_outcomes() {
        let mut rng = StdRng::seed_from_u64(42);
        let b = bounds(10, 10);
        let mut seen = HashSet::new();
        for _ in 0..2_000 {
            let mut entity = Entity::new(5, 5, 'X');
            entity.random_step_with(&mut rng, b);
            seen.insert(entity.position());
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn sample_step_only_yields_unit_values() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..300 {
            assert!(STEP_CHOICES.contains(&sample_step(&mut rng)));
        }
    }

    #[test]
    fn describe_reports_coordinates() {
        let entity = Entity::new(4, 9, 'A');
        assert_eq!(entity.describe(), "The coordinates of the Point are (4, 9)");
    }
}
