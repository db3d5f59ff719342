use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use randwalk_config::Config;
use randwalk_core::{Entity, Field, FieldError, Scheduler, System};

// --- Systems ---

/// Moves every entity one random unit step per tick, in insertion order.
pub struct RandomStepSystem<R: Rng = StdRng> {
    rng: R,
}

impl RandomStepSystem<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomStepSystem<R> {
    pub fn new(rng: R) -> Self {
        RandomStepSystem { rng }
    }
}

impl<R: Rng> System for RandomStepSystem<R> {
    fn run(&mut self, field: &mut Field) {
        let bounds = field.bounds();
        for entity in field.entities_mut() {
            entity.random_step_with(&mut self.rng, bounds);
        }
    }
}

// --- Setup ---

/// Build the field described by `config`, entities in configuration order.
pub fn build_field(config: &Config) -> Result<Field, FieldError> {
    let mut field = Field::new(config.field.width, config.field.height)?;

    for spec in &config.entities {
        debug!("Adding entity '{}' at ({}, {})", spec.glyph, spec.x, spec.y);
        field.add_entity(Entity::new(spec.x, spec.y, spec.glyph));
    }

    Ok(field)
}

/// The field plus everything that advances it.
pub struct Simulation {
    field: Field,
    scheduler: Scheduler,
    tick: u64,
}

impl Simulation {
    pub fn new(field: Field, scheduler: Scheduler) -> Self {
        Simulation {
            field,
            scheduler,
            tick: 0,
        }
    }

    /// Field from `config` with a single random step system, seeded when
    /// the config carries a seed.
    pub fn from_config(config: &Config) -> Result<Self, FieldError> {
        let field = build_field(config)?;

        let mut scheduler = Scheduler::new();
        match config.seed {
            Some(seed) => {
                info!("Using fixed seed {}", seed);
                scheduler.add_system(RandomStepSystem::seeded(seed));
            }
            None => scheduler.add_system(RandomStepSystem::from_entropy()),
        }

        Ok(Self::new(field, scheduler))
    }

    /// Advance one tick.
    pub fn step(&mut self) {
        self.scheduler.execute_once(&mut self.field);
        self.tick += 1;
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }
}
