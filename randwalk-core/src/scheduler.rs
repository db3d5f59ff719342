use log::trace;
use std::time::Instant;

use crate::Field;

/// A unit of per-tick work over the field.
pub trait System {
    fn run(&mut self, field: &mut Field);

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Runs registered systems sequentially, in registration order.
#[derive(Default)]
pub struct Scheduler {
    systems: Vec<Box<dyn System>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a system to the scheduler
    pub fn add_system<T: System + 'static>(&mut self, system: T) {
        self.systems.push(Box::new(system));
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Execute all systems once
    pub fn execute_once(&mut self, field: &mut Field) {
        for system in &mut self.systems {
            let start = Instant::now();
            system.run(field);
            trace!("{} took {:?}", system.name(), start.elapsed());
        }
    }
}
