use log::{debug, info, warn};
use randwalk_simulation::Simulation;
use randwalk_transport::{Sender, Serializer, TransportError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Blocks between frames.
pub trait Pacer {
    fn pause(&mut self, interval: Duration);
}

/// Frame pacing backed by `spin_sleep` for sub-millisecond accuracy.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinPacer;

impl Pacer for SpinPacer {
    fn pause(&mut self, interval: Duration) {
        spin_sleep::sleep(interval);
    }
}

/// Shared cancellation flag, checked once at the top of every tick.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// The tick loop: step, send the frame, pause, clear.
pub struct Driver<P: Pacer = SpinPacer> {
    simulation: Simulation,
    serializer: Box<dyn Serializer>,
    sender: Box<dyn Sender>,
    pacer: P,
    interval: Duration,
    max_ticks: Option<u64>,
    stop: StopFlag,
}

impl<P: Pacer> Driver<P> {
    pub fn new(
        simulation: Simulation,
        serializer: Box<dyn Serializer>,
        sender: Box<dyn Sender>,
        pacer: P,
        interval: Duration,
    ) -> Self {
        Driver {
            simulation,
            serializer,
            sender,
            pacer,
            interval,
            max_ticks: None,
            stop: StopFlag::new(),
        }
    }

    /// Stop after `ticks` completed ticks instead of running forever.
    pub fn with_max_ticks(mut self, ticks: u64) -> Self {
        self.max_ticks = Some(ticks);
        self
    }

    /// Handle that stops the loop from elsewhere (e.g. a signal handler).
    pub fn stop_flag(&self) -> StopFlag {
        self.stop.clone()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Run one tick.
    pub fn tick(&mut self) -> Result<(), TransportError> {
        let start = Instant::now();

        self.simulation.step();
        let tick = self.simulation.tick();
        debug!("tick {}", tick);

        let frame = self.serializer.serialize(self.simulation.field(), tick)?;
        self.sender.send(frame.as_bytes())?;

        let elapsed = start.elapsed();
        if elapsed > self.interval {
            warn!("Tick {} exceeded budget: {:?} > {:?}", tick, elapsed, self.interval);
        }

        self.pacer.pause(self.interval);
        self.sender.clear()?;
        Ok(())
    }

    /// Loop until stopped or the tick limit is reached. Returns the number
    /// of ticks completed by this call.
    pub fn run(&mut self) -> Result<u64, TransportError> {
        info!("Running at one tick every {:?}", self.interval);
        let mut completed = 0;

        loop {
            if self.stop.is_stopped() {
                info!("Stop requested after {} ticks", completed);
                break;
            }
            if self.max_ticks.map_or(false, |max| completed >= max) {
                info!("Reached tick limit of {}", completed);
                break;
            }

            self.tick()?;
            completed += 1;
        }

        Ok(completed)
    }
}
