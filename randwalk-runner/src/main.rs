use clap::Parser;
use log::{error, info};
use randwalk_runner::cli::Args;
use randwalk_runner::{Driver, RunnerError, SpinPacer};
use randwalk_simulation::Simulation;
use randwalk_transport::{create_sender, create_serializer};
use std::io;
use std::process;
use std::time::Duration;

fn main() {
    // Logs go to stderr so they never land inside a frame.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), RunnerError> {
    let config = args.resolve_config()?;
    match &args.config {
        Some(path) => info!("Using configuration from {}", path.display()),
        None => info!("Using built-in scenario"),
    }

    let simulation = Simulation::from_config(&config)?;
    info!(
        "Field {}x{} with {} entities",
        config.field.width,
        config.field.height,
        config.entities.len()
    );

    let serializer = create_serializer(&config.transport);
    let sender = create_sender(&config.transport, io::stdout());

    let mut driver = Driver::new(
        simulation,
        serializer,
        sender,
        SpinPacer,
        Duration::from_millis(config.tick_ms),
    );
    if let Some(ticks) = args.ticks {
        driver = driver.with_max_ticks(ticks);
    }

    let stop = driver.stop_flag();
    ctrlc::set_handler(move || stop.stop())?;

    let ticks = driver.run()?;
    info!("Simulation finished after {} ticks", ticks);
    Ok(())
}
