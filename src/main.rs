mod consts;
mod utils;
mod server;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{fmt, prelude::*};
use crate::consts::{BANNER, SPLINE_CONFIG, SplineConfig};
use crate::utils::{interp::interpolate, parser::target_parser, render_estimate};
use mimalloc::MiMalloc;
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
fn init_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing::level_filters::LevelFilter::INFO)
        .with(fmt::layer()
            .with_writer(io::stderr)
            .without_time()
            .with_target(false)
            .with_thread_names(false))
        .init();
    Ok(())
}
fn estimate(config: &SplineConfig, raw_target: &str) -> String {
    match target_parser(raw_target) {
        Ok(target) => {
            let outcome = interpolate(&config.x_vals, &config.y_vals, target);
            render_estimate(target, &outcome, config.precision)
        }
        Err(e) => format!("Invalid input: {:#}", e),
    }
}
fn prompt(config: &SplineConfig) -> Result<String> {
    println!("{}", BANNER);
    print!("Enter x value to interpolate: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("Read x value from stdin")?;
    Ok(estimate(config, &line))
}
#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;
    let config = SPLINE_CONFIG.clone();
    tracing::info!("sample_set: {} x values, {} y values", config.x_vals.len(), config.y_vals.len());
    match std::env::args().nth(1).as_deref() {
        Some("serve") => server::run(config).await?,
        Some(arg) => println!("{}", estimate(&config, arg)),
        None => println!("{}", prompt(&config)?),
    }
    Ok(())
}
