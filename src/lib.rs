use std::io::{self, Write};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::{debug, info, warn};

pub mod generation;
pub mod utils;

use generation::Generation;

#[derive(Parser, Debug)]
#[command(version, about = "Prints one generation of babies per interval until a threshold is reached", long_about = None)]
pub struct GenerationArgs {
    /// Scales the stopping threshold (100 x MULTIPLIER). Empty means 1.
    #[arg(value_parser = utils::parse_multiplier, allow_negative_numbers = true)]
    pub multiplier: Option<i64>,
    /// Stop at the fixed threshold of 100000 instead; the multiplier is ignored.
    #[arg(long = "fixed-threshold")]
    pub fixed_threshold: bool,
    #[arg(
        long = "interval-ms",
        env = utils::INTERVAL_ENV,
        default_value_t = utils::DEFAULT_INTERVAL_MS,
        help = "Pause between generations in milliseconds"
    )]
    pub interval_ms: u64,
}

impl GenerationArgs {
    pub fn threshold(&self) -> Threshold {
        if self.fixed_threshold {
            Threshold::Fixed
        } else {
            Threshold::Scaled(self.multiplier.unwrap_or(utils::DEFAULT_MULTIPLIER))
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// `100 * multiplier`
    Scaled(i64),
    /// Always 100000.
    Fixed,
}

impl Threshold {
    pub fn value(self) -> i128 {
        match self {
            Threshold::Scaled(multiplier) => utils::SCALED_THRESHOLD_BASE * i128::from(multiplier),
            Threshold::Fixed => utils::FIXED_THRESHOLD,
        }
    }
}

/// Writes one line per generation while `babies < threshold`, flushing after each line and
/// pausing `interval` before checking the next one.
///
/// Stops early at the last generation representable in an `i128` if the threshold is never
/// reached. Returns the number of lines written.
pub async fn print_generations<W: Write>(
    out: &mut W,
    threshold: i128,
    interval: Duration,
) -> anyhow::Result<u64> {
    let mut printed = 0;
    for generation in Generation::new()
        .iter()
        .take_while(|g| g.babies < threshold)
    {
        writeln!(out, "{}", utils::generation_line(generation.babies))
            .context("Failed to write generation")?;
        out.flush().context("Failed to flush output")?;
        printed += 1;
        debug!("Generation {}: {:?}", printed, generation);

        tokio::time::sleep(interval).await;
    }
    Ok(printed)
}

pub async fn run(args: &GenerationArgs) -> anyhow::Result<()> {
    let threshold = args.threshold();
    match threshold {
        Threshold::Scaled(multiplier) => info!("Multiplier set to {}", multiplier),
        Threshold::Fixed => {
            if let Some(multiplier) = args.multiplier {
                warn!("Ignoring multiplier {} with a fixed threshold", multiplier);
            }
            info!("Fixed threshold set to {}", utils::FIXED_THRESHOLD);
        }
    }

    let mut stdout = io::stdout();
    let printed = print_generations(&mut stdout, threshold.value(), args.interval()).await?;
    info!(
        "Reached threshold {} after {} generations",
        threshold.value(),
        printed
    );
    Ok(())
}
