use std::io::Write;

use clap::Args;
use ringdown_core::{format, Config, CountdownRunner, Outcome, TimerConfig};
use tracing::debug;

use crate::render;

#[derive(Args)]
pub struct RunArgs {
    /// Countdown duration in seconds (defaults to the configured value)
    #[arg(long)]
    pub duration_secs: Option<u64>,
    /// Tick interval in milliseconds (defaults to the configured value)
    #[arg(long)]
    pub interval_ms: Option<u64>,
    /// Emit one JSON event per line instead of drawing the ring
    #[arg(long)]
    pub json: bool,
    /// Draw the ring with ASCII characters only
    #[arg(long)]
    pub ascii: bool,
}

pub async fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    let duration_secs = args.duration_secs.unwrap_or(cfg.timer.duration_secs);
    let interval_ms = args.interval_ms.unwrap_or(cfg.timer.interval_ms);
    let timer = TimerConfig::new(duration_secs.saturating_mul(1_000), interval_ms)?;

    let segments = cfg.ui.segments;
    let ascii = args.ascii || cfg.ui.ascii;
    let total_ms = timer.duration_ms();

    let (runner, handle) = CountdownRunner::new(timer);

    // Ctrl-C is the stop control.
    tokio::spawn({
        let handle = handle.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                handle.stop();
            }
        }
    });

    let runner = if args.json {
        runner.on_event(|event| {
            if let Ok(line) = serde_json::to_string(event) {
                println!("{line}");
            }
        })
    } else {
        print!("{}", render::frame(total_ms, total_ms, segments, ascii));
        let _ = std::io::stdout().flush();
        runner.on_tick(move |remaining_ms| {
            print!("\r{}", render::frame(remaining_ms, total_ms, segments, ascii));
            let _ = std::io::stdout().flush();
        })
    };

    debug!(duration_ms = total_ms, interval_ms, "countdown starting");
    match runner.run().await {
        Outcome::Completed => {
            if !args.json {
                // The dial resets to full on completion, like the engine.
                print!("\r{}", render::frame(total_ms, total_ms, segments, ascii));
                let bell = if cfg.ui.bell { "\x07" } else { "" };
                println!("\nTime's up!{bell}");
            }
            debug!("countdown completed");
        }
        Outcome::Stopped { remaining_ms } => {
            if !args.json {
                println!("\nStopped with {} left.", format::clock_label(remaining_ms));
            }
            debug!(remaining_ms, "countdown stopped");
        }
    }
    Ok(())
}
