//! Deck Model CLI
//!
//! Run the revenue calculator, sweep the slider, or watch the carousel tick.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use deck_model::analytics::{JsonLinesSink, LogSink, Tracker};
use deck_model::counter::{CounterAnimation, DEFAULT_COUNTER_DURATION};
use deck_model::revenue::format::{format_currency, format_currency_compact};
use deck_model::{DeckConfig, PresentationSession, RevenueBreakdown, RevenueModel};

#[derive(Debug, Parser)]
#[command(name = "deck-model", version, about = "Pitch deck revenue and carousel model")]
struct Cli {
    /// Built-in deck preset (maple or gauntlet)
    #[arg(long, default_value = "maple")]
    deck: String,

    /// Deck config JSON; overrides --deck
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append analytics events as JSON lines to this file instead of the log
    #[arg(long)]
    events: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Revenue breakdown for one user count
    Revenue {
        #[arg(long, default_value_t = 10_000)]
        users: u64,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Revenue at every slider stop
    Sweep {
        /// Write the sweep as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Watch the carousel auto-advance
    Carousel {
        /// Number of auto-advance ticks to wait for
        #[arg(long, default_value_t = 4)]
        ticks: usize,

        /// Override the deck's tick interval
        #[arg(long)]
        tick_ms: Option<u64>,

        /// Tap this screen after `after` ticks
        #[arg(long)]
        select: Option<usize>,

        #[arg(long, default_value_t = 1)]
        after: usize,
    },
    /// Print the frames of a count-up animation
    Counter {
        /// Display text, e.g. "$2.5M"
        #[arg(long)]
        value: String,

        #[arg(long)]
        duration_ms: Option<u64>,

        #[arg(long, default_value_t = 10)]
        frames: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DeckConfig::from_json_path(path)
            .with_context(|| format!("failed to load deck config {}", path.display()))?,
        None => DeckConfig::preset(&cli.deck)?,
    };

    let tracker = match &cli.events {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open events file {}", path.display()))?;
            Tracker::new(Arc::new(JsonLinesSink::new(file)))
        }
        None => Tracker::new(Arc::new(LogSink)),
    };

    match cli.command {
        Command::Revenue { users, json } => {
            let breakdown = RevenueModel::new(config.assumptions.clone()).compute(users);
            if json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                print_breakdown(&breakdown);
            }
        }
        Command::Sweep { csv } => run_sweep(&config, csv)?,
        Command::Carousel { ticks, tick_ms, select, after } => {
            let mut config = config;
            if let Some(ms) = tick_ms {
                config.tick_ms = ms;
            }
            run_carousel(config, tracker, ticks, select, after).await?;
        }
        Command::Counter { value, duration_ms, frames } => {
            let duration = duration_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_COUNTER_DURATION);
            let counter = CounterAnimation::from_text(&value, duration)?;
            let frames = frames.max(1);
            for i in 0..=frames {
                let elapsed = duration.mul_f64(i as f64 / frames as f64);
                println!("{:>6}ms  {}", elapsed.as_millis(), counter.render_at(elapsed, "", ""));
            }
        }
    }

    Ok(())
}

fn print_breakdown(r: &RevenueBreakdown) {
    println!("Revenue model for {} users", r.user_count);
    println!("{}", "-".repeat(40));
    println!("  Annual card spend:  {:>16}", format_currency(r.total_annual_spend));
    println!("  Interchange:        {:>16}", format_currency(r.interchange_revenue));
    println!("  Yield fees:         {:>16}", format_currency(r.yield_fees));
    println!("  FX revenue:         {:>16}", format_currency(r.fx_revenue));
    println!("  Total revenue:      {:>16}", format_currency(r.total_revenue));
    println!("  Partner share:      {:>16}", format_currency(r.partner_share));
    println!("  Revenue per user:   {:>16}", format!("${:.2}", r.lifetime_value_per_user));
}

fn run_sweep(config: &DeckConfig, csv_path: Option<PathBuf>) -> Result<()> {
    let model = RevenueModel::new(config.assumptions.clone());
    let rows = model.sweep(&config.slider);

    match csv_path {
        Some(path) => {
            let mut writer = csv::Writer::from_path(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
            println!("{} rows written to {}", rows.len(), path.display());
        }
        None => {
            println!("{:>8} {:>10} {:>10} {:>10} {:>10} {:>10}",
                "Users", "Interchg", "Yield", "FX", "Total", "Partner");
            for r in &rows {
                println!("{:>8} {:>10} {:>10} {:>10} {:>10} {:>10}",
                    r.user_count,
                    format_currency_compact(r.interchange_revenue),
                    format_currency_compact(r.yield_fees),
                    format_currency_compact(r.fx_revenue),
                    format_currency_compact(r.total_revenue),
                    format_currency_compact(r.partner_share),
                );
            }
        }
    }
    Ok(())
}

async fn run_carousel(
    config: DeckConfig,
    tracker: Tracker,
    ticks: usize,
    select: Option<usize>,
    after: usize,
) -> Result<()> {
    let period = config.tick_period();
    let session = PresentationSession::open(config, tracker)?;
    let mut updates = session.carousel().subscribe();

    let first = updates.borrow_and_update().clone();
    println!("start   screen {} ({}) {:?}", first.active_index, first.screen_id, first.playback);

    for tick in 1..=ticks {
        if select.is_some() && tick > after {
            break;
        }
        updates.changed().await?;
        let snap = updates.borrow_and_update().clone();
        println!("tick {:>2} screen {} ({}) {:?}", tick, snap.active_index, snap.screen_id, snap.playback);
    }

    if let Some(index) = select {
        let screen = session.select_screen(index)?;
        println!("tapped  screen {} ({}), auto-advance off", index, screen.id);

        // Show that nothing moves for a couple of periods
        tokio::time::sleep(period * 2).await;
        let snap = session.carousel().snapshot();
        println!("after {:?}: screen {} ({}) {:?}", period * 2, snap.active_index, snap.screen_id, snap.playback);
    }

    Ok(())
}
