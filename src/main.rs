//! Round Robin simulator CLI
//!
//! ```bash
//! # Canonical three-process example, quantum 2
//! rr_model
//!
//! # Processes from a file, quantum 3, with a Gantt chart
//! rr_model -i processes.csv -q 3 --gantt
//!
//! # Seeded random workload, printing every event
//! rr_model --random 40 --seed 7 --events
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rr_model::{
    Process, RoundRobin, SimConfig, SimEvent,
    input::load_processes,
    report::{render_gantt, render_summary},
    sim::{DEFAULT_QUANTUM, ProcessSpec, Quantum, WorkloadConfig, bernoulli_specs, default_example},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rr_model")]
#[command(version, about = "Round Robin CPU scheduling simulator", long_about = None)]
struct Args {
    /// JSON or CSV file with name, arrival and burst per process
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Time slice per dispatch
    #[arg(short = 'q', long, default_value_t = DEFAULT_QUANTUM as i64, allow_negative_numbers = true)]
    quantum: i64,

    /// Print a per-tick Gantt chart
    #[arg(long)]
    gantt: bool,

    /// Print every simulation event
    #[arg(long)]
    events: bool,

    /// Generate a random workload over this many ticks instead of reading input
    #[arg(long, conflicts_with = "input")]
    random: Option<u64>,

    /// Seed for --random
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Per-tick arrival probability for --random
    #[arg(long, default_value = "0.3")]
    p_arrival: f64,

    /// Probability that a generated process is short
    #[arg(long, default_value = "0.3")]
    p_short: f64,

    #[arg(long, default_value = "2")]
    short_burst: i64,

    #[arg(long, default_value = "6")]
    long_burst: i64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,rr_model=info")),
        )
        .init();

    if let Err(err) = run(Args::parse()) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let quantum = Quantum::new(args.quantum).context("Invalid configuration")?;
    let procs = workload(&args)?;
    info!(processes = procs.len(), "Loaded workload");

    let config = SimConfig::new(quantum).with_timeline(args.gantt);
    let mut sim = RoundRobin::new(procs, config);

    if args.events {
        while !sim.all_processes_completed() {
            let now = sim.core.now();
            let Some(events) = sim.step() else { break };
            for event in events {
                print_event(&sim, now, &event);
            }
        }
        println!();
    }

    let result = sim.simulate();
    print!("{}", render_summary(&result, quantum.get()));

    if let Some(timeline) = &result.timeline {
        println!();
        print!("{}", render_gantt(timeline));
    }

    Ok(())
}

fn workload(args: &Args) -> Result<Vec<Process>> {
    if let Some(path) = &args.input {
        return load_processes(path)
            .with_context(|| format!("Failed to load processes from {}", path.display()));
    }

    let specs = match args.random {
        Some(ticks) => {
            let config = WorkloadConfig::default()
                .with_ticks(ticks)
                .with_seed(args.seed)
                .with_probabilities(args.p_arrival, args.p_short)
                .with_bursts(args.short_burst, args.long_burst);
            bernoulli_specs(&config)
        }
        None => default_example(),
    };

    specs
        .iter()
        .map(ProcessSpec::validate)
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid process list")
}

fn print_event(sim: &RoundRobin, now: u64, event: &SimEvent) {
    let name = |proc: usize| sim.core.ctx.proc(proc).name.clone();
    match *event {
        SimEvent::Arrived { proc } => println!("t={now} arrived {}", name(proc)),
        SimEvent::IdleJump { from, to } => println!("t={now} idle {from} -> {to}"),
        SimEvent::Dispatched {
            proc, slice, first, ..
        } => println!(
            "t={now} dispatch {} slice={slice}{}",
            name(proc),
            if first { " (first)" } else { "" }
        ),
        SimEvent::Ticked { proc, at } => println!("t={now} tick {at} {}", name(proc)),
        SimEvent::Requeued { proc, remaining } => {
            println!("t={now} requeue {} remaining={remaining}", name(proc))
        }
        SimEvent::Completed { proc, at } => println!("t={now} complete {} at {at}", name(proc)),
    }
}
