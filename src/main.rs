use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::num::NonZeroU64;
use std::path::PathBuf;

use clap::Parser;
use schedsim::adaptive::{HeuristicSelector, run_adaptive};
use schedsim::core::CSV_HEADER;
use schedsim::{MetricsTable, Policy, SimReport, UniformSource, Workload, WorkloadSource, sim};

#[derive(Parser, Debug)]
#[command(name = "schedsim")]
#[command(about = "Tick-based CPU scheduling simulator", long_about = None)]
struct Args {
    /// Scheduling policy: FCFS, SJF, RR, PR, or `adaptive`
    #[arg(short, long, default_value = "RR")]
    policy: String,

    /// Processes per generated workload
    #[arg(short = 'n', long, default_value_t = 5)]
    processes: usize,

    /// Round-robin time slice in ticks
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u64).range(1..))]
    quantum: u64,

    /// Workload generator seed
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Number of independent simulation runs
    #[arg(short, long, default_value_t = 1)]
    runs: usize,

    /// Append every run's event log to this CSV file
    #[arg(long)]
    log_csv: Option<PathBuf>,

    /// Run every policy on the same workload and compare averages
    #[arg(long, default_value_t = false)]
    compare: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let quantum = NonZeroU64::new(args.quantum).expect("clap range keeps quantum nonzero");
    let mut source = UniformSource::seeded(args.seed, args.processes);

    let mut sink = match &args.log_csv {
        Some(path) => {
            let mut file = File::create(path)?;
            writeln!(file, "{CSV_HEADER}")?;
            Some(file)
        }
        None => None,
    };

    for run in 0..args.runs {
        let workload = source.next_workload()?;
        if args.runs > 1 {
            println!("=== run {} ===", run + 1);
        }
        print_workload(&workload);

        if args.compare {
            compare_policies(&workload, quantum, sink.as_mut())?;
            continue;
        }

        let report = if args.policy.eq_ignore_ascii_case("adaptive") {
            run_adaptive(&HeuristicSelector, &workload, quantum)
        } else {
            sim::simulate_named(&args.policy, &workload, quantum)?
        };
        print_metrics(report.policy, &report.metrics);
        if let Some(file) = sink.as_mut() {
            report.log.write_rows(file)?;
        }
    }

    Ok(())
}

fn compare_policies(
    workload: &Workload,
    quantum: NonZeroU64,
    mut sink: Option<&mut File>,
) -> Result<(), Box<dyn Error>> {
    let reports: Vec<SimReport> = Policy::ALL
        .iter()
        .map(|&policy| sim::simulate(policy, workload, quantum))
        .collect();

    println!("policy  avg_waiting  avg_turnaround  makespan");
    for r in &reports {
        println!(
            "{:<6}  {:>11.2}  {:>14.2}  {:>8}",
            r.policy.name(),
            r.metrics.avg_waiting(),
            r.metrics.avg_turnaround(),
            r.metrics.makespan()
        );
        if let Some(file) = sink.as_mut() {
            r.log.write_rows(file)?;
        }
    }

    if let Some(best) = reports
        .iter()
        .min_by(|a, b| a.metrics.avg_waiting().total_cmp(&b.metrics.avg_waiting()))
    {
        println!("best by avg waiting: {}", best.policy);
    }
    println!();
    Ok(())
}

fn print_workload(workload: &Workload) {
    println!("pid  arrival  burst  priority");
    for p in workload.iter() {
        println!(
            "{:>3}  {:>7}  {:>5}  {:>8}",
            p.pid, p.arrival_time, p.burst_time, p.priority
        );
    }
    println!();
}

fn print_metrics(policy: Policy, metrics: &MetricsTable) {
    println!("results for {policy}:");
    println!("pid  arrival  burst  start  finish  waiting  turnaround");
    for r in metrics.iter() {
        println!(
            "{:>3}  {:>7}  {:>5}  {:>5}  {:>6}  {:>7}  {:>10}",
            r.pid, r.arrival, r.burst, r.start, r.finish, r.waiting, r.turnaround
        );
    }
    println!("average waiting time: {:.2} ticks", metrics.avg_waiting());
    println!("average turnaround time: {:.2} ticks", metrics.avg_turnaround());
    println!();
}
