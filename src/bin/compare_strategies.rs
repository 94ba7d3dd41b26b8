//! Runs the default experiment once per increment strategy and shows how many
//! updates each one lost.
//!
//! Run with: cargo run --release --bin compare_strategies [-- --json]

use colored::Colorize;
use race_counter::{Coordinator, ExperimentConfig, Report, Strategy};
use std::env;
use std::error::Error;

fn format_table(reports: &[Report]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<16} {:>12} {:>12} {:>12} {:>8}\n",
        "strategy", "final", "expected", "lost", "lost %"
    ));
    output.push_str(&format!("{}\n", "-".repeat(64)));

    for report in reports {
        let lost = format!("{:>12}", report.lost_updates());
        let lost = if report.is_exact() {
            lost.green()
        } else {
            lost.red().bold()
        };
        output.push_str(&format!(
            "{:<16} {:>12} {:>12} {} {:>7.2}%\n",
            report.strategy.to_string(),
            report.final_value,
            report.expected,
            lost,
            report.loss_ratio() * 100.0
        ));
    }

    output
}

fn main() -> Result<(), Box<dyn Error>> {
    let json = env::args().skip(1).any(|arg| arg == "--json");

    let mut reports = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let config = ExperimentConfig::default().with_strategy(strategy);
        reports.push(Coordinator::new(config).run()?);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let config = ExperimentConfig::default();
    println!(
        "{} workers x {} increments on {} CPUs\n",
        config.workers,
        config.increments,
        num_cpus::get()
    );
    print!("{}", format_table(&reports));

    Ok(())
}
