//! Office Estimator CLI
//!
//! Loads a project configuration JSON and prints the estimates the engine
//! computes for it: whole-building, room-by-room, medical gas, the
//! review-stage figure, and the cost breakdown.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use office_estimator_core_rs::models::ProjectConfiguration;
use office_estimator_core_rs::{
    build_cost_breakdown, estimate_program_area, estimate_review_cost, estimate_room_costs,
    estimate_whole_building_cost, get_rate_schema, medical_gas_lines, review_summary, validate,
};

#[derive(Parser)]
#[command(name = "office-estimator")]
#[command(about = "Construction cost estimator for oral-surgery office build-outs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a fully populated sample configuration JSON
    Sample,

    /// Compute every estimate for a configuration
    Estimate {
        /// Path to the configuration JSON
        #[arg(short, long)]
        config: PathBuf,

        /// Also print itemized room and gas lines
        #[arg(short, long)]
        verbose: bool,
    },

    /// Itemized room-by-room costs
    Rooms {
        /// Path to the configuration JSON
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Itemized medical gas costs
    Gas {
        /// Path to the configuration JSON
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Check a configuration against the input policy
    Validate {
        /// Path to the configuration JSON
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Print the rate schema documentation as JSON
    RateSchema,
}

fn load_config(path: &Path) -> Result<ProjectConfiguration> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Format a dollar amount with thousands separators
fn format_dollars(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn print_estimate(config: &ProjectConfiguration, verbose: bool) {
    if let Some(basics) = &config.basics {
        if !basics.project_name.is_empty() {
            println!("Project: {}", basics.project_name);
        }
        println!(
            "Scope:   {} sq ft, {}, {}",
            basics.total_square_footage,
            basics.location.state,
            basics.project_type.display_name(),
        );
        println!();
    }

    let whole_building = estimate_whole_building_cost(config);
    println!("Whole-building estimate: {}", format_dollars(whole_building));

    let rooms = estimate_room_costs(config);
    println!("Room-by-room estimate:   {}", format_dollars(rooms.total));
    if verbose {
        for line in &rooms.lines {
            println!(
                "  {:28} {:>2} x {:>4} sqft  {}",
                line.category.display_name(),
                line.count,
                line.sqft,
                format_dollars(line.cost)
            );
        }
    }

    if let Some(gas_config) = &config.medical_gas {
        let gas = medical_gas_lines(gas_config);
        println!("Medical gas estimate:    {}", format_dollars(gas.total));
        if verbose {
            for system in &gas.systems {
                println!(
                    "  {:28} {:>2} outlets       {}",
                    system.gas.display_name(),
                    system.outlet_total,
                    format_dollars(system.total())
                );
            }
            println!(
                "  {:28}                  {}",
                "Installation/piping",
                format_dollars(gas.installation_cost)
            );
        }
    }

    if let Some(program) = &config.space_program {
        println!(
            "Space program area:      {} sq ft gross",
            estimate_program_area(program)
        );
    }

    let review = estimate_review_cost(config);
    println!("Review-stage estimate:   {}", format_dollars(review));

    let summary = review_summary(review);
    println!();
    println!("Review summary:");
    println!("  Construction  {}", format_dollars(summary.construction));
    println!("  MEP Systems   {}", format_dollars(summary.mep_systems));
    println!("  Equipment     {}", format_dollars(summary.equipment));
    println!("  Finishes      {}", format_dollars(summary.finishes));

    let breakdown = build_cost_breakdown(review);
    println!();
    println!("Cost breakdown of {}:", format_dollars(breakdown.total));
    for (label, value) in breakdown.categories() {
        println!("  {label:28} {}", format_dollars(value));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sample => {
            let config = ProjectConfiguration::sample();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }

        Commands::Estimate { config, verbose } => {
            let config = load_config(&config)?;
            print_estimate(&config, verbose);
        }

        Commands::Rooms { config } => {
            let config = load_config(&config)?;
            let estimate = estimate_room_costs(&config);
            if estimate.lines.is_empty() {
                println!("No rooms configured.");
            } else {
                for line in &estimate.lines {
                    println!(
                        "{:28} {:>2} x {:>4} sqft ({:>5} total)  {}",
                        line.category.display_name(),
                        line.count,
                        line.sqft,
                        line.total_sqft,
                        format_dollars(line.cost)
                    );
                }
                println!("{:54} {}", "Total", format_dollars(estimate.total));
            }
        }

        Commands::Gas { config } => {
            let config = load_config(&config)?;
            match &config.medical_gas {
                None => println!("No medical gas section configured."),
                Some(gas_config) => {
                    let gas = medical_gas_lines(gas_config);
                    for system in &gas.systems {
                        println!(
                            "{:14} {:>2} outlets  hardware {}  options {}",
                            system.gas.display_name(),
                            system.outlet_total,
                            format_dollars(system.outlet_cost),
                            format_dollars(system.options_cost)
                        );
                    }
                    println!("Installation/piping: {}", format_dollars(gas.installation_cost));
                    println!("Total: {}", format_dollars(gas.total));
                }
            }
        }

        Commands::Validate { config } => {
            let config = load_config(&config)?;
            match validate(&config) {
                Ok(()) => println!("Configuration is valid."),
                Err(errors) => {
                    println!("{} violation(s):", errors.len());
                    for error in errors {
                        println!("  - {error}");
                    }
                    std::process::exit(1);
                }
            }
        }

        Commands::RateSchema => {
            println!("{}", get_rate_schema());
        }
    }

    Ok(())
}
