use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgGroup, Parser, Subcommand};

mod advice;
mod error;
mod import;
mod ledger;
mod models;
mod predict;
mod report;
mod sgpa;

use advice::SeededTips;
use ledger::Ledger;
use models::Feasibility;

#[derive(Parser)]
#[command(name = "gradepoint-planner")]
#[command(about = "Semester GPA calculator with CGPA tracking and target projection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute one semester's GPA from graded courses
    #[command(group(
        ArgGroup::new("input")
            .args(["course", "csv"])
            .required(true)
            .multiple(false)
    ))]
    Sgpa {
        /// Course as GRADE:CREDIT, e.g. A:3 (repeatable)
        #[arg(long = "course", value_name = "GRADE:CREDIT")]
        course: Vec<String>,
        /// CSV file with grade,credit columns
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Cumulative GPA and running trend over recorded semesters
    Cgpa {
        /// Recorded semester SGPA (repeatable, in order)
        #[arg(long = "sgpa", value_name = "VALUE")]
        sgpa: Vec<f64>,
        /// CSV file with an sgpa column
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Remove the semester at this position before computing (repeatable)
        #[arg(long = "drop", value_name = "SEMESTER")]
        drop: Vec<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Project the average SGPA required to reach a target CGPA
    Predict {
        #[arg(long = "sgpa", value_name = "VALUE")]
        sgpa: Vec<f64>,
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long = "drop", value_name = "SEMESTER")]
        drop: Vec<usize>,
        /// Desired cumulative GPA, 0.0 to 5.0
        #[arg(long)]
        target: f64,
        /// Semesters still to come; defaults to the remaining capacity
        /// once at least one semester is recorded
        #[arg(long)]
        remaining: Option<usize>,
        /// Seed for the supplementary tip selection
        #[arg(long)]
        seed: Option<u64>,
        /// Student name used in the advice text
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Write a markdown performance report
    Report {
        #[arg(long = "sgpa", value_name = "VALUE")]
        sgpa: Vec<f64>,
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long = "drop", value_name = "SEMESTER")]
        drop: Vec<usize>,
        #[arg(long)]
        target: Option<f64>,
        #[arg(long)]
        remaining: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn build_ledger(values: &[f64], csv: Option<&Path>, drop: &[usize]) -> anyhow::Result<Ledger> {
    let mut all = values.to_vec();
    if let Some(path) = csv {
        all.extend(import::read_semesters_csv(path)?);
    }
    let mut ledger = Ledger::from_values(&all)?;
    for &position in drop {
        ledger.remove_at(position)?;
    }
    Ok(ledger)
}

fn resolve_remaining(ledger: &Ledger, remaining: Option<usize>) -> anyhow::Result<usize> {
    match remaining {
        Some(count) => Ok(count),
        None if !ledger.is_empty() => Ok(ledger.remaining_capacity()),
        None => anyhow::bail!("--remaining is required when no semesters are recorded"),
    }
}

fn tip_source(seed: Option<u64>) -> SeededTips {
    match seed {
        Some(seed) => SeededTips::new(seed),
        None => SeededTips::from_entropy(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sgpa { course, csv, json } => {
            let entries = match csv {
                Some(path) => import::read_courses_csv(&path)?,
                None => course
                    .iter()
                    .map(|spec| sgpa::parse_course_spec(spec))
                    .collect::<anyhow::Result<Vec<_>>>()?,
            };
            let value = sgpa::compute_sgpa(&entries)?;

            if json {
                println!("{}", serde_json::json!({ "sgpa": value }));
            } else {
                println!("Semester GPA: {value:.2}");
            }
        }
        Commands::Cgpa {
            sgpa,
            csv,
            drop,
            json,
        } => {
            let ledger = build_ledger(&sgpa, csv.as_deref(), &drop)?;
            let cgpa = ledger.cgpa().context("add at least one semester first")?;
            let trend = ledger.cumulative_trend();

            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "semesters": ledger.records(),
                        "cgpa": cgpa,
                        "trend": trend,
                    })
                );
            } else {
                for record in ledger.records() {
                    println!("Semester {}: {:.2}", record.semester, record.sgpa);
                }
                println!("CGPA: {cgpa:.2}");
                let running: Vec<String> =
                    trend.iter().map(|average| format!("{average:.2}")).collect();
                println!("Running average: {}", running.join(" -> "));
            }
        }
        Commands::Predict {
            sgpa,
            csv,
            drop,
            target,
            remaining,
            seed,
            name,
            json,
        } => {
            let ledger = build_ledger(&sgpa, csv.as_deref(), &drop)?;
            let remaining = resolve_remaining(&ledger, remaining)?;
            let mut tips = tip_source(seed);
            let result = predict::project(target, remaining, &ledger, &mut tips)?;

            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "target": target,
                        "remaining": remaining,
                        "required": result.display_required(),
                        "feasibility": result.feasibility,
                        "tier": result.tier,
                        "advice": result.advice,
                        "tip": result.tip,
                    })
                );
                return Ok(());
            }

            let student = name.as_deref().unwrap_or("you");
            match result.feasibility {
                Feasibility::Achievable => {
                    println!(
                        "{student}, to reach a CGPA of {target:.2} you need to average \
                         {:.2} over the next {remaining} semesters.",
                        result.display_required()
                    );
                }
                Feasibility::AlreadyAchieved => {
                    println!(
                        "{student}, your record already covers a CGPA of {target:.2}."
                    );
                }
                Feasibility::ExceedsMaximum => {
                    println!(
                        "{student}, a CGPA of {target:.2} is out of reach in \
                         {remaining} semesters."
                    );
                }
            }
            println!("{}", result.advice);
            if let Some(tip) = &result.tip {
                println!("Tip: {tip}");
            }
        }
        Commands::Report {
            sgpa,
            csv,
            drop,
            target,
            remaining,
            seed,
            name,
            out,
        } => {
            let ledger = build_ledger(&sgpa, csv.as_deref(), &drop)?;

            let projection = match target {
                Some(target) => {
                    let remaining = resolve_remaining(&ledger, remaining)?;
                    let mut tips = tip_source(seed);
                    let result = predict::project(target, remaining, &ledger, &mut tips)?;
                    Some((target, remaining, result))
                }
                None => None,
            };
            let section = projection
                .as_ref()
                .map(|(target, remaining, result)| report::ProjectionSection {
                    target: *target,
                    remaining: *remaining,
                    result,
                });

            let contents = report::build_report(name.as_deref(), &ledger, section);
            std::fs::write(&out, contents)?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
