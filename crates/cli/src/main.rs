use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use zenjourney_agents::{PlannerSettings, TripPlanner};
use zenjourney_core::advisors::budget;
use zenjourney_core::{parse_preferences, PreferencesField, TripPlanInput};
use zenjourney_observability::{init_tracing, AppMetrics};

#[derive(Debug, Parser)]
#[command(name = "zenjourney")]
#[command(about = "ZenJourney trip planner CLI")]
struct Cli {
    /// Per-advisor time limit before its section is reported as unavailable.
    #[arg(
        long,
        global = true,
        env = "ZENJOURNEY_ADVISOR_TIMEOUT_MS",
        default_value_t = 2000
    )]
    advisor_timeout_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compose a full travel plan.
    Plan {
        #[arg(long)]
        destination: String,
        #[arg(long, help = "YYYY-MM-DD")]
        start: String,
        #[arg(long, help = "YYYY-MM-DD")]
        end: String,
        #[arg(long)]
        budget: f64,
        #[arg(long, default_value = "")]
        preferences: String,
        /// Print the structured plan instead of the text report.
        #[arg(long)]
        json: bool,
    },
    /// Show how a budget would be split for a destination.
    Budget {
        #[arg(long)]
        destination: String,
        #[arg(long)]
        budget: f64,
        #[arg(long)]
        days: u32,
    },
    /// Show which preference flags a piece of text sets.
    Preferences { text: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("zenjourney-cli");
    let cli = Cli::parse();

    match cli.command {
        Command::Plan {
            destination,
            start,
            end,
            budget,
            preferences,
            json,
        } => {
            let settings = PlannerSettings {
                advisor_timeout: Duration::from_millis(cli.advisor_timeout_ms.max(1)),
            };
            let planner = TripPlanner::local(settings, AppMetrics::shared());
            let plan = planner
                .plan_trip(TripPlanInput {
                    destination,
                    start_date: start,
                    end_date: end,
                    budget,
                    preferences: PreferencesField::Text(preferences),
                })
                .await
                .context("could not plan the trip")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!("{}", plan.report);
                if !plan.unavailable.is_empty() {
                    let missing = plan
                        .unavailable
                        .iter()
                        .map(|kind| kind.as_str())
                        .collect::<Vec<_>>();
                    eprintln!("unavailable advisors: {}", missing.join(", "));
                }
            }
        }
        Command::Budget {
            destination,
            budget: total,
            days,
        } => {
            let allocation = budget::allocate(&destination, total, days)
                .context("could not split the budget")?;
            println!("{}", allocation.breakdown);
        }
        Command::Preferences { text } => {
            let flags = parse_preferences(&text);
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "flags": flags,
                    "active": flags.active(),
                    "dietary_restrictions": flags.restrictions(),
                }))?
            );
        }
    }

    Ok(())
}
