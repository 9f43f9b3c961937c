//! `digitfy` policy inspector.
//!
//! Answers the same questions the dashboard asks the resolver, from the
//! command line:
//!
//! ```text
//! digitfy matrix
//! digitfy features --plan member
//! digitfy check --plan gratuito --feature viewServiceRequests
//! digitfy limits --plan pro
//! digitfy message --plan member --feature promoteServices
//! ```

use std::borrow::Cow;

use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use serde_json::json;

use digitfy::access::{FeatureGate, GateDecision};
use digitfy::configuration::{get_configuration, OutputFormat};
use digitfy::models::{CurrentUser, Feature, Plan, Role};
use digitfy::services::permission;
use digitfy::services::{LimitKind, Quota};
use digitfy::telemetry::{get_subscriber, init_subscriber};

#[derive(Parser, Debug)]
#[command(
    name = "digitfy",
    version,
    about = "Inspect DigitFy plan entitlements and quotas"
)]
struct Cli {
    /// Print JSON regardless of the configured output format
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the whole policy: features and quotas per plan
    Matrix,
    /// List the features a plan unlocks
    Features {
        #[arg(long, value_name = "PLAN")]
        plan: Plan,
    },
    /// Decide whether a plan (or an admin) may use a feature
    Check {
        #[arg(long, value_name = "PLAN")]
        plan: Plan,
        #[arg(long, value_name = "FEATURE")]
        feature: Feature,
        /// Evaluate as an admin, bypassing the plan matrix
        #[arg(long)]
        admin: bool,
    },
    /// Show the download and Trend Rush quotas of a plan
    Limits {
        #[arg(long, value_name = "PLAN")]
        plan: Plan,
    },
    /// Show the upgrade prompt for a feature
    Message {
        #[arg(long, value_name = "PLAN")]
        plan: Plan,
        #[arg(long, value_name = "FEATURE")]
        feature: Feature,
        #[arg(long)]
        admin: bool,
    },
}

fn role(admin: bool) -> Role {
    if admin {
        Role::Admin
    } else {
        Role::User
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = get_configuration()?;

    let subscriber = get_subscriber("digitfy".into(), settings.log_level.clone(), std::io::stderr);
    init_subscriber(subscriber);

    let output = if cli.json {
        OutputFormat::Json
    } else {
        settings.output
    };
    tracing::debug!(?output, command = ?cli.command, "Running command");

    match cli.command {
        Commands::Matrix => {
            let snapshot = permission::policy_snapshot();
            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
                OutputFormat::Text => {
                    for entry in &snapshot.plans {
                        println!(
                            "{} (downloads: {}, trend rush: {})",
                            entry.display_name, entry.download_limit, entry.trend_rush_limit
                        );
                        for feature in &entry.features {
                            println!("  {}", feature);
                        }
                    }
                }
            }
        }
        Commands::Features { plan } => {
            let features = permission::available_features(plan);
            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string(&features)?),
                OutputFormat::Text => {
                    for feature in &features {
                        println!("{}", feature);
                    }
                }
            }
        }
        Commands::Check {
            plan,
            feature,
            admin,
        } => {
            let user = CurrentUser::new(plan, role(admin));
            let decision = FeatureGate::new(feature).evaluate(&user);
            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string(&decision)?),
                OutputFormat::Text => match decision {
                    GateDecision::Render => println!("allowed"),
                    GateDecision::Fallback { message } => println!("denied: {}", message),
                },
            }
        }
        Commands::Limits { plan } => match output {
            OutputFormat::Json => {
                let limits: IndexMap<LimitKind, Quota> = LimitKind::ALL
                    .into_iter()
                    .map(|kind| (kind, permission::limit(kind, plan)))
                    .collect();
                let messages: IndexMap<LimitKind, Cow<'static, str>> = LimitKind::ALL
                    .into_iter()
                    .map(|kind| (kind, permission::limit_upgrade_message(plan, kind)))
                    .collect();
                println!(
                    "{}",
                    json!({ "plan": plan, "limits": limits, "messages": messages })
                );
            }
            OutputFormat::Text => {
                for kind in LimitKind::ALL {
                    println!("{}: {}", kind.unit(), permission::limit(kind, plan));
                    println!("  {}", permission::limit_upgrade_message(plan, kind));
                }
            }
        },
        Commands::Message {
            plan,
            feature,
            admin,
        } => {
            let user = CurrentUser::new(plan, role(admin));
            let message = permission::upgrade_message_as(&user, feature);
            match output {
                OutputFormat::Json => println!("{}", json!({ "message": message })),
                OutputFormat::Text => println!("{}", message),
            }
        }
    }

    Ok(())
}
