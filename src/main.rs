//! Force Alignment - Command Line Entry Point
//!
//! Drives the alignment engine from a terminal: progress a stored value,
//! check tier effects, and compute casting numbers. Output is plain text or
//! JSON for scripting.

use clap::{Parser, Subcommand, ValueEnum};
use force_alignment::alignment::{
    check_changed_tier_effect, AlignmentRequest, PowerAlignmentRequest, PowerType, Tier,
};
use force_alignment::caster::{check_power_modifier, Ability, CasterStats, PowerKind};
use force_alignment::core::error::Result;
use force_alignment::core::types::NumericInput;
use force_alignment::core::RulesetConfig;
use force_alignment::rules::{
    default_ruleset_path, load_ruleset, load_ruleset_or_default, AlignmentShift,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Force Alignment - light/dark alignment progression
#[derive(Parser, Debug)]
#[command(name = "force-alignment")]
#[command(about = "Progress character alignment and resolve tier effects")]
struct Args {
    /// Ruleset TOML file (defaults to data/ruleset.toml, or built-in rules if absent)
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Move alignment by a number of points
    Shift {
        /// Current alignment value
        #[arg(long, allow_hyphen_values = true)]
        value: String,
        /// Signed number of points
        #[arg(long, allow_hyphen_values = true)]
        by: String,
    },
    /// Move alignment by using a power
    Power {
        /// Current alignment value
        #[arg(long, allow_hyphen_values = true)]
        value: String,
        /// Power type: lig, dar or uni
        #[arg(long)]
        power: Option<PowerType>,
    },
    /// Check whether a tier change surfaces an effect
    Effect {
        #[arg(long, allow_hyphen_values = true)]
        from: i64,
        #[arg(long, allow_hyphen_values = true)]
        to: i64,
    },
    /// List all tiers and their configured effects
    Tiers,
    /// Casting DC and attack bonus
    Casting {
        #[arg(long, allow_hyphen_values = true)]
        proficiency: i32,
        #[arg(long, allow_hyphen_values = true)]
        modifier: i32,
    },
    /// Check the ability a power is cast with
    CheckModifier {
        /// forcepower or techpower
        #[arg(long)]
        kind: PowerKind,
        /// Power alignment (defaults to uni)
        #[arg(long)]
        alignment: Option<PowerType>,
        /// Ability currently used, e.g. wis
        #[arg(long)]
        ability: Ability,
    },
}

#[derive(Serialize)]
struct TierRow {
    tier: Tier,
    label: String,
    effect: Option<serde_json::Map<String, serde_json::Value>>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("force_alignment=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let ruleset = match &args.rules {
        Some(path) => load_ruleset(path)?,
        None => load_ruleset_or_default(&default_ruleset_path())?,
    };

    match args.command {
        Command::Shift { value, by } => {
            let request = AlignmentRequest::new(value, by);
            let shift = ruleset.shift_by_points(&request)?;
            if args.format == Format::Json {
                print_json(&shift)?;
            } else {
                print_shift(&shift);
            }
        }
        Command::Power { value, power } => {
            let request = PowerAlignmentRequest {
                original_value: NumericInput::Text(value),
                power_type: power,
            };
            let shift = ruleset.shift_by_power(&request)?;
            if args.format == Format::Json {
                print_json(&shift)?;
            } else {
                println!("Power: {}", power.unwrap_or_default().name());
                print_shift(&shift);
            }
        }
        Command::Effect { from, to } => {
            let effect = if ruleset.ignore_alignment_effects {
                None
            } else {
                check_changed_tier_effect(Some(from), Some(to), &ruleset.tier_effects)
            };
            if args.format == Format::Json {
                print_json(&effect)?;
            } else {
                match effect {
                    Some(effect) => println!(
                        "Entering {}: {}",
                        effect.tier.label(),
                        serde_json::Value::Object(effect.properties)
                    ),
                    None => println!("No tier effect"),
                }
            }
        }
        Command::Tiers => {
            let rows = tier_rows(&ruleset);
            if args.format == Format::Json {
                print_json(&rows)?;
            } else {
                for row in rows {
                    match row.effect {
                        Some(effect) => println!(
                            "{:>4}  {:<10} {}",
                            row.tier.get(),
                            row.label,
                            serde_json::Value::Object(effect)
                        ),
                        None => println!("{:>4}  {}", row.tier.get(), row.label),
                    }
                }
            }
        }
        Command::Casting {
            proficiency,
            modifier,
        } => {
            let summary = CasterStats::new(proficiency, modifier).summary();
            if args.format == Format::Json {
                print_json(&summary)?;
            } else {
                println!("Save DC: {}", summary.dc);
                println!("Attack bonus: {:+}", summary.attack_bonus);
            }
        }
        Command::CheckModifier {
            kind,
            alignment,
            ability,
        } => {
            let check = check_power_modifier(kind, alignment, ability);
            if args.format == Format::Json {
                print_json(&check)?;
            } else if check.is_wrong {
                println!("Wrong modifier: {}", check.message());
            } else {
                println!("{} is a valid casting ability", check.current);
            }
        }
    }

    Ok(())
}

fn tier_rows(ruleset: &RulesetConfig) -> Vec<TierRow> {
    Tier::all()
        .map(|tier| TierRow {
            tier,
            label: tier.label(),
            effect: ruleset.tier_effects.get(tier).cloned(),
        })
        .collect()
}

fn print_shift(shift: &AlignmentShift) {
    println!(
        "Alignment: {} ({}) -> {} ({})",
        shift.before.value,
        shift.before.tier.label(),
        shift.after.value,
        shift.after.tier.label()
    );
    if let Some(step) = &shift.step {
        println!("  rule: {:?} (applied {:+})", step.rule, step.applied);
    }
    if let Some(effect) = &shift.effect {
        println!(
            "Tier effect: {}",
            serde_json::Value::Object(effect.properties.clone())
        );
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
