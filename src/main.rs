//! Nutrition Tracker CLI
//!
//! Command-line front end over a file-backed store:
//! - Add and edit food entries
//! - List entries
//! - Draw calorie and protein charts
//! - Clear the list

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nutrition_tracker::config::{generate_default_config, Config, LoggingConfig};
use nutrition_tracker::render::{render_chart, render_table};
use nutrition_tracker::store::{FileStore, FoodRepository};
use nutrition_tracker::tracker::{Action, Effect, Field, Nutrient, Session};

#[derive(Parser)]
#[command(name = "nutrition")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Track daily calories and protein against your targets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the stored food list
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Daily calorie requirement
    #[arg(long, global = true)]
    pub calorie_req: Option<String>,

    /// Daily protein requirement
    #[arg(long, global = true)]
    pub protein_req: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a food entry
    Add {
        /// Food name
        #[arg(long, default_value = "")]
        name: String,
        /// Amount eaten (grams)
        #[arg(long, default_value = "")]
        amount: String,
        /// Calories per gram
        #[arg(long, default_value = "")]
        calories_per_gm: String,
        /// Proteins per gram
        #[arg(long, default_value = "")]
        proteins_per_gm: String,
    },

    /// Rewrite an entry; fields not given keep their current value
    Edit {
        /// Row number as shown by `list`
        row: usize,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long)]
        calories_per_gm: Option<String>,
        #[arg(long)]
        proteins_per_gm: Option<String>,
    },

    /// List all entries
    List,

    /// Draw intake charts
    Chart {
        /// Only this nutrient (calories, proteins)
        #[arg(short, long)]
        nutrient: Option<Nutrient>,
        /// Bar width in characters (10 to 400)
        #[arg(
            short,
            long,
            default_value = "50",
            value_parser = clap::value_parser!(u16).range(10..=400)
        )]
        width: u16,
    },

    /// Remove every entry
    Clear,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| format!("nutrition_tracker={}", config.level)),
    );

    // Logs go to stderr; stdout carries tables and charts
    if config.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let Cli {
        command,
        config: config_path,
        data_dir,
        calorie_req,
        protein_req,
    } = Cli::parse();

    let mut config = match &config_path {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(dir) = data_dir {
        config.storage.data_dir = dir.to_string_lossy().to_string();
    }

    init_logging(&config.logging);

    let data_dir = config.data_dir();
    tracing::debug!("Data directory: {:?}", data_dir);
    let repo = FoodRepository::with_key(FileStore::new(&data_dir), config.storage.key.clone());

    match command {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing config to {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
            Ok(())
        }
        command => {
            let mut session = Session::with_repository(repo, config.requirements());

            // Requirement flags go through the same field path as the form inputs
            if let Some(req) = calorie_req {
                session.change_field(Field::CalorieReq.as_str(), req)?;
            }
            if let Some(req) = protein_req {
                session.change_field(Field::ProteinReq.as_str(), req)?;
            }

            run(command, &mut session)
        }
    }
}

fn run(command: Commands, session: &mut Session<FileStore>) -> anyhow::Result<()> {
    match command {
        Commands::Add {
            name,
            amount,
            calories_per_gm,
            proteins_per_gm,
        } => {
            let fields = [
                (Field::Name, name),
                (Field::Amount, amount),
                (Field::CaloriesPerGm, calories_per_gm),
                (Field::ProteinsPerGm, proteins_per_gm),
            ];
            for (field, value) in fields {
                session.dispatch(Action::FieldChanged { field, value })?;
            }
            submit(session, "Added")?;
        }

        Commands::Edit {
            row,
            name,
            amount,
            calories_per_gm,
            proteins_per_gm,
        } => {
            session.edit_row(row)?;
            let overrides = [
                (Field::Name, name),
                (Field::Amount, amount),
                (Field::CaloriesPerGm, calories_per_gm),
                (Field::ProteinsPerGm, proteins_per_gm),
            ];
            for (field, value) in overrides {
                if let Some(value) = value {
                    session.dispatch(Action::FieldChanged { field, value })?;
                }
            }
            submit(session, "Updated")?;
        }

        Commands::List => {
            if session.foods().is_empty() {
                println!("No entries");
            } else {
                print!("{}", render_table(session.foods()));
            }
        }

        Commands::Chart { nutrient, width } => {
            let nutrients = match nutrient {
                Some(n) => vec![n],
                None => Nutrient::all().to_vec(),
            };
            for (i, n) in nutrients.into_iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print!("{}", render_chart(&session.chart(n), width as usize));
            }
        }

        Commands::Clear => {
            let count = session.foods().len();
            session.dispatch(Action::ClearAll)?;
            println!("Cleared {} entries", count);
        }

        Commands::Config { .. } => {
            tracing::debug!("Config generation needs no session");
        }
    }

    Ok(())
}

fn submit(session: &mut Session<FileStore>, verb: &str) -> anyhow::Result<()> {
    let cursor = session.state().edit_cursor;
    match session.dispatch(Action::Submit)? {
        Effect::SaveFoods => {
            let index = cursor.unwrap_or(session.foods().len() - 1);
            let entry = &session.foods()[index];
            println!(
                "{} {}: {:.2} kcal, {:.2} g protein",
                verb, entry.name, entry.total_calories, entry.total_proteins
            );
        }
        _ => println!("Entry ignored: name, amount, calories and proteins are all required"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_width_is_bounded() {
        let cli = Cli::try_parse_from(["nutrition", "chart", "--width", "80"]).unwrap();
        assert!(matches!(cli.command, Commands::Chart { width: 80, .. }));

        assert!(Cli::try_parse_from(["nutrition", "chart", "--width", "100000000000"]).is_err());
        assert!(Cli::try_parse_from(["nutrition", "chart", "--width", "401"]).is_err());
    }
}
