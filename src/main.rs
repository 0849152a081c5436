//! E-Book preview CLI
//!
//! Prints the dashboard, confirmation and profile views without a browser:
//! - Render the dashboard for a business type and filters
//! - Render the confirmation page for an identifier
//! - Show or save the demo profile
//! - Generate a default config file

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ebook::config::{generate_default_config, Config};
use ebook::confirm::{self, ConfirmationView};
use ebook::dashboard::{BusinessType, DashboardController, DashboardView, Filters, ListView};
use ebook::fixtures::DemoStore;
use ebook::profile::{FileStorage, ProfileForm, ProfileStore, SaveFeedback};

#[derive(Parser)]
#[command(name = "ebook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Preview the booking demo views from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the bookings dashboard
    Dashboard {
        /// Business type (barber, restaurant)
        #[arg(short, long, default_value = "barber")]
        business: BusinessType,
        /// Free-text search
        #[arg(short, long, default_value = "")]
        query: String,
        /// Staff name or zone
        #[arg(short, long, default_value = "")]
        staff: String,
        /// Day to show (YYYY-MM-DD, informational)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Render the confirmation page
    Confirm {
        /// Booking or reservation identifier
        #[arg(long, conflicts_with = "query")]
        id: Option<i64>,
        /// Raw query string, e.g. "id=11"
        #[arg(long)]
        query: Option<String>,
    },

    /// Show or save the demo profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print the saved profile
    Show,
    /// Save the profile form, replacing the stored record
    Save {
        /// Field values in name=value format
        fields: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config)?;

    let store = DemoStore::builtin();

    match cli.command {
        Commands::Dashboard {
            business,
            query,
            staff,
            date,
        } => {
            let mut controller = DashboardController::new(store, config.display.clone());
            controller.select(business);

            let mut filters = Filters::new().query(query).secondary(staff);
            filters.date = date;

            let view = controller.render(&filters);
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
                OutputFormat::Text => print_dashboard(&view, date),
            }
        }

        Commands::Confirm { id, query } => {
            let view = match (id, query) {
                (Some(id), _) => confirm::render(&store, &config.display, id),
                (None, Some(query)) => confirm::render_query(&store, &config.display, &query),
                (None, None) => confirm::render_query(&store, &config.display, ""),
            };
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
                OutputFormat::Text => print_confirmation(&view),
            }
        }

        Commands::Profile { action } => {
            let storage = FileStorage::new(config.data_dir());
            let profile = ProfileStore::with_key(storage, config.storage.profile_key.clone());
            let mut form = ProfileForm::standard();
            profile.load_into(&mut form);

            match action {
                ProfileAction::Show => print_form(&form, cli.format)?,
                ProfileAction::Save { fields } => {
                    for pair in &fields {
                        let (name, value) = pair
                            .split_once('=')
                            .with_context(|| format!("Invalid field {:?}, expected name=value", pair))?;
                        if !form.set(name.trim(), value) {
                            tracing::warn!("Profile form has no field named {:?}", name);
                        }
                    }

                    let result = profile.save(&form);
                    let feedback = SaveFeedback::for_result(&result, false);
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", serde_json::to_string_pretty(&feedback)?)
                        }
                        OutputFormat::Text => println!("{}", feedback.message()),
                    }
                    result?;
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("ebook={}", config.logging.level)));

    let log_file = config.log_file();
    let writer = match &log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory {:?}", parent))?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {:?}", path))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(log_file.is_none())
                    .with_writer(writer),
            )
            .init();
    }

    Ok(())
}

fn print_dashboard(view: &DashboardView, date: Option<NaiveDate>) {
    let tabs: Vec<String> = view
        .tabs
        .iter()
        .map(|t| {
            if t.active {
                format!("[{}]", t.label)
            } else {
                t.label.to_string()
            }
        })
        .collect();

    println!("{}", tabs.join("  "));
    println!();
    println!("{}", view.title);
    if let Some(date) = date {
        println!("Date: {}", date);
    }
    println!(
        "Bookings today: {}    {}: {}",
        view.summary.count,
        view.summary.label,
        view.summary.metric.replace('\u{a0}', " ")
    );

    let options: Vec<&str> = view.options.iter().map(|o| o.label.as_str()).collect();
    println!("Filter options: {}", options.join(", "));
    println!("{}", "-".repeat(60));

    match &view.list {
        ListView::Empty { message } => println!("{}", message),
        ListView::Cards { cards } => {
            for card in cards {
                println!("{:<40} {:>12}", card.primary, card.badge.label);
                println!("  {}", card.secondary);
                println!(
                    "  {:<30} {:>14}   {}",
                    card.meta,
                    card.price.replace('\u{a0}', " "),
                    card.href
                );
            }
        }
    }
}

fn print_confirmation(view: &ConfirmationView) {
    println!("{}", view.title);
    println!("{}", view.subtitle);
    println!();

    for row in &view.details {
        println!("{}: {}", row.label, row.value.replace('\u{a0}', " "));
    }
    if let Some(note) = view.note {
        println!("{}", note);
    }
}

fn print_form(form: &ProfileForm, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&form.collect())?),
        OutputFormat::Text => {
            let width = form.fields().iter().map(|f| f.label.len()).max().unwrap_or(0);
            for field in form.fields() {
                let value = if field.value.is_empty() {
                    "—"
                } else {
                    field.value.as_str()
                };
                println!("{:<width$}  {}", field.label, value, width = width);
            }
        }
    }
    Ok(())
}
