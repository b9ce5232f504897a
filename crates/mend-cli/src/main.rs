use std::io::Write;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use mend_cli::cli::{Cli, Command, ConfigAction};
use mend_cli::commands;
use mend_cli::config;
use mend_cli::state::AppState;
use mend_core::models::record::NewSubmission;
use mend_core::models::report::DailyReport;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let mut config = config::load_or_default(&config_path)?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let now = jiff::Zoned::now().datetime();

    match cli.command {
        Command::Score { report, json } => {
            commands::score(&DailyReport::from(report), &config, json, &mut out)?;
        }
        Command::Submit {
            name,
            report,
            notes,
        } => {
            let submission = NewSubmission {
                name,
                report: report.into(),
                notes,
            };
            commands::submit(&AppState::open(config), submission, now, &mut out)?;
        }
        Command::Prescription { name } => {
            commands::prescription(&AppState::open(config), &name, &mut out)?;
        }
        Command::Review { html } => {
            commands::review(&AppState::open(config), html.as_deref(), &mut out)?;
        }
        Command::Annotate { id, notes } => {
            commands::annotate(&AppState::open(config), &id, &notes, &mut out)?;
        }
        Command::Import { path } => {
            commands::import(&AppState::open(config), &path, now, &mut out)?;
        }
        Command::Delete { id } => commands::delete(&AppState::open(config), &id, &mut out)?,
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config_show(&config_path, &config, &mut out)?,
            ConfigAction::Init { force } => {
                commands::config_init(&config_path, &config, force, &mut out)?
            }
        },
    }

    out.flush()?;
    Ok(())
}

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
