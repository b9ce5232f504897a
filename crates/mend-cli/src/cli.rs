use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use mend_core::models::report::DailyReport;

#[derive(Debug, Parser)]
#[command(name = "mend", version, about = "Recovery tracking with read-time risk scoring")]
pub struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(long, global = true, env = "MEND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Record store directory, overriding the config file.
    #[arg(long, global = true, env = "MEND_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score an ad-hoc report without storing it.
    Score {
        #[command(flatten)]
        report: ReportArgs,
        /// Print the assessment as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Store today's report for a patient.
    Submit {
        #[arg(long)]
        name: String,
        #[command(flatten)]
        report: ReportArgs,
        /// Notes for the reviewing doctor.
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show the latest prescription written for a patient.
    Prescription {
        #[arg(long)]
        name: String,
    },
    /// Score every stored record and list them by descending risk.
    Review {
        /// Write an HTML dashboard here instead of printing a table.
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Write or replace the doctor notes on a record.
    Annotate {
        #[arg(long)]
        id: String,
        #[arg(long)]
        notes: String,
    },
    /// Load patient rows from a CSV file.
    Import { path: PathBuf },
    /// Remove a record.
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Inspect or create the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    Show,
    Init {
        /// Overwrite an existing config file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub steps: i64,
    #[arg(long, allow_negative_numbers = true)]
    pub pain: f64,
    /// Medicine was taken today.
    #[arg(long)]
    pub medicine: bool,
    #[arg(long)]
    pub sleep: Option<f64>,
    #[arg(long)]
    pub mood: Option<String>,
}

impl From<ReportArgs> for DailyReport {
    fn from(args: ReportArgs) -> Self {
        DailyReport {
            steps: args.steps,
            pain_level: args.pain,
            medicine_taken: args.medicine,
            sleep_hours: args.sleep,
            mood: args.mood,
        }
    }
}
