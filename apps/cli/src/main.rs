use std::io::{self, Write};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use job_core::{data_source_for, load_settings, LoadPhase, ViewController, ViewEvent};
use shared::domain::{JobId, SortCriteria, ALL};
use tracing_subscriber::EnvFilter;

mod text;

use text::TextSurface;

#[derive(Parser, Debug)]
#[command(name = "job-board", about = "Browse, filter and sort job postings")]
struct Cli {
    /// Path or http(s) URL of the job payload; overrides job_board.toml.
    #[arg(long)]
    data_source: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the filtered and sorted job list.
    List {
        #[arg(long, default_value = ALL)]
        level: String,
        #[arg(long = "type", default_value = ALL)]
        job_type: String,
        #[arg(long, default_value = ALL)]
        skill: String,
        #[arg(long, default_value = "none")]
        sort: SortCriteria,
        /// Emit the records as JSON instead of text rows.
        #[arg(long)]
        json: bool,
    },
    /// Print every field of one job.
    Show { job_no: String },
    /// Print the values each filter and the sort control accept.
    Options,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings();
    if let Some(data_source) = cli.data_source {
        settings.data_source = data_source;
    }

    let source = data_source_for(&settings.data_source);
    tracing::info!(source = %source.describe(), "loading jobs");

    let mut controller = ViewController::new(TextSurface::default());
    controller.handle(ViewEvent::Loaded(source.fetch().await));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let LoadPhase::Failed(err) = controller.phase() {
        controller.surface().write_panel(&mut out)?;
        bail!("{err}");
    }

    match cli.command {
        Command::List {
            level,
            job_type,
            skill,
            sort,
            json,
        } => {
            controller.handle(ViewEvent::ApplyFilters {
                level,
                job_type,
                skill,
            });
            controller.handle(ViewEvent::Sort(sort));
            if json {
                serde_json::to_writer_pretty(&mut out, &controller.view_sequence())?;
                writeln!(out)?;
            } else {
                controller.surface().write_panel(&mut out)?;
            }
        }
        Command::Show { job_no } => {
            let job_no = JobId::new(job_no);
            if controller.on_select(&job_no).is_err() {
                bail!("no job with Job No {job_no}");
            }
            controller.surface().write_panel(&mut out)?;
        }
        Command::Options => controller.surface().write_options(&mut out)?,
    }

    Ok(())
}
