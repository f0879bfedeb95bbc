mod display;

use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use servicedesk_core::{ClassifiedRecord, ExtraField, IngestConfig};
use servicedesk_engine::Session;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Classify customer-service records and draft replies.
#[derive(Parser)]
#[command(name = "servicedesk", version, about)]
struct Cli {
    /// JSON ingest config (column names, sentinel status).
    #[arg(long, global = true, env = "SERVICEDESK_CONFIG")]
    config: Option<PathBuf>,

    /// Upstream status meaning "Case Type is already authoritative".
    #[arg(long, global = true, env = "SERVICEDESK_SENTINEL")]
    sentinel: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify every row and print the record table.
    Classify {
        /// Source files (.csv, .parquet, .ndjson), loaded in order.
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Close the record at this index before printing (repeatable).
        #[arg(long)]
        close: Vec<usize>,
        /// Print records as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Print one record as a card.
    Show {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[arg(long)]
        index: usize,
    },
    /// Render the reply for one record.
    Reply {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[arg(long)]
        index: usize,
        /// Incident location.
        #[arg(long)]
        coords: Option<String>,
        /// Customer name.
        #[arg(long)]
        name: Option<String>,
        /// Customer contact number.
        #[arg(long)]
        contact: Option<String>,
        /// Request number for service requests.
        #[arg(long)]
        request_number: Option<String>,
        /// Print only the reply text, for piping into a clipboard tool.
        #[arg(long)]
        raw: bool,
        /// Print the preview as JSON.
        #[arg(long, conflicts_with = "raw")]
        json: bool,
    },
    /// Write classified records to a Parquet file.
    Export {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        close: Vec<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("servicedesk v{}", env!("CARGO_PKG_VERSION"));

    let config = resolve_config(cli.config.as_deref(), cli.sentinel)?;

    match cli.command {
        Command::Classify { files, close, json } => {
            let mut session = load_session(&files, config)?;
            close_all(&mut session, &close)?;
            if json {
                println!("{}", serde_json::to_string_pretty(session.records())?);
            } else {
                print_table(session.records())?;
                println!();
                display::print_summary(&session.summary(), session.sources());
            }
        }
        Command::Show { files, index } => {
            let session = load_session(&files, config)?;
            display::print_record_card(index, session.record(index)?);
        }
        Command::Reply {
            files,
            index,
            coords,
            name,
            contact,
            request_number,
            raw,
            json,
        } => {
            let mut session = load_session(&files, config)?;
            let used = servicedesk_engine::placeholders(&session.record(index)?.category);
            let inputs = [
                (ExtraField::Coords, coords),
                (ExtraField::Name, name),
                (ExtraField::Contact, contact),
                (ExtraField::RequestNumber, request_number),
            ];
            for (field, value) in inputs {
                if let Some(value) = value {
                    if !used.contains(&field.key()) {
                        warn!(field = field.key(), index, "field not used by this record's reply");
                    }
                    session.set_field(index, field, value)?;
                }
            }

            let preview = session.reply_preview(index)?;
            if raw {
                println!("{}", preview.text);
            } else if json {
                let prompts: serde_json::Map<String, serde_json::Value> = preview
                    .prompts
                    .iter()
                    .map(|(f, v)| (f.key().to_string(), v.clone().into()))
                    .collect();
                let out = serde_json::json!({
                    "index": preview.index,
                    "category": preview.category,
                    "status": preview.status,
                    "fields": prompts,
                    "reply": preview.text,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                display::print_reply_preview(&preview);
            }
        }
        Command::Export { files, out, close } => {
            let mut session = load_session(&files, config)?;
            close_all(&mut session, &close)?;
            let batch = servicedesk_store::records_to_batch(session.records())?;
            servicedesk_store::write_parquet(&out, &batch)
                .with_context(|| format!("writing {}", out.display()))?;
            eprintln!("  Exported {} records to {}", batch.num_rows(), out.display());
        }
    }

    Ok(())
}

/// Config file (if any), then the sentinel override.
fn resolve_config(path: Option<&Path>, sentinel: Option<String>) -> anyhow::Result<IngestConfig> {
    let config = match path {
        Some(p) => IngestConfig::from_json_file(p)
            .with_context(|| format!("loading config {}", p.display()))?,
        None => IngestConfig::default(),
    };
    Ok(match sentinel {
        Some(s) => config.with_sentinel(s),
        None => config,
    })
}

/// Load each file in order into a fresh session.
fn load_session(files: &[PathBuf], config: IngestConfig) -> anyhow::Result<Session> {
    let mut session = Session::new(config);
    for path in files {
        load_into(&mut session, path)?;
    }
    Ok(session)
}

/// Parse a whole file, then ingest it. A file that fails to parse leaves the
/// session as it was.
fn load_into(session: &mut Session, path: &Path) -> anyhow::Result<Range<usize>> {
    let rows = servicedesk_store::load_rows(path, session.config())
        .with_context(|| format!("reading {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(session.ingest_batch(name, &rows))
}

fn close_all(session: &mut Session, indices: &[usize]) -> anyhow::Result<()> {
    for &index in indices {
        session.close(index)?;
    }
    Ok(())
}

fn print_table(records: &[ClassifiedRecord]) -> anyhow::Result<()> {
    let shortened: Vec<ClassifiedRecord> = records
        .iter()
        .map(|r| ClassifiedRecord {
            source_text: display::truncate_text(&r.source_text),
            ..r.clone()
        })
        .collect();
    let batch = servicedesk_store::records_to_batch(&shortened)?;
    println!("{}", arrow::util::pretty::pretty_format_batches(&[batch])?);
    Ok(())
}
