mod config;
mod list;
mod options;
mod show;

use clap::{Parser, Subcommand};
use config::Config;
use dotenv::dotenv;
use job_catalog::{CatalogStore, FileSource, Filter, Query, SortKey};
use show::Format;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Job document to load, a JSON array of job postings
    #[clap(long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the jobs passing every filter
    List {
        #[clap(long, default_value = "All")]
        level: String,
        #[clap(long = "type", default_value = "All")]
        job_type: String,
        #[clap(long, default_value = "All")]
        skill: String,
        /// "Title A-Z", "Title Z-A", "Posted Time — Newest First", "Posted Time — Oldest First"
        /// or one of title-asc, title-desc, newest, oldest
        #[clap(long)]
        sort: Option<String>,
        /// Print the jobs as a JSON array instead of one line each
        #[clap(long)]
        json: bool,
    },
    /// Show the values every filter accepts
    Options {
        #[clap(long)]
        json: bool,
    },
    /// Show every field of one job
    Show {
        job_no: String,
        #[clap(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] job_catalog::Error),
    #[error("No job document given, pass --file or set JOB_CATALOG_FILE")]
    MissingFile,
    #[error("No job with Job No '{0}'")]
    UnknownJob(String),
    #[error("Failed to write JSON: '{0}'")]
    Json(#[from] serde_json::Error),
    #[error("Output error: '{0}'")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

async fn run(args: Cli, config: Config) -> Result<()> {
    let path = args.file.or(config.file).ok_or(Error::MissingFile)?;
    let store = CatalogStore::new();
    let catalog = store.load(&FileSource::new(path)).await?;
    let mut out = std::io::stdout().lock();
    match args.command {
        Commands::List {
            level,
            job_type,
            skill,
            sort,
            json,
        } => {
            let query = Query {
                level: Filter::from(level.as_str()),
                job_type: Filter::from(job_type.as_str()),
                skill: Filter::from(skill.as_str()),
                sort: sort.as_deref().map_or(config.sort, SortKey::from),
            };
            log::info!("Listing jobs for {:?}", query);
            list::list(&catalog, &query, json, &mut out)
        }
        Commands::Options { json } => options::options(&catalog, json, &mut out),
        Commands::Show { job_no, format } => show::show(&catalog, &job_no, format, &mut out),
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    let config = Config::from_env();
    log::debug!("Configuration: {:?}", config);
    if let Err(e) = run(args, config).await {
        log::error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
