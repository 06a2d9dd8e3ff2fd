//! paper-trail - Entry Point
//!
//! One-shot topic ingestion or the HTTP API, over a shared Neo4j store.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use paper_trail::agents::{
    FutureWorksAgent, OllamaGenerator, PdfTextExtractor, QnaAgent, SummarizeAgent, TextExtractor,
    TextGenerator,
};
use paper_trail::api::{self, AppState};
use paper_trail::store::PaperStore;
use paper_trail::{ArxivClient, Config, Neo4jStore, ingest};

#[derive(Parser, Debug)]
#[command(name = "paper-trail")]
#[command(about = "arXiv topic ingestion into a Neo4j paper graph")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search a topic and store every discovered paper.
    Ingest {
        /// Research topic to search for
        #[arg(long)]
        topic: String,

        /// Maximum number of papers to fetch
        #[arg(long, default_value_t = 10_000)]
        max_results: usize,
    },

    /// Run the HTTP API.
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8000", env = "PORT")]
        port: u16,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting paper-trail");

    let config = Config::from_env()?;
    let client = ArxivClient::new(&config)?;
    let store =
        Neo4jStore::connect(&config.neo4j_uri, &config.neo4j_user, &config.neo4j_password).await?;

    match cli.command {
        Command::Ingest { topic, max_results } => {
            let report = ingest::ingest(&client, &store, &topic, max_results).await;
            tracing::info!(
                topic,
                discovered = report.discovered,
                stored = report.stored,
                "ingestion finished"
            );
        }
        Command::Serve { port } => {
            let generator: Arc<dyn TextGenerator> = Arc::new(OllamaGenerator::new(&config));
            let extractor: Arc<dyn TextExtractor> = Arc::new(PdfTextExtractor::new(&config)?);

            let state = AppState {
                store: Arc::new(store) as Arc<dyn PaperStore>,
                client: Arc::new(client),
                qna: Arc::new(QnaAgent::new(Arc::clone(&generator), extractor)),
                future_works: Arc::new(FutureWorksAgent::new(Arc::clone(&generator))),
                summarize: Arc::new(SummarizeAgent::new(generator)),
            };

            api::serve(state, port).await?;
        }
    }

    Ok(())
}
