use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rindex::{build_index, write_index_file, IndexSettings, Language, QuerySession};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "rindex")]
#[command(about = "Reverse index builder and boolean query shell", long_about = None)]
struct Args {
    /// Index file to write (build) or read (query)
    #[arg(long, global = true, env = "RINDEX_INDEX", default_value = "r_index.txt")]
    index: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build the index from the given documents
    Build {
        /// Documents to index; each path is its document id
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Number of most frequent terms to keep
        #[arg(long, env = "RINDEX_VOCABULARY_SIZE")]
        vocabulary_size: Option<usize>,

        /// Stemming and stopword language
        #[arg(long, env = "RINDEX_LANGUAGE")]
        language: Option<String>,

        /// One-word-per-line stoplist replacing the built-in one
        #[arg(long, env = "RINDEX_STOPLIST")]
        stoplist: Option<PathBuf>,

        /// JSON settings file; flags override its values
        #[arg(long, env = "RINDEX_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Answer boolean queries read from standard input (the default)
    Query,
}

fn main() -> Result<()> {
    // Logs go to stderr so query answers on stdout stay clean
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    match args.command.unwrap_or(Command::Query) {
        Command::Build {
            files,
            vocabulary_size,
            language,
            stoplist,
            config,
        } => {
            let mut settings = match config {
                Some(path) => IndexSettings::from_json_file(&path)
                    .with_context(|| format!("loading settings from {:?}", path))?,
                None => IndexSettings::default(),
            };
            if let Some(size) = vocabulary_size {
                settings = settings.with_vocabulary_size(size);
            }
            if let Some(language) = language {
                settings = settings.with_language(language.parse::<Language>()?);
            }
            if let Some(stoplist) = stoplist {
                settings = settings.with_stopword_file(stoplist);
            }

            info!(
                "Building index v{} over {} documents (vocabulary {}, {})",
                rindex::VERSION,
                files.len(),
                settings.vocabulary_size,
                settings.tokenizer_config.language
            );

            let index = build_index(&files, &settings)?;
            write_index_file(&index, &args.index)
                .with_context(|| format!("writing index to {:?}", args.index))?;
        }
        Command::Query => {
            let session = QuerySession::load(&args.index)
                .with_context(|| format!("loading index from {:?}", args.index))?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            session.run(stdin.lock(), stdout.lock())?;
        }
    }

    Ok(())
}
