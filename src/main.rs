use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use prism::config::AnalyticsConfig;
use prism::corpus::{JsonRecordSource, SourceKind};
use prism::engine::AnalyticsEngine;
use prism::output::terminal;

/// Prism: dimension-oriented text analytics.
///
/// Ingests short documents (blog excerpts, social posts, abstracts)
/// grouped into named dimensions and derives word frequencies, sentiment
/// classifications, and LDA topics per dimension.
#[derive(Parser)]
#[command(name = "prism", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum RecordKind {
    /// Blog/article records — primary field "content"
    Blog,
    /// Research-paper records — primary field "abstract"
    Paper,
    /// Social post records — primary field "tweet"
    Social,
    /// Try content, abstract, tweet, text, raw_text in order
    Any,
}

impl RecordKind {
    fn to_source_kind(self) -> SourceKind {
        match self {
            RecordKind::Blog => SourceKind::Blog,
            RecordKind::Paper => SourceKind::ResearchPaper,
            RecordKind::Social => SourceKind::SocialPost,
            RecordKind::Any => SourceKind::Custom(
                ["content", "abstract", "tweet", "text", "raw_text"]
                    .iter()
                    .map(|f| f.to_string())
                    .collect(),
            ),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline on a dimension: frequencies, sentiment, topics
    Analyze {
        /// Dimension name for the report header
        #[arg(long, default_value = "default")]
        dimension: String,

        /// JSON record files (flat arrays of objects), one source each
        #[arg(long, required = true)]
        records: Vec<String>,

        /// How to find the text field in each record
        #[arg(long, value_enum, default_value = "any")]
        kind: RecordKind,

        /// Number of latent topics
        #[arg(long, default_value = "5")]
        topics: usize,

        /// Gibbs sampling sweeps
        #[arg(long, default_value = "30")]
        iterations: usize,

        /// RNG seed for reproducible topic fits
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Generate bigrams in addition to unigrams
        #[arg(long)]
        bigrams: bool,

        /// Sentiment classification threshold (0.05 standard, 0.1 loose)
        #[arg(long, default_value = "0.05")]
        threshold: f64,

        /// Extra domain stopwords, comma-separated
        #[arg(long, value_delimiter = ',')]
        stopwords: Vec<String>,

        /// Emit the bundle as JSON instead of the terminal report
        #[arg(long)]
        json: bool,
    },

    /// Score the sentiment of a single text
    Sentiment {
        text: String,

        /// Classification threshold
        #[arg(long, default_value = "0.05")]
        threshold: f64,
    },

    /// Fit and display topics for one or more record files
    Topics {
        /// JSON record files (flat arrays of objects), one source each
        #[arg(long, required = true)]
        records: Vec<String>,

        #[arg(long, value_enum, default_value = "any")]
        kind: RecordKind,

        /// Number of latent topics
        #[arg(long, default_value = "5")]
        topics: usize,

        /// Gibbs sampling sweeps
        #[arg(long, default_value = "30")]
        iterations: usize,

        /// RNG seed for reproducible fits
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Extra domain stopwords, comma-separated
        #[arg(long, value_delimiter = ',')]
        stopwords: Vec<String>,
    },

    /// Show the word-frequency table for a record file
    Frequencies {
        #[arg(long)]
        records: String,

        #[arg(long, value_enum, default_value = "any")]
        kind: RecordKind,

        #[arg(long, default_value = "25")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("prism=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            dimension,
            records,
            kind,
            topics,
            iterations,
            seed,
            bigrams,
            threshold,
            stopwords,
            json,
        } => {
            let config = AnalyticsConfig {
                num_topics: topics,
                max_iterations: iterations,
                random_seed: seed,
                bigrams,
                sentiment_threshold: threshold,
                extra_stopwords: stopwords.into_iter().collect(),
                ..Default::default()
            };

            let mut engine = AnalyticsEngine::new(config)?;
            for path in &records {
                let tag = source_tag(path);
                engine.register_source(
                    &dimension,
                    Box::new(JsonRecordSource::new(path, tag, kind.to_source_kind())),
                );
            }

            let bundle = engine.analyze(&dimension)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&*bundle)?);
            } else {
                terminal::display_bundle(&bundle);
            }
        }

        Commands::Sentiment { text, threshold } => {
            let config = AnalyticsConfig {
                sentiment_threshold: threshold,
                ..Default::default()
            };
            let engine = AnalyticsEngine::new(config)?;
            let result = engine.score_sentiment(&text);
            println!(
                "polarity {:+.4}  {}",
                result.polarity,
                terminal::colorize_label(result.label).bold()
            );
        }

        Commands::Topics {
            records,
            kind,
            topics,
            iterations,
            seed,
            stopwords,
        } => {
            let config = AnalyticsConfig {
                num_topics: topics,
                max_iterations: iterations,
                random_seed: seed,
                extra_stopwords: stopwords.into_iter().collect(),
                ..Default::default()
            };
            let engine = AnalyticsEngine::new(config)?;

            use prism::corpus::RecordSource;
            let mut documents = Vec::new();
            for path in &records {
                let source = JsonRecordSource::new(path, source_tag(path), kind.to_source_kind());
                documents.extend(source.load()?);
            }

            let (summaries, _) = engine.fit_topics(&documents)?;
            for summary in summaries {
                println!("{}", summary.label.bold());
                let words: Vec<String> =
                    summary.top_words.iter().map(|(w, _)| w.clone()).collect();
                println!("  {}", words.join(", "));
            }
        }

        Commands::Frequencies { records, kind, limit } => {
            let engine = AnalyticsEngine::new(AnalyticsConfig::default())?;
            let source = JsonRecordSource::new(&records, source_tag(&records), kind.to_source_kind());
            use prism::corpus::RecordSource;
            let documents = source.load()?;
            let rows = engine.word_frequencies(&documents, limit);
            println!("{}", format!("Top {} words", rows.len()).bold());
            for row in rows {
                println!("  {:>6}  {}", row.count, row.word);
            }
        }
    }

    Ok(())
}

/// Tag documents with the record file's stem, e.g. "blog_posts".
fn source_tag(path: &str) -> String {
    std::path::Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("records")
        .to_string()
}
