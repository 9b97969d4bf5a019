use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lexigraph_conceptnet::ConceptNetClient;
use lexigraph_query::{
    ConceptFacade, ConceptNetBackend, FacadeConfig, LexicalAnswer, LexicalFacade, QueryOutcome,
    WordNetBackend,
};
use lexigraph_wordnet::WordNet;

#[derive(Parser)]
#[command(name = "lexigraph")]
#[command(about = "Lexical and semantic relation queries over WordNet and ConceptNet", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,

    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up senses of a term in a local WordNet database, optionally
    /// scoring it against a second term
    Lexical(LexicalArgs),

    /// Query a ConceptNet-style API for how two terms relate
    Concept(ConceptArgs),
}

#[derive(Args)]
struct LexicalArgs {
    /// Term to look up
    term1: String,

    /// Second term to score against
    term2: Option<String>,

    /// Directory containing the data.* and index.* files
    #[arg(long, default_value = "wordnet")]
    data_dir: PathBuf,
}

#[derive(Args)]
struct ConceptArgs {
    /// First concept
    term1: String,

    /// Second concept
    term2: String,

    /// API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Concept language code
    #[arg(long, default_value = "en")]
    lang: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Keep stdout clean for JSON parsing.
    if cli.json {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Lexical(args) => run_lexical(args, cli.json).await,
        Commands::Concept(args) => run_concept(args, cli.json).await,
    }
}

async fn run_lexical(args: LexicalArgs, json: bool) -> Result<()> {
    let db = WordNet::load(&args.data_dir).with_context(|| {
        format!(
            "failed to load WordNet database from {}",
            args.data_dir.display()
        )
    })?;
    log::debug!(
        "loaded {} lemmas across {} synsets",
        db.lemma_count(),
        db.synset_count()
    );

    let facade = LexicalFacade::with_config(WordNetBackend::new(Arc::new(db)), FacadeConfig::strict());
    let outcome = facade
        .query(&args.term1, args.term2.as_deref())
        .await
        .context("lexical query failed")?;

    let QueryOutcome::Answer(answer) = outcome else {
        // Unreachable under the strict policy; guard anyway.
        anyhow::bail!("query was skipped");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
    } else {
        print_lexical(&args.term1, &answer);
    }
    Ok(())
}

fn print_lexical(term: &str, answer: &LexicalAnswer) {
    if answer.synonyms.is_empty() {
        println!("No senses found for '{term}'.");
    }
    for (i, synonyms) in answer.synonyms.iter().enumerate() {
        println!("{}. [{}] {}", i + 1, answer.parts_of_speech[i], synonyms);
        println!("   {}", answer.glosses[i]);
    }
    if let Some(score) = answer.similarity {
        println!("Similarity: {score:.3}");
    }
}

async fn run_concept(args: ConceptArgs, json: bool) -> Result<()> {
    let mut builder = ConceptNetClient::builder().lang(&args.lang);
    if let Some(base_url) = &args.base_url {
        builder = builder.base_url(base_url);
    }
    let client = builder.build().context("failed to build API client")?;

    let facade = ConceptFacade::with_config(ConceptNetBackend::new(client), FacadeConfig::strict());
    let outcome = facade
        .query(&args.term1, &args.term2)
        .await
        .context("concept query failed")?;

    let QueryOutcome::Answer(answer) = outcome else {
        anyhow::bail!("query was skipped");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
    } else {
        println!("Relations of '{}':", args.term1);
        if answer.relations.is_empty() {
            println!("  (none)");
        } else {
            for line in answer.relations.lines() {
                println!("  {line}");
            }
        }
        println!("Related to '{}': {}", args.term1, answer.related_terms);
        println!(
            "Between '{}' and '{}': {}",
            args.term1, args.term2, answer.relations_between
        );
        println!("How related: {}", answer.how_related);
        println!("Relatedness: {:.3}", answer.relatedness);
    }
    Ok(())
}
