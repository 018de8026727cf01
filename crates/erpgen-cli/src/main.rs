//! erpgen CLI - Synthetic ERP data generation and MongoDB seeding
//!
//! Generates JSON collections for the ERP datasets, seeds them into MongoDB,
//! and previews the FAQ templates.

mod adapters;
mod config;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adapters::MongoDocumentStore;
use config::{redact_uri, Config};
use erpgen::{
    Dataset, DatasetService, ErpModule, FileOutcome, GenerateOptions, Loader, QueryGenerator,
    Sampler, TemplateCatalog,
};

#[derive(Parser)]
#[command(name = "erpgen")]
#[command(about = "erpgen - Synthetic ERP datasets for MongoDB", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.config/erpgen/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate JSON collection files
    Generate {
        /// Dataset to generate (repeatable; default: all)
        #[arg(short, long = "dataset")]
        datasets: Vec<Dataset>,
        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Clock anchor (RFC 3339) that all relative dates are computed from
        #[arg(long)]
        now: Option<DateTime<Utc>>,
        /// Multiplier applied to every default record count
        #[arg(long)]
        scale: Option<f64>,
        /// Record count for one collection, e.g. "faqs=50" (repeatable)
        #[arg(short, long = "count", value_parser = parse_count)]
        counts: Vec<(String, usize)>,
        /// Template catalog (TOML) replacing the built-in one
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },

    /// Insert every JSON file of a directory into MongoDB
    Seed {
        /// Directory of <collection>.json files
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// MongoDB connection string
        #[arg(long)]
        uri: Option<String>,
        /// Database name
        #[arg(long)]
        database: Option<String>,
    },

    /// Append PDIR entries to an existing pdir_entries.json
    ExtendPdir {
        /// File to extend in place
        #[arg(short, long)]
        file: PathBuf,
        /// Number of entries to add
        #[arg(short, long, default_value = "150")]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print sample question/answer pairs from the template catalog
    Templates {
        /// Template catalog (TOML) replacing the built-in one
        #[arg(short, long)]
        templates: Option<PathBuf>,
        /// Only this domain (Sales, Purchase, Finance, Inventory, HR, GST)
        #[arg(short, long)]
        domain: Option<ErpModule>,
        /// Samples per domain
        #[arg(short = 'n', long, default_value = "3")]
        samples: usize,
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print one document from each collection in MongoDB
    Inspect {
        #[arg(long)]
        uri: Option<String>,
        #[arg(long)]
        database: Option<String>,
    },

    /// Show current configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "erpgen=info,erpgen_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate { datasets, output, seed, now, scale, counts, templates } => {
            cmd_generate(&config, datasets, output, seed, now, scale, counts, templates)
        }
        Commands::Seed { data, uri, database } => cmd_seed(&config, data, uri, database).await,
        Commands::ExtendPdir { file, count, seed } => cmd_extend_pdir(&config, &file, count, seed),
        Commands::Templates { templates, domain, samples, seed } => {
            cmd_templates(&config, templates, domain, samples, seed)
        }
        Commands::Inspect { uri, database } => cmd_inspect(&config, uri, database).await,
        Commands::Config { init } => cmd_config(config, cli.config.as_deref(), init),
    }
}

// ============================================
// Command Implementations
// ============================================

#[allow(clippy::too_many_arguments)]
fn cmd_generate(
    config: &Config,
    datasets: Vec<Dataset>,
    output: Option<PathBuf>,
    seed: Option<u64>,
    now: Option<DateTime<Utc>>,
    scale: Option<f64>,
    counts: Vec<(String, usize)>,
    templates: Option<PathBuf>,
) -> Result<()> {
    let catalog = load_catalog(templates.as_deref().or(config.generate.templates.as_deref()))?;
    let service = DatasetService::new(Arc::new(catalog));

    let mut merged: HashMap<String, usize> = config.counts.clone();
    merged.extend(counts);

    let options = GenerateOptions {
        datasets,
        counts: merged,
        scale: scale.unwrap_or(config.generate.scale),
        output_dir: output.unwrap_or_else(|| config.generate.output_dir.clone()),
    };

    let mut sampler = sampler(seed.or(config.generate.seed), now);
    let written = service
        .generate(&mut sampler, &options)
        .context("Failed to generate datasets")?;

    let total: usize = written.iter().map(|c| c.records).sum();
    let mut current = None;
    for collection in &written {
        if current != Some(collection.dataset) {
            println!("{}", collection.dataset.to_string().bold());
            current = Some(collection.dataset);
        }
        println!(
            "  {} {} ({})",
            "✓".green(),
            collection.name.cyan(),
            collection.records
        );
    }
    println!(
        "\n{} {} records in {} files written to {:?}",
        "✓".green(),
        total,
        written.len(),
        options.output_dir
    );

    Ok(())
}

async fn cmd_seed(
    config: &Config,
    data: Option<PathBuf>,
    uri: Option<String>,
    database: Option<String>,
) -> Result<()> {
    let data = data.unwrap_or_else(|| config.generate.output_dir.clone());
    if !data.is_dir() {
        bail!("The folder {:?} does not exist", data);
    }

    let loader = connect(config, uri, database).await?;

    println!("Loading {:?}...", data);
    let report = loader
        .load_dir(&data)
        .await
        .with_context(|| format!("Failed to read {:?}", data))?;

    if report.is_empty() {
        println!("{}", format!("No JSON files found in {:?}", data).yellow());
        return Ok(());
    }

    for file in &report.files {
        let (mark, detail) = match &file.outcome {
            FileOutcome::Inserted(_) => ("✓".green(), file.outcome.to_string().normal()),
            FileOutcome::Skipped(_) => ("-".yellow(), file.outcome.to_string().yellow()),
            FileOutcome::Failed(_) => ("✗".red(), file.outcome.to_string().red()),
        };
        println!("  {} {} {}", mark, file.collection.cyan(), detail);
    }

    println!(
        "\n{} documents inserted from {} files ({} skipped, {} failed)",
        report.inserted().to_string().green(),
        report.files.len(),
        report.skipped(),
        report.failed()
    );

    Ok(())
}

fn cmd_extend_pdir(config: &Config, file: &Path, count: usize, seed: Option<u64>) -> Result<()> {
    let service = DatasetService::builtin()?;
    let mut sampler = sampler(seed.or(config.generate.seed), None);

    let total = service
        .extend_pdir_file(&mut sampler, file, count)
        .with_context(|| format!("Failed to extend {:?}", file))?;

    println!(
        "{} Added {} PDIR entries to {:?} ({} total)",
        "✓".green(),
        count,
        file,
        total
    );

    Ok(())
}

fn cmd_templates(
    config: &Config,
    templates: Option<PathBuf>,
    domain: Option<ErpModule>,
    samples: usize,
    seed: Option<u64>,
) -> Result<()> {
    let catalog = load_catalog(templates.as_deref().or(config.generate.templates.as_deref()))?;
    let generator = QueryGenerator::new(Arc::new(catalog));
    let mut sampler = sampler(seed.or(config.generate.seed), None);

    let modules: Vec<ErpModule> = match domain {
        Some(m) => vec![m],
        None => ErpModule::ALL.to_vec(),
    };

    for module in modules {
        let catalog = generator.catalog();
        let fallback = if catalog.has_queries(module) { "" } else { " (fallback)" };
        println!(
            "{}{} {} queries, {} responses",
            module.to_string().bold(),
            fallback.yellow(),
            catalog.queries_for(module).len(),
            catalog.responses_for(module).len()
        );

        for _ in 0..samples {
            let (question, metadata) = generator.generate_query(&mut sampler, module);
            let answer = generator.generate_response(&mut sampler, &metadata);
            println!("  {} {}", "Q:".cyan(), question);
            println!("  {} {}", "A:".green(), answer.dimmed());
        }
        println!();
    }

    if domain.is_none() {
        let catalog = generator.catalog();
        println!("{}", "Fallback".bold());
        println!("  {} {}", "Q:".cyan(), catalog.fallback_query().source());
        println!("  {} {}", "A:".green(), catalog.fallback_response().source().dimmed());
    }

    Ok(())
}

async fn cmd_inspect(config: &Config, uri: Option<String>, database: Option<String>) -> Result<()> {
    let loader = connect(config, uri, database).await?;
    let samples = loader.inspect().await?;

    if samples.is_empty() {
        println!("No collections found.");
        return Ok(());
    }

    for (name, doc) in samples {
        println!("{} {}", "Collection:".bold(), name.cyan());
        match doc {
            Some(doc) => println!("{}", serde_json::to_string_pretty(&doc)?),
            None => println!("  {}", "(empty)".dimmed()),
        }
        println!("{}", "-".repeat(50).dimmed());
    }

    Ok(())
}

fn cmd_config(config: Config, path: Option<&Path>, init: bool) -> Result<()> {
    if init {
        let default_path = Config::config_path()?;
        if default_path.exists() {
            println!("{} Config already exists at {:?}", "✓".yellow(), default_path);
        } else {
            let saved = Config::default().save()?;
            println!("{} Default config written to {:?}", "✓".green(), saved);
        }
    }

    let shown_path = match path {
        Some(p) => p.to_path_buf(),
        None => Config::config_path()?,
    };

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", shown_path);
    println!("  Output dir: {:?}", config.generate.output_dir);
    println!(
        "  Seed: {}",
        config
            .generate
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string())
            .cyan()
    );
    println!("  Scale: {}", config.generate.scale);
    println!(
        "  Templates: {}",
        config
            .generate
            .templates
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string())
    );
    println!("  Count overrides: {}", config.counts.len());
    println!("  MongoDB URI: {}", redact_uri(&config.mongo.uri));
    println!("  Database: {}", config.mongo.database.cyan());

    Ok(())
}

// ============================================
// Helpers
// ============================================

fn sampler(seed: Option<u64>, now: Option<DateTime<Utc>>) -> Sampler {
    let now = now.unwrap_or_else(Utc::now);
    match seed {
        Some(seed) => Sampler::seeded(seed, now),
        None => Sampler::with_anchor(now),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<TemplateCatalog> {
    match path {
        Some(p) => {
            let content = fs::read_to_string(p)
                .with_context(|| format!("Failed to read template catalog {:?}", p))?;
            TemplateCatalog::from_toml_str(&content)
                .with_context(|| format!("Invalid template catalog {:?}", p))
        }
        None => Ok(TemplateCatalog::builtin()?),
    }
}

/// Connect and verify credentials; failure here ends the process nonzero
async fn connect(
    config: &Config,
    uri: Option<String>,
    database: Option<String>,
) -> Result<Loader<MongoDocumentStore>> {
    let uri = uri.unwrap_or_else(|| config.mongo.uri.clone());
    let database = database.unwrap_or_else(|| config.mongo.database.clone());

    print!("Connecting to {} ... ", redact_uri(&uri));
    std::io::stdout().flush()?;
    let store = MongoDocumentStore::connect(&uri, &database).await?;
    let db_name = store.database_name().to_string();
    let loader = Loader::new(Arc::new(store));

    match loader.ping().await {
        Ok(()) => println!("{} (database '{}')", "OK".green(), db_name.cyan()),
        Err(e) => {
            println!("{}", "Failed".red());
            if matches!(e, erpgen::DomainError::Authentication(_)) {
                bail!("Authentication failed. Check the username and password in the connection string: {}", e);
            }
            bail!("Could not connect to MongoDB: {}", e);
        }
    }

    Ok(loader)
}

fn parse_count(s: &str) -> Result<(String, usize), String> {
    let (name, count) = s
        .split_once('=')
        .ok_or_else(|| format!("expected <collection>=<count>, got '{}'", s))?;
    let count = count
        .trim()
        .parse()
        .map_err(|_| format!("invalid count '{}' for {}", count, name))?;
    Ok((name.trim().to_string(), count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("faqs=50"), Ok(("faqs".to_string(), 50)));
        assert_eq!(parse_count(" grn = 3"), Ok(("grn".to_string(), 3)));
        assert!(parse_count("faqs").is_err());
        assert!(parse_count("faqs=-1").is_err());
    }

    #[test]
    fn test_cli_parses_generate() {
        let cli = Cli::try_parse_from([
            "erpgen", "generate", "-d", "sales", "--dataset", "gst", "-c", "faqs=5", "--seed", "9",
            "--now", "2024-03-24T12:00:00Z",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate { datasets, counts, seed, now, .. } => {
                assert_eq!(datasets, vec![Dataset::Sales, Dataset::Gst]);
                assert_eq!(counts, vec![("faqs".to_string(), 5)]);
                assert_eq!(seed, Some(9));
                assert_eq!(now.map(|n| n.to_rfc3339()), Some("2024-03-24T12:00:00+00:00".to_string()));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_seeded_sampler_is_reproducible() {
        let now = "2024-03-24T12:00:00Z".parse().ok();
        let mut a = sampler(Some(3), now);
        let mut b = sampler(Some(3), now);
        assert_eq!(a.code("SO", 6), b.code("SO", 6));
        assert_eq!(a.now(), b.now());
    }
}
