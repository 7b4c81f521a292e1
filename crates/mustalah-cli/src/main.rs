use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mustalah_config::Config;
use mustalah_core::{Language, TermRecord};
use mustalah_glossary::load;

#[derive(Parser)]
#[command(name = "mustalah", version, about = "Bilingual military terminology glossary tools")]
struct Cli {
    /// Path to the semicolon-delimited glossary table
    #[arg(long, global = true)]
    glossary: Option<PathBuf>,

    /// Working language (arabic or french)
    #[arg(long, global = true)]
    language: Option<Language>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up the definition of a term
    Define { term: String },
    /// List all terms of a category
    Category { name: String },
    /// List terms sharing a category with the given term
    Related { term: String },
    /// Suggest glossary terms relevant to a topic
    Suggest { topic: String },
    /// Scan text for whole-word glossary term occurrences
    Scan {
        /// Text file to scan; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Apply a replacement map to text and report corrections
    Replace {
        /// Text file to correct; stdin when omitted
        file: Option<PathBuf>,
        /// JSON array of {"find", "replace_with"} entries, applied in order
        #[arg(long)]
        map: PathBuf,
        /// Write the corrected text under the configured output directory
        #[arg(long)]
        write: bool,
    },
}

/// One ordered entry of a replacement-map file. The file is an array, not
/// an object, because application order matters.
#[derive(serde::Deserialize)]
struct MapEntry {
    find: String,
    replace_with: String,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = Config::new();
    let glossary_path = cli.glossary.unwrap_or_else(|| config.glossary.path.clone());
    let language = cli.language.unwrap_or(config.glossary.default_language);

    let index = load(&glossary_path)
        .with_context(|| format!("loading glossary from {}", glossary_path.display()))?;
    tracing::info!(terms = index.len(), language = %language, "glossary ready");

    match cli.command {
        Command::Define { term } => match index.definition(&term, language) {
            Some(definition) if !definition.is_empty() => println!("{definition}"),
            Some(_) => println!("(no definition recorded)"),
            None => anyhow::bail!("term '{term}' is not in the glossary"),
        },
        Command::Category { name } => {
            print_records(&index.category_terms(&name), usize::MAX)?;
        }
        Command::Related { term } => {
            print_records(&index.related_terms(&term, language), config.glossary.max_related_terms)?;
        }
        Command::Suggest { topic } => {
            print_records(&index.suggest_for_topic(&topic, language), config.glossary.max_related_terms)?;
        }
        Command::Scan { file } => {
            let text = read_text(file.as_deref())?;
            let matches = index.scan(&text, language);
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        Command::Replace { file, map, write } => {
            let text = read_text(file.as_deref())?;
            let entries: Vec<MapEntry> = serde_json::from_str(
                &fs::read_to_string(&map)
                    .with_context(|| format!("reading replacement map {}", map.display()))?,
            )
            .with_context(|| format!("parsing replacement map {}", map.display()))?;
            let pairs: Vec<(String, String)> = entries
                .into_iter()
                .map(|e| (e.find, e.replace_with))
                .collect();

            let (corrected, report) = index.check_and_replace(&text, language, &pairs)?;
            println!("{}", serde_json::to_string_pretty(&report)?);

            if write {
                fs::create_dir_all(&config.output.dir).with_context(|| {
                    format!("creating output directory {}", config.output.dir.display())
                })?;
                let out = config.output.dir.join("corrected.txt");
                fs::write(&out, &corrected)
                    .with_context(|| format!("writing {}", out.display()))?;
                tracing::info!(path = %out.display(), "wrote corrected text");
            }
        }
    }

    Ok(())
}

fn print_records(records: &[&TermRecord], limit: usize) -> anyhow::Result<()> {
    let shown: Vec<&&TermRecord> = records.iter().take(limit).collect();
    println!("{}", serde_json::to_string_pretty(&shown)?);
    Ok(())
}

fn read_text(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading text from stdin")?;
            Ok(text)
        }
    }
}
