use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use markdown_blockext_config::Config;
use markdown_blockext_engine::{BlockKind, Document, parsing::snapshot};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Indented section headings with their ids
    #[default]
    Outline,
    /// The normalized block tree as JSON
    Json,
}

#[derive(Parser)]
#[command(name = "markdown-blockext", version, about = "Parse markdown with block extensions")]
struct Cli {
    /// Markdown file to parse
    file: PathBuf,

    /// Config file (defaults to ~/.config/markdown-blockext/config.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("config file '{}' does not exist", path.display()),
        },
        None => {
            let config = Config::load()?.unwrap_or_else(|| {
                log::debug!(
                    "no config at {}, using defaults",
                    Config::config_path().display()
                );
                Config::default()
            });
            Ok(config)
        }
    }
}

/// One line per section, indented by nesting depth: `Heading text  #id`.
fn render_outline(doc: &Document) -> String {
    let mut out = String::new();
    for (id, section) in doc.tree.sections() {
        let heading = doc
            .tree
            .find_child(id, |kind| matches!(kind, BlockKind::Heading { .. }))
            .and_then(|h| match &doc.tree[h].kind {
                BlockKind::Heading { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .unwrap_or("");
        let indent = "  ".repeat(doc.tree.depth(id) - 1);
        match &section.id {
            Some(section_id) => out.push_str(&format!("{indent}{heading}  #{section_id}\n")),
            None => out.push_str(&format!("{indent}{heading}\n")),
        }
    }
    out
}

fn render(doc: &Document, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Outline => Ok(render_outline(doc)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&snapshot::normalize(doc))?;
            Ok(json + "\n")
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("failed to load config")?;
    let bytes = std::fs::read(&cli.file)
        .with_context(|| format!("failed to read '{}'", cli.file.display()))?;
    let doc = Document::from_bytes(&bytes, &config)
        .with_context(|| format!("failed to parse '{}'", cli.file.display()))?;

    log::info!(
        "{}: {} blocks, {} references",
        cli.file.display(),
        doc.tree.len(),
        doc.references.len()
    );
    print!("{}", render(&doc, cli.format)?);
    Ok(())
}
