//! lg-kit - load markup, wire its widgets, replay interactions
//!
//! Usage: lg-kit <file.html> [--click <id>]... [--key <id>:<Key>]...

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use lg_dom::{Document, Key, NodeId};
use lg_html::HtmlParser;
use lg_kit::{init_all, state, Registry};
use tracing_subscriber::EnvFilter;

/// One replayed interaction
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Click(String),
    Key(String, Key),
}

/// `--key` value: element id and key name
#[derive(Debug, Clone, PartialEq, Eq)]
struct KeyStep {
    id: String,
    key: Key,
}

fn parse_key_step(raw: &str) -> Result<KeyStep, String> {
    match raw.split_once(':') {
        Some((id, key)) if !id.is_empty() && !key.is_empty() => Ok(KeyStep {
            id: id.to_string(),
            key: Key::parse(key),
        }),
        _ => Err(format!("expected <id>:<Key>, got {raw:?}")),
    }
}

#[derive(Debug, Parser)]
#[command(name = "lg-kit")]
#[command(about = "Wire LG UI Kit widgets onto an HTML file and replay interactions", long_about = None)]
struct Cli {
    /// HTML file to load
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// Click the element with this id (repeatable)
    #[arg(long = "click", value_name = "ID")]
    clicks: Vec<String>,

    /// Press a key on an element, e.g. tab-0:ArrowRight (repeatable)
    #[arg(long = "key", value_name = "ID:KEY", value_parser = parse_key_step)]
    keys: Vec<KeyStep>,
}

impl Cli {
    /// Decode matches, restoring the command-line order of mixed steps
    fn from_matches(matches: &ArgMatches) -> Result<(Self, Vec<Step>), clap::Error> {
        let cli = Self::from_arg_matches(matches)?;

        let mut steps: Vec<(usize, Step)> = Vec::with_capacity(cli.clicks.len() + cli.keys.len());
        if let Some(indices) = matches.indices_of("clicks") {
            steps.extend(indices.zip(&cli.clicks).map(|(i, id)| (i, Step::Click(id.clone()))));
        }
        if let Some(indices) = matches.indices_of("keys") {
            steps.extend(
                indices
                    .zip(&cli.keys)
                    .map(|(i, k)| (i, Step::Key(k.id.clone(), k.key.clone()))),
            );
        }
        steps.sort_by_key(|(i, _)| *i);

        Ok((cli, steps.into_iter().map(|(_, step)| step).collect()))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let matches = Cli::command().get_matches();
    let (cli, steps) = Cli::from_matches(&matches).unwrap_or_else(|err| err.exit());

    let html = std::fs::read_to_string(&cli.path)
        .with_context(|| format!("reading {}", cli.path.display()))?;
    let url = format!("file://{}", cli.path.display());
    let mut doc = HtmlParser::new()
        .parse_with_url(&html, &url)
        .with_context(|| format!("parsing {}", cli.path.display()))?;

    let mut registry = init_all(&mut doc, None);
    println!(
        "hamburgers: {}  accordions: {}  tabs: {}",
        registry.toggles.len(),
        registry.accordions.len(),
        registry.tabs.len()
    );
    for diag in registry.diagnostics() {
        println!("warning: {diag}");
    }

    for step in &steps {
        apply(&mut doc, step)?;
    }
    if !steps.is_empty() {
        report(&doc, &registry);
    }

    registry.destroy_all(&mut doc);
    Ok(())
}

fn apply(doc: &mut Document, step: &Step) -> Result<()> {
    let (id, key) = match step {
        Step::Click(id) => (id, None),
        Step::Key(id, key) => (id, Some(key.clone())),
    };
    let node = doc
        .get_element_by_id(id)
        .with_context(|| format!("no element with id {id:?}"))?;

    match key {
        None => {
            doc.click(node);
        }
        Some(key) => {
            doc.focus(node);
            doc.key_down(node, key);
        }
    }
    Ok(())
}

fn label(doc: &Document, node: NodeId) -> String {
    match doc.tree().element(node).and_then(|e| e.id()) {
        Some(id) => format!("#{id}"),
        None => format!("{node:?}"),
    }
}

fn report(doc: &Document, registry: &Registry) {
    for toggle in &registry.toggles {
        let status = if toggle.is_open(doc) { "open" } else { "closed" };
        println!("hamburger {}: {status}", label(doc, toggle.button()));
    }
    for accordion in &registry.accordions {
        let open: Vec<String> = accordion
            .triggers()
            .into_iter()
            .filter(|&t| state::is_expanded(doc, t))
            .filter_map(|t| state::controls(doc, t).map(str::to_owned))
            .collect();
        println!("accordion {}: open [{}]", label(doc, accordion.root()), open.join(", "));
    }
    for tabs in &registry.tabs {
        let selected = tabs
            .selected_index(doc)
            .map_or_else(|| "none".to_string(), |i| i.to_string());
        println!("tabs {}: selected {selected}", label(doc, tabs.root()));
    }
}
