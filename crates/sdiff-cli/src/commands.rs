use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde_json::Value;
use sdiff_engine::{DiffConfig, DiffEngine, RenderedList};
use sdiff_profile::{
    decode_profile, feed_channel, observe, snapshot, ProfileItem, ProfileSnapshot,
    ProfileViewModel, DEFAULT_FEED_CAPACITY,
};
use sdiff_types::{Change, ChangeSet, Snapshot, SnapshotDoc};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Diff(args) => cmd_diff(args, &config, &cli.format),
        Command::Replay(args) => cmd_replay(args, &config, &cli.format),
        Command::Config => cmd_config(&config, &cli.format),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<DiffConfig> {
    let Some(path) = path else {
        return Ok(DiffConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = toml::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded engine config");
    Ok(config)
}

fn load_snapshot(path: &Path) -> anyhow::Result<Snapshot<Value, Value>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let doc: SnapshotDoc<Value, Value> = serde_json::from_str(&text)
        .with_context(|| format!("parsing snapshot {}", path.display()))?;
    Snapshot::try_from(doc).with_context(|| format!("invalid snapshot {}", path.display()))
}

fn load_profile_snapshot(path: &Path) -> anyhow::Result<ProfileSnapshot> {
    let bytes = fs::read(path).with_context(|| format!("reading profile {}", path.display()))?;
    let profile = decode_profile(&bytes)
        .with_context(|| format!("decoding profile {}", path.display()))?;
    Ok(snapshot(&ProfileItem::from_profile(&profile)))
}

fn compute_diff(args: &DiffArgs, config: &DiffConfig) -> anyhow::Result<ChangeSet> {
    let engine = DiffEngine::new(config.clone());
    if args.profile {
        let old = load_profile_snapshot(&args.old)?;
        let new = load_profile_snapshot(&args.new)?;
        Ok(engine.diff(&old, &new))
    } else {
        let old = load_snapshot(&args.old)?;
        let new = load_snapshot(&args.new)?;
        Ok(engine.diff(&old, &new))
    }
}

fn cmd_diff(args: DiffArgs, config: &DiffConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let changes = compute_diff(&args, config)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&changes)?),
        OutputFormat::Text => print_changes(&changes),
    }
    Ok(())
}

fn replay(
    payloads: Vec<Vec<u8>>,
    config: &DiffConfig,
    verify: bool,
    mut on_step: impl FnMut(usize, &ChangeSet),
) -> anyhow::Result<Vec<ChangeSet>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting runtime")?;

    runtime.block_on(async {
        let (tx, rx) = feed_channel(DEFAULT_FEED_CAPACITY);
        tokio::spawn(async move {
            for payload in payloads {
                if tx.send(payload).await.is_err() {
                    break;
                }
            }
        });

        let mut view_model = ProfileViewModel::with_engine(DiffEngine::new(config.clone()));
        let mut list = verify.then(|| RenderedList::from_snapshot(&view_model.snapshot()));
        let mut steps = Vec::new();

        observe(rx, &mut view_model, |update| {
            if let Some(list) = list.as_mut() {
                list.apply(&update.changes, &update.snapshot)?;
            }
            steps.push(update.changes.clone());
            on_step(steps.len(), &update.changes);
            Ok(())
        })
        .await?;

        Ok::<_, anyhow::Error>(steps)
    })
}

fn cmd_replay(args: ReplayArgs, config: &DiffConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let payloads = args
        .payloads
        .iter()
        .map(|path| fs::read(path).with_context(|| format!("reading payload {}", path.display())))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let text = matches!(format, OutputFormat::Text);

    let steps = replay(payloads, config, args.verify, |step, changes| {
        if text {
            println!("{} {}", "update".bold(), step.to_string().yellow());
            print_changes(changes);
        }
    })?;

    if text {
        println!("{} {} update(s) applied", "✓".green().bold(), steps.len());
        if args.verify {
            println!("  Rendered list: {}", "consistent".green());
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&steps)?);
    }
    Ok(())
}

fn cmd_config(config: &DiffConfig, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", toml::to_string_pretty(config)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
    }
    Ok(())
}

fn print_changes(changes: &ChangeSet) {
    if changes.is_empty() {
        println!("No changes.");
        return;
    }
    for change in changes.changes() {
        match change {
            Change::DeleteSection(s) => println!("  {} section {}", "-".red().bold(), s),
            Change::DeleteRow(p) => println!("  {} row {}", "-".red(), p),
            Change::InsertSection(s) => println!("  {} section {}", "+".green().bold(), s),
            Change::InsertRow(p) => println!("  {} row {}", "+".green(), p),
            Change::ReloadRow(p) => println!("  {} row {}", "~".yellow(), p),
            Change::ReloadSectionHeader(s) => println!("  {} header {}", "~".cyan(), s),
        }
    }
    println!(
        "{} operation(s): {} section, {} row",
        changes.len().to_string().bold(),
        if changes.has_section_changes() { "yes".yellow() } else { "no".dimmed() },
        if changes.has_row_changes() { "yes".yellow() } else { "no".dimmed() },
    );
}
