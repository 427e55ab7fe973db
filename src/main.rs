#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use kubemerge::{
    cli::Cli,
    document,
    interact::TerminalPrompter,
    kubeconfig::{self, backup_file, load_kubeconfig, write_kubeconfig},
    selector::{apply_named_context, ActiveContextSelector},
    SectionMerger,
};
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(cli.debug, cli.trace);

    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize tracing with the specified debug/trace flags
fn initialize_tracing(debug: bool, trace: bool) {
    let log_level = if trace {
        Level::TRACE
    } else if debug {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::builder().with_default_directive(log_level.into()).from_env_lossy())
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let target_path = resolve_target_path(&cli)?;

    println!("Loading input kubeconfig from: {}", cli.input.display());
    let source = load_kubeconfig(&cli.input)?;

    println!("Loading main kubeconfig from: {}", target_path.display());
    let mut target = load_kubeconfig(&target_path)?;

    let mut prompter = TerminalPrompter::new();

    let events = {
        let mut merger = SectionMerger::new(cli.strategy.into(), &mut prompter);
        merger.merge_all(&mut target, &source)?;
        merger.into_events()
    };

    for event in &events {
        info!("{event}");
        println!("{event}");
    }
    if events.is_empty() {
        println!("Nothing to merge.");
    }

    if cli.dry_run {
        println!("Dry run: {} would not be written", target_path.display());
        return Ok(());
    }

    if cli.backup {
        if let Some(backup_path) = backup_file(&target_path)? {
            println!("Backed up {} to {}", target_path.display(), backup_path.display());
        }
    }

    write_kubeconfig(&target_path, &target)?;
    println!("Merged kubeconfig written to: {}", target_path.display());

    let final_context = if let Some(name) = cli.set_context.as_deref() {
        Some(apply_named_context(&mut target, name)?)
    } else if cli.skip_context {
        document::current_context(&target)
    } else {
        ActiveContextSelector::new(&mut prompter).select_and_apply(&mut target)?
    };

    write_kubeconfig(&target_path, &target)?;

    match final_context {
        Some(name) => println!("Final kubeconfig current-context: {name}"),
        None => println!("Final kubeconfig has no current-context set"),
    }

    Ok(())
}

/// Pick the target kubeconfig: --kubeconfig / $KUBECONFIG, else ~/.kube/config.
fn resolve_target_path(cli: &Cli) -> Result<PathBuf> {
    cli.kubeconfig.clone().map_or_else(
        || kubeconfig::default_path().context("Failed to resolve the default kubeconfig path"),
        Ok,
    )
}
