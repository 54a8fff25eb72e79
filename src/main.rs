//! riffle CLI: inspect, seed, and validate reader binding files

mod cli;

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use riffle::{
    config_paths, default_bindings, load_or_default, parse_map, types::keys, BindingMap,
    BindingPort, FilePort, PhaseAction, UNBOUND,
};

use cli::{CliArgs, CliCommand};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = CliArgs::parse();
    let path = match args.file {
        Some(path) => path,
        None => config_paths::bindings_file().context("could not determine a config directory")?,
    };

    match args.command {
        CliCommand::Show => show(&path),
        CliCommand::Seed { force } => seed(&path, force),
        CliCommand::Check => check(&path),
    }
}

fn show(path: &Path) -> Result<()> {
    let map = load_or_default(&FilePort::new(path));
    if map.is_empty() {
        println!("no bindings");
        return Ok(());
    }
    println!("{:<12} {:<10} {:<28} {:<28} {}", "key", "code", "short", "hold", "release");
    for (code, binding) in &map {
        println!(
            "{:<12} {:<10} {:<28} {:<28} {}",
            keys::name(*code).unwrap_or("?"),
            code,
            format_action(&binding.short),
            format_action(&binding.hold),
            format_action(&binding.release),
        );
    }
    Ok(())
}

fn format_action(action: &PhaseAction) -> String {
    if action.is_unbound() {
        UNBOUND.to_string()
    } else {
        format!("{}({})", action.op, action.param)
    }
}

fn seed(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite",
            path.display()
        );
    }
    let port = FilePort::new(path);
    let defaults = default_bindings();
    port.save(&defaults)
        .map_err(anyhow::Error::from_boxed)
        .with_context(|| format!("could not write {}", path.display()))?;
    println!("wrote {} default bindings to {}", defaults.len(), path.display());
    Ok(())
}

fn check(path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let map: BindingMap = parse_map(text.trim_end())
        .with_context(|| format!("{} does not parse", path.display()))?;

    // Flag entries that will never do anything at dispatch time.
    let mut inert = 0usize;
    for (code, binding) in &map {
        let release_inert = binding.release.is_unbound()
            || binding.release.op == riffle::Operation::StopContinuousScroll.name();
        if binding.short.is_unbound() && binding.hold.is_unbound() && release_inert {
            println!("key {}: binding is inert (all phases disabled)", code);
            inert += 1;
        }
    }

    println!(
        "{}: ok, {} bindings, {} inert",
        path.display(),
        map.len(),
        inert
    );
    Ok(())
}
