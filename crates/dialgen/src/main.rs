// File: crates/dialgen/src/main.rs
// Summary: CLI that loads the dial config, merges command-line anchors and renders the dial PDF.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use dial_core::{ConfigFile, Dial};
use dial_render_skia::{RenderEnvironment, SkiaPdfBackend};

use crate::cli::{default_output_dir, AnchorArgs, Cli, Command, RenderArgs};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Init { force } => init(&cli, *force),
        Command::Render(args) => render(&cli, args),
        Command::Inspect { anchors } => inspect(&cli, anchors),
    }
}

fn init(cli: &Cli, force: bool) -> Result<()> {
    if cli.config.exists() && !force {
        anyhow::bail!("{} already exists; pass --force to overwrite", cli.config.display());
    }
    ConfigFile::default().save(&cli.config)?;
    println!("Wrote {}", cli.config.display());
    Ok(())
}

/// Config file plus command-line anchors; anchor flags replace the stored table,
/// and all-blank flags clear it.
fn load_inputs(cli: &Cli, anchor_args: &AnchorArgs) -> Result<ConfigFile> {
    let mut file = ConfigFile::load(&cli.config)?;
    if !anchor_args.anchors.is_empty() {
        file.anchors = anchor_args.table()?;
    }
    Ok(file)
}

fn render(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let file = load_inputs(cli, &args.anchors)?;
    if args.save {
        file.save(&cli.config)?;
    }

    let output_dir = args.output_dir.clone().unwrap_or_else(|| default_output_dir(&cli.config));
    let target = file.settings.resolve_output(&output_dir, args.output.as_deref());

    let mut env = RenderEnvironment { output_dir, font_files: Vec::new() };
    if let Some(path) = &args.font_file {
        env.font_files.push((file.settings.font_family.clone(), path.clone()));
    }
    let backend = SkiaPdfBackend::new(env);

    let dial = Dial::new(file.settings, file.anchors)?;
    dial.render(&backend, &target)
        .with_context(|| format!("failed to render dial to '{}'", target.display()))?;
    println!("Dial generated and saved as {}", target.display());
    Ok(())
}

fn inspect(cli: &Cli, anchor_args: &AnchorArgs) -> Result<()> {
    let file = load_inputs(cli, anchor_args)?;
    let plan = Dial::new(file.settings, file.anchors)?.plan()?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
