//! hudini layout tool.
//!
//! Reads a scene description, lays out every row and column in it, and
//! prints each node's resolved position and size as JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use hudini_types::config::HudiniConfig;
use hudini_ui::{SceneSpec, Theme};

#[derive(Parser, Debug)]
#[command(name = "hudini-layout", version, about = "Lay out a TOML scene and print node positions")]
struct Args {
    /// Scene description (TOML).
    scene: PathBuf,

    /// Configuration file (TOML).
    #[arg(short, long, env = "HUDINI_CONFIG")]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<HudiniConfig> {
    match path {
        Some(path) => HudiniConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(HudiniConfig::default()),
    }
}

/// Lay out a scene source and render the placements as pretty JSON.
fn run(scene_src: &str, config: &HudiniConfig) -> Result<String> {
    let theme = Theme::with_overrides(&config.theme);
    let mut root = SceneSpec::from_toml_str(scene_src)?.build(&theme, &config.layout)?;
    root.layout_tree()?;
    let json = root.placements_json()?;
    log::info!("Placed scene rooted at a {}", root.kind_name());
    Ok(json)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    log::info!(
        "Laying out {} (align policy: {:?}, default gap: {})",
        args.scene.display(),
        config.layout.align_policy,
        config.layout.default_gap,
    );

    let scene_src = std::fs::read_to_string(&args.scene)
        .with_context(|| format!("reading scene {}", args.scene.display()))?;
    println!("{}", run(&scene_src, &config)?);
    Ok(())
}
