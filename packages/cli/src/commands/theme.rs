use crate::config::Config;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use storefront_editor::SiteStore;
use storefront_theme::{find_preset, resolve_theme, ThemeInputs, PRESETS};

#[derive(Debug, Args)]
pub struct ThemeArgs {
    /// Site whose theme overrides are applied
    #[arg(long)]
    pub site: Option<String>,

    /// Preset to use, replacing the site's own preset
    #[arg(short, long)]
    pub preset: Option<String>,

    /// List available presets
    #[arg(long)]
    pub list: bool,
}

pub fn theme(args: ThemeArgs, cwd: &str) -> Result<()> {
    if args.list {
        for preset in PRESETS {
            println!("{:<10} {} {}", preset.id.bold(), preset.name, format!("radius {}", preset.radius).dimmed());
        }
        return Ok(());
    }

    let config = Config::load(cwd)?;
    print!("{}", theme_css(&args, &config, cwd)?);
    Ok(())
}

/// Stylesheet for the requested site or preset
pub fn theme_css(args: &ThemeArgs, config: &Config, cwd: &str) -> Result<String> {
    if let Some(preset) = &args.preset {
        if find_preset(preset).is_none() {
            bail!("Unknown preset: {} (try --list)", preset);
        }
    }
    let global_preset = args.preset.as_deref().or(config.theme_override.as_deref());

    let inputs = match &args.site {
        Some(site_id) => {
            let Some(site) = config.store(cwd).load(site_id)? else {
                bail!("Site not found: {}", site_id);
            };
            ThemeInputs::from_config(site.theme.as_ref(), global_preset)
        }
        None => ThemeInputs::from_config(None, global_preset),
    };

    Ok(resolve_theme(&inputs).to_css())
}
