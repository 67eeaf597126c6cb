use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use storefront_blocks::{default_home_page, BlockRegistry};
use storefront_document::Language;
use storefront_editor::SiteStore;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Id of the first site document
    #[arg(long, default_value = "home")]
    pub site: String,

    /// Directory for site documents
    #[arg(short, long, default_value = "sites")]
    pub sites_dir: String,

    /// Default content language (ru, en, uz)
    #[arg(short, long, default_value = "ru")]
    pub language: Language,

    /// Preset forced on every site
    #[arg(long)]
    pub theme: Option<String>,

    /// Force overwrite existing config and site
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!("{} {} already exists", "⚠️".yellow(), DEFAULT_CONFIG_NAME.bright_white());
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing storefront...".bright_blue().bold());

    let config = Config {
        sites_dir: args.sites_dir.clone(),
        default_language: args.language,
        theme_override: args.theme.clone(),
        dark_mode: None,
    };
    config.save(cwd)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let store = config.store(cwd);
    if store.load(&args.site)?.is_some() && !args.force {
        println!("  {} Kept existing {}/{}.json", "•".dimmed(), args.sites_dir, args.site);
    } else {
        let registry = BlockRegistry::with_builtin_blocks();
        let mut site = default_home_page(&registry);
        site.id = args.site.clone();
        store.save(&site)?;
        println!("  {} Created {}/{}.json", "✓".green(), args.sites_dir, args.site);
    }

    println!();
    println!("{}", "✅ Storefront initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: storefront validate");
    println!("  2. Run: storefront render {} --output index.html", args.site);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_document::BlockType;

    fn args(force: bool) -> InitArgs {
        InitArgs {
            site: "shop".to_string(),
            sites_dir: "pages".to_string(),
            language: Language::En,
            theme: Some("ocean".to_string()),
            force,
        }
    }

    #[test]
    fn test_init_writes_config_and_home_page() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        init(args(false), cwd).unwrap();

        let config = Config::load(cwd).unwrap();
        assert_eq!(config.sites_dir, "pages");
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.theme_override.as_deref(), Some("ocean"));

        let site = config.store(cwd).load("shop").unwrap().unwrap();
        assert_eq!(site.id, "shop");
        assert_eq!(site.blocks[0].kind(), Some(BlockType::Navigation));
    }

    #[test]
    fn test_init_keeps_existing_config_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        let existing = Config {
            sites_dir: "custom".to_string(),
            ..Config::default()
        };
        existing.save(cwd).unwrap();

        init(args(false), cwd).unwrap();
        assert_eq!(Config::load(cwd).unwrap(), existing);

        init(args(true), cwd).unwrap();
        assert_eq!(Config::load(cwd).unwrap().sites_dir, "pages");
    }
}
