use crate::config::Config;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use storefront_blocks::{BlockRegistry, ValidationLevel, ValidationWarning};
use storefront_document::{NodeCounter, Visitor};
use storefront_editor::SiteStore;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Site ids to check (defaults to every site in the sites directory)
    pub sites: Vec<String>,

    /// Write back documents with missing default props filled in
    #[arg(long)]
    pub fix: bool,
}

/// Outcome for one site document
#[derive(Debug)]
pub struct SiteReport {
    pub site_id: String,
    pub nodes: NodeCounter,
    pub warnings: Vec<ValidationWarning>,
    pub fixed: bool,
}

impl SiteReport {
    pub fn error_count(&self) -> usize {
        self.warnings.iter().filter(|w| w.is_error()).count()
    }
}

pub fn validate(args: ValidateArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let reports = check_sites(&config, cwd, &args.sites, args.fix)?;

    if reports.is_empty() {
        println!("{} No sites found in {}/", "⚠️".yellow(), config.sites_dir);
        return Ok(());
    }

    let mut errors = 0;
    let mut warnings = 0;

    for report in &reports {
        let summary = format!("({} blocks, {} components)", report.nodes.blocks, report.nodes.components);
        if report.warnings.is_empty() {
            println!("{} {} {}", "✓".green(), report.site_id, summary.dimmed());
        } else {
            println!("{} {} {}", "•".yellow(), report.site_id.bold(), summary.dimmed());
        }

        for warning in &report.warnings {
            let level = match warning.level {
                ValidationLevel::Error => "error".red().bold(),
                ValidationLevel::Warning => "warning".yellow().bold(),
            };
            match &warning.block_id {
                Some(block_id) => println!("   {} [{}] {}", level, block_id.dimmed(), warning.message),
                None => println!("   {} {}", level, warning.message),
            }
        }

        if report.fixed {
            println!("   {} Wrote normalized document", "✓".green());
        }

        errors += report.error_count();
        warnings += report.warnings.len() - report.error_count();
    }

    println!();
    println!(
        "{} site(s), {} error(s), {} warning(s)",
        reports.len(),
        errors.to_string().red(),
        warnings.to_string().yellow()
    );

    if errors > 0 {
        bail!("Validation failed with {} error(s)", errors);
    }
    Ok(())
}

/// Validate `site_ids`, or every stored site when empty
pub fn check_sites(config: &Config, cwd: &str, site_ids: &[String], fix: bool) -> Result<Vec<SiteReport>> {
    let store = config.store(cwd);
    let registry = BlockRegistry::with_builtin_blocks();

    let ids = if site_ids.is_empty() {
        store.list()?
    } else {
        site_ids.to_vec()
    };

    let mut reports = Vec::with_capacity(ids.len());
    for site_id in ids {
        let Some(site) = store.load(&site_id)? else {
            bail!("Site not found: {}", site_id);
        };

        let mut nodes = NodeCounter::default();
        nodes.visit_site(&site);

        let (normalized, warnings) = registry.normalize(&site);
        let fixed = fix && normalized != site;
        if fixed {
            store.save(&normalized)?;
        }

        reports.push(SiteReport {
            site_id,
            nodes,
            warnings,
            fixed,
        });
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_document::{BlockInstance, SiteConfig};

    fn setup(site: SiteConfig) -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.store(dir.path().to_str().unwrap()).save(&site).unwrap();
        (dir, config)
    }

    #[test]
    fn test_reports_unknown_type_and_duplicate_ids() {
        let site = SiteConfig::new("shop", "Shop")
            .with_block(BlockInstance::new("a", "heroSection"))
            .with_block(BlockInstance::new("a", "carousel"));
        let (dir, config) = setup(site);

        let reports = check_sites(&config, dir.path().to_str().unwrap(), &[], false).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].nodes.blocks, 2);
        assert_eq!(reports[0].error_count(), 1);
        assert!(reports[0].warnings.iter().any(|w| w.message.contains("carousel")));
        assert!(!reports[0].fixed);
    }

    #[test]
    fn test_fix_backfills_defaults() {
        let site = SiteConfig::new("shop", "Shop").with_block(BlockInstance::new("hero", "heroSection"));
        let (dir, config) = setup(site);
        let cwd = dir.path().to_str().unwrap();

        let reports = check_sites(&config, cwd, &["shop".to_string()], true).unwrap();
        assert!(reports[0].fixed);

        let stored = config.store(cwd).load("shop").unwrap().unwrap();
        assert_eq!(stored.blocks[0].prop("alignment"), Some(&json!("center")));
    }

    #[test]
    fn test_fix_writes_back_to_loaded_site() {
        let (dir, config) = setup(SiteConfig::new("home", "Home"));
        let cwd = dir.path().to_str().unwrap();
        let shop = r#"{ "id": "home", "name": "Shop", "blocks": [{ "id": "hero", "type": "heroSection" }] }"#;
        std::fs::write(dir.path().join("sites").join("shop.json"), shop).unwrap();

        let reports = check_sites(&config, cwd, &["shop".to_string()], true).unwrap();
        assert!(reports[0].fixed);

        let store = config.store(cwd);
        assert_eq!(store.load("home").unwrap().unwrap().name, "Home");
        let fixed = store.load("shop").unwrap().unwrap();
        assert_eq!(fixed.name, "Shop");
        assert!(fixed.blocks[0].prop("alignment").is_some());
    }

    #[test]
    fn test_missing_site_is_an_error() {
        let (dir, config) = setup(SiteConfig::new("shop", "Shop"));
        let result = check_sites(&config, dir.path().to_str().unwrap(), &["nope".to_string()], false);
        assert!(result.is_err());
    }
}
