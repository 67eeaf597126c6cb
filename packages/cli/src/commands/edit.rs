use crate::config::Config;
use anyhow::{anyhow, bail, Result};
use clap::Args;
use colored::Colorize;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use storefront_blocks::BlockRegistry;
use storefront_editor::{BuilderContext, Mutation, SiteStore};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Site id to edit
    pub site: String,

    /// Mutation JSON, e.g. '{"op":"removeBlock","blockId":"hero-1"}'
    #[arg(short, long, conflicts_with = "file")]
    pub mutation: Option<String>,

    /// File holding one mutation or an array of mutations
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Apply and report without saving
    #[arg(long)]
    pub dry_run: bool,
}

pub fn edit(args: EditArgs, cwd: &str) -> Result<()> {
    let source = match (&args.mutation, &args.file) {
        (Some(json), _) => json.clone(),
        (None, Some(path)) => fs::read_to_string(PathBuf::from(cwd).join(path))
            .map_err(|err| anyhow!("Cannot read {}: {}", path.display(), err))?,
        (None, None) => bail!("Pass --mutation or --file"),
    };
    let mutations = parse_mutations(&source)?;

    let config = Config::load(cwd)?;
    let store = config.store(cwd);
    let Some(site) = store.load(&args.site)? else {
        bail!("Site not found: {}", args.site);
    };

    let registry = Arc::new(BlockRegistry::with_builtin_blocks());
    let mut session = BuilderContext::builder(site, registry);
    apply_all(&mut session, &mutations)?;

    for mutation in &mutations {
        println!("  {} {}", "✓".green(), mutation.name());
    }

    if args.dry_run {
        println!("{} Dry run, {} not saved", "•".yellow(), args.site);
    } else if session.is_dirty() {
        session.save(&store)?;
        println!("{} Saved {}", "✅".green(), args.site.bold());
    } else {
        println!("{} No changes to {}", "•".dimmed(), args.site);
    }

    Ok(())
}

/// Accepts a single mutation object or an array of them
pub fn parse_mutations(source: &str) -> Result<Vec<Mutation>> {
    let value: Value = serde_json::from_str(source).map_err(|err| anyhow!("Invalid mutation JSON: {}", err))?;
    let mutations = match value {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<Mutation>, _>>(),
        single => serde_json::from_value(single).map(|m| vec![m]),
    };
    mutations.map_err(|err| anyhow!("Invalid mutation: {}", err))
}

/// Apply every mutation as one undo step; stops at the first failure
pub fn apply_all(session: &mut BuilderContext, mutations: &[Mutation]) -> Result<()> {
    session.begin_batch()?;
    let result = mutations.iter().try_for_each(|mutation| {
        session
            .apply(mutation)
            .map_err(|err| anyhow!("{} failed: {}", mutation.name(), err))
    });
    let description = match mutations {
        [single] => single.name().to_string(),
        _ => format!("{} edits", mutations.len()),
    };
    session.end_batch(description);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_blocks::default_home_page;
    use storefront_document::Language;

    fn setup() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        let mut site = default_home_page(&BlockRegistry::with_builtin_blocks());
        site.id = "shop".to_string();
        config.store(dir.path().to_str().unwrap()).save(&site).unwrap();
        (dir, config)
    }

    fn edit_args(mutation: &str, dry_run: bool) -> EditArgs {
        EditArgs {
            site: "shop".to_string(),
            mutation: Some(mutation.to_string()),
            file: None,
            dry_run,
        }
    }

    #[test]
    fn test_parse_single_and_array() {
        let single = parse_mutations(r#"{"op":"removeBlock","blockId":"a"}"#).unwrap();
        assert_eq!(single.len(), 1);

        let many = parse_mutations(
            r#"[{"op":"removeBlock","blockId":"a"},{"op":"reorderBlocks","from":0,"to":1}]"#,
        )
        .unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].name(), "reorderBlocks");

        assert!(parse_mutations(r#"{"op":"explode"}"#).is_err());
    }

    #[test]
    fn test_edit_saves_text_change() {
        let (dir, config) = setup();
        let cwd = dir.path().to_str().unwrap();
        let mutation = r#"{
            "op": "updateBlockText",
            "blockId": "heroSection-default",
            "field": "title",
            "value": "Summer sale",
            "language": "en"
        }"#;

        edit(edit_args(mutation, false), cwd).unwrap();

        let site = config.store(cwd).load("shop").unwrap().unwrap();
        let hero = site.find_block("heroSection-default").unwrap();
        let title = storefront_document::resolve_json_text(hero.prop("title"), Language::En);
        assert_eq!(title, "Summer sale");
    }

    #[test]
    fn test_dry_run_leaves_document() {
        let (dir, config) = setup();
        let cwd = dir.path().to_str().unwrap();
        let before = config.store(cwd).load("shop").unwrap();

        edit(edit_args(r#"{"op":"removeBlock","blockId":"footer-default"}"#, true), cwd).unwrap();
        assert_eq!(config.store(cwd).load("shop").unwrap(), before);
    }

    #[test]
    fn test_failed_batch_reports_mutation() {
        let (dir, _) = setup();
        let err = edit(edit_args(r#"{"op":"removeBlock","blockId":"missing"}"#, false), dir.path().to_str().unwrap())
            .unwrap_err();
        assert!(err.to_string().starts_with("removeBlock failed"));
    }
}
