use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use storefront_blocks::{escape_html, BlockRegistry, ProductCard, RenderContext, ViewMode};
use storefront_document::{ColorMode, Language, SiteConfig};
use storefront_editor::load_or_default;
use storefront_theme::{HeadStyles, ThemeController};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Site id to render
    #[arg(default_value = "home")]
    pub site: String,

    /// Content language (defaults to the configured language)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Emit builder markers (data-block-id, data-field)
    #[arg(long)]
    pub builder: bool,

    /// JSON file with the product list for product blocks
    #[arg(long)]
    pub products: Option<PathBuf>,

    /// Product id shown by product detail blocks
    #[arg(long)]
    pub product: Option<String>,

    /// Write HTML to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let registry = BlockRegistry::with_builtin_blocks();
    let site = load_or_default(&config.store(cwd), &args.site, &registry)?;

    let language = args.language.unwrap_or(config.default_language);
    let mode = if args.builder { ViewMode::Builder } else { ViewMode::Render };
    let mut ctx = RenderContext::new(language, mode);

    if let Some(path) = &args.products {
        let products = load_products(&PathBuf::from(cwd).join(path))?;
        if let Some(id) = &args.product {
            let selected = products
                .iter()
                .find(|p| &p.id == id || p.slug.as_deref() == Some(id.as_str()))
                .cloned()
                .ok_or_else(|| anyhow!("Product not found: {}", id))?;
            ctx = ctx.with_product(selected);
        }
        ctx = ctx.with_products(products);
    }

    let html = render_document(&site, &registry, &ctx, &config);

    match &args.output {
        Some(path) => {
            let path = PathBuf::from(cwd).join(path);
            fs::write(&path, html)?;
            eprintln!("{} Rendered {} ({}) to {}", "✓".green(), site.id, language, path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}

fn load_products(path: &Path) -> Result<Vec<ProductCard>> {
    let content = fs::read_to_string(path).map_err(|err| anyhow!("Cannot read {}: {}", path.display(), err))?;
    let products = serde_json::from_str(&content).map_err(|err| anyhow!("Invalid products file: {}", err))?;
    Ok(products)
}

/// Full HTML document: theme stylesheet in the head, page blocks in the body
pub fn render_document(site: &SiteConfig, registry: &BlockRegistry, ctx: &RenderContext, config: &Config) -> String {
    let head = HeadStyles::new();
    let mut controller =
        ThemeController::new(head.clone(), site.theme.as_ref()).with_global_preset(config.theme_override.clone());
    controller.set_user_prefers_dark(config.dark_mode);

    let styles = head.to_html();
    let html_class = match controller.color_mode() {
        ColorMode::Dark => " class=\"dark\"",
        ColorMode::Light => "",
    };

    let seo = site.seo.clone().unwrap_or_default();
    let title = seo.title.unwrap_or_else(|| site.name.clone());
    let body = registry.render_page(site, ctx).to_html();

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!("<html lang=\"{}\"{}>\n", ctx.language, html_class));
    out.push_str("<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(&title)));
    if let Some(description) = seo.description {
        out.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape_html(&description)
        ));
    }
    out.push_str(&styles);
    out.push_str("</head>\n<body>\n");
    out.push_str(&body);
    out.push_str("\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_blocks::default_home_page;
    use storefront_document::{SeoMeta, ThemeConfig};

    fn home() -> (SiteConfig, BlockRegistry) {
        let registry = BlockRegistry::with_builtin_blocks();
        (default_home_page(&registry), registry)
    }

    #[test]
    fn test_document_contains_theme_and_blocks() {
        let (site, registry) = home();
        let ctx = RenderContext::new(Language::En, ViewMode::Render);
        let html = render_document(&site, &registry, &ctx, &Config::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<style id=\"site-theme\">"));
        assert!(html.contains(":root {"));
        assert!(html.contains("New collection"));
        assert!(html.find("<header").unwrap() < html.find("<footer").unwrap());
        assert!(!html.contains("data-block-id"));
    }

    #[test]
    fn test_dark_preference_and_override() {
        let (mut site, registry) = home();
        site.theme = Some(ThemeConfig {
            preset: Some("forest".to_string()),
            ..Default::default()
        });
        let config = Config {
            theme_override: Some("ocean".to_string()),
            dark_mode: Some(true),
            ..Config::default()
        };

        let html = render_document(&site, &registry, &RenderContext::default(), &config);
        assert!(html.contains("<html lang=\"ru\" class=\"dark\">"));
        assert!(html.contains("--primary: #0369a1;"));
        assert!(!html.contains("#15803d"));
    }

    #[test]
    fn test_theme_overrides_cannot_inject_markup() {
        let (mut site, registry) = home();
        site.theme = Some(ThemeConfig {
            light: [("primary".to_string(), "red}</style><script>alert(1)</script>".to_string())].into(),
            radius: Some("</style><script>x</script>".to_string()),
            ..Default::default()
        });

        let html = render_document(&site, &registry, &RenderContext::default(), &Config::default());
        assert!(!html.contains("<script>"));
        assert!(html.contains("--primary: #171717;"));
    }

    #[test]
    fn test_seo_title_is_escaped() {
        let (mut site, registry) = home();
        site.seo = Some(SeoMeta {
            title: Some("Tea & Coffee".to_string()),
            description: Some("Fresh <daily>".to_string()),
            ..Default::default()
        });
        let html = render_document(&site, &registry, &RenderContext::default(), &Config::default());
        assert!(html.contains("<title>Tea &amp; Coffee</title>"));
        assert!(html.contains("content=\"Fresh &lt;daily&gt;\""));
    }

    #[test]
    fn test_render_missing_site_falls_back_to_home_page() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        let args = RenderArgs {
            site: "landing".to_string(),
            language: Some(Language::Uz),
            builder: true,
            products: None,
            product: None,
            output: Some(PathBuf::from("out.html")),
        };

        render(args, cwd).unwrap();
        let html = fs::read_to_string(dir.path().join("out.html")).unwrap();
        assert!(html.contains("Yangi kolleksiya"));
        assert!(html.contains("data-block-id=\"heroSection-default\""));
    }
}
