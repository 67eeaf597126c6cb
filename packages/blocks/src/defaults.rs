use crate::registry::BlockRegistry;
use storefront_document::{BlockInstance, BlockType, PropBag, SiteConfig};

/// Blocks of a freshly created home page, in page order
pub const HOME_PAGE_BLOCKS: [BlockType; 5] = [
    BlockType::Navigation,
    BlockType::HeroSection,
    BlockType::ProductsList,
    BlockType::Testimonials,
    BlockType::Footer,
];

/// Starter page used when a site has no stored document yet
pub fn default_home_page(registry: &BlockRegistry) -> SiteConfig {
    let mut site = SiteConfig::new("home", "Home");
    site.route = Some("/".to_string());

    for ty in HOME_PAGE_BLOCKS {
        let Some(props) = registry.props_for_new_block(ty.tag(), &PropBag::new()) else {
            continue;
        };
        site.blocks
            .push(BlockInstance::new(format!("{}-default", ty.tag()), ty.tag()).with_props(props));
    }

    site
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_home_page() {
        let site = default_home_page(&BlockRegistry::with_builtin_blocks());
        let ids: Vec<_> = site.blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(
            ids,
            ["navigation-default", "heroSection-default", "productsList-default", "testimonials-default", "footer-default"]
        );
        assert!(!site.blocks[1].props.is_empty());
        assert!(registry_is_clean(&site));
    }

    fn registry_is_clean(site: &SiteConfig) -> bool {
        BlockRegistry::with_builtin_blocks().validate(site).is_empty()
    }

    #[test]
    fn test_empty_registry_gives_empty_page() {
        assert!(default_home_page(&BlockRegistry::new()).blocks.is_empty());
    }
}
