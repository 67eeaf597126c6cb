use crate::model::SiteConfig;
use crate::visitor::{IdCollector, Visitor};
use std::collections::HashSet;

/// Clock-based id generator that never hands out an id already in use.
///
/// Ids look like `<prefix>-<unix millis>`. Two ids requested within the same
/// millisecond, or a clash with an existing node, get a `-<n>` suffix.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    taken: HashSet<String>,
}

impl IdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            taken: HashSet::new(),
        }
    }

    /// Generator aware of every block and component id in `site`
    pub fn for_site(prefix: impl Into<String>, site: &SiteConfig) -> Self {
        let mut collector = IdCollector::default();
        collector.visit_site(site);

        Self {
            prefix: prefix.into(),
            taken: collector.ids.into_iter().collect(),
        }
    }

    pub fn reserve(&mut self, id: impl Into<String>) {
        self.taken.insert(id.into());
    }

    pub fn is_taken(&self, id: &str) -> bool {
        self.taken.contains(id)
    }

    pub fn next_id(&mut self) -> String {
        let base = format!("{}-{}", self.prefix, chrono::Utc::now().timestamp_millis());
        let mut candidate = base.clone();
        let mut suffix = 1;

        while self.taken.contains(&candidate) {
            suffix += 1;
            candidate = format!("{}-{}", base, suffix);
        }

        self.taken.insert(candidate.clone());
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockInstance;

    #[test]
    fn test_ids_are_unique_within_a_burst() {
        let mut gen = IdGenerator::new("block");
        let ids: HashSet<String> = (0..50).map(|_| gen.next_id()).collect();
        assert_eq!(ids.len(), 50);
        assert!(ids.iter().all(|id| id.starts_with("block-")));
    }

    #[test]
    fn test_existing_ids_are_avoided() {
        let site = SiteConfig::new("home", "Home").with_block(BlockInstance::new("block-1", "footer"));
        let gen = IdGenerator::for_site("block", &site);
        assert!(gen.is_taken("block-1"));
    }
}
