//! # Site Storage
//!
//! Where site documents live between sessions. The builder only needs
//! load and save by site id; [`FileStore`] keeps one JSON file per site and
//! [`MemoryStore`] backs tests and previews.

use crate::errors::{StoreError, StoreResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use storefront_blocks::{default_home_page, BlockRegistry};
use storefront_common::filesystem::{list_json_stems, read_json_file, remove_file_if_exists, write_json_file};
use storefront_document::SiteConfig;
use tracing::{info, instrument, warn};

pub trait SiteStore {
    /// `Ok(None)` when no document is stored under `site_id`. The returned
    /// document's id is always `site_id`, so saving it writes back to the
    /// same place.
    fn load(&self, site_id: &str) -> StoreResult<Option<SiteConfig>>;

    /// Store `site` under its own id, replacing any previous version
    fn save(&self, site: &SiteConfig) -> StoreResult<()>;

    /// Returns whether a document was removed
    fn delete(&self, site_id: &str) -> StoreResult<bool>;

    /// Ids of every stored site, sorted
    fn list(&self) -> StoreResult<Vec<String>>;
}

/// One `<id>.json` file per site inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, site_id: &str) -> StoreResult<PathBuf> {
        validate_site_id(site_id)?;
        Ok(self.root.join(format!("{}.json", site_id)))
    }
}

impl SiteStore for FileStore {
    fn load(&self, site_id: &str) -> StoreResult<Option<SiteConfig>> {
        let site: Option<SiteConfig> = read_json_file(&self.path_for(site_id)?)?;
        Ok(site.map(|site| keyed_by(site, site_id)))
    }

    fn save(&self, site: &SiteConfig) -> StoreResult<()> {
        let path = self.path_for(&site.id)?;
        write_json_file(&path, site)?;
        info!(site_id = %site.id, path = %path.display(), "Saved site");
        Ok(())
    }

    fn delete(&self, site_id: &str) -> StoreResult<bool> {
        Ok(remove_file_if_exists(&self.path_for(site_id)?)?)
    }

    fn list(&self) -> StoreResult<Vec<String>> {
        Ok(list_json_stems(&self.root)?)
    }
}

/// Sites kept in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    sites: Mutex<BTreeMap<String, SiteConfig>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site(self, site: SiteConfig) -> Self {
        self.lock().insert(site.id.clone(), site);
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, SiteConfig>> {
        self.sites.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SiteStore for MemoryStore {
    fn load(&self, site_id: &str) -> StoreResult<Option<SiteConfig>> {
        Ok(self.lock().get(site_id).cloned().map(|site| keyed_by(site, site_id)))
    }

    fn save(&self, site: &SiteConfig) -> StoreResult<()> {
        validate_site_id(&site.id)?;
        self.lock().insert(site.id.clone(), site.clone());
        Ok(())
    }

    fn delete(&self, site_id: &str) -> StoreResult<bool> {
        Ok(self.lock().remove(site_id).is_some())
    }

    fn list(&self) -> StoreResult<Vec<String>> {
        Ok(self.lock().keys().cloned().collect())
    }
}

fn keyed_by(mut site: SiteConfig, site_id: &str) -> SiteConfig {
    if site.id != site_id {
        warn!(stored_id = %site.id, site_id, "Document id does not match its storage key");
        site.id = site_id.to_string();
    }
    site
}

/// Ids become file names, so only `[A-Za-z0-9_-]` is accepted
fn validate_site_id(site_id: &str) -> StoreResult<()> {
    let valid = !site_id.is_empty()
        && site_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidSiteId(site_id.to_string()))
    }
}

/// Load `site_id`, falling back to the default home page when nothing usable
/// is stored. Unreadable JSON also falls back; other failures are returned.
#[instrument(skip(store, registry))]
pub fn load_or_default(store: &dyn SiteStore, site_id: &str, registry: &BlockRegistry) -> StoreResult<SiteConfig> {
    match store.load(site_id) {
        Ok(Some(site)) => Ok(site),
        Ok(None) => {
            info!("No stored site, using default home page");
            Ok(default_site(site_id, registry))
        }
        Err(err) if err.is_corrupt() => {
            warn!(error = %err, "Stored site is unreadable, using default home page");
            Ok(default_site(site_id, registry))
        }
        Err(err) => Err(err),
    }
}

fn default_site(site_id: &str, registry: &BlockRegistry) -> SiteConfig {
    let mut site = default_home_page(registry);
    site.id = site_id.to_string();
    site
}
