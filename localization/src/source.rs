//! Where bundle contents come from.

use dbot_core::Locale;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Loads one bundle in one locale. `None` means the bundle has no resource for that locale.
pub trait BundleSource: Send + Sync {
    fn load(&self, bundle: &str, locale: Locale) -> Option<HashMap<String, String>>;
}

/// Reads `<root>/<bundle with '.' as '/'>/<locale tag>.json`, each a flat JSON object of strings.
///
/// e.g. bundle `languages.bot.global` in `de` is `<root>/languages/bot/global/de.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn bundle_path(&self, bundle: &str, locale: Locale) -> PathBuf {
        let mut path = self.root.clone();
        for segment in bundle.split('.') {
            path.push(segment);
        }
        path.push(format!("{}.json", locale.tag()));
        path
    }
}

impl BundleSource for DirectorySource {
    fn load(&self, bundle: &str, locale: Locale) -> Option<HashMap<String, String>> {
        if locale == Locale::Unknown {
            return None;
        }
        let path = self.bundle_path(bundle, locale);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read bundle");
                return None;
            }
        };
        match serde_json::from_str::<HashMap<String, String>>(&raw) {
            Ok(entries) => Some(entries),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Invalid bundle file, ignoring");
                None
            }
        }
    }
}

/// Bundles built in code.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    bundles: HashMap<(String, Locale), HashMap<String, String>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a bundle in one locale.
    pub fn with_bundle<K, V>(
        mut self,
        bundle: impl Into<String>,
        locale: Locale,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.bundles.insert((bundle.into(), locale), entries);
        self
    }
}

impl BundleSource for InMemorySource {
    fn load(&self, bundle: &str, locale: Locale) -> Option<HashMap<String, String>> {
        self.bundles.get(&(bundle.to_string(), locale)).cloned()
    }
}
