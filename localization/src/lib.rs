//! # Localization
//!
//! Resolves (bundle, key, locale) to a display string. Lookups never fail: a missing bundle, a
//! missing key or a blank value all resolve to the key itself.
//!
//! Each (bundle, locale) pair is loaded from the [`BundleSource`] at most once and cached for the
//! process lifetime, misses included; bundle contents are deploy-time assets and never change.
//!
//! ## Bundle names used by the bot
//!
//! - `languages.bot.global`: bot-wide messages such as `command.cooldown.response`.
//! - `languages.commands.<command name>`: `command.name` and `command.description` per command.

mod source;

pub use source::{BundleSource, DirectorySource, InMemorySource};

use dashmap::DashMap;
use dbot_core::Locale;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::debug;

/// Bundle with bot-wide messages.
pub const GLOBAL_BUNDLE: &str = "languages.bot.global";

const COMMAND_BUNDLE_PREFIX: &str = "languages.commands";
const COMMAND_NAME_KEY: &str = "command.name";
const COMMAND_DESCRIPTION_KEY: &str = "command.description";

type Bundle = Option<Arc<HashMap<String, String>>>;

/// Cached string lookup over a [`BundleSource`].
pub struct Localizer {
    source: Box<dyn BundleSource>,
    cache: DashMap<(String, Locale), Bundle>,
}

impl Localizer {
    pub fn new(source: impl BundleSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: DashMap::new(),
        }
    }

    fn bundle(&self, bundle: &str, locale: Locale) -> Bundle {
        let cache_key = (bundle.to_string(), locale);
        if let Some(cached) = self.cache.get(&cache_key) {
            return cached.value().clone();
        }
        self.cache
            .entry(cache_key)
            .or_insert_with(|| {
                let loaded = self.source.load(bundle, locale).map(Arc::new);
                debug!(bundle = %bundle, locale = %locale, found = loaded.is_some(), "Loaded bundle");
                loaded
            })
            .value()
            .clone()
    }

    fn lookup(&self, bundle: &str, key: &str, locale: Locale) -> Option<String> {
        self.bundle(bundle, locale)?
            .get(key)
            .filter(|value| !value.trim().is_empty())
            .cloned()
    }

    /// The string for `key` in `locale`, or `key` itself when the bundle, the key or a non-blank value is missing.
    pub fn get(&self, bundle: &str, key: &str, locale: Locale) -> String {
        self.lookup(bundle, key, locale)
            .unwrap_or_else(|| key.to_string())
    }

    /// Like [`get`](Self::get), but tries [`Locale::DEFAULT`] before falling back to `key`.
    pub fn get_or_default(&self, bundle: &str, key: &str, locale: Locale) -> String {
        self.lookup(bundle, key, locale)
            .or_else(|| self.lookup(bundle, key, Locale::DEFAULT))
            .unwrap_or_else(|| key.to_string())
    }

    /// Every known locale the bundle has a resource for.
    pub fn available_locales(&self, bundle: &str) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|&locale| self.bundle(bundle, locale).is_some())
            .collect()
    }

    /// `key` in every known locale. Locales without their own non-blank value for `key` get the
    /// default-locale value, so the map always has [`Locale::ALL`]`.len()` entries.
    pub fn localized_map(&self, bundle: &str, key: &str) -> BTreeMap<Locale, String> {
        let fallback = self.get(bundle, key, Locale::DEFAULT);
        Locale::ALL
            .into_iter()
            .map(|locale| {
                let value = self
                    .lookup(bundle, key, locale)
                    .unwrap_or_else(|| fallback.clone());
                (locale, value)
            })
            .collect()
    }

    /// Localized names of a command, from `languages.commands.<command_name>`.
    pub fn command_names(&self, command_name: &str) -> BTreeMap<Locale, String> {
        self.localized_map(&command_bundle(command_name), COMMAND_NAME_KEY)
    }

    /// Localized descriptions of a command, from `languages.commands.<command_name>`.
    pub fn command_descriptions(&self, command_name: &str) -> BTreeMap<Locale, String> {
        self.localized_map(&command_bundle(command_name), COMMAND_DESCRIPTION_KEY)
    }
}

/// Bundle name holding a command's localized name and description.
pub fn command_bundle(command_name: &str) -> String {
    format!("{}.{}", COMMAND_BUNDLE_PREFIX, command_name)
}
