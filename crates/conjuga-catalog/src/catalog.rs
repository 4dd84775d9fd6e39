//! Catalog lookup.

use std::collections::BTreeMap;

use conjuga_core::errors::{CatalogError, ConjugaError, ConjugaResult};
use conjuga_core::models::VerbTense;

use crate::item::ConjugationItem;
use crate::loader;

const BUILTIN_CATALOG: &str = include_str!("../data/verbs.toml");

/// Immutable conjugation table. Pairs iterate in sorted (verb, tense) order.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: BTreeMap<VerbTense, ConjugationItem>,
    tense_names: BTreeMap<String, String>,
}

impl Catalog {
    /// The bundled Portuguese catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Parse a catalog from TOML. Every tense list must hold exactly one
    /// form per pronoun slot and every tense needs a display name.
    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let loaded = loader::parse(source)?;
        tracing::debug!(
            pairs = loaded.items.len(),
            tenses = loaded.tense_names.len(),
            "conjugation catalog loaded"
        );
        Ok(Self {
            items: loaded.items,
            tense_names: loaded.tense_names,
        })
    }

    pub fn get(&self, verb: &str, tense: &str) -> Option<&ConjugationItem> {
        self.items.get(&VerbTense::new(verb, tense))
    }

    /// Like [`Catalog::get`] but reports a missing pair as `NotFound`.
    pub fn lookup(&self, verb: &str, tense: &str) -> ConjugaResult<&ConjugationItem> {
        self.get(verb, tense)
            .ok_or_else(|| ConjugaError::not_found(verb, tense))
    }

    pub fn contains(&self, pair: &VerbTense) -> bool {
        self.items.contains_key(pair)
    }

    /// Every (verb, tense) pair.
    pub fn pairs(&self) -> impl Iterator<Item = &VerbTense> {
        self.items.keys()
    }

    pub fn items(&self) -> impl Iterator<Item = &ConjugationItem> {
        self.items.values()
    }

    /// Display name of a tense, falling back to its key.
    pub fn tense_name<'a>(&'a self, tense: &'a str) -> &'a str {
        self.tense_names
            .get(tense)
            .map(String::as_str)
            .unwrap_or(tense)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
