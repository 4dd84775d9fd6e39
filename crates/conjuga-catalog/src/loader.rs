//! TOML parsing for catalogs.
//!
//! Layout: a `[tenses]` table of display names and one `[verbs.<verb>]`
//! table per verb mapping tense keys to four-element form lists.

use std::collections::BTreeMap;

use serde::Deserialize;

use conjuga_core::errors::CatalogError;
use conjuga_core::models::{PronounSlot, VerbTense};

use crate::item::ConjugationItem;

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    tenses: BTreeMap<String, String>,
    #[serde(default)]
    verbs: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

/// Parsed and validated catalog contents.
pub(crate) struct LoadedCatalog {
    pub items: BTreeMap<VerbTense, ConjugationItem>,
    pub tense_names: BTreeMap<String, String>,
}

pub(crate) fn parse(source: &str) -> Result<LoadedCatalog, CatalogError> {
    let raw: RawCatalog = toml::from_str(source).map_err(|e| CatalogError::ParseFailed {
        reason: e.to_string(),
    })?;

    if raw.verbs.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut items = BTreeMap::new();
    for (verb, tenses) in raw.verbs {
        for (tense, forms) in tenses {
            if !raw.tenses.contains_key(&tense) {
                return Err(CatalogError::UnknownTense { verb, tense });
            }
            let count = forms.len();
            let forms: [String; PronounSlot::COUNT] =
                forms.try_into().map_err(|_| CatalogError::WrongFormCount {
                    verb: verb.clone(),
                    tense: tense.clone(),
                    count,
                    expected: PronounSlot::COUNT,
                })?;
            let item = ConjugationItem {
                verb: verb.clone(),
                tense: tense.clone(),
                forms,
            };
            items.insert(item.pair(), item);
        }
    }

    Ok(LoadedCatalog {
        items,
        tense_names: raw.tenses,
    })
}
