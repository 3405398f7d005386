//! Static catalog over the full ISO 639 table.

use isolang::Language;
use unic_langid::LanguageIdentifier;

use super::DataSource;
use crate::language::{LanguageRecord, ResolvedLanguage};

/// Locale-independent data source backed by the `isolang` table.
///
/// Identifiers are lowercase ISO 639-1 codes and display names are English.
/// Tokens resolve by alpha-2 code, then alpha-3 code, then English name; the
/// canonical identifier is always the alpha-2 code when the language has one.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsoCatalog;

impl IsoCatalog {
    fn lookup(token: &str) -> Option<Language> {
        let lower = token.to_ascii_lowercase();
        Language::from_639_1(&lower)
            .or_else(|| Language::from_639_3(&lower))
            .or_else(|| Language::from_name(token))
    }

    fn record(language: Language) -> LanguageRecord {
        let mut record = LanguageRecord::new(language.to_name()).with_alpha3(language.to_639_3());
        if let Some(autonym) = language.to_autonym() {
            record = record.with_autonym(autonym);
        }
        record
    }

    fn canonical_code(language: Language) -> String {
        language
            .to_639_1()
            .unwrap_or_else(|| language.to_639_3())
            .to_owned()
    }
}

impl DataSource for IsoCatalog {
    fn identifiers(&self, _locale: &LanguageIdentifier) -> Vec<String> {
        isolang::languages()
            .filter_map(|language| language.to_639_1())
            .map(str::to_owned)
            .collect()
    }

    fn resolve(&self, token: &str, _locale: &LanguageIdentifier) -> Option<ResolvedLanguage> {
        Self::lookup(token).map(|language| {
            ResolvedLanguage::new(Self::record(language), Self::canonical_code(language))
        })
    }
}
