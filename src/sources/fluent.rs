//! Locale-aware catalog backed by the embedded Fluent bundles.

use fluent_templates::Loader;
use isolang::Language;
use unic_langid::LanguageIdentifier;

use super::DataSource;
use crate::language::{LanguageRecord, ResolvedLanguage};
use crate::locales::{FALLBACK_LANGUAGE, LOADER, supports_locale};

/// Identifiers shipped in the embedded bundles, uppercase ISO 639-1.
///
/// Every entry must have a matching `language-*` message in
/// `locales/en/languages.ftl`; the unit tests enforce this.
const CODES: &[&str] = &[
    "AR", "BG", "BN", "CA", "CH", "CS", "DA", "DE", "EL", "EN", "ES", "ET", "FI", "FR", "GA", "HE",
    "HI", "HR", "HU", "ID", "IS", "IT", "JA", "KO", "LT", "LV", "NL", "NO", "PL", "PT", "RO", "RU",
    "SK", "SL", "SV", "TH", "TR", "UK", "VI", "ZH", "ZU",
];

/// Locale-aware data source over the embedded bundles.
///
/// Identifiers are normalised to uppercase. Display names come from the
/// bundle for the requested locale, falling back to the `en` bundle; tokens
/// that are not identifiers are matched against the locale's display names.
#[derive(Clone, Copy, Debug, Default)]
pub struct FluentCatalog;

impl FluentCatalog {
    /// Clamp `locale` to an embedded bundle, falling back to `en` eagerly.
    fn effective_locale(locale: &LanguageIdentifier) -> LanguageIdentifier {
        if supports_locale(&locale.to_string()) {
            locale.clone()
        } else {
            FALLBACK_LANGUAGE
        }
    }

    fn display_name(code: &str, locale: &LanguageIdentifier) -> Option<String> {
        LOADER.try_lookup(&Self::effective_locale(locale), &format!("language-{code}"))
    }

    /// Derive the autonym from the bundle matching the language itself, when
    /// that bundle is embedded.
    fn autonym(code: &str) -> Option<String> {
        let tag = code.to_ascii_lowercase();
        if !supports_locale(&tag) {
            return None;
        }
        let own_locale: LanguageIdentifier = tag.parse().ok()?;
        Self::display_name(code, &own_locale)
    }

    fn record(code: &str, locale: &LanguageIdentifier) -> Option<LanguageRecord> {
        let mut record = LanguageRecord::new(Self::display_name(code, locale)?);
        if let Some(autonym) = Self::autonym(code) {
            record = record.with_autonym(autonym);
        }
        if let Some(language) = Language::from_639_1(&code.to_ascii_lowercase()) {
            record = record.with_alpha3(language.to_639_3());
        }
        Some(record)
    }
}

impl DataSource for FluentCatalog {
    fn identifiers(&self, _locale: &LanguageIdentifier) -> Vec<String> {
        CODES.iter().map(|code| (*code).to_owned()).collect()
    }

    fn resolve(&self, token: &str, locale: &LanguageIdentifier) -> Option<ResolvedLanguage> {
        let code = token.to_ascii_uppercase();
        if CODES.contains(&code.as_str()) {
            return Self::record(&code, locale)
                .map(|record| ResolvedLanguage::new(record, code.as_str()));
        }

        // Not an identifier: try the locale's display names.
        for candidate in CODES {
            if Self::display_name(candidate, locale).as_deref() == Some(token) {
                return Self::record(candidate, locale)
                    .map(|record| ResolvedLanguage::new(record, *candidate));
            }
        }

        None
    }
}
