//! Embedded locale bundles: the shared loader, enumeration, and validation.
//!
//! The loader embeds the Fluent resources under `locales/` so display names
//! resolve without touching the filesystem at runtime. Lookups for locales
//! without an embedded bundle fall back to `en`.

use fluent_templates::{Loader, static_loader};
use once_cell::sync::Lazy;
use unic_langid::{LanguageIdentifier, langid};

static_loader! {
    pub(crate) static LOADER = {
        locales: "./locales",
        fallback_language: "en",
        // Retain Fluent's default Unicode isolating marks for bidi safety.
    };
}

/// BCP 47 tag of the locale used when a configuration does not name one.
pub const FALLBACK_LOCALE: &str = "en";

pub(crate) const FALLBACK_LANGUAGE: LanguageIdentifier = langid!("en");

static EMBEDDED_LOCALES: Lazy<Vec<String>> = Lazy::new(|| {
    let mut locales: Vec<String> = LOADER.locales().map(ToString::to_string).collect();
    locales.sort_unstable();
    locales
});

/// Return a sorted slice of the locales with an embedded bundle.
#[must_use]
pub fn available_locales() -> &'static [String] {
    EMBEDDED_LOCALES.as_slice()
}

/// Check whether a locale tag has an embedded bundle of its own.
///
/// Tags are canonicalised before the membership check, so case variants such
/// as `EN` match. Unparseable tags are simply unsupported.
#[must_use]
pub fn supports_locale(locale: &str) -> bool {
    locale
        .parse::<LanguageIdentifier>()
        .map(|identifier| {
            let canonical = identifier.to_string();
            EMBEDDED_LOCALES
                .iter()
                .any(|candidate| candidate == &canonical)
        })
        .unwrap_or(false)
}
