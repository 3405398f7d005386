//! Locale-aware ordering of option labels.

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use log::warn;
use unic_langid::LanguageIdentifier;

use crate::resolve::ResolvedOption;

/// Sort entries in place by display label using locale-tailored collation.
///
/// Entries with equal labels tie-break on value so the order is
/// deterministic. When the locale tag does not parse as a collation locale or
/// no collator can be constructed, the sort degrades to lexicographic order
/// with a warning.
pub(crate) fn sort_by_label(entries: &mut [ResolvedOption], locale: &LanguageIdentifier) {
    match collator_for(locale) {
        Some(collator) => entries.sort_by(|a, b| {
            collator
                .compare(&a.label, &b.label)
                .then_with(|| a.value.cmp(&b.value))
        }),
        None => entries.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.value.cmp(&b.value))),
    }
}

fn collator_for(locale: &LanguageIdentifier) -> Option<Collator> {
    let tag = locale.to_string();
    let parsed: Locale = match tag.parse() {
        Ok(parsed) => parsed,
        Err(error) => {
            warn!(
                target: "language_select::collate",
                "`{tag}` is not a valid collation locale ({error}); using lexicographic order",
            );
            return None;
        }
    };

    match Collator::try_new(&parsed.into(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(error) => {
            warn!(
                target: "language_select::collate",
                "no collation data for `{tag}` ({error}); using lexicographic order",
            );
            None
        }
    }
}
