//! Formatter values: the tagged label type, the shared function type, and the
//! builtin formats registered by [`crate::Registry::with_builtins`].

use std::sync::Arc;

use crate::language::LanguageRecord;

/// Result of applying a format to a resolved language.
///
/// `Label` keeps the identifier the lookup resolved to as the option value.
/// `LabelAndValue` lets a format project a different value, for example the
/// ISO 639-3 code, while the shorter code was used for resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormattedLabel {
    /// Display label only; the resolved identifier remains the value.
    Label(String),
    /// Display label plus an overriding option value.
    LabelAndValue(String, String),
}

/// Shared formatter function stored in the registry.
///
/// Receives the resolved record and the canonical identifier it was resolved
/// under.
pub type FormatFn = Arc<dyn Fn(&LanguageRecord, &str) -> FormattedLabel + Send + Sync>;

/// Builtin `default` format: the localised display name.
pub(crate) fn default_format(record: &LanguageRecord, _code: &str) -> FormattedLabel {
    FormattedLabel::Label(record.name().to_owned())
}

/// Builtin `autonym` format: the language's own name, else the display name.
pub(crate) fn autonym_format(record: &LanguageRecord, _code: &str) -> FormattedLabel {
    let label = record.autonym().unwrap_or_else(|| record.name());
    FormattedLabel::Label(label.to_owned())
}

/// Builtin `alpha3` format: display name labelled, ISO 639-3 code as the
/// emitted value when the record carries one.
pub(crate) fn alpha3_format(record: &LanguageRecord, _code: &str) -> FormattedLabel {
    match record.alpha3() {
        Some(alpha3) => {
            FormattedLabel::LabelAndValue(record.name().to_owned(), alpha3.to_owned())
        }
        None => FormattedLabel::Label(record.name().to_owned()),
    }
}
