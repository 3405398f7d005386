//! Token resolution: turning caller tokens into formatted option entries.

use unic_langid::LanguageIdentifier;

use crate::collate;
use crate::error::SelectError;
use crate::format::{FormatFn, FormattedLabel};
use crate::sources::DataSource;

/// Intermediate option entry produced by the resolver.
///
/// `code` is the canonical identifier reported by the data source; `value`
/// equals `code` unless the format projected an alternate value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ResolvedOption {
    pub(crate) label: String,
    pub(crate) value: String,
    pub(crate) code: String,
}

/// Resolve `tokens` in order, formatting each into an option entry.
///
/// Fails on the first token the source cannot resolve; partial results are
/// discarded. With `sorted` the result is ordered by locale-collated label,
/// otherwise input order is preserved.
pub(crate) fn resolve_tokens<S>(
    source: &dyn DataSource,
    format: &FormatFn,
    tokens: &[S],
    locale: &LanguageIdentifier,
    sorted: bool,
) -> Result<Vec<ResolvedOption>, SelectError>
where
    S: AsRef<str>,
{
    let mut entries = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.as_ref();
        let resolved =
            source
                .resolve(token, locale)
                .ok_or_else(|| SelectError::LanguageNotFound {
                    token: token.to_owned(),
                })?;
        let (record, code) = resolved.into_parts();

        let entry = match format.as_ref()(&record, &code) {
            FormattedLabel::Label(label) => ResolvedOption {
                label,
                value: code.clone(),
                code,
            },
            FormattedLabel::LabelAndValue(label, value) => ResolvedOption { label, value, code },
        };
        entries.push(entry);
    }

    if sorted {
        collate::sort_by_label(&mut entries, locale);
    }

    Ok(entries)
}
