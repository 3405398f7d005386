//! Pluggable resolution strategies for language identifiers.
//!
//! A data source owns the candidate identifier set for a locale and the
//! mapping from caller tokens to [`ResolvedLanguage`] values. Two builtin
//! sources ship with the crate: the locale-aware [`FluentCatalog`] backed by
//! the embedded bundles, and the static [`IsoCatalog`] over the full ISO 639
//! table. Host applications register further sources by name on the
//! [`crate::Registry`].

mod fluent;
mod iso;

pub use fluent::FluentCatalog;
pub use iso::IsoCatalog;

use unic_langid::LanguageIdentifier;

use crate::language::ResolvedLanguage;

/// Resolution strategy consulted by the option builder.
pub trait DataSource: Send + Sync {
    /// Full candidate identifier set for `locale`, before any filtering.
    fn identifiers(&self, locale: &LanguageIdentifier) -> Vec<String>;

    /// Resolve `token` to a record and canonical identifier.
    ///
    /// `token` may be an identifier or a display name; identifier matches win
    /// over display-name matches. Case handling is source-defined. `None`
    /// means the token is unknown to this source; callers translate that into
    /// [`crate::SelectError::LanguageNotFound`].
    fn resolve(&self, token: &str, locale: &LanguageIdentifier) -> Option<ResolvedLanguage>;
}
