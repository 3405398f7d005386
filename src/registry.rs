//! Named format and data-source tables consulted by the option builder.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::SelectError;
use crate::format::{self, FormatFn, FormattedLabel};
use crate::language::LanguageRecord;
use crate::sources::{DataSource, FluentCatalog, IsoCatalog};

/// Name the builtin format and data source are registered under.
pub const DEFAULT_NAME: &str = "default";

/// Registry of named formats and data sources.
///
/// The registry is an explicit instance owned by the host application and
/// passed to [`crate::SelectConfig::build`]; there is no ambient global
/// table. Host applications populate it once at startup and may extend it
/// before first use. Registration is additive and last-write-wins.
///
/// # Examples
///
/// ```
/// use language_select::{FormattedLabel, Registry};
///
/// let mut registry = Registry::with_builtins();
/// registry.register_format("shouty", |record, _code| {
///     FormattedLabel::Label(record.name().to_uppercase())
/// });
///
/// assert!(registry.format("shouty").is_ok());
/// assert!(registry.format("whispery").is_err());
/// ```
#[derive(Clone)]
pub struct Registry {
    formats: HashMap<String, FormatFn>,
    sources: HashMap<String, Arc<dyn DataSource>>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            formats: HashMap::new(),
            sources: HashMap::new(),
        }
    }

    /// Create a registry populated with the builtin formats and sources.
    ///
    /// Formats: `default` (localised display name), `autonym`, and `alpha3`
    /// (ISO 639-3 code projected as the option value). Sources: `default`
    /// (the embedded localised catalog) and `iso` (the full ISO 639 table).
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_format(DEFAULT_NAME, format::default_format);
        registry.register_format("autonym", format::autonym_format);
        registry.register_format("alpha3", format::alpha3_format);
        registry.register_source(DEFAULT_NAME, FluentCatalog);
        registry.register_source("iso", IsoCatalog);
        registry
    }

    /// Register `format` under `name`, replacing any previous entry.
    pub fn register_format<F>(&mut self, name: impl Into<String>, format: F)
    where
        F: Fn(&LanguageRecord, &str) -> FormattedLabel + Send + Sync + 'static,
    {
        self.formats.insert(name.into(), Arc::new(format));
    }

    /// Register `source` under `name`, replacing any previous entry.
    pub fn register_source(&mut self, name: impl Into<String>, source: impl DataSource + 'static) {
        self.sources.insert(name.into(), Arc::new(source));
    }

    /// Fetch the format registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::UnknownFormat`] when no format carries `name`.
    pub fn format(&self, name: &str) -> Result<FormatFn, SelectError> {
        self.formats
            .get(name)
            .cloned()
            .ok_or_else(|| SelectError::UnknownFormat {
                name: name.to_owned(),
            })
    }

    /// Fetch the data source registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::UnknownDataSource`] when no source carries
    /// `name`.
    pub fn source(&self, name: &str) -> Result<Arc<dyn DataSource>, SelectError> {
        self.sources
            .get(name)
            .cloned()
            .ok_or_else(|| SelectError::UnknownDataSource {
                name: name.to_owned(),
            })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use unic_langid::langid;

    #[rstest]
    fn builtins_are_registered() {
        let registry = Registry::with_builtins();

        assert!(registry.format(DEFAULT_NAME).is_ok());
        assert!(registry.format("autonym").is_ok());
        assert!(registry.format("alpha3").is_ok());
        assert!(registry.source(DEFAULT_NAME).is_ok());
        assert!(registry.source("iso").is_ok());
    }

    #[rstest]
    fn unknown_names_fail_fast() {
        let registry = Registry::new();

        assert_eq!(
            registry.format("default").err(),
            Some(SelectError::UnknownFormat {
                name: "default".into()
            })
        );
        assert_eq!(
            registry.source("default").err(),
            Some(SelectError::UnknownDataSource {
                name: "default".into()
            })
        );
    }

    #[rstest]
    fn registration_is_last_write_wins() {
        let mut registry = Registry::with_builtins();
        registry.register_format(DEFAULT_NAME, |record, _code| {
            FormattedLabel::Label(record.name().to_uppercase())
        });

        let format = registry
            .format(DEFAULT_NAME)
            .unwrap_or_else(|_| panic!("the default format should stay registered"));
        let formatted = format.as_ref()(&LanguageRecord::new("Danish"), "da");

        assert_eq!(formatted, FormattedLabel::Label("DANISH".into()));
    }

    #[rstest]
    fn custom_sources_are_reachable_by_name() {
        struct Empty;

        impl DataSource for Empty {
            fn identifiers(&self, _locale: &unic_langid::LanguageIdentifier) -> Vec<String> {
                Vec::new()
            }

            fn resolve(
                &self,
                _token: &str,
                _locale: &unic_langid::LanguageIdentifier,
            ) -> Option<crate::language::ResolvedLanguage> {
                None
            }
        }

        let mut registry = Registry::with_builtins();
        registry.register_source("empty", Empty);

        let source = registry
            .source("empty")
            .unwrap_or_else(|_| panic!("`empty` should be registered"));

        assert!(source.identifiers(&langid!("en")).is_empty());
    }
}
