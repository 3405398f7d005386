//! Ordered, locale-aware option lists for language-selection controls.
//!
//! The crate turns a registry of known languages, a locale, and caller
//! preferences into the ordered `(label, value)` pairs a selection control
//! needs: include/exclude filtering, a caller-ordered priority block above a
//! disabled divider, pluggable display formats and data sources, and
//! locale-collated ordering. Rendering the entries into markup is the host
//! application's concern; every build is a pure function of its
//! configuration and the registry snapshot.
//!
//! # Examples
//!
//! ```
//! use language_select::{Registry, SelectConfig};
//!
//! let registry = Registry::with_builtins();
//! let options = SelectConfig::new().only(["DA", "DE"]).build(&registry)?;
//!
//! let labels: Vec<&str> = options.iter().map(|option| option.label()).collect();
//! assert_eq!(labels, ["Danish", "German"]);
//! # Ok::<(), language_select::SelectError>(())
//! ```

mod collate;
mod error;
mod format;
mod language;
mod locales;
mod options;
mod registry;
mod resolve;
mod sources;

pub use error::SelectError;
pub use format::{FormatFn, FormattedLabel};
pub use language::{LanguageRecord, ResolvedLanguage};
pub use locales::{FALLBACK_LOCALE, available_locales, supports_locale};
pub use options::{DEFAULT_DIVIDER, SelectConfig, SelectOption};
pub use registry::{DEFAULT_NAME, Registry};
pub use sources::{DataSource, FluentCatalog, IsoCatalog};
