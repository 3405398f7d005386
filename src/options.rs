//! Option-list construction: filtering, the priority block, and selection
//! flags.

use std::collections::HashSet;

use log::debug;
use unic_langid::LanguageIdentifier;

use crate::error::SelectError;
use crate::locales::FALLBACK_LANGUAGE;
use crate::registry::{DEFAULT_NAME, Registry};
use crate::resolve::{self, ResolvedOption};
use crate::sources::DataSource;

/// Divider label used when the caller does not configure one.
pub const DEFAULT_DIVIDER: &str = "---------------";

/// A single entry in the final option list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    label: String,
    value: String,
    selected: bool,
    disabled: bool,
}

impl SelectOption {
    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Option value submitted by the control.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the entry should render selected.
    #[must_use]
    pub const fn selected(&self) -> bool {
        self.selected
    }

    /// Whether the entry should render disabled. Always true for the divider.
    #[must_use]
    pub const fn disabled(&self) -> bool {
        self.disabled
    }
}

/// Configuration for one option-list build.
///
/// Setters consume and return the configuration so calls chain; the
/// configuration itself is plain data and can be reused across builds.
///
/// # Examples
///
/// ```
/// use language_select::{Registry, SelectConfig};
///
/// let registry = Registry::with_builtins();
/// let options = SelectConfig::new()
///     .source("iso")
///     .priority_languages(["lv", "en", "da"])
///     .selected("en")
///     .build(&registry)?;
///
/// assert_eq!(options[0].label(), "Latvian");
/// assert!(options[1].selected());
/// assert!(options[3].disabled());
/// # Ok::<(), language_select::SelectError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SelectConfig {
    locale: Option<LanguageIdentifier>,
    only: Option<Vec<String>>,
    except: Option<Vec<String>>,
    format: String,
    source: String,
    priority: Vec<String>,
    divider: String,
    selected: Vec<String>,
    disabled: Option<String>,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectConfig {
    /// Create a configuration with the builtin defaults: the `default`
    /// format and data source, the `en` locale, a fifteen-hyphen divider,
    /// and nothing filtered, prioritised, selected, or disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locale: None,
            only: None,
            except: None,
            format: DEFAULT_NAME.to_owned(),
            source: DEFAULT_NAME.to_owned(),
            priority: Vec::new(),
            divider: DEFAULT_DIVIDER.to_owned(),
            selected: Vec::new(),
            disabled: None,
        }
    }

    /// Locale used for display names and collation.
    #[must_use]
    pub fn locale(mut self, locale: LanguageIdentifier) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Restrict the candidate set to these identifiers or names.
    ///
    /// When both `only` and `except` are supplied, `only` wins and `except`
    /// is ignored. Unknown tokens abort the build with
    /// [`SelectError::LanguageNotFound`].
    #[must_use]
    pub fn only<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only = Some(tokens.into_iter().map(Into::into).collect());
        self
    }

    /// Remove these identifiers or names from the candidate set.
    ///
    /// Ignored when [`SelectConfig::only`] is also supplied.
    #[must_use]
    pub fn except<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.except = Some(tokens.into_iter().map(Into::into).collect());
        self
    }

    /// Format name, resolved against the registry at build time.
    #[must_use]
    pub fn format(mut self, name: impl Into<String>) -> Self {
        self.format = name.into();
        self
    }

    /// Data-source name, resolved against the registry at build time.
    #[must_use]
    pub fn source(mut self, name: impl Into<String>) -> Self {
        self.source = name.into();
        self
    }

    /// Languages surfaced above the divider, kept in the given order.
    #[must_use]
    pub fn priority_languages<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Label (and value) of the synthetic divider entry.
    #[must_use]
    pub fn priority_divider(mut self, divider: impl Into<String>) -> Self {
        self.divider = divider.into();
        self
    }

    /// Mark a single value selected.
    ///
    /// The selection is always a collection; repeated calls and
    /// [`SelectConfig::selected_all`] accumulate.
    #[must_use]
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected.push(value.into());
        self
    }

    /// Mark every value in `values` selected.
    #[must_use]
    pub fn selected_all<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected.extend(values.into_iter().map(Into::into));
        self
    }

    /// Value to render disabled.
    #[must_use]
    pub fn disabled(mut self, value: impl Into<String>) -> Self {
        self.disabled = Some(value.into());
        self
    }

    /// Build the ordered option list described by this configuration.
    ///
    /// Without priority languages the result is the filtered candidate set,
    /// collated by label. With priority languages the result is the priority
    /// entries in caller order, the disabled divider, then the collated
    /// remainder with the priority values filtered out; a selected priority
    /// value is marked selected only above the divider.
    ///
    /// # Errors
    ///
    /// [`SelectError::UnknownFormat`] or [`SelectError::UnknownDataSource`]
    /// when the configured names are not registered, raised before any
    /// resolution work; [`SelectError::LanguageNotFound`] for the first token
    /// that does not resolve, in which case no partial list is returned.
    pub fn build(&self, registry: &Registry) -> Result<Vec<SelectOption>, SelectError> {
        let source = registry.source(&self.source)?;
        let format = registry.format(&self.format)?;
        let locale = self.locale.clone().unwrap_or(FALLBACK_LANGUAGE);

        let candidates = self.candidate_codes(source.as_ref(), &locale)?;
        debug!(
            target: "language_select::options",
            "building {} candidate options for `{locale}` via `{}`/`{}`",
            candidates.len(),
            self.source,
            self.format,
        );

        if self.priority.is_empty() {
            let entries =
                resolve::resolve_tokens(source.as_ref(), &format, &candidates, &locale, true)?;
            return Ok(entries
                .into_iter()
                .map(|entry| self.tag(entry, &self.selected))
                .collect());
        }

        let priority =
            resolve::resolve_tokens(source.as_ref(), &format, &self.priority, &locale, false)?;

        let priority_codes: HashSet<String> =
            priority.iter().map(|entry| entry.code.clone()).collect();
        let priority_values: HashSet<String> =
            priority.iter().map(|entry| entry.value.clone()).collect();

        let remaining_codes: Vec<String> = candidates
            .into_iter()
            .filter(|code| !priority_codes.contains(code))
            .collect();

        // A value selected above the divider must not be selected again in
        // the remainder.
        let remaining_selected: Vec<String> = self
            .selected
            .iter()
            .filter(|value| !priority_values.contains(value.as_str()))
            .cloned()
            .collect();

        let remaining =
            resolve::resolve_tokens(source.as_ref(), &format, &remaining_codes, &locale, true)?;

        let mut options = Vec::with_capacity(priority.len() + remaining.len() + 1);
        options.extend(
            priority
                .into_iter()
                .map(|entry| self.tag(entry, &self.selected)),
        );
        options.push(self.divider_option());
        options.extend(
            remaining
                .into_iter()
                .map(|entry| self.tag(entry, &remaining_selected)),
        );

        Ok(options)
    }

    /// Candidate identifier set for `locale`, after `only`/`except`.
    ///
    /// Filter tokens are resolved through the source so display names are
    /// accepted and unknown tokens abort rather than silently filtering.
    fn candidate_codes(
        &self,
        source: &dyn DataSource,
        locale: &LanguageIdentifier,
    ) -> Result<Vec<String>, SelectError> {
        let mut codes = source.identifiers(locale);

        if let Some(only) = &self.only {
            let keep = Self::resolve_filter(source, only, locale)?;
            codes.retain(|code| keep.contains(code));
        } else if let Some(except) = &self.except {
            let drop = Self::resolve_filter(source, except, locale)?;
            codes.retain(|code| !drop.contains(code));
        }

        Ok(codes)
    }

    fn resolve_filter(
        source: &dyn DataSource,
        tokens: &[String],
        locale: &LanguageIdentifier,
    ) -> Result<HashSet<String>, SelectError> {
        tokens
            .iter()
            .map(|token| {
                source
                    .resolve(token, locale)
                    .map(|resolved| resolved.code().to_owned())
                    .ok_or_else(|| SelectError::LanguageNotFound {
                        token: token.clone(),
                    })
            })
            .collect()
    }

    fn tag(&self, entry: ResolvedOption, selected: &[String]) -> SelectOption {
        SelectOption {
            selected: selected.iter().any(|value| value == &entry.value),
            disabled: self.disabled.as_deref() == Some(entry.value.as_str()),
            label: entry.label,
            value: entry.value,
        }
    }

    fn divider_option(&self) -> SelectOption {
        SelectOption {
            label: self.divider.clone(),
            value: self.divider.clone(),
            selected: false,
            disabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use unic_langid::langid;

    #[fixture]
    fn registry() -> Registry {
        Registry::with_builtins()
    }

    fn labels(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(SelectOption::label).collect()
    }

    fn build(config: SelectConfig, registry: &Registry) -> Vec<SelectOption> {
        config
            .build(registry)
            .unwrap_or_else(|error| panic!("build should succeed: {error}"))
    }

    #[rstest]
    fn only_restricts_and_collates(registry: Registry) {
        let options = build(SelectConfig::new().only(["DA", "DE"]), &registry);

        assert_eq!(labels(&options), ["Danish", "German"]);
        assert_eq!(options[0].value(), "DA");
        assert_eq!(options[1].value(), "DE");
        assert!(options.iter().all(|option| !option.selected()));
        assert!(options.iter().all(|option| !option.disabled()));
    }

    #[rstest]
    fn except_removes_entries(registry: Registry) {
        let options = build(SelectConfig::new().except(["EN"]), &registry);

        assert!(options.iter().all(|option| option.value() != "EN"));
        assert!(!options.is_empty());
    }

    #[rstest]
    fn only_wins_over_except(registry: Registry) {
        let options = build(
            SelectConfig::new().only(["DA", "DE"]).except(["DA"]),
            &registry,
        );

        assert_eq!(labels(&options), ["Danish", "German"]);
    }

    #[rstest]
    fn full_list_covers_candidates_exactly_once(registry: Registry) {
        let options = build(SelectConfig::new(), &registry);
        let mut values: Vec<&str> = options.iter().map(SelectOption::value).collect();
        let total = values.len();
        values.sort_unstable();
        values.dedup();

        assert_eq!(values.len(), total);
        assert_eq!(total, 41);
    }

    #[rstest]
    fn builds_are_idempotent(registry: Registry) {
        let config = SelectConfig::new()
            .source("iso")
            .priority_languages(["lv", "en"])
            .selected("en");

        assert_eq!(build(config.clone(), &registry), build(config, &registry));
    }

    #[rstest]
    fn priority_block_precedes_divider_in_caller_order(registry: Registry) {
        let options = build(
            SelectConfig::new()
                .source("iso")
                .priority_languages(["lv", "en", "da"])
                .selected("en"),
            &registry,
        );

        assert_eq!(options[0].label(), "Latvian");
        assert_eq!(options[0].value(), "lv");
        assert_eq!(options[1].label(), "English");
        assert!(options[1].selected());
        assert_eq!(options[2].label(), "Danish");
        assert_eq!(options[3].label(), DEFAULT_DIVIDER);
        assert_eq!(options[3].value(), DEFAULT_DIVIDER);
        assert!(options[3].disabled());
        assert!(!options[3].selected());
    }

    #[rstest]
    fn remainder_excludes_priority_values(registry: Registry) {
        let options = build(
            SelectConfig::new()
                .source("iso")
                .only(["da", "de", "en", "es", "lv"])
                .priority_languages(["lv", "en"]),
            &registry,
        );

        assert_eq!(
            labels(&options),
            ["Latvian", "English", DEFAULT_DIVIDER, "Danish", "German", "Spanish"]
        );
        assert!(
            options[3..]
                .iter()
                .all(|option| !matches!(option.value(), "lv" | "en"))
        );
    }

    #[rstest]
    fn selected_priority_value_is_marked_exactly_once(registry: Registry) {
        let options = build(
            SelectConfig::new()
                .priority_languages(["LV", "EN", "ES"])
                .selected_all(["ZU", "EN"]),
            &registry,
        );

        let selected: Vec<&str> = options
            .iter()
            .filter(|option| option.selected())
            .map(SelectOption::value)
            .collect();
        assert_eq!(selected, ["EN", "ZU"]);

        let english: Vec<usize> = options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.value() == "EN")
            .map(|(index, _)| index)
            .collect();
        assert_eq!(english.len(), 1);
        assert!(english[0] < 3);
    }

    #[rstest]
    fn locale_localises_labels(registry: Registry) {
        let options = build(
            SelectConfig::new().locale(langid!("fr")).only(["EN"]),
            &registry,
        );

        assert_eq!(labels(&options), ["anglais"]);
        assert_eq!(options[0].value(), "EN");
    }

    #[rstest]
    fn collation_respects_the_locale(registry: Registry) {
        let options = build(
            SelectConfig::new()
                .locale(langid!("es"))
                .only(["DE", "AR", "ZU"]),
            &registry,
        );

        assert_eq!(labels(&options), ["Alemán", "Árabe", "Zulú"]);
    }

    #[rstest]
    fn custom_divider_is_used(registry: Registry) {
        let options = build(
            SelectConfig::new()
                .source("iso")
                .priority_languages(["en"])
                .priority_divider("= = ="),
            &registry,
        );

        assert_eq!(options[1].label(), "= = =");
        assert!(options[1].disabled());
    }

    #[rstest]
    fn disabled_marker_is_tagged(registry: Registry) {
        let options = build(
            SelectConfig::new().only(["DA", "DE"]).disabled("DE"),
            &registry,
        );

        assert!(!options[0].disabled());
        assert!(options[1].disabled());
    }

    #[rstest]
    #[case(SelectConfig::new().only(["DA", "Freedonia"]))]
    #[case(SelectConfig::new().except(["Freedonia"]))]
    #[case(SelectConfig::new().priority_languages(["EN", "Freedonia"]))]
    fn unresolvable_tokens_abort_the_build(registry: Registry, #[case] config: SelectConfig) {
        assert_eq!(
            config.build(&registry),
            Err(SelectError::LanguageNotFound {
                token: "Freedonia".into()
            })
        );
    }

    #[rstest]
    fn unknown_names_fail_before_resolution(registry: Registry) {
        assert_eq!(
            SelectConfig::new().format("shouty").build(&registry),
            Err(SelectError::UnknownFormat {
                name: "shouty".into()
            })
        );
        assert_eq!(
            SelectConfig::new().source("galactic").build(&registry),
            Err(SelectError::UnknownDataSource {
                name: "galactic".into()
            })
        );
    }

    #[rstest]
    fn names_are_accepted_in_filters(registry: Registry) {
        let options = build(SelectConfig::new().only(["Danish", "German"]), &registry);

        assert_eq!(labels(&options), ["Danish", "German"]);
    }

    #[rstest]
    fn alpha3_format_projects_values(registry: Registry) {
        let options = build(
            SelectConfig::new()
                .source("iso")
                .format("alpha3")
                .only(["da"]),
            &registry,
        );

        assert_eq!(options[0].label(), "Danish");
        assert_eq!(options[0].value(), "dan");
    }
}
