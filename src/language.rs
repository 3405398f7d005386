//! Resolved language representations shared by data sources and formats.

/// Localised representation of a language as returned by a data source.
///
/// Carries the display name for the locale the lookup ran under, plus the
/// optional alternates formats may project into labels or values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageRecord {
    name: String,
    autonym: Option<String>,
    alpha3: Option<String>,
}

impl LanguageRecord {
    /// Construct a record carrying only a display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            autonym: None,
            alpha3: None,
        }
    }

    /// Attach the language's name in the language itself.
    #[must_use]
    pub fn with_autonym(mut self, autonym: impl Into<String>) -> Self {
        self.autonym = Some(autonym.into());
        self
    }

    /// Attach the ISO 639-3 projection of the identifier.
    #[must_use]
    pub fn with_alpha3(mut self, alpha3: impl Into<String>) -> Self {
        self.alpha3 = Some(alpha3.into());
        self
    }

    /// Localised display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The language's own name, when known.
    #[must_use]
    pub fn autonym(&self) -> Option<&str> {
        self.autonym.as_deref()
    }

    /// ISO 639-3 code, when known.
    #[must_use]
    pub fn alpha3(&self) -> Option<&str> {
        self.alpha3.as_deref()
    }
}

/// A record paired with the canonical identifier a data source resolved to.
///
/// The canonical identifier may differ from the token the caller supplied:
/// resolving a display name or an alternate code yields the registry's
/// preferred identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedLanguage {
    record: LanguageRecord,
    code: String,
}

impl ResolvedLanguage {
    /// Pair `record` with its canonical identifier.
    #[must_use]
    pub fn new(record: LanguageRecord, code: impl Into<String>) -> Self {
        Self {
            record,
            code: code.into(),
        }
    }

    /// The resolved record.
    #[must_use]
    pub fn record(&self) -> &LanguageRecord {
        &self.record
    }

    /// The canonical identifier.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Consume the resolution, yielding the record and identifier.
    #[must_use]
    pub fn into_parts(self) -> (LanguageRecord, String) {
        (self.record, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn record_defaults_to_no_alternates() {
        let record = LanguageRecord::new("Danish");

        assert_eq!(record.name(), "Danish");
        assert_eq!(record.autonym(), None);
        assert_eq!(record.alpha3(), None);
    }

    #[rstest]
    fn record_carries_alternates() {
        let record = LanguageRecord::new("Danish")
            .with_autonym("dansk")
            .with_alpha3("dan");

        assert_eq!(record.autonym(), Some("dansk"));
        assert_eq!(record.alpha3(), Some("dan"));
    }

    #[rstest]
    fn resolution_splits_into_parts() {
        let resolved = ResolvedLanguage::new(LanguageRecord::new("Danish"), "da");
        assert_eq!(resolved.code(), "da");

        let (record, code) = resolved.into_parts();
        assert_eq!(record.name(), "Danish");
        assert_eq!(code, "da");
    }
}
