use std::convert::Infallible;
use std::str::FromStr;

fn strip_quotes(input: &str) -> &str {
    input
        .trim()
        .trim_matches(|candidate| matches!(candidate, '"' | '\''))
}

/// Wrapper for single text values supplied via behaviour-driven test steps.
#[derive(Clone, Debug)]
pub struct StepText {
    raw: String,
}

impl FromStr for StepText {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            raw: strip_quotes(input).to_owned(),
        })
    }
}

impl StepText {
    /// Consumes the step value, yielding the parsed string.
    pub fn into_inner(self) -> String {
        self.raw
    }
}

/// Wrapper for comma-separated token lists supplied via test steps.
#[derive(Clone, Debug)]
pub struct StepTokens {
    tokens: Vec<String>,
}

impl FromStr for StepTokens {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let tokens = strip_quotes(input)
            .split(',')
            .map(|token| token.trim().to_owned())
            .filter(|token| !token.is_empty())
            .collect();

        Ok(Self { tokens })
    }
}

impl StepTokens {
    /// Consumes the step value, yielding the parsed token list.
    pub fn into_inner(self) -> Vec<String> {
        self.tokens
    }
}
