use crate::shared::{HiveError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// `DD.DDD.DDD/DDDD-DD`, ASCII digits only in the D positions.
static TAX_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{3}\.[0-9]{3}/[0-9]{4}-[0-9]{2}$")
        .expect("tax id pattern is a valid regex")
});

/// NewType wrapper for a branch tax id with format validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxId(String);

impl TaxId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(HiveError::invalid("tax_id", "branch tax id must not be blank"));
        }

        if !TAX_ID_PATTERN.is_match(&value) {
            return Err(HiveError::invalid(
                "tax_id",
                format!(
                    "'{}' does not match the format DD.DDD.DDD/DDDD-DD",
                    value
                ),
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
