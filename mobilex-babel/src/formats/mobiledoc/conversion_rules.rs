use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which section decides the root's text direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RootDirectionRule {
    /// After every markup section, look at the first root child. This matches
    /// the output of the legacy converter byte for byte.
    #[default]
    FirstSection,
    /// After every markup section, look at the section just appended.
    AppendedSection,
}

impl RootDirectionRule {
    pub fn as_str(self) -> &'static str {
        match self {
            RootDirectionRule::FirstSection => "first-section",
            RootDirectionRule::AppendedSection => "appended-section",
        }
    }
}

impl fmt::Display for RootDirectionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RootDirectionRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-section" => Ok(RootDirectionRule::FirstSection),
            "appended-section" => Ok(RootDirectionRule::AppendedSection),
            other => Err(format!(
                "unknown root direction rule '{other}' (expected first-section or appended-section)"
            )),
        }
    }
}

/// Configuration for the mobiledoc converter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRules {
    /// How the root's `direction` is derived from its sections
    pub root_direction: RootDirectionRule,
}
