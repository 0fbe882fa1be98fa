use crate::error::RenderError;
use serde::{Deserialize, Serialize};

///
/// Placeholder
///
/// Bind-parameter syntax of the target database.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// `?` (SQLite, MySQL).
    #[default]
    Question,

    /// `$1`, `$2`, ... (PostgreSQL).
    Numbered,
}

///
/// RenderConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub placeholder: Placeholder,
    pub quote_identifiers: bool,
}

impl RenderConfig {
    /// Parse a config from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            placeholder: Placeholder::default(),
            quote_identifiers: true,
        }
    }
}
