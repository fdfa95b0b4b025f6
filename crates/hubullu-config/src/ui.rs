use serde::{Deserialize, Serialize};

use crate::Vars;

fn default_max_backtranslations() -> usize {
    5
}

fn default_color() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Backtranslations shown per result line
    #[serde(default = "default_max_backtranslations")]
    pub max_backtranslations: usize,
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_backtranslations: default_max_backtranslations(),
            color: default_color(),
        }
    }
}

impl UiConfig {
    pub(crate) fn from_vars(vars: &Vars) -> Self {
        let max_backtranslations = vars("HUBULLU_MAX_BACKTRANSLATIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_backtranslations);

        // https://no-color.org
        let color = vars("NO_COLOR").is_none_or(|v| v.is_empty());

        Self {
            max_backtranslations,
            color,
        }
    }
}
