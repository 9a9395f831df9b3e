//! Shelf configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `PARASHA_GAMES_API_BASE` | none | Data API endpoint (required to boot) |
//! | `PARASHA_GAMES_ASSET_BASE` | API base | Where game scripts and styles live |
//! | `PARASHA_GAMES_LABEL` | none | Content label of the current reading |
//! | `PARASHA_GAMES_VERSION_PATH` | `version.txt` | Version marker, relative to the asset base |
//! | `PARASHA_GAMES_LOG_PATH` | none | Log file; stderr when unset |
//! | `PARASHA_GAMES_DISABLED` | unset | `1` or `true` turns the shelf off |

pub const ENV_API_BASE: &str = "PARASHA_GAMES_API_BASE";
pub const ENV_ASSET_BASE: &str = "PARASHA_GAMES_ASSET_BASE";
pub const ENV_LABEL: &str = "PARASHA_GAMES_LABEL";
pub const ENV_VERSION_PATH: &str = "PARASHA_GAMES_VERSION_PATH";
pub const ENV_LOG_PATH: &str = "PARASHA_GAMES_LOG_PATH";
pub const ENV_DISABLED: &str = "PARASHA_GAMES_DISABLED";

pub const DEFAULT_VERSION_PATH: &str = "version.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    pub api_base: Option<String>,
    pub asset_base: Option<String>,
    pub content_label: Option<String>,
    pub version_path: String,
    pub log_path: Option<String>,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            asset_base: None,
            content_label: None,
            version_path: DEFAULT_VERSION_PATH.to_string(),
            log_path: None,
        }
    }
}

impl ShelfConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            api_base: get(ENV_API_BASE),
            asset_base: get(ENV_ASSET_BASE),
            content_label: get(ENV_LABEL),
            version_path: get(ENV_VERSION_PATH)
                .unwrap_or_else(|| DEFAULT_VERSION_PATH.to_string()),
            log_path: get(ENV_LOG_PATH),
        }
    }

    /// Where assets are served from; falls back to the API base.
    pub fn asset_base(&self) -> Option<&str> {
        self.asset_base.as_deref().or(self.api_base.as_deref())
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    pub fn with_asset_base(mut self, base: impl Into<String>) -> Self {
        self.asset_base = Some(base.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.content_label = Some(label.into());
        self
    }

    pub fn is_disabled() -> bool {
        std::env::var(ENV_DISABLED)
            .map(|v| flag_is_set(&v))
            .unwrap_or(false)
    }
}

fn flag_is_set(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true")
}
