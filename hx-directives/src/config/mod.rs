//! Declarative response directives
//!
//! A [`DirectiveConfig`] describes an [`HxResponse`] in data, so canned
//! responses can live in a TOML file. Sources are merged with clear
//! precedence:
//!
//! 1. Environment variables (highest priority, `HXD_` prefix)
//! 2. The TOML file (`./hxd.toml` unless a path is given)
//! 3. Hardcoded defaults (no directives)
//!
//! # Example Configuration
//!
//! ```toml
//! # hxd.toml
//! status = 286
//! retarget = "#errors"
//! reswap = "beforeend scroll:window:bottom"
//! push_url = "false"
//!
//! [[triggers]]
//! name = "formInvalid"
//!
//! [[triggers_after_settle]]
//! name = "showMessage"
//! detail = { level = "warn", message = "Check the highlighted fields" }
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use hx_directives::config::DirectiveConfig;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = DirectiveConfig::load_from("./config/invalid-form.toml")?;
//! let response = config.to_response()?;
//! # let _ = response;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::htmx::{HxResponse, SwapStrategy, Trigger};

/// Default file read by [`DirectiveConfig::load`]
pub const DEFAULT_CONFIG_FILE: &str = "hxd.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "HXD_";

/// One event in a trigger list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Event name
    pub name: String,

    /// Optional detail, any JSON-compatible value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl TriggerConfig {
    fn to_trigger(&self) -> Result<Trigger> {
        match &self.detail {
            None => Ok(Trigger::event(&self.name)),
            Some(detail) => Trigger::object(&self.name, detail),
        }
    }
}

/// Response directives loaded from configuration
///
/// `push_url` and `replace_url` accept `"false"` to prevent history
/// updates, as the headers themselves do. String fields also take bare
/// booleans and numbers, which is how `HXD_*` variables arrive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectiveConfig {
    /// HTTP status code
    pub status: Option<u16>,

    /// `HX-Location` path
    #[serde(deserialize_with = "lenient_string")]
    pub location: Option<String>,

    /// `HX-Redirect` target
    #[serde(deserialize_with = "lenient_string")]
    pub redirect: Option<String>,

    /// `HX-Push-Url` value
    #[serde(deserialize_with = "lenient_string")]
    pub push_url: Option<String>,

    /// `HX-Replace-Url` value
    #[serde(deserialize_with = "lenient_string")]
    pub replace_url: Option<String>,

    /// `HX-Refresh` flag
    pub refresh: Option<bool>,

    /// `HX-Retarget` selector
    #[serde(deserialize_with = "lenient_string")]
    pub retarget: Option<String>,

    /// `HX-Reselect` selector
    #[serde(deserialize_with = "lenient_string")]
    pub reselect: Option<String>,

    /// `HX-Reswap` expression, validated on load
    pub reswap: Option<SwapStrategy>,

    /// `HX-Trigger` events
    pub triggers: Vec<TriggerConfig>,

    /// `HX-Trigger-After-Settle` events
    pub triggers_after_settle: Vec<TriggerConfig>,

    /// `HX-Trigger-After-Swap` events
    pub triggers_after_swap: Vec<TriggerConfig>,
}

impl DirectiveConfig {
    /// Load from `./hxd.toml` and `HXD_*` environment variables
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load from a specific file, then `HXD_*` environment variables
    ///
    /// A missing file contributes nothing. Relative paths are searched for in
    /// the working directory and its parents.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use hx_directives::config::DirectiveConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = DirectiveConfig::load_from("./config/redirect.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = Self::figment(path.as_ref()).extract()?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "loaded directive config");
        Ok(config)
    }

    /// Provider stack used by [`DirectiveConfig::load_from`]
    #[must_use]
    pub fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Builds the response these directives describe
    pub fn to_response(&self) -> Result<HxResponse> {
        let mut response = HxResponse::new();

        if let Some(status) = self.status {
            response = response.status_code(status);
        }
        if let Some(location) = &self.location {
            response = response.location(location);
        }
        if let Some(redirect) = &self.redirect {
            response = response.redirect(redirect);
        }
        if let Some(url) = &self.push_url {
            response = response.push_url(url);
        }
        if let Some(url) = &self.replace_url {
            response = response.replace_url(url);
        }
        if let Some(refresh) = self.refresh {
            response = response.refresh(refresh);
        }
        if let Some(selector) = &self.retarget {
            response = response.retarget(selector);
        }
        if let Some(selector) = &self.reselect {
            response = response.reselect(selector);
        }
        if let Some(swap) = &self.reswap {
            response = response.reswap(swap.clone());
        }

        Ok(response
            .add_trigger(to_triggers(&self.triggers)?)
            .add_trigger_after_settle(to_triggers(&self.triggers_after_settle)?)
            .add_trigger_after_swap(to_triggers(&self.triggers_after_swap)?))
    }
}

/// Accepts a string, boolean or number and keeps its text form
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        String(String),
        Bool(bool),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::String(value) => value,
        Scalar::Bool(value) => value.to_string(),
        Scalar::Unsigned(value) => value.to_string(),
        Scalar::Signed(value) => value.to_string(),
        Scalar::Float(value) => value.to_string(),
    }))
}

fn to_triggers(configs: &[TriggerConfig]) -> Result<Vec<Trigger>> {
    configs.iter().map(TriggerConfig::to_trigger).collect()
}
