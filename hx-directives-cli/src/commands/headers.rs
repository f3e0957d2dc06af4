//! `hxd headers`: print the headers a directive config produces

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use hx_directives::config::{DirectiveConfig, DEFAULT_CONFIG_FILE};

/// Output format for `hxd headers`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Name: value` lines (default)
    #[default]
    Text,
    /// JSON object with `status` and `headers`
    Json,
}

/// Loads a [`DirectiveConfig`] and renders its headers
#[derive(Debug, Clone)]
pub struct HeadersCommand {
    config: PathBuf,
    format: OutputFormat,
}

impl HeadersCommand {
    /// Create a new headers command; `None` reads `./hxd.toml`
    #[must_use]
    pub fn new(config: Option<PathBuf>, format: OutputFormat) -> Self {
        Self {
            config: config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)),
            format,
        }
    }

    /// Rendered output for an already loaded config
    pub fn render(&self, config: &DirectiveConfig) -> Result<String> {
        let response = config.to_response()?;
        let status = response.status()?;
        let headers: BTreeMap<String, String> = response
            .headers()?
            .iter()
            .map(|(name, value)| {
                (
                    display_name(name.as_str()),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let output = match self.format {
            OutputFormat::Text => {
                let mut lines = Vec::with_capacity(headers.len() + 1);
                if let Some(status) = status {
                    lines.push(format!("Status: {}", status.as_u16()));
                }
                lines.extend(headers.iter().map(|(name, value)| format!("{name}: {value}")));
                lines.join("\n")
            }
            OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
                "status": status.map(|status| status.as_u16()),
                "headers": headers,
            }))?,
        };
        Ok(output)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        let config = DirectiveConfig::load_from(&self.config)
            .with_context(|| format!("failed to load {}", self.config.display()))?;
        println!("{}", self.render(&config)?);
        Ok(())
    }
}

/// `hx-trigger-after-swap` -> `HX-Trigger-After-Swap`, `hx-push-url` -> `HX-Push-URL`
fn display_name(name: &str) -> String {
    name.split('-')
        .map(|part| match part {
            "hx" | "url" => part.to_ascii_uppercase(),
            _ => {
                let mut chars = part.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_ascii_uppercase().to_string() + chars.as_str()
                })
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
