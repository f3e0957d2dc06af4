//! `HX-Location` redirect context
//!
//! A plain `HX-Location` value is just a path. When the redirect needs a
//! target, swap or extra request data, the header carries a JSON object that
//! the client hands to `htmx.ajax()`.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::swap::SwapStrategy;
use crate::error::Result;

/// Options for a client-side redirect via `HX-Location`
///
/// ```rust
/// use hx_directives::htmx::{LocationContext, SwapStrategy};
///
/// let context = LocationContext::new()
///     .target("#testdiv")
///     .swap(&SwapStrategy::OUTER_HTML);
/// # let _ = context;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[must_use]
pub struct LocationContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    handler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    swap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    select: Option<String>,
}

impl LocationContext {
    /// Empty context; only `path` will be sent
    pub fn new() -> Self {
        Self::default()
    }

    /// Source element of the request
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Event that "triggered" the request
    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// JavaScript callback that will handle the response HTML
    pub fn handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }

    /// Target to swap the response into
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// How the response will be swapped in relative to the target
    pub fn swap(mut self, swap: &SwapStrategy) -> Self {
        self.swap = Some(swap.to_header_value());
        self
    }

    /// Values to submit with the request, passed through as JSON
    pub fn values(mut self, values: Value) -> Self {
        self.values = Some(values);
        self
    }

    /// Adds a header to submit with the request
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Selects the content to swap from the response
    pub fn select(mut self, select: impl Into<String>) -> Self {
        self.select = Some(select.into());
        self
    }

    /// Renders the `HX-Location` JSON for `path`
    pub fn to_header_value(&self, path: &str) -> Result<String> {
        #[derive(Serialize)]
        struct Payload<'a> {
            path: &'a str,
            #[serde(flatten)]
            context: &'a LocationContext,
        }

        Ok(serde_json::to_string(&Payload {
            path,
            context: self,
        })?)
    }
}
