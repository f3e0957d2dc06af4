//! Out-of-band swap support for HTMX
//!
//! Provides [`HxSwapOob`] for updating multiple page elements in a single response.
//! This is useful for patterns like:
//! - Updating a counter after adding an item
//! - Showing flash messages after form submission
//! - Refreshing related content across the page

use std::borrow::Cow;
use std::fmt::Write as _;

use axum::{
    http::header::CONTENT_TYPE,
    response::{Html, IntoResponse, Response},
};

use super::swap::SwapStrategy;

/// Out-of-band swap container
///
/// Collects multiple OOB swap targets into a single HTML response.
/// When returned from a handler, HTMX will update each target element
/// independently.
///
/// # Examples
///
/// ```rust
/// use hx_directives::htmx::{HxSwapOob, SwapStrategy};
///
/// let mut oob = HxSwapOob::new();
///
/// // Add multiple targets
/// oob.add("counter", "<span>42</span>", SwapStrategy::INNER_HTML);
/// oob.add("messages", r#"<div class="flash">Saved!</div>"#, SwapStrategy::BEFORE_END);
///
/// // Can also chain
/// let oob = HxSwapOob::new()
///     .with("header-title", "<h1>Updated</h1>", SwapStrategy::INNER_HTML)
///     .with("sidebar", "<nav>New nav</nav>", SwapStrategy::OUTER_HTML.transition(true));
/// ```
#[derive(Debug, Default, Clone)]
pub struct HxSwapOob {
    targets: Vec<OobTarget>,
    /// Primary content that's not part of OOB swap
    primary_content: Option<String>,
}

#[derive(Debug, Clone)]
struct OobTarget {
    id: String,
    content: String,
    strategy: SwapStrategy,
}

impl OobTarget {
    /// `hx-swap-oob` value; `"true"` already means innerHTML
    fn oob_value(&self) -> String {
        let value = self.strategy.to_header_value();
        match value.as_str() {
            "" | "innerHTML" => "true".to_owned(),
            _ => value,
        }
    }
}

fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '"', '<', '>']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

impl HxSwapOob {
    /// Create a new empty OOB swap container
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with primary content that will be rendered first
    ///
    /// The primary content is the main response body that will be swapped
    /// into the original target. OOB elements are appended after it.
    #[must_use]
    pub fn with_primary(content: impl Into<String>) -> Self {
        Self {
            targets: Vec::new(),
            primary_content: Some(content.into()),
        }
    }

    /// Set the primary content
    pub fn set_primary(&mut self, content: impl Into<String>) -> &mut Self {
        self.primary_content = Some(content.into());
        self
    }

    /// Add an out-of-band target
    ///
    /// # Arguments
    ///
    /// * `id` - The ID of the target element (without #)
    /// * `content` - The HTML content to swap
    /// * `strategy` - How to perform the swap, modifiers included
    pub fn add(
        &mut self,
        id: impl Into<String>,
        content: impl Into<String>,
        strategy: impl Into<SwapStrategy>,
    ) -> &mut Self {
        self.targets.push(OobTarget {
            id: id.into(),
            content: content.into(),
            strategy: strategy.into(),
        });
        self
    }

    /// Add an out-of-band target (builder pattern)
    #[must_use]
    pub fn with(
        mut self,
        id: impl Into<String>,
        content: impl Into<String>,
        strategy: impl Into<SwapStrategy>,
    ) -> Self {
        self.add(id, content, strategy);
        self
    }

    /// Add innerHTML swap (convenience method)
    pub fn inner_html(&mut self, id: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.add(id, content, SwapStrategy::INNER_HTML)
    }

    /// Add outerHTML swap (convenience method)
    pub fn outer_html(&mut self, id: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.add(id, content, SwapStrategy::OUTER_HTML)
    }

    /// Add beforeend swap (append content)
    pub fn append(&mut self, id: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.add(id, content, SwapStrategy::BEFORE_END)
    }

    /// Add afterbegin swap (prepend content)
    pub fn prepend(&mut self, id: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.add(id, content, SwapStrategy::AFTER_BEGIN)
    }

    /// Check if there are any OOB targets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty() && self.primary_content.is_none()
    }

    /// Get the number of OOB targets
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Render to HTML string
    #[must_use]
    pub fn render(&self) -> String {
        let mut html = self.primary_content.clone().unwrap_or_default();

        for target in &self.targets {
            // Writing to a String is infallible
            let _ = write!(
                html,
                r#"<div id="{}" hx-swap-oob="{}">{}</div>"#,
                escape_attr(&target.id),
                escape_attr(&target.oob_value()),
                target.content
            );
        }

        html
    }
}

impl IntoResponse for HxSwapOob {
    fn into_response(self) -> Response {
        let html = self.render();
        (
            [(CONTENT_TYPE, "text/html; charset=utf-8")],
            Html(html),
        )
            .into_response()
    }
}
