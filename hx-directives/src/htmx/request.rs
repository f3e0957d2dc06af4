//! Inspecting HTMX request headers
//!
//! [`HtmxRequestExt`] adds getters to anything that carries a
//! [`HeaderMap`]. [`HxRequestInfo`] collects them all at once and can be used
//! as an axum extractor.
//!
//! ```rust
//! use hx_directives::htmx::HtmxRequestExt;
//!
//! let request = http::Request::builder()
//!     .header("HX-Request", "true")
//!     .header("HX-Target", "todo-list")
//!     .body(())
//!     .unwrap();
//!
//! assert!(request.is_htmx());
//! assert_eq!(request.target(), Some("todo-list"));
//! assert_eq!(request.prompt(), None);
//! ```

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use http::{request::Parts, HeaderMap, HeaderName, Request};

use super::headers::{
    HX_BOOSTED, HX_CURRENT_URL, HX_HISTORY_RESTORE_REQUEST, HX_PROMPT, HX_REQUEST, HX_TARGET,
    HX_TRIGGER, HX_TRIGGER_NAME,
};

fn flag(headers: &HeaderMap, name: &HeaderName) -> bool {
    headers.get(name).is_some_and(|value| value == "true")
}

fn text<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

/// HTMX header getters for request types
///
/// Flags are true only when the header value is exactly `"true"`. Text
/// getters return `None` when the header is absent or not valid UTF-8, and
/// `Some("")` when it is present but empty.
pub trait HtmxRequestExt {
    /// Headers inspected by the other methods
    fn htmx_headers(&self) -> &HeaderMap;

    /// `HX-Request` is `"true"`
    fn is_htmx(&self) -> bool {
        flag(self.htmx_headers(), &HX_REQUEST)
    }

    /// `HX-Boosted` is `"true"`
    fn is_boosted(&self) -> bool {
        flag(self.htmx_headers(), &HX_BOOSTED)
    }

    /// `HX-History-Restore-Request` is `"true"`
    fn is_history_restore_request(&self) -> bool {
        flag(self.htmx_headers(), &HX_HISTORY_RESTORE_REQUEST)
    }

    /// Browser URL from `HX-Current-URL`
    fn current_url(&self) -> Option<&str> {
        text(self.htmx_headers(), &HX_CURRENT_URL)
    }

    /// User response to an `hx-prompt`, from `HX-Prompt`
    fn prompt(&self) -> Option<&str> {
        text(self.htmx_headers(), &HX_PROMPT)
    }

    /// Id of the target element, from `HX-Target`
    fn target(&self) -> Option<&str> {
        text(self.htmx_headers(), &HX_TARGET)
    }

    /// Name of the triggered element, from `HX-Trigger-Name`
    fn trigger_name(&self) -> Option<&str> {
        text(self.htmx_headers(), &HX_TRIGGER_NAME)
    }

    /// Id of the triggered element, from `HX-Trigger`
    fn trigger(&self) -> Option<&str> {
        text(self.htmx_headers(), &HX_TRIGGER)
    }
}

impl HtmxRequestExt for HeaderMap {
    fn htmx_headers(&self) -> &HeaderMap {
        self
    }
}

impl HtmxRequestExt for Parts {
    fn htmx_headers(&self) -> &HeaderMap {
        &self.headers
    }
}

impl<B> HtmxRequestExt for Request<B> {
    fn htmx_headers(&self) -> &HeaderMap {
        self.headers()
    }
}

/// Owned snapshot of every HTMX request header
///
/// Never rejects: a plain browser request yields the [`Default`] value.
///
/// ```rust,no_run
/// use hx_directives::htmx::HxRequestInfo;
///
/// async fn handler(hx: HxRequestInfo) -> &'static str {
///     if hx.is_htmx {
///         "<li>fragment</li>"
///     } else {
///         "<html>full page</html>"
///     }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HxRequestInfo {
    /// `HX-Request`
    pub is_htmx: bool,
    /// `HX-Boosted`
    pub boosted: bool,
    /// `HX-History-Restore-Request`
    pub history_restore_request: bool,
    /// `HX-Current-URL`
    pub current_url: Option<String>,
    /// `HX-Prompt`
    pub prompt: Option<String>,
    /// `HX-Target`
    pub target: Option<String>,
    /// `HX-Trigger-Name`
    pub trigger_name: Option<String>,
    /// `HX-Trigger`
    pub trigger: Option<String>,
}

impl HxRequestInfo {
    /// Reads all HTMX headers from a request
    #[must_use]
    pub fn from_request(request: &impl HtmxRequestExt) -> Self {
        Self {
            is_htmx: request.is_htmx(),
            boosted: request.is_boosted(),
            history_restore_request: request.is_history_restore_request(),
            current_url: request.current_url().map(str::to_owned),
            prompt: request.prompt().map(str::to_owned),
            target: request.target().map(str::to_owned),
            trigger_name: request.trigger_name().map(str::to_owned),
            trigger: request.trigger().map(str::to_owned),
        }
    }
}

impl<S> FromRequestParts<S> for HxRequestInfo
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_request(parts))
    }
}
