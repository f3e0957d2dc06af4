//! Response directive builder
//!
//! [`HxResponse`] collects HTMX response headers and applies them to a
//! response. Each setter overwrites whatever was set for the same header
//! before; trigger lists accumulate.
//!
//! ```rust
//! use hx_directives::htmx::{HxResponse, SwapStrategy, Trigger};
//!
//! let response = HxResponse::new()
//!     .retarget("#errors")
//!     .reswap(SwapStrategy::BEFORE_END)
//!     .add_trigger([Trigger::event("formInvalid")]);
//!
//! let headers = response.headers().unwrap();
//! assert_eq!(headers["hx-retarget"], "#errors");
//! assert_eq!(headers["hx-reswap"], "beforeend");
//! assert_eq!(headers["hx-trigger"], "formInvalid");
//! ```

use std::collections::HashMap;

use axum::response::{Html, IntoResponse, IntoResponseParts, Response, ResponseParts};
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

use super::headers::{
    HX_LOCATION, HX_PUSH_URL, HX_REDIRECT, HX_REFRESH, HX_REPLACE_URL, HX_RESELECT, HX_RESWAP,
    HX_RETARGET, HX_TRIGGER, HX_TRIGGER_AFTER_SETTLE, HX_TRIGGER_AFTER_SWAP, STATUS_STOP_POLLING,
};
use super::location::LocationContext;
use super::swap::SwapStrategy;
use super::trigger::{self, Trigger};
use crate::error::{DirectiveError, Result};

#[derive(Debug, Clone, PartialEq)]
enum Location {
    Path(String),
    WithContext {
        path: String,
        context: LocationContext,
    },
}

impl Location {
    fn to_header_value(&self) -> Result<String> {
        match self {
            Self::Path(path) => Ok(path.clone()),
            Self::WithContext { path, context } => context.to_header_value(path),
        }
    }
}

/// HTMX response headers to write to a response
///
/// Returning an `HxResponse` from an axum handler sends the headers with an
/// empty body. Combine it with a body through a tuple, or use
/// [`HxResponse::render_html`] and [`HxResponse::render_template`].
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct HxResponse {
    headers: HashMap<HeaderName, String>,
    location: Option<Location>,
    status: Option<u16>,
    triggers: Vec<Trigger>,
    triggers_after_settle: Vec<Trigger>,
    triggers_after_swap: Vec<Trigger>,
}

impl HxResponse {
    /// Creates an empty set of directives
    pub fn new() -> Self {
        Self::default()
    }

    fn set(mut self, name: HeaderName, value: impl Into<String>) -> Self {
        self.headers.insert(name, value.into());
        self
    }

    /// Sets the HTTP status; 200 OK is used when never called
    pub fn status_code(mut self, status: impl Into<u16>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Responds with `286 Stop Polling`
    pub fn stop_polling(self) -> Self {
        self.status_code(STATUS_STOP_POLLING)
    }

    /// Client-side redirect without a full page reload (`HX-Location`)
    pub fn location(mut self, path: impl Into<String>) -> Self {
        self.location = Some(Location::Path(path.into()));
        self
    }

    /// Client-side redirect with extra `htmx.ajax()` options (`HX-Location`)
    pub fn location_with_context(mut self, path: impl Into<String>, context: LocationContext) -> Self {
        self.location = Some(Location::WithContext {
            path: path.into(),
            context,
        });
        self
    }

    /// Pushes a URL into the browser history (`HX-Push-Url`)
    pub fn push_url(self, url: impl Into<String>) -> Self {
        self.set(HX_PUSH_URL, url)
    }

    /// Prevents the browser history from being updated (`HX-Push-Url: false`)
    pub fn prevent_push_url(self) -> Self {
        self.set(HX_PUSH_URL, "false")
    }

    /// Client-side redirect to a new location (`HX-Redirect`)
    pub fn redirect(self, path: impl Into<String>) -> Self {
        self.set(HX_REDIRECT, path)
    }

    /// Asks the client for a full page refresh (`HX-Refresh`)
    pub fn refresh(self, refresh: bool) -> Self {
        self.set(HX_REFRESH, refresh.to_string())
    }

    /// Replaces the current URL in the location bar (`HX-Replace-Url`)
    pub fn replace_url(self, url: impl Into<String>) -> Self {
        self.set(HX_REPLACE_URL, url)
    }

    /// Prevents the current URL from being updated (`HX-Replace-Url: false`)
    pub fn prevent_replace_url(self) -> Self {
        self.set(HX_REPLACE_URL, "false")
    }

    /// Overrides how the response is swapped (`HX-Reswap`)
    pub fn reswap(self, swap: impl Into<SwapStrategy>) -> Self {
        let value = swap.into().to_header_value();
        self.set(HX_RESWAP, value)
    }

    /// Swaps into a different element (`HX-Retarget`)
    pub fn retarget(self, selector: impl Into<String>) -> Self {
        self.set(HX_RETARGET, selector)
    }

    /// Chooses which part of the response is swapped in (`HX-Reselect`)
    pub fn reselect(self, selector: impl Into<String>) -> Self {
        self.set(HX_RESELECT, selector)
    }

    /// Adds events triggered as soon as the response is received (`HX-Trigger`)
    pub fn add_trigger<I>(mut self, triggers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Trigger>,
    {
        self.triggers.extend(triggers.into_iter().map(Into::into));
        self
    }

    /// Adds events triggered after the settle step (`HX-Trigger-After-Settle`)
    pub fn add_trigger_after_settle<I>(mut self, triggers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Trigger>,
    {
        self.triggers_after_settle
            .extend(triggers.into_iter().map(Into::into));
        self
    }

    /// Adds events triggered after the swap step (`HX-Trigger-After-Swap`)
    pub fn add_trigger_after_swap<I>(mut self, triggers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Trigger>,
    {
        self.triggers_after_swap
            .extend(triggers.into_iter().map(Into::into));
        self
    }

    /// Status set with [`HxResponse::status_code`], if any
    pub fn status(&self) -> Result<Option<StatusCode>> {
        self.status
            .map(|code| StatusCode::from_u16(code).map_err(|_| DirectiveError::InvalidStatus(code)))
            .transpose()
    }

    /// Renders every directive into a header map
    ///
    /// Trigger lists and the location context are encoded here, so this is
    /// where JSON and header-value errors surface.
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.headers.len() + 4);

        for (name, value) in &self.headers {
            insert(&mut map, name.clone(), value)?;
        }

        if let Some(location) = &self.location {
            insert(&mut map, HX_LOCATION, &location.to_header_value()?)?;
        }

        let trigger_lists = [
            (HX_TRIGGER, &self.triggers),
            (HX_TRIGGER_AFTER_SETTLE, &self.triggers_after_settle),
            (HX_TRIGGER_AFTER_SWAP, &self.triggers_after_swap),
        ];
        for (name, triggers) in trigger_lists {
            if triggers.is_empty() {
                continue;
            }
            let value = trigger::render(triggers)?;
            tracing::trace!(header = %name, %value, "rendered triggers");
            insert(&mut map, name, &value)?;
        }

        Ok(map)
    }

    /// Writes the headers into `headers`, replacing values of the same name
    pub fn write_to(&self, headers: &mut HeaderMap) -> Result<()> {
        let rendered = self.headers()?;
        tracing::debug!(count = rendered.len(), "applying htmx headers");
        headers.extend(rendered);
        Ok(())
    }

    /// Applies headers and status to `response`
    ///
    /// Nothing is written unless both the status and every header are valid.
    pub fn apply<B>(&self, response: &mut http::Response<B>) -> Result<()> {
        let status = self.status()?;
        self.write_to(response.headers_mut())?;
        if let Some(status) = status {
            *response.status_mut() = status;
        }
        Ok(())
    }

    /// Renders an HTML fragment as the body
    pub fn render_html(&self, html: impl Into<String>) -> Result<Response> {
        let mut response = Html(html.into()).into_response();
        self.apply(&mut response)?;
        Ok(response)
    }

    /// Renders an Askama template as the body
    pub fn render_template<T: askama::Template>(&self, template: &T) -> Result<Response> {
        let html = template.render()?;
        self.render_html(html)
    }
}

fn insert(map: &mut HeaderMap, name: HeaderName, value: &str) -> Result<()> {
    let value = HeaderValue::from_str(value).map_err(|source| DirectiveError::InvalidHeaderValue {
        header: name.to_string(),
        source,
    })?;
    map.insert(name, value);
    Ok(())
}

impl IntoResponse for HxResponse {
    fn into_response(self) -> Response {
        let mut response = ().into_response();
        match self.apply(&mut response) {
            Ok(()) => response,
            Err(err) => err.into_response(),
        }
    }
}

/// Headers only; pair with a [`StatusCode`] in the tuple to change status
impl IntoResponseParts for HxResponse {
    type Error = DirectiveError;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.write_to(res.headers_mut())?;
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::htmx::Direction;

    #[test]
    fn test_all_directives() {
        let response = HxResponse::new()
            .stop_polling()
            .location("/profiles")
            .redirect("/pull")
            .push_url("/push")
            .refresh(true)
            .replace_url("/water")
            .retarget("#world")
            .reselect("#hello")
            .add_trigger(["myEvent"])
            .reswap(SwapStrategy::INNER_HTML.show_on("#swappy", Direction::Top));

        let headers = response.headers().unwrap();
        let expected = [
            ("HX-Trigger", "myEvent"),
            ("HX-Location", "/profiles"),
            ("HX-Redirect", "/pull"),
            ("HX-Push-Url", "/push"),
            ("HX-Refresh", "true"),
            ("HX-Replace-Url", "/water"),
            ("HX-Retarget", "#world"),
            ("HX-Reselect", "#hello"),
            ("HX-Reswap", "innerHTML show:#swappy:top"),
        ];
        for (name, value) in expected {
            assert_eq!(headers.get(name).unwrap(), value, "header {name}");
        }
        assert_eq!(headers.len(), expected.len());
        assert_eq!(response.status().unwrap(), StatusCode::from_u16(286).ok());
    }

    #[test]
    fn test_last_write_wins() {
        let headers = HxResponse::new()
            .push_url("/a")
            .prevent_push_url()
            .replace_url("/b")
            .prevent_replace_url()
            .refresh(true)
            .refresh(false)
            .headers()
            .unwrap();

        assert_eq!(headers.get(HX_PUSH_URL).unwrap(), "false");
        assert_eq!(headers.get(HX_REPLACE_URL).unwrap(), "false");
        assert_eq!(headers.get(HX_REFRESH).unwrap(), "false");
    }

    #[test]
    fn test_location_with_context_replaces_plain_location() {
        let headers = HxResponse::new()
            .location("/old")
            .location_with_context("/hello", LocationContext::new().target("#testdiv"))
            .headers()
            .unwrap();

        assert_eq!(
            headers.get(HX_LOCATION).unwrap(),
            r##"{"path":"/hello","target":"#testdiv"}"##
        );
    }

    #[test]
    fn test_triggers_accumulate_per_phase() {
        let headers = HxResponse::new()
            .add_trigger(["a"])
            .add_trigger([Trigger::event("b")])
            .add_trigger_after_settle([Trigger::detail("settled", "yes")])
            .add_trigger_after_swap(["swapped"])
            .headers()
            .unwrap();

        assert_eq!(headers.get(HX_TRIGGER).unwrap(), "a, b");
        assert_eq!(
            headers.get(HX_TRIGGER_AFTER_SETTLE).unwrap(),
            r#"{"settled":"yes"}"#
        );
        assert_eq!(headers.get(HX_TRIGGER_AFTER_SWAP).unwrap(), "swapped");
    }

    #[test]
    fn test_empty_response_has_no_headers() {
        let response = HxResponse::new().add_trigger(Vec::<Trigger>::new());
        assert!(response.headers().unwrap().is_empty());
        assert_eq!(response.status().unwrap(), None);
    }

    #[test]
    fn test_invalid_header_value() {
        let err = HxResponse::new().redirect("/bad\nvalue").headers().unwrap_err();
        assert!(matches!(
            err,
            DirectiveError::InvalidHeaderValue { ref header, .. } if header == "hx-redirect"
        ));
    }

    #[test]
    fn test_invalid_status() {
        let mut response = http::Response::new(());
        let err = HxResponse::new()
            .status_code(42u16)
            .redirect("/x")
            .apply(&mut response)
            .unwrap_err();

        assert!(matches!(err, DirectiveError::InvalidStatus(42)));
        assert!(response.headers().is_empty());
    }

    #[test]
    fn test_write_to_overwrites_existing() {
        let mut headers = HeaderMap::new();
        headers.insert(HX_RETARGET, HeaderValue::from_static("#old"));
        headers.insert(http::header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

        HxResponse::new().retarget("#new").write_to(&mut headers).unwrap();

        assert_eq!(headers.get(HX_RETARGET).unwrap(), "#new");
        assert_eq!(headers.get(http::header::CACHE_CONTROL).unwrap(), "no-store");
    }

    #[test]
    fn test_clone_is_independent() {
        let base = HxResponse::new().retarget("#a");
        let derived = base.clone().retarget("#b");

        assert_eq!(base.headers().unwrap().get(HX_RETARGET).unwrap(), "#a");
        assert_eq!(derived.headers().unwrap().get(HX_RETARGET).unwrap(), "#b");
    }

    #[test]
    fn test_into_response_sets_status() {
        let response = HxResponse::new()
            .status_code(StatusCode::ACCEPTED)
            .redirect("/done")
            .into_response();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(response.headers().get(HX_REDIRECT).unwrap(), "/done");
    }

    #[test]
    fn test_into_response_error_is_500() {
        let response = HxResponse::new().retarget("\r").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(HX_RETARGET).is_none());
    }
}
