//! HTMX header names
//!
//! Names are lowercase [`HeaderName`] constants; HTTP header names are
//! case-insensitive, so `HX_REQUEST` matches a client's `HX-Request`.

use http::HeaderName;

// Request headers

/// `"true"` if the request came from an element using `hx-boost`
pub const HX_BOOSTED: HeaderName = HeaderName::from_static("hx-boosted");
/// Current URL of the browser
pub const HX_CURRENT_URL: HeaderName = HeaderName::from_static("hx-current-url");
/// `"true"` if the request restores history after a local cache miss
pub const HX_HISTORY_RESTORE_REQUEST: HeaderName =
    HeaderName::from_static("hx-history-restore-request");
/// User response to an `hx-prompt`
pub const HX_PROMPT: HeaderName = HeaderName::from_static("hx-prompt");
/// Always `"true"` for HTMX requests
pub const HX_REQUEST: HeaderName = HeaderName::from_static("hx-request");
/// Id of the target element if it exists
pub const HX_TARGET: HeaderName = HeaderName::from_static("hx-target");
/// Name of the triggered element if it exists
pub const HX_TRIGGER_NAME: HeaderName = HeaderName::from_static("hx-trigger-name");

// Request and response

/// Request: id of the triggered element. Response: client-side events to trigger.
pub const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");

// Response headers

/// Client-side redirect without a full page reload
pub const HX_LOCATION: HeaderName = HeaderName::from_static("hx-location");
/// Pushes a new URL into the history stack
pub const HX_PUSH_URL: HeaderName = HeaderName::from_static("hx-push-url");
/// Client-side redirect to a new location
pub const HX_REDIRECT: HeaderName = HeaderName::from_static("hx-redirect");
/// `"true"` makes the client do a full page refresh
pub const HX_REFRESH: HeaderName = HeaderName::from_static("hx-refresh");
/// Replaces the current URL in the location bar
pub const HX_REPLACE_URL: HeaderName = HeaderName::from_static("hx-replace-url");
/// How the response will be swapped
pub const HX_RESWAP: HeaderName = HeaderName::from_static("hx-reswap");
/// CSS selector of a different element to update
pub const HX_RETARGET: HeaderName = HeaderName::from_static("hx-retarget");
/// CSS selector choosing which part of the response is swapped in
pub const HX_RESELECT: HeaderName = HeaderName::from_static("hx-reselect");
/// Client-side events to trigger after the settle step
pub const HX_TRIGGER_AFTER_SETTLE: HeaderName = HeaderName::from_static("hx-trigger-after-settle");
/// Client-side events to trigger after the swap step
pub const HX_TRIGGER_AFTER_SWAP: HeaderName = HeaderName::from_static("hx-trigger-after-swap");

/// `286 Stop Polling`: tells HTMX to stop polling
///
/// See <https://htmx.org/docs/#load_polling>
pub const STATUS_STOP_POLLING: u16 = 286;
