//! HTMX directives and request inspection
//!
//! - [`SwapStrategy`]: typed `hx-swap` expressions
//! - [`HxResponse`]: response header builder (`HX-Reswap`, `HX-Location`,
//!   `HX-Trigger`, ...)
//! - [`HtmxRequestExt`] / [`HxRequestInfo`]: request header getters
//! - [`HxSwapOob`]: out-of-band swaps in a single HTML response
//!
//! # Responding to an HTMX request
//!
//! ```rust,no_run
//! use hx_directives::htmx::{Direction, HtmxRequestExt, HxResponse, SwapStrategy, Trigger};
//! use axum::response::{IntoResponse, Response};
//!
//! async fn add_message(headers: http::HeaderMap) -> Response {
//!     if !headers.is_htmx() {
//!         return HxResponse::new().redirect("/messages").into_response();
//!     }
//!
//!     HxResponse::new()
//!         .reswap(SwapStrategy::BEFORE_END.scroll_window(Direction::Bottom))
//!         .add_trigger([Trigger::detail("toast", "Message sent")])
//!         .render_html("<li>hello</li>")
//!         .into_response()
//! }
//! ```

pub mod headers;
mod location;
mod request;
mod response;
mod swap;
mod swap_oob;
mod trigger;

pub use location::LocationContext;
pub use request::{HtmxRequestExt, HxRequestInfo};
pub use response::HxResponse;
pub use swap::{Direction, SwapStrategy, SwapStyle};
pub use swap_oob::HxSwapOob;
pub use trigger::Trigger;
