//! hx-directives: typed HTMX response directives for axum
//!
//! HTMX lets a server steer the client through response headers. This crate
//! builds those headers from typed values instead of hand-written strings,
//! and reads the headers HTMX sends with each request.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use hx_directives::prelude::*;
//!
//! async fn create_item(hx: HxRequestInfo) -> Result<axum::response::Response, DirectiveError> {
//!     if !hx.is_htmx {
//!         return Ok(HxResponse::new().redirect("/items").into_response());
//!     }
//!
//!     HxResponse::new()
//!         .reswap(
//!             SwapStrategy::BEFORE_END
//!                 .transition(true)
//!                 .settle_after(Duration::from_millis(300)),
//!         )
//!         .add_trigger([Trigger::event("itemCreated")])
//!         .render_html("<li>New item</li>")
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     hx_directives::observability::init()?;
//!
//!     let app = axum::Router::new().route("/items", axum::routing::post(create_item));
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod htmx;
pub mod observability;

pub use error::{DirectiveError, Result, SwapParseError};

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! # Examples
    //!
    //! ```rust
    //! use hx_directives::prelude::*;
    //! ```

    pub use crate::htmx::{
        Direction, HtmxRequestExt, HxRequestInfo, HxResponse, HxSwapOob, LocationContext,
        SwapStrategy, SwapStyle, Trigger,
    };

    pub use crate::config::DirectiveConfig;
    pub use crate::error::DirectiveError;

    pub use axum::response::IntoResponse;
}
