//! Browser-side UI controls for the portfolio site.
//!
//! The decision logic (menu state, back-to-top visibility, anchor targets) is
//! compiled for every target so it can be unit-tested on the host. The DOM
//! bindings are behind `--features web` on wasm32.

pub mod config;
pub mod controls;
pub mod error;

pub use config::UiConfig;
pub use error::UiError;

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
