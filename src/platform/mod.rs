//! Platform abstraction layer
//!
//! Browser binding for the page:
//! - Fetching the static data asset
//! - Mounting markup into the root element
//! - Scroll and click listeners, detached when the page is unmounted
//!
//! Everything here is wasm32-only; the page logic it drives lives in
//! `crate::page` and is testable natively.

#[cfg(target_arch = "wasm32")]
mod fetch;
#[cfg(target_arch = "wasm32")]
mod listener;
#[cfg(target_arch = "wasm32")]
mod mount;

#[cfg(target_arch = "wasm32")]
pub use fetch::fetch_portfolio;
#[cfg(target_arch = "wasm32")]
pub use listener::EventListener;
#[cfg(target_arch = "wasm32")]
pub use mount::{PortfolioHandle, mount, mount_portfolio};
