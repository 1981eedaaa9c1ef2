#![forbid(unsafe_code)]

//! WASM frontend for tilegrid.
//!
//! Binds a container element's `.item` children to a [`tilegrid::TileBoard`]:
//! the DOM supplies geometry and receives positions, pointer or mouse events
//! drive the drag controller, and window resizes trigger a relayout.
//!
//! The listener plan and options parsing live in [`wiring`] and build on
//! every target; only the DOM glue is wasm-specific.

pub mod wiring;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::TileGridWeb;

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct TileGridWeb;

#[cfg(not(target_arch = "wasm32"))]
impl TileGridWeb {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}
