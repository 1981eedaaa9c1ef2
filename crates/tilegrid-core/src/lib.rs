#![forbid(unsafe_code)]

//! Core: pixel geometry, host interfaces, and canonical pointer input.

pub mod adapter;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod viewport;

#[cfg(any(test, feature = "test-helpers"))]
pub mod simulated;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, info_span, trace, warn};

pub use geometry::{Point, Rect, Sides, Size};
pub use input::{DeviceClass, PointerButton, PointerId, PointerInput, PointerKind, TileId};
pub use viewport::{CaptureError, ComputedPadding, TileSurface, ViewportGeometry};
