#![forbid(unsafe_code)]

//! Host interfaces for geometry queries and tile mutations.
//!
//! The layout engine and drag controller never talk to a rendering host
//! directly. They read geometry through [`ViewportGeometry`] and write tile
//! state through [`TileSurface`]; the web frontend implements both over the
//! DOM and tests use [`crate::simulated::SimulatedHost`].

use std::fmt;

use crate::geometry::{Point, Rect, Sides, Size};
use crate::input::{PointerId, TileId};

/// Raw computed padding strings as reported by the host (for example
/// `getComputedStyle(container).paddingLeft`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComputedPadding {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

impl ComputedPadding {
    /// Same value on every side.
    #[must_use]
    pub fn uniform(value: &str) -> Self {
        Self {
            top: value.to_owned(),
            right: value.to_owned(),
            bottom: value.to_owned(),
            left: value.to_owned(),
        }
    }

    /// Parse every side, defaulting unparseable values to 0.
    #[must_use]
    pub fn to_sides(&self) -> Sides {
        Sides::new(
            parse_css_px_or_zero(&self.top),
            parse_css_px_or_zero(&self.right),
            parse_css_px_or_zero(&self.bottom),
            parse_css_px_or_zero(&self.left),
        )
    }
}

/// Parse the leading integer of a CSS length (`"12px"` → 12, `"12.9px"` → 12).
///
/// Leading whitespace and a single sign are accepted; anything after the
/// digits is ignored. Returns `None` when no digit follows.
#[must_use]
pub fn parse_css_px(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value = 0.0_f64;
    let mut seen = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen = true;
        value = value * 10.0 + f64::from(byte - b'0');
    }

    seen.then_some(if negative { -value } else { value })
}

/// [`parse_css_px`] with the malformed case defaulted to 0.
#[must_use]
pub fn parse_css_px_or_zero(value: &str) -> f64 {
    parse_css_px(value).unwrap_or(0.0)
}

/// Read-only geometry of the container and its tiles.
pub trait ViewportGeometry {
    /// Computed padding of the container, unparsed.
    fn computed_padding(&self) -> ComputedPadding;

    /// Container client size: content plus padding, excluding border.
    fn container_client_size(&self) -> Size;

    /// Container bounding rectangle in viewport coordinates.
    fn container_rect(&self) -> Rect;

    /// Tile bounding rectangle in viewport coordinates.
    fn tile_rect(&self, tile: TileId) -> Option<Rect>;

    /// Tile's rendered width/height, which may differ from the nominal size
    /// if styling overrides it.
    fn tile_rendered_size(&self, tile: TileId) -> Option<Size>;
}

/// Mutations the layout engine and drag controller apply to tiles.
pub trait TileSurface {
    /// Set the tile offset relative to the container.
    fn set_tile_position(&mut self, tile: TileId, position: Point);

    fn set_tile_size(&mut self, tile: TileId, size: Size);

    /// Toggle the "dragging" styling hook.
    fn set_dragging(&mut self, tile: TileId, dragging: bool);

    /// Route the pointer stream exclusively to `tile`.
    fn capture_pointer(&mut self, tile: TileId, pointer: PointerId) -> Result<(), CaptureError>;

    fn release_pointer(&mut self, tile: TileId, pointer: PointerId) -> Result<(), CaptureError>;
}

/// Failure to capture or release a pointer stream.
///
/// Callers always tolerate these; they only degrade capture guarantees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The host has no capture API (or not for this stream).
    Unsupported,
    /// The host refused the request.
    Rejected(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => write!(f, "pointer capture unsupported"),
            Self::Rejected(msg) => write!(f, "pointer capture rejected: {msg}"),
        }
    }
}

impl std::error::Error for CaptureError {}
