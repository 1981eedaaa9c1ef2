#![forbid(unsafe_code)]

//! Responsive grid packing for fixed-size square tiles.
//!
//! The container's content-box width decides how many columns fit; tiles are
//! then placed in row-major order by their ordinal index:
//!
//! ```text
//! cols = max(1, floor((effective_width + gap) / (size + gap)))
//! col  = i mod cols
//! row  = floor(i / cols)
//! left = padding.left + col * (size + gap)
//! top  = padding.top  + row * (size + gap)
//! ```
//!
//! One gap of slack is credited so that exactly `cols` tiles and `cols - 1`
//! gaps fit. [`GridLayout::plan`] is pure; [`GridLayout::apply`] reads the
//! host geometry, plans, and overwrites every tile's position and size.
//!
//! # Example
//!
//! ```
//! use tilegrid_core::Sides;
//! use tilegrid_layout::{GridLayout, GridParams};
//!
//! let plan = GridLayout::new(GridParams::default()).plan(Sides::all(12.0), 824.0, 8);
//! assert_eq!(plan.columns, 7);
//! let slot = plan.slots[7];
//! assert_eq!((slot.row, slot.col), (1, 0));
//! assert_eq!((slot.rect.x, slot.rect.y), (12.0, 124.0));
//! ```

use serde::{Deserialize, Serialize};
use tilegrid_core::{Point, Rect, Sides, Size, TileId, TileSurface, ViewportGeometry};

/// Tile edge length and inter-tile spacing, in CSS pixels.
///
/// Styling outside this crate must agree with these values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridParams {
    pub size: f64,
    pub gap: f64,
}

impl GridParams {
    pub const DEFAULT_SIZE: f64 = 100.0;
    pub const DEFAULT_GAP: f64 = 12.0;

    #[must_use]
    pub const fn new(size: f64, gap: f64) -> Self {
        Self { size, gap }
    }

    /// Distance between the origins of two neighbouring tiles.
    #[inline]
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.size + self.gap
    }
}

impl Default for GridParams {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE, Self::DEFAULT_GAP)
    }
}

/// Number of columns that fit in `effective_width`. Always at least 1.
///
/// Negative, NaN, and infinite intermediate results all collapse to a single
/// column.
#[must_use]
pub fn column_count(effective_width: f64, params: GridParams) -> usize {
    let fit = ((effective_width + params.gap) / params.pitch()).floor();
    if fit.is_finite() && fit >= 1.0 {
        fit as usize
    } else {
        1
    }
}

/// Placement of one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSlot {
    pub tile: TileId,
    pub row: usize,
    pub col: usize,
    /// Offset relative to the container plus the nominal tile size.
    pub rect: Rect,
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPlan {
    pub columns: usize,
    pub rows: usize,
    /// Client width minus left and right padding.
    pub effective_width: f64,
    /// One slot per tile, in ordinal order.
    pub slots: Vec<GridSlot>,
}

impl GridPlan {
    /// Slot assigned to `tile`.
    #[must_use]
    pub fn slot(&self, tile: TileId) -> Option<&GridSlot> {
        self.slots.get(tile.index()).filter(|s| s.tile == tile)
    }
}

/// The grid layout engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridLayout {
    params: GridParams,
}

impl GridLayout {
    #[must_use]
    pub const fn new(params: GridParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub const fn params(&self) -> GridParams {
        self.params
    }

    /// Compute slots for `tile_count` tiles without touching a host.
    #[must_use]
    pub fn plan(&self, padding: Sides, client_width: f64, tile_count: usize) -> GridPlan {
        let effective_width = client_width - padding.left - padding.right;
        let columns = column_count(effective_width, self.params);
        let pitch = self.params.pitch();
        let size = Size::square(self.params.size);

        let slots = (0..tile_count)
            .map(|i| {
                let (row, col) = (i / columns, i % columns);
                let origin = Point::new(
                    padding.left + col as f64 * pitch,
                    padding.top + row as f64 * pitch,
                );
                GridSlot {
                    tile: TileId(i),
                    row,
                    col,
                    rect: Rect::from_origin_size(origin, size),
                }
            })
            .collect();

        GridPlan {
            columns,
            rows: tile_count.div_ceil(columns),
            effective_width,
            slots,
        }
    }

    /// Lay out tiles `0..tile_count` on `host`.
    ///
    /// Every tile's position and size is overwritten, including any tile a
    /// drag has moved.
    pub fn apply<H>(&self, host: &mut H, tile_count: usize) -> GridPlan
    where
        H: ViewportGeometry + TileSurface + ?Sized,
    {
        let padding = host.computed_padding().to_sides();
        let client_width = host.container_client_size().width;
        let plan = self.plan(padding, client_width, tile_count);

        let span = tilegrid_core::info_span!(
            "tilegrid.layout",
            columns = plan.columns,
            tiles = tile_count
        );
        let _guard = span.enter();

        for slot in &plan.slots {
            host.set_tile_position(slot.tile, slot.rect.origin());
            host.set_tile_size(slot.tile, slot.rect.size());
        }

        tilegrid_core::debug!(
            columns = plan.columns,
            rows = plan.rows,
            effective_width = plan.effective_width,
            "layout applied"
        );
        plan
    }
}
