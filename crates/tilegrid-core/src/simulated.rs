#![forbid(unsafe_code)]

//! In-memory host for tests and headless runs.
//!
//! Tile bounding rectangles are derived from what was written: the container
//! origin plus the last position set for the tile. This matches a rendering
//! host where tiles are absolutely positioned inside a borderless container.

use crate::geometry::{Point, Rect, Size};
use crate::input::{PointerId, TileId};
use crate::viewport::{CaptureError, ComputedPadding, TileSurface, ViewportGeometry};

/// State kept per simulated tile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulatedTile {
    pub position: Point,
    pub size: Size,
    /// Overrides `size` when styling would render the tile differently.
    pub rendered_size: Option<Size>,
    pub dragging: bool,
    pub captured_by: Option<PointerId>,
}

/// A headless [`ViewportGeometry`] + [`TileSurface`].
#[derive(Debug, Clone)]
pub struct SimulatedHost {
    container_origin: Point,
    client_size: Size,
    padding: ComputedPadding,
    tiles: Vec<SimulatedTile>,
    capture: Option<CaptureError>,
    capture_log: Vec<(TileId, PointerId, bool)>,
}

impl SimulatedHost {
    /// Container at the viewport origin with `tile_count` unpositioned tiles.
    #[must_use]
    pub fn new(client_size: Size, padding: ComputedPadding, tile_count: usize) -> Self {
        Self {
            container_origin: Point::ZERO,
            client_size,
            padding,
            tiles: vec![SimulatedTile::default(); tile_count],
            capture: None,
            capture_log: Vec::new(),
        }
    }

    /// Move the container within the viewport.
    #[must_use]
    pub fn with_container_origin(mut self, origin: Point) -> Self {
        self.container_origin = origin;
        self
    }

    /// Make every capture/release call fail with `error`.
    #[must_use]
    pub fn with_capture_failure(mut self, error: CaptureError) -> Self {
        self.capture = Some(error);
        self
    }

    /// Resize the container, as a window resize would.
    pub fn set_client_size(&mut self, size: Size) {
        self.client_size = size;
    }

    pub fn set_padding(&mut self, padding: ComputedPadding) {
        self.padding = padding;
    }

    /// Pretend styling renders `tile` at `size`.
    pub fn set_rendered_size(&mut self, tile: TileId, size: Size) {
        if let Some(t) = self.tiles.get_mut(tile.index()) {
            t.rendered_size = Some(size);
        }
    }

    #[must_use]
    pub fn tile(&self, tile: TileId) -> Option<&SimulatedTile> {
        self.tiles.get(tile.index())
    }

    /// Last written offset of `tile`.
    #[must_use]
    pub fn position(&self, tile: TileId) -> Option<Point> {
        self.tile(tile).map(|t| t.position)
    }

    #[must_use]
    pub fn is_dragging(&self, tile: TileId) -> bool {
        self.tile(tile).is_some_and(|t| t.dragging)
    }

    /// Viewport coordinates of a point `offset` inside `tile`.
    #[must_use]
    pub fn point_in_tile(&self, tile: TileId, offset: Point) -> Option<Point> {
        self.tile_rect(tile).map(|r| r.origin().offset(offset))
    }

    /// `(tile, pointer, captured)` for every capture/release request, in order.
    #[must_use]
    pub fn capture_log(&self) -> &[(TileId, PointerId, bool)] {
        &self.capture_log
    }
}

impl ViewportGeometry for SimulatedHost {
    fn computed_padding(&self) -> ComputedPadding {
        self.padding.clone()
    }

    fn container_client_size(&self) -> Size {
        self.client_size
    }

    fn container_rect(&self) -> Rect {
        Rect::from_origin_size(self.container_origin, self.client_size)
    }

    fn tile_rect(&self, tile: TileId) -> Option<Rect> {
        let t = self.tiles.get(tile.index())?;
        let size = t.rendered_size.unwrap_or(t.size);
        Some(Rect::from_origin_size(
            self.container_origin.offset(t.position),
            size,
        ))
    }

    fn tile_rendered_size(&self, tile: TileId) -> Option<Size> {
        self.tile(tile).map(|t| t.rendered_size.unwrap_or(t.size))
    }
}

impl TileSurface for SimulatedHost {
    fn set_tile_position(&mut self, tile: TileId, position: Point) {
        if let Some(t) = self.tiles.get_mut(tile.index()) {
            t.position = position;
        }
    }

    fn set_tile_size(&mut self, tile: TileId, size: Size) {
        if let Some(t) = self.tiles.get_mut(tile.index()) {
            t.size = size;
        }
    }

    fn set_dragging(&mut self, tile: TileId, dragging: bool) {
        if let Some(t) = self.tiles.get_mut(tile.index()) {
            t.dragging = dragging;
        }
    }

    fn capture_pointer(&mut self, tile: TileId, pointer: PointerId) -> Result<(), CaptureError> {
        self.capture_log.push((tile, pointer, true));
        if let Some(err) = &self.capture {
            return Err(err.clone());
        }
        if let Some(t) = self.tiles.get_mut(tile.index()) {
            t.captured_by = Some(pointer);
        }
        Ok(())
    }

    fn release_pointer(&mut self, tile: TileId, pointer: PointerId) -> Result<(), CaptureError> {
        self.capture_log.push((tile, pointer, false));
        if let Some(err) = &self.capture {
            return Err(err.clone());
        }
        match self.tiles.get_mut(tile.index()) {
            Some(t) if t.captured_by == Some(pointer) => {
                t.captured_by = None;
                Ok(())
            }
            _ => Err(CaptureError::Rejected(format!(
                "{tile} does not hold capture for pointer {pointer}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> SimulatedHost {
        SimulatedHost::new(Size::new(824.0, 600.0), ComputedPadding::uniform("12px"), 3)
            .with_container_origin(Point::new(100.0, 50.0))
    }

    #[test]
    fn tile_rect_tracks_written_position() {
        let mut h = host();
        h.set_tile_position(TileId(1), Point::new(124.0, 12.0));
        h.set_tile_size(TileId(1), Size::square(100.0));
        assert_eq!(
            h.tile_rect(TileId(1)),
            Some(Rect::new(224.0, 62.0, 100.0, 100.0))
        );
        assert_eq!(h.tile_rect(TileId(9)), None);
    }

    #[test]
    fn rendered_size_override_wins() {
        let mut h = host();
        h.set_tile_size(TileId(0), Size::square(100.0));
        h.set_rendered_size(TileId(0), Size::new(120.0, 90.0));
        assert_eq!(
            h.tile_rendered_size(TileId(0)),
            Some(Size::new(120.0, 90.0))
        );
    }

    #[test]
    fn release_without_capture_is_rejected() {
        let mut h = host();
        let id = PointerId::Native(1);
        assert!(h.release_pointer(TileId(0), id).is_err());
        h.capture_pointer(TileId(0), id).expect("capture");
        assert_eq!(h.tile(TileId(0)).and_then(|t| t.captured_by), Some(id));
        h.release_pointer(TileId(0), id).expect("release");
        assert_eq!(h.capture_log().len(), 3);
    }

    #[test]
    fn configured_capture_failure_is_reported() {
        let mut h = host().with_capture_failure(CaptureError::Unsupported);
        assert_eq!(
            h.capture_pointer(TileId(0), PointerId::LegacyMouse),
            Err(CaptureError::Unsupported)
        );
        assert_eq!(h.tile(TileId(0)).and_then(|t| t.captured_by), None);
    }
}
