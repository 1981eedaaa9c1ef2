#![forbid(unsafe_code)]

//! DOM-backed [`ViewportGeometry`] and [`TileSurface`].

use tilegrid::{
    CaptureError, ComputedPadding, Point, PointerId, Rect, Size, TileId, TileSurface,
    ViewportGeometry,
};
use tilegrid::core::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomRect, HtmlElement, Window};

use crate::wiring::{DRAGGING_CLASS, TILE_SELECTOR, px};

/// The container element and its tiles, in document order.
pub struct DomHost {
    window: Window,
    container: HtmlElement,
    tiles: Vec<HtmlElement>,
}

impl DomHost {
    /// Collect the container's tile elements.
    pub fn new(window: Window, container: HtmlElement) -> Result<Self, JsValue> {
        let nodes = container.query_selector_all(TILE_SELECTOR)?;
        let tiles: Vec<HtmlElement> = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect();
        debug!(tiles = tiles.len(), "dom host attached");
        Ok(Self {
            window,
            container,
            tiles,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn tiles(&self) -> &[HtmlElement] {
        &self.tiles
    }

    fn tile(&self, tile: TileId) -> Option<&HtmlElement> {
        self.tiles.get(tile.index())
    }

    fn set_style(&self, tile: TileId, property: &str, value: f64) {
        let Some(el) = self.tile(tile) else {
            return;
        };
        if let Err(err) = el.style().set_property(property, &px(value)) {
            warn!(%tile, property, error = ?err, "style update failed");
        }
    }
}

fn to_rect(rect: &DomRect) -> Rect {
    Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
}

fn rejected(err: &JsValue) -> CaptureError {
    CaptureError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl ViewportGeometry for DomHost {
    fn computed_padding(&self) -> ComputedPadding {
        let Ok(Some(style)) = self.window.get_computed_style(&self.container) else {
            return ComputedPadding::default();
        };
        let side = |name: &str| style.get_property_value(name).unwrap_or_default();
        ComputedPadding {
            top: side("padding-top"),
            right: side("padding-right"),
            bottom: side("padding-bottom"),
            left: side("padding-left"),
        }
    }

    fn container_client_size(&self) -> Size {
        Size::new(
            f64::from(self.container.client_width()),
            f64::from(self.container.client_height()),
        )
    }

    fn container_rect(&self) -> Rect {
        to_rect(&self.container.get_bounding_client_rect())
    }

    fn tile_rect(&self, tile: TileId) -> Option<Rect> {
        self.tile(tile).map(|el| to_rect(&el.get_bounding_client_rect()))
    }

    fn tile_rendered_size(&self, tile: TileId) -> Option<Size> {
        self.tile(tile).map(|el| {
            Size::new(
                f64::from(el.offset_width()),
                f64::from(el.offset_height()),
            )
        })
    }
}

impl TileSurface for DomHost {
    fn set_tile_position(&mut self, tile: TileId, position: Point) {
        self.set_style(tile, "left", position.x);
        self.set_style(tile, "top", position.y);
    }

    fn set_tile_size(&mut self, tile: TileId, size: Size) {
        self.set_style(tile, "width", size.width);
        self.set_style(tile, "height", size.height);
    }

    fn set_dragging(&mut self, tile: TileId, dragging: bool) {
        if let Some(el) = self.tile(tile) {
            let _ = el.class_list().toggle_with_force(DRAGGING_CLASS, dragging);
        }
    }

    fn capture_pointer(&mut self, tile: TileId, pointer: PointerId) -> Result<(), CaptureError> {
        let (Some(el), PointerId::Native(id)) = (self.tile(tile), pointer) else {
            return Err(CaptureError::Unsupported);
        };
        el.set_pointer_capture(id).map_err(|e| rejected(&e))
    }

    fn release_pointer(&mut self, tile: TileId, pointer: PointerId) -> Result<(), CaptureError> {
        let (Some(el), PointerId::Native(id)) = (self.tile(tile), pointer) else {
            return Err(CaptureError::Unsupported);
        };
        el.release_pointer_capture(id).map_err(|e| rejected(&e))
    }
}

/// Whether the window exposes unified pointer events.
pub fn supports_pointer_events(window: &Window) -> bool {
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("PointerEvent")).unwrap_or(false)
}
