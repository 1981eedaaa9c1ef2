#![forbid(unsafe_code)]

//! Host input adapters.
//!
//! A host either supports unified pointer events or only legacy mouse events.
//! The choice is made once, from [`InputCapabilities`], and the selected
//! adapter both names the host events to subscribe to and normalizes each
//! [`RawPointerSample`] into a [`PointerInput`]. Downstream code only ever sees
//! the canonical form.

use crate::geometry::Point;
use crate::input::{DeviceClass, PointerButton, PointerId, PointerInput, PointerKind};

/// Capabilities probed from the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputCapabilities {
    /// Whether the host exposes unified pointer events.
    pub pointer_events: bool,
}

impl InputCapabilities {
    #[must_use]
    pub const fn new(pointer_events: bool) -> Self {
        Self { pointer_events }
    }
}

/// Which event family an adapter listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterFamily {
    NativePointer,
    LegacyMouse,
}

/// Host event names for one adapter family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostEventNames {
    /// Listened for on each tile.
    pub down: &'static str,
    /// Listened for on the document.
    pub move_: &'static str,
    /// Listened for on the document.
    pub up: &'static str,
    /// Stream abandoned by the host (document).
    pub cancel: Option<&'static str>,
    /// Capture taken away from a tile (tile).
    pub lost_capture: Option<&'static str>,
}

/// Event fields common to pointer and mouse events, before normalization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawPointerSample {
    /// DOM `pointerType`; empty for mouse events.
    pub pointer_type: String,
    /// DOM `pointerId`; ignored by the legacy adapter.
    pub pointer_id: i32,
    /// DOM `button` (`-1` when no button changed).
    pub button: i16,
    pub client_x: f64,
    pub client_y: f64,
}

impl RawPointerSample {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.client_x, self.client_y)
    }
}

/// Normalization strategy for one event family.
pub trait InputAdapter {
    fn family(&self) -> AdapterFamily;

    fn event_names(&self) -> HostEventNames;

    /// Build the canonical event of `kind` from a host sample.
    fn normalize(&self, kind: PointerKind, sample: &RawPointerSample) -> PointerInput;
}

/// Adapter for hosts with unified pointer events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePointerAdapter;

impl InputAdapter for NativePointerAdapter {
    fn family(&self) -> AdapterFamily {
        AdapterFamily::NativePointer
    }

    fn event_names(&self) -> HostEventNames {
        HostEventNames {
            down: "pointerdown",
            move_: "pointermove",
            up: "pointerup",
            cancel: Some("pointercancel"),
            lost_capture: Some("lostpointercapture"),
        }
    }

    fn normalize(&self, kind: PointerKind, sample: &RawPointerSample) -> PointerInput {
        PointerInput {
            kind,
            device: DeviceClass::from_pointer_type(&sample.pointer_type),
            button: button_for(kind, sample.button),
            pointer_id: PointerId::Native(sample.pointer_id),
            position: sample.position(),
        }
    }
}

/// Fallback adapter for hosts with mouse events only.
///
/// Every event is a mouse event on the single constant stream
/// [`PointerId::LegacyMouse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyMouseAdapter;

impl InputAdapter for LegacyMouseAdapter {
    fn family(&self) -> AdapterFamily {
        AdapterFamily::LegacyMouse
    }

    fn event_names(&self) -> HostEventNames {
        HostEventNames {
            down: "mousedown",
            move_: "mousemove",
            up: "mouseup",
            cancel: None,
            lost_capture: None,
        }
    }

    fn normalize(&self, kind: PointerKind, sample: &RawPointerSample) -> PointerInput {
        PointerInput {
            kind,
            device: DeviceClass::Mouse,
            button: button_for(kind, sample.button),
            pointer_id: PointerId::LegacyMouse,
            position: sample.position(),
        }
    }
}

// Motion never reports a changed button.
fn button_for(kind: PointerKind, dom_button: i16) -> Option<PointerButton> {
    match kind {
        PointerKind::Move => None,
        _ => PointerButton::from_dom(dom_button),
    }
}

/// Pick the adapter for the probed capabilities.
#[must_use]
pub fn select_adapter(caps: InputCapabilities) -> Box<dyn InputAdapter> {
    if caps.pointer_events {
        crate::debug!(family = "native_pointer", "input adapter selected");
        Box::new(NativePointerAdapter)
    } else {
        crate::debug!(family = "legacy_mouse", "input adapter selected");
        Box::new(LegacyMouseAdapter)
    }
}
