#![forbid(unsafe_code)]

//! Canonical pointer input consumed by the drag controller.
//!
//! Host events (native pointer events, legacy mouse events) are normalized by
//! an [`crate::adapter::InputAdapter`] into [`PointerInput`] before they reach
//! any state machine. The shape carries:
//! - a kind (`down` on a tile, `move`, `up`, `cancel`),
//! - the device class and pressed button (for the mouse-class button filter),
//! - the input-stream identifier, and
//! - viewport-relative coordinates.
//!
//! A tagged JSON form is provided for recording and replaying traces.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Ordinal index of a tile within the board's ordered tile sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub usize);

impl TileId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tile#{}", self.0)
    }
}

/// Input-stream identifier.
///
/// Native pointer sources report a numeric id per finger/pen/mouse. The
/// legacy mouse fallback has no such id and always uses one constant value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerId {
    Native(i32),
    LegacyMouse,
}

impl std::fmt::Display for PointerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native(id) => write!(f, "{id}"),
            Self::LegacyMouse => f.write_str("mouse"),
        }
    }
}

/// Device family that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Mouse,
    Pen,
    Touch,
    Unknown,
}

impl DeviceClass {
    /// Map a DOM `pointerType` string.
    #[must_use]
    pub fn from_pointer_type(pointer_type: &str) -> Self {
        match pointer_type {
            "mouse" => Self::Mouse,
            "pen" => Self::Pen,
            "touch" => Self::Touch,
            _ => Self::Unknown,
        }
    }

    /// Whether presses from this device are filtered by button.
    ///
    /// Unknown devices are treated like a mouse.
    #[must_use]
    pub const fn is_mouse_class(self) -> bool {
        matches!(self, Self::Mouse | Self::Unknown)
    }
}

/// Button whose state changed, using DOM `button` numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl PointerButton {
    /// Map a DOM `button` value. `-1` (no button changed) maps to `None`.
    #[must_use]
    pub const fn from_dom(button: i16) -> Option<Self> {
        match button {
            -1 => None,
            0 => Some(Self::Primary),
            1 => Some(Self::Auxiliary),
            2 => Some(Self::Secondary),
            other => Some(Self::Other(other)),
        }
    }

    #[must_use]
    pub const fn to_dom(self) -> i16 {
        match self {
            Self::Primary => 0,
            Self::Auxiliary => 1,
            Self::Secondary => 2,
            Self::Other(n) => n,
        }
    }
}

/// What happened to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Press on a tile.
    Down { target: TileId },
    /// Motion anywhere in the document.
    Move,
    /// Release anywhere in the document.
    Up,
    /// The host abandoned the stream (`pointercancel`, lost capture).
    Cancel,
}

/// Normalized pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub kind: PointerKind,
    pub device: DeviceClass,
    pub button: Option<PointerButton>,
    pub pointer_id: PointerId,
    /// Viewport-relative coordinates.
    pub position: Point,
}

impl PointerInput {
    /// Primary-button mouse press on `target` with a native id.
    #[must_use]
    pub const fn mouse_down(target: TileId, pointer_id: i32, position: Point) -> Self {
        Self {
            kind: PointerKind::Down { target },
            device: DeviceClass::Mouse,
            button: Some(PointerButton::Primary),
            pointer_id: PointerId::Native(pointer_id),
            position,
        }
    }

    /// Event of `kind` for the same stream as `self`, at `position`.
    #[must_use]
    pub const fn follow_up(&self, kind: PointerKind, position: Point) -> Self {
        Self {
            kind,
            device: self.device,
            button: match kind {
                PointerKind::Move => None,
                _ => self.button,
            },
            pointer_id: self.pointer_id,
            position,
        }
    }

    /// Encode this event as a stable JSON string.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&PointerInputJson::from(self))
    }

    /// Decode a previously encoded event JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        let json: PointerInputJson = serde_json::from_str(s)?;
        Ok(Self::from(json))
    }
}

/// JSON encoding used for interaction traces.
///
/// A `kind` tag plus the minimum fields needed for replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerInputJson {
    #[serde(flatten)]
    pub kind: PointerKindJson,
    pub device: DeviceClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<i16>,
    pub pointer_id: PointerId,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerKindJson {
    Down { target: TileId },
    Move,
    Up,
    Cancel,
}

impl From<&PointerInput> for PointerInputJson {
    fn from(value: &PointerInput) -> Self {
        let kind = match value.kind {
            PointerKind::Down { target } => PointerKindJson::Down { target },
            PointerKind::Move => PointerKindJson::Move,
            PointerKind::Up => PointerKindJson::Up,
            PointerKind::Cancel => PointerKindJson::Cancel,
        };
        Self {
            kind,
            device: value.device,
            button: value.button.map(PointerButton::to_dom),
            pointer_id: value.pointer_id,
            x: value.position.x,
            y: value.position.y,
        }
    }
}

impl From<PointerInputJson> for PointerInput {
    fn from(value: PointerInputJson) -> Self {
        let kind = match value.kind {
            PointerKindJson::Down { target } => PointerKind::Down { target },
            PointerKindJson::Move => PointerKind::Move,
            PointerKindJson::Up => PointerKind::Up,
            PointerKindJson::Cancel => PointerKind::Cancel,
        };
        Self {
            kind,
            device: value.device,
            button: value.button.and_then(PointerButton::from_dom),
            pointer_id: value.pointer_id,
            position: Point::new(value.x, value.y),
        }
    }
}
