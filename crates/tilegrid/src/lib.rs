#![forbid(unsafe_code)]

//! tilegrid public facade crate.
//!
//! Re-exports the geometry, input, layout, and drag types and provides
//! [`TileBoard`], which wires the grid layout engine and the drag controller
//! to one host implementing [`ViewportGeometry`] and [`TileSurface`].
//!
//! ```
//! use tilegrid::prelude::*;
//! use tilegrid::core::simulated::SimulatedHost;
//!
//! let mut host = SimulatedHost::new(Size::new(824.0, 600.0), ComputedPadding::uniform("12px"), 8);
//! let mut board = TileBoard::new(TileGridConfig::default(), 8)?;
//! assert_eq!(board.mount(&mut host).columns, 7);
//!
//! let down = PointerInput::mouse_down(TileId(0), 1, Point::new(60.0, 60.0));
//! assert!(board.handle(&mut host, BoardEvent::Pointer(down)).suppress_default());
//! # Ok::<(), tilegrid::Error>(())
//! ```

use std::fmt;

pub mod board;
pub mod config;

pub use board::{BoardEvent, BoardOutcome, TileBoard};
pub use config::{ConfigError, ConfigParse, TileGridConfig};

// --- Core re-exports -------------------------------------------------------

pub use tilegrid_core::adapter::{
    InputAdapter, InputCapabilities, LegacyMouseAdapter, NativePointerAdapter, RawPointerSample,
    select_adapter,
};
pub use tilegrid_core::{
    CaptureError, ComputedPadding, DeviceClass, Point, PointerButton, PointerId, PointerInput,
    PointerKind, Rect, Sides, Size, TileId, TileSurface, ViewportGeometry,
};

// --- Engine re-exports -----------------------------------------------------

pub use tilegrid_drag::{
    CancelReason, DragConfig, DragController, DragEffect, DragNoopReason, DragPhase,
    DragTransition,
};
pub use tilegrid_layout::{GridLayout, GridParams, GridPlan, GridSlot, column_count};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for tilegrid.
#[derive(Debug)]
pub enum Error {
    /// Configuration violated one or more constraints.
    Config(Vec<ConfigError>),
    /// Host-supplied options were not valid JSON for [`TileGridConfig`].
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(errors) => {
                write!(f, "invalid configuration")?;
                for (i, err) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{err}")?;
                }
                Ok(())
            }
            Self::Json(err) => write!(f, "invalid options: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Config(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<tilegrid_drag::DragError> for Error {
    fn from(err: tilegrid_drag::DragError) -> Self {
        Self::Config(vec![err.into()])
    }
}

/// Standard result type for tilegrid APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BoardEvent, BoardOutcome, ComputedPadding, DragPhase, Error, Point, PointerInput,
        PointerKind, Result, Size, TileBoard, TileGridConfig, TileId, TileSurface,
        ViewportGeometry,
    };

    pub use crate::{core, drag, layout};
}

pub use tilegrid_core as core;
pub use tilegrid_drag as drag;
pub use tilegrid_layout as layout;
