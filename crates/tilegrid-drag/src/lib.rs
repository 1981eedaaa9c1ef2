#![forbid(unsafe_code)]

//! Pointer drag controller for absolutely positioned tiles.
//!
//! [`DragController`] consumes canonical [`tilegrid_core::PointerInput`]
//! events, whatever host family produced them, and moves at most one tile at
//! a time. Each input yields a [`DragTransition`] describing the state change
//! and its effect, so hosts can react (suppress default handling on press)
//! and tests can assert on exact lifecycles.
//!
//! Positions are written through [`tilegrid_core::TileSurface`] on every
//! move and are clamped so the tile stays inside the container.

pub mod config;
pub mod machine;

pub use config::{DragConfig, DragError};
pub use machine::{
    CancelReason, DragController, DragEffect, DragNoopReason, DragPhase, DragSession, DragState,
    DragTransition, clamp_axis,
};
