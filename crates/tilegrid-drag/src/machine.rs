#![forbid(unsafe_code)]

//! Single-session drag state machine.
//!
//! ```text
//! Idle -> Pressed -> Dragging -> Idle
//!            \--------------------/  (release or cancel before the threshold)
//! ```
//!
//! `Pressed` and `Dragging` are one active session distinguished only by the
//! `exceeded_threshold` flag. At most one session exists; a press while it is
//! active is a no-op and leaves the session untouched.

use tilegrid_core::{
    Point, PointerButton, PointerId, PointerInput, PointerKind, TileId, TileSurface,
    ViewportGeometry, debug, trace, warn,
};

use crate::config::{DragConfig, DragError};

/// In-progress interaction on one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub tile: TileId,
    pub pointer_id: PointerId,
    /// Pointer position at press, viewport coordinates.
    pub start: Point,
    /// Tile offset within the container at press.
    pub origin: Point,
    /// Last offset applied to the tile.
    pub position: Point,
    pub exceeded_threshold: bool,
}

/// Controller state: no session, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Active(DragSession),
}

impl DragState {
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        match self {
            Self::Idle => DragPhase::Idle,
            Self::Active(session) if session.exceeded_threshold => DragPhase::Dragging,
            Self::Active(_) => DragPhase::Pressed,
        }
    }

    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Active(session) => Some(session),
        }
    }
}

/// Externally visible interaction phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    Idle,
    Pressed,
    Dragging,
}

/// Why an input was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragNoopReason {
    /// Move, release, or cancel with no session.
    IdleWithoutSession,
    /// Press while another session is active.
    SessionAlreadyActive,
    /// Mouse-class press with a non-primary button.
    ButtonRejected,
    /// Input from a stream other than the session's.
    PointerMismatch,
    /// Press on a tile the host cannot locate.
    UnknownTile,
}

/// Why a session ended without a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelReason {
    /// The host abandoned the stream or took capture away.
    InputCanceled,
    /// The board is being torn down.
    Teardown,
}

/// What one input did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEffect {
    Pressed {
        tile: TileId,
        pointer_id: PointerId,
        origin: Point,
    },
    Moved {
        tile: TileId,
        position: Point,
        /// This move is the first past the threshold.
        started_dragging: bool,
    },
    Released {
        tile: TileId,
        /// The threshold was exceeded during the session.
        dragged: bool,
    },
    Canceled {
        tile: TileId,
        reason: CancelReason,
    },
    Noop {
        reason: DragNoopReason,
    },
}

/// One state-machine step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTransition {
    pub transition_id: u64,
    pub from: DragState,
    pub to: DragState,
    pub effect: DragEffect,
}

impl DragTransition {
    /// The host must suppress its default handling (text selection, native
    /// drag ghosting) for the input that produced this transition.
    #[must_use]
    pub const fn suppress_default(&self) -> bool {
        matches!(self.effect, DragEffect::Pressed { .. })
    }

    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self.effect, DragEffect::Noop { .. })
    }
}

/// Clamp one axis to `[0, max]`.
///
/// When `max < 0` (container smaller than the tile) the result is 0.
#[inline]
#[must_use]
pub fn clamp_axis(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}

/// The drag controller.
#[derive(Debug, Clone, PartialEq)]
pub struct DragController {
    config: DragConfig,
    state: DragState,
    transition_counter: u64,
}

impl Default for DragController {
    fn default() -> Self {
        Self {
            config: DragConfig::default(),
            state: DragState::Idle,
            transition_counter: 0,
        }
    }
}

impl DragController {
    /// Construct a controller with an explicit configuration.
    pub fn new(config: DragConfig) -> Result<Self, DragError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    #[must_use]
    pub const fn config(&self) -> DragConfig {
        self.config
    }

    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        self.state.phase()
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, DragState::Active(_))
    }

    /// Tile owned by the active session.
    #[must_use]
    pub fn active_tile(&self) -> Option<TileId> {
        self.state.session().map(|s| s.tile)
    }

    /// Feed one canonical input.
    pub fn apply<H>(&mut self, host: &mut H, input: &PointerInput) -> DragTransition
    where
        H: ViewportGeometry + TileSurface + ?Sized,
    {
        let from = self.state;
        let effect = match (self.state, input.kind) {
            (DragState::Active(_), PointerKind::Down { .. }) => DragEffect::Noop {
                reason: DragNoopReason::SessionAlreadyActive,
            },
            (DragState::Idle, PointerKind::Down { target }) => self.press(host, input, target),
            (DragState::Idle, _) => DragEffect::Noop {
                reason: DragNoopReason::IdleWithoutSession,
            },
            (DragState::Active(session), _) if !self.owns(&session, input.pointer_id) => {
                DragEffect::Noop {
                    reason: DragNoopReason::PointerMismatch,
                }
            }
            (DragState::Active(session), PointerKind::Move) => {
                self.drag_to(host, session, input.position)
            }
            (DragState::Active(session), PointerKind::Up) => {
                self.end(host, session);
                DragEffect::Released {
                    tile: session.tile,
                    dragged: session.exceeded_threshold,
                }
            }
            (DragState::Active(session), PointerKind::Cancel) => {
                self.end(host, session);
                DragEffect::Canceled {
                    tile: session.tile,
                    reason: CancelReason::InputCanceled,
                }
            }
        };
        self.transition(from, effect)
    }

    /// End any active session without a release, e.g. before the host goes
    /// away. The tile keeps its last position.
    pub fn force_cancel<H>(&mut self, host: &mut H, reason: CancelReason) -> DragTransition
    where
        H: ViewportGeometry + TileSurface + ?Sized,
    {
        let from = self.state;
        let effect = match self.state {
            DragState::Idle => DragEffect::Noop {
                reason: DragNoopReason::IdleWithoutSession,
            },
            DragState::Active(session) => {
                self.end(host, session);
                DragEffect::Canceled {
                    tile: session.tile,
                    reason,
                }
            }
        };
        self.transition(from, effect)
    }

    fn owns(&self, session: &DragSession, pointer_id: PointerId) -> bool {
        !self.config.strict_pointer_match || session.pointer_id == pointer_id
    }

    fn press<H>(&mut self, host: &mut H, input: &PointerInput, tile: TileId) -> DragEffect
    where
        H: ViewportGeometry + TileSurface + ?Sized,
    {
        if input.device.is_mouse_class()
            && input.button.is_some_and(|b| b != PointerButton::Primary)
        {
            return DragEffect::Noop {
                reason: DragNoopReason::ButtonRejected,
            };
        }
        let Some(tile_rect) = host.tile_rect(tile) else {
            return DragEffect::Noop {
                reason: DragNoopReason::UnknownTile,
            };
        };

        // Measured, not cached: something else may have just moved the tile.
        let origin = tile_rect.origin().delta_from(host.container_rect().origin());
        self.state = DragState::Active(DragSession {
            tile,
            pointer_id: input.pointer_id,
            start: input.position,
            origin,
            position: origin,
            exceeded_threshold: false,
        });

        if let Err(err) = host.capture_pointer(tile, input.pointer_id) {
            warn!(%tile, pointer = %input.pointer_id, error = %err, "pointer capture failed");
        }
        host.set_dragging(tile, true);
        debug!(%tile, pointer = %input.pointer_id, x = origin.x, y = origin.y, "drag session started");

        DragEffect::Pressed {
            tile,
            pointer_id: input.pointer_id,
            origin,
        }
    }

    fn drag_to<H>(&mut self, host: &mut H, mut session: DragSession, pointer: Point) -> DragEffect
    where
        H: ViewportGeometry + TileSurface + ?Sized,
    {
        let delta = pointer.delta_from(session.start);
        let was_dragging = session.exceeded_threshold;
        if delta.x.abs() > self.config.threshold || delta.y.abs() > self.config.threshold {
            session.exceeded_threshold = true;
        }

        let container = host.container_client_size();
        let tile = host
            .tile_rendered_size(session.tile)
            .unwrap_or(tilegrid_core::Size::ZERO);
        let candidate = session.origin.offset(delta);
        let position = Point::new(
            clamp_axis(candidate.x, container.width - tile.width),
            clamp_axis(candidate.y, container.height - tile.height),
        );

        host.set_tile_position(session.tile, position);
        session.position = position;
        self.state = DragState::Active(session);

        DragEffect::Moved {
            tile: session.tile,
            position,
            started_dragging: session.exceeded_threshold && !was_dragging,
        }
    }

    fn end<H>(&mut self, host: &mut H, session: DragSession)
    where
        H: ViewportGeometry + TileSurface + ?Sized,
    {
        if let Err(err) = host.release_pointer(session.tile, session.pointer_id) {
            warn!(tile = %session.tile, pointer = %session.pointer_id, error = %err, "pointer release failed");
        }
        host.set_dragging(session.tile, false);
        self.state = DragState::Idle;
        debug!(
            tile = %session.tile,
            dragged = session.exceeded_threshold,
            "drag session ended"
        );
    }

    fn transition(&mut self, from: DragState, effect: DragEffect) -> DragTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        trace!(
            transition_id = self.transition_counter,
            from = ?from.phase(),
            to = ?self.state.phase(),
            effect = ?effect,
            "drag transition"
        );
        DragTransition {
            transition_id: self.transition_counter,
            from,
            to: self.state,
            effect,
        }
    }
}
