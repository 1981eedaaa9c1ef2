#![forbid(unsafe_code)]

//! Platform-agnostic listener wiring.
//!
//! Decides which host events are bound on which targets for a given input
//! adapter and what each one means to the board. The DOM layer only turns
//! this plan into real listeners.

use tilegrid::{InputAdapter, PointerKind, TileGridConfig, TileId};

/// Class applied to the tile being dragged.
pub const DRAGGING_CLASS: &str = "dragging";

/// Selector for tile elements inside the container.
pub const TILE_SELECTOR: &str = ".item";

/// Window notification that triggers a relayout.
pub const RESIZE_EVENT: &str = "resize";

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// Each tile element, one listener per tile.
    Tile,
    Document,
    Window,
}

/// What a listener feeds into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerAction {
    Press,
    Move,
    Release,
    Cancel,
    Resize,
}

impl ListenerAction {
    /// Pointer kind for this action, with `tile` as the press target.
    #[must_use]
    pub const fn pointer_kind(self, tile: TileId) -> Option<PointerKind> {
        match self {
            Self::Press => Some(PointerKind::Down { target: tile }),
            Self::Move => Some(PointerKind::Move),
            Self::Release => Some(PointerKind::Up),
            Self::Cancel => Some(PointerKind::Cancel),
            Self::Resize => None,
        }
    }
}

/// One listener to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerSpec {
    pub target: ListenerTarget,
    pub event: &'static str,
    pub action: ListenerAction,
}

/// Listeners for `adapter`, in installation order.
///
/// Presses are bound per tile; motion and release on the document so a drag
/// continues after the pointer leaves the tile.
#[must_use]
pub fn listener_plan(adapter: &dyn InputAdapter) -> Vec<ListenerSpec> {
    let names = adapter.event_names();
    let mut plan = vec![
        ListenerSpec {
            target: ListenerTarget::Tile,
            event: names.down,
            action: ListenerAction::Press,
        },
        ListenerSpec {
            target: ListenerTarget::Document,
            event: names.move_,
            action: ListenerAction::Move,
        },
        ListenerSpec {
            target: ListenerTarget::Document,
            event: names.up,
            action: ListenerAction::Release,
        },
    ];
    if let Some(cancel) = names.cancel {
        plan.push(ListenerSpec {
            target: ListenerTarget::Document,
            event: cancel,
            action: ListenerAction::Cancel,
        });
    }
    if let Some(lost) = names.lost_capture {
        plan.push(ListenerSpec {
            target: ListenerTarget::Tile,
            event: lost,
            action: ListenerAction::Cancel,
        });
    }
    plan.push(ListenerSpec {
        target: ListenerTarget::Window,
        event: RESIZE_EVENT,
        action: ListenerAction::Resize,
    });
    plan
}

/// Resolve the optional JSON options object passed from JavaScript.
pub fn parse_options(options: Option<&str>) -> tilegrid::Result<TileGridConfig> {
    let config = match options.map(str::trim) {
        None | Some("") => TileGridConfig::default(),
        Some(json) => TileGridConfig::from_json_str(json)?,
    };
    config.validate().map_err(tilegrid::Error::Config)?;
    Ok(config)
}

/// Format a pixel length for an inline style property.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}
