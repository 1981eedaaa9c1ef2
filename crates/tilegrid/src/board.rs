#![forbid(unsafe_code)]

//! [`TileBoard`]: the grid engine and drag controller sharing one host.

use tilegrid_core::{PointerInput, TileId, TileSurface, ViewportGeometry};
use tilegrid_drag::{CancelReason, DragController, DragPhase, DragTransition};
use tilegrid_layout::{GridLayout, GridPlan};

use crate::config::TileGridConfig;

/// Notifications a host delivers to the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardEvent {
    Pointer(PointerInput),
    /// The container may have changed size. Carries no payload; geometry is
    /// re-read from the host.
    Resize,
}

/// What handling one [`BoardEvent`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardOutcome {
    Layout(GridPlan),
    Drag(DragTransition),
}

impl BoardOutcome {
    /// Whether the host must suppress its default handling of the event.
    #[must_use]
    pub fn suppress_default(&self) -> bool {
        matches!(self, Self::Drag(t) if t.suppress_default())
    }
}

/// A fixed set of tiles laid out in a responsive grid and draggable one at a
/// time.
///
/// Layout runs at [`mount`](Self::mount) and on every resize, overwriting any
/// drag offsets. Drags move a single tile directly and are never undone
/// except by the next layout.
#[derive(Debug, Clone)]
pub struct TileBoard {
    config: TileGridConfig,
    tile_count: usize,
    layout: GridLayout,
    drag: DragController,
    last_plan: Option<GridPlan>,
}

impl TileBoard {
    /// Create a board for tiles `0..tile_count`.
    pub fn new(config: TileGridConfig, tile_count: usize) -> crate::Result<Self> {
        config.validate().map_err(crate::Error::Config)?;
        Ok(Self {
            config,
            tile_count,
            layout: GridLayout::new(config.grid),
            drag: DragController::new(config.drag)?,
            last_plan: None,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &TileGridConfig {
        &self.config
    }

    #[must_use]
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Tile identifiers in layout order.
    pub fn tiles(&self) -> impl ExactSizeIterator<Item = TileId> + use<> {
        (0..self.tile_count).map(TileId)
    }

    #[must_use]
    pub const fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    #[must_use]
    pub fn active_tile(&self) -> Option<TileId> {
        self.drag.active_tile()
    }

    /// Plan produced by the most recent layout pass.
    #[must_use]
    pub fn last_plan(&self) -> Option<&GridPlan> {
        self.last_plan.as_ref()
    }

    /// Run the initial layout.
    pub fn mount<H>(&mut self, host: &mut H) -> &GridPlan
    where
        H: ViewportGeometry + TileSurface + ?Sized,
    {
        tilegrid_core::info!(tiles = self.tile_count, "tile board mounted");
        self.relayout(host)
    }

    /// Dispatch one host notification.
    pub fn handle<H>(&mut self, host: &mut H, event: BoardEvent) -> BoardOutcome
    where
        H: ViewportGeometry + TileSurface + ?Sized,
    {
        match event {
            BoardEvent::Pointer(input) => BoardOutcome::Drag(self.drag.apply(host, &input)),
            BoardEvent::Resize => BoardOutcome::Layout(self.relayout(host).clone()),
        }
    }

    /// End any active drag and leave tiles where they are.
    pub fn teardown<H>(&mut self, host: &mut H) -> DragTransition
    where
        H: ViewportGeometry + TileSurface + ?Sized,
    {
        self.drag.force_cancel(host, CancelReason::Teardown)
    }

    fn relayout<H>(&mut self, host: &mut H) -> &GridPlan
    where
        H: ViewportGeometry + TileSurface + ?Sized,
    {
        let plan = self.layout.apply(host, self.tile_count);
        self.last_plan.insert(plan)
    }
}
