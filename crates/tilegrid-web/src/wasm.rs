#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use tilegrid::core::warn;
use tilegrid::{
    BoardEvent, InputAdapter, InputCapabilities, RawPointerSample, TileBoard, TileId,
    select_adapter,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlElement, MouseEvent, PointerEvent};

use crate::dom::{DomHost, supports_pointer_events};
use crate::wiring::{ListenerAction, ListenerTarget, listener_plan, parse_options};

struct Shared {
    board: TileBoard,
    host: DomHost,
    adapter: Box<dyn InputAdapter>,
}

impl Shared {
    fn dispatch(&mut self, action: ListenerAction, tile: TileId, event: &Event) {
        let Some(kind) = action.pointer_kind(tile) else {
            self.board.handle(&mut self.host, BoardEvent::Resize);
            return;
        };
        let Some(sample) = sample(event) else {
            return;
        };
        let input = self.adapter.normalize(kind, &sample);
        if self
            .board
            .handle(&mut self.host, BoardEvent::Pointer(input))
            .suppress_default()
        {
            event.prevent_default();
        }
    }
}

fn sample(event: &Event) -> Option<RawPointerSample> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    let (pointer_type, pointer_id) = event
        .dyn_ref::<PointerEvent>()
        .map(|p| (p.pointer_type(), p.pointer_id()))
        .unwrap_or_default();
    Some(RawPointerSample {
        pointer_type,
        pointer_id,
        button: mouse.button(),
        client_x: f64::from(mouse.client_x()),
        client_y: f64::from(mouse.client_y()),
    })
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Responsive draggable tile grid bound to a container element.
///
/// Tiles are the container's `.item` descendants, in document order. The
/// container is laid out immediately and on every window resize.
#[wasm_bindgen]
pub struct TileGridWeb {
    shared: Rc<RefCell<Shared>>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl TileGridWeb {
    /// Attach to `container`. `options` is an optional JSON object, e.g.
    /// `{"grid":{"size":100,"gap":12},"drag":{"threshold":3}}`.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, options: Option<String>) -> Result<TileGridWeb, JsValue> {
        let config =
            parse_options(options.as_deref()).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let caps = InputCapabilities::new(supports_pointer_events(&window));
        let adapter = select_adapter(caps);
        let plan = listener_plan(adapter.as_ref());

        let mut host = DomHost::new(window.clone(), container)?;
        let mut board = TileBoard::new(config, host.tiles().len())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        board.mount(&mut host);

        let tile_targets: Vec<EventTarget> = host
            .tiles()
            .iter()
            .map(|el| el.clone().unchecked_into::<EventTarget>())
            .collect();
        let shared = Rc::new(RefCell::new(Shared {
            board,
            host,
            adapter,
        }));

        let mut this = Self {
            shared,
            listeners: Vec::new(),
        };
        for spec in plan {
            match spec.target {
                ListenerTarget::Tile => {
                    for (i, target) in tile_targets.iter().enumerate() {
                        this.listen(target.clone(), spec.event, spec.action, TileId(i))?;
                    }
                }
                ListenerTarget::Document => {
                    this.listen(document.clone().into(), spec.event, spec.action, TileId(0))?;
                }
                ListenerTarget::Window => {
                    this.listen(window.clone().into(), spec.event, spec.action, TileId(0))?;
                }
            }
        }
        Ok(this)
    }

    /// Recompute the layout now, e.g. after the container changed size
    /// without a window resize.
    pub fn relayout(&mut self) {
        let mut shared = self.shared.borrow_mut();
        let Shared { board, host, .. } = &mut *shared;
        board.handle(host, BoardEvent::Resize);
    }

    #[wasm_bindgen(js_name = tileCount)]
    pub fn tile_count(&self) -> usize {
        self.shared.borrow().board.tile_count()
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.shared.borrow().board.active_tile().is_some()
    }

    /// Remove every listener and end any drag in progress.
    pub fn destroy(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
            );
        }
        let mut shared = self.shared.borrow_mut();
        let Shared { board, host, .. } = &mut *shared;
        board.teardown(host);
    }
}

impl TileGridWeb {
    fn listen(
        &mut self,
        target: EventTarget,
        event: &'static str,
        action: ListenerAction,
        tile: TileId,
    ) -> Result<(), JsValue> {
        let shared = Rc::clone(&self.shared);
        let callback = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            match shared.try_borrow_mut() {
                Ok(mut shared) => shared.dispatch(action, tile, &ev),
                Err(_) => {
                    warn!(event, "re-entrant event dropped");
                }
            }
        });
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.listeners.push(Listener {
            target,
            event,
            callback,
        });
        Ok(())
    }
}

impl Drop for TileGridWeb {
    fn drop(&mut self) {
        if !self.listeners.is_empty() {
            self.destroy();
        }
    }
}

#[cfg(feature = "console-panic")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
