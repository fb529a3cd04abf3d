use log::{debug, trace};

use crate::core::data::point::PixelPosition;
use crate::core::data::screen_size::ScreenSize;
use crate::core::data::view_extent::ViewExtent;
use crate::core::data::viewport::{ViewportState, ZoomDirection};
use crate::core::interaction::drag::DragState;
use crate::core::interaction::events::{InputEvent, Key, PointerButton, RunSignal};
use crate::core::interaction::limits::InteractionLimits;

/// Turns input events into changes of a [`ViewportState`].
///
/// The controller owns the drag flag and the surface geometry; the viewport
/// itself belongs to the frame loop and is lent in for each batch of events.
#[derive(Debug, Clone)]
pub struct InteractionController {
    limits: InteractionLimits,
    extent: ViewExtent,
    screen: ScreenSize,
    home: ViewportState,
    drag: DragState,
}

impl InteractionController {
    #[must_use]
    pub fn new(
        limits: InteractionLimits,
        extent: ViewExtent,
        screen: ScreenSize,
        home: ViewportState,
    ) -> Self {
        Self {
            limits,
            extent,
            screen,
            home,
            drag: DragState::default(),
        }
    }

    #[must_use]
    pub fn drag(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn extent(&self) -> ViewExtent {
        self.extent
    }

    #[must_use]
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    pub fn set_screen(&mut self, screen: ScreenSize) {
        self.screen = screen;
    }

    /// Applies events in delivery order. Stops at the first quit request and
    /// drops whatever follows it.
    pub fn drain<I>(&mut self, events: I, viewport: &mut ViewportState) -> RunSignal
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if self.handle(event, viewport) == RunSignal::Quit {
                return RunSignal::Quit;
            }
        }

        RunSignal::Continue
    }

    pub fn handle(&mut self, event: InputEvent, viewport: &mut ViewportState) -> RunSignal {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Q | Key::Escape) => {
                debug!("quit requested by {:?}", event);
                return RunSignal::Quit;
            }
            InputEvent::KeyDown(Key::R) | InputEvent::ResetView => self.reset(viewport),
            InputEvent::KeyDown(Key::Other) => {}
            InputEvent::Scroll { dy, pointer } => self.zoom(dy, pointer, viewport),
            InputEvent::ButtonDown(PointerButton::Primary) => {
                debug!("drag started");
                self.drag.active = true;
            }
            InputEvent::ButtonUp(PointerButton::Primary) => {
                if self.drag.active {
                    debug!("drag finished");
                }
                self.drag.active = false;
            }
            InputEvent::ButtonDown(_) | InputEvent::ButtonUp(_) => {}
            InputEvent::PointerMotion { dx, dy } => {
                if self.drag.active {
                    self.pan(dx, dy, viewport);
                }
            }
        }

        RunSignal::Continue
    }

    fn zoom(&self, dy: f64, pointer: PixelPosition, viewport: &mut ViewportState) {
        let anchor = self.screen.normalize(pointer);

        viewport.zoom_at(
            ZoomDirection::from_scroll(dy),
            anchor,
            &self.extent,
            self.limits.zoom_step,
        );

        trace!(
            "zoom {} at ({:.1}, {:.1}), centre {} + {}i",
            viewport.zoom, pointer.x, pointer.y, viewport.center.real, viewport.center.imag
        );
    }

    fn pan(&self, dx: f64, dy: f64, viewport: &mut ViewportState) {
        let du = dx / f64::from(self.screen.width());
        let dv = dy / f64::from(self.screen.height());

        viewport.pan_by(du, dv, &self.extent);

        trace!(
            "pan by ({}, {}) px, centre {} + {}i",
            dx, dy, viewport.center.real, viewport.center.imag
        );
    }

    fn reset(&mut self, viewport: &mut ViewportState) {
        debug!("view reset to zoom {} at {:?}", self.home.zoom, self.home.center);
        *viewport = self.home;
        self.drag = DragState::default();
    }
}
