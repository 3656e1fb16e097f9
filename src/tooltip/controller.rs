//! Tooltip controller: binds a [`TooltipCore`] to a brush region
//!
//! Listeners are appended after whatever the host already registered, so
//! the brush keeps its own behavior and the tooltip reacts afterwards.
//! All listeners share one core through `Rc<RefCell<_>>`; the region is
//! single-threaded and dispatches one event at a time.

use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::clock::{Clock, SystemClock};
use super::label::{FloatingLabel, LabelPosition};
use super::position::{PositionFn, PositionPolicy, Viewport, ViewportMetrics};
use super::tooltip_core::{Formatter, TooltipCore};
use super::tooltip_events::{
    handle_brush_end, handle_brush_move, handle_brush_start, handle_container_down,
    handle_container_up, handle_element_down, handle_element_enter, handle_element_leave,
    handle_element_move, handle_element_up,
};
use super::tooltip_state::TooltipState;
use crate::brush::{
    BrushEvent, BrushPhase, ElementId, InteractiveRegion, ListenerId, PointerEvent, PointerKind,
    PointerTarget,
};

/// What a second `attach` for the same label does to the first one's listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachMode {
    /// Drop listeners a previous attach registered for this label, then register
    #[default]
    Replace,
    /// Keep previous listeners; both controllers react to every event
    Cumulative,
}

/// Settings for one tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipOptions {
    pub initial_text: String,
    /// Sub-elements that open the tooltip on hover, in wiring order
    pub hover_selectors: Vec<String>,
    pub hide_delay: Duration,
    pub attach_mode: AttachMode,
    pub position: PositionPolicy,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            initial_text: String::new(),
            hover_selectors: vec![
                ".selection".to_string(),
                ".handle--e".to_string(),
                ".handle--w".to_string(),
            ],
            hide_delay: Duration::from_millis(200),
            attach_mode: AttachMode::default(),
            position: PositionPolicy::default(),
        }
    }
}

impl TooltipOptions {
    pub fn initial_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = text.into();
        self
    }

    pub fn hover_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hover_selectors = selectors.into_iter().map(Into::into).collect();
        self
    }

    pub fn hide_delay_ms(mut self, ms: u64) -> Self {
        self.hide_delay = Duration::from_millis(ms);
        self
    }

    pub fn attach_mode(mut self, mode: AttachMode) -> Self {
        self.attach_mode = mode;
        self
    }

    pub fn position(mut self, policy: PositionPolicy) -> Self {
        self.position = policy;
        self
    }
}

/// Collects everything `attach` needs
pub struct TooltipBuilder {
    label: FloatingLabel,
    formatter: Formatter,
    options: TooltipOptions,
    clock: Rc<dyn Clock>,
    viewport: Rc<dyn Viewport>,
    position_fn: Option<PositionFn>,
}

impl TooltipBuilder {
    pub fn options(mut self, options: TooltipOptions) -> Self {
        self.options = options;
        self
    }

    pub fn clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn viewport(mut self, viewport: Rc<dyn Viewport>) -> Self {
        self.viewport = viewport;
        self
    }

    /// Replace the default placement policy
    pub fn position_fn(
        mut self,
        position_fn: impl Fn(&PointerEvent, &FloatingLabel, &dyn Viewport) -> LabelPosition + 'static,
    ) -> Self {
        self.position_fn = Some(Box::new(position_fn));
        self
    }

    /// Register the tooltip's listeners on `region` and start tracking
    pub fn attach<R: InteractiveRegion + ?Sized>(self, region: &mut R) -> TooltipController {
        let namespace = format!("tooltip.{}", self.label.id());
        if self.options.attach_mode == AttachMode::Replace {
            let removed = region.remove_namespace(&namespace);
            if removed > 0 {
                log::debug!("{namespace}: replaced {removed} listeners from an earlier attach");
            }
        }

        let mut core = TooltipCore::new(
            self.label,
            self.formatter,
            &self.options.initial_text,
            self.options.hide_delay,
            self.clock,
            self.viewport,
        );
        core.set_policy(self.options.position);
        core.set_position_fn(self.position_fn);
        let core = Rc::new(RefCell::new(core));

        let mut binder = Binder {
            region,
            namespace: &namespace,
            core: &core,
            ids: Vec::new(),
        };

        binder.brush(BrushPhase::Start, handle_brush_start);
        binder.brush(BrushPhase::Brush, handle_brush_move);
        binder.brush(BrushPhase::End, handle_brush_end);

        binder.pointer(PointerTarget::Container, PointerKind::Up, handle_container_up);
        binder.pointer(PointerTarget::Container, PointerKind::Down, handle_container_down);

        for element in hover_elements(binder.region, &self.options.hover_selectors) {
            let target = PointerTarget::Element(element);
            binder.pointer(target, PointerKind::Enter, handle_element_enter);
            binder.pointer(target, PointerKind::Move, handle_element_move);
            binder.pointer(target, PointerKind::Up, handle_element_up);
            binder.pointer(target, PointerKind::Leave, handle_element_leave);
            binder.pointer(target, PointerKind::Down, handle_element_down);
        }

        let listener_ids = binder.ids;
        log::debug!("{namespace}: attached with {} listeners", listener_ids.len());

        TooltipController {
            core,
            listener_ids,
            namespace,
        }
    }
}

/// Elements matched by the selectors, each once, in selector order
fn hover_elements<R: InteractiveRegion + ?Sized>(region: &R, selectors: &[String]) -> Vec<ElementId> {
    let mut elements = Vec::new();
    for selector in selectors {
        for element in region.select_all(selector) {
            if !elements.contains(&element) {
                elements.push(element);
            }
        }
    }
    elements
}

struct Binder<'a, R: ?Sized> {
    region: &'a mut R,
    namespace: &'a str,
    core: &'a Rc<RefCell<TooltipCore>>,
    ids: Vec<ListenerId>,
}

impl<R: InteractiveRegion + ?Sized> Binder<'_, R> {
    fn brush(&mut self, phase: BrushPhase, handler: fn(&mut TooltipCore, &BrushEvent)) {
        let core = Rc::clone(self.core);
        let id = self.region.on_brush(
            phase,
            Some(self.namespace),
            Box::new(move |event: &BrushEvent| handler(&mut core.borrow_mut(), event)),
        );
        self.ids.push(id);
    }

    fn pointer(
        &mut self,
        target: PointerTarget,
        kind: PointerKind,
        handler: fn(&mut TooltipCore, &PointerEvent),
    ) {
        let core = Rc::clone(self.core);
        let id = self.region.on_pointer(
            target,
            kind,
            Some(self.namespace),
            Box::new(move |pointer: &PointerEvent| handler(&mut core.borrow_mut(), pointer)),
        );
        self.ids.push(id);
    }
}

/// A tooltip attached to one brush region.
///
/// The formatter and position function run while the controller's state
/// is borrowed; they must not call back into the controller.
pub struct TooltipController {
    core: Rc<RefCell<TooltipCore>>,
    listener_ids: Vec<ListenerId>,
    namespace: String,
}

impl TooltipController {
    /// Start building a tooltip for `label`, using the system clock and an unbounded viewport
    pub fn builder(
        label: FloatingLabel,
        formatter: impl Fn(&BrushEvent) -> Option<String> + 'static,
    ) -> TooltipBuilder {
        TooltipBuilder {
            label,
            formatter: Box::new(formatter),
            options: TooltipOptions::default(),
            clock: Rc::new(SystemClock),
            viewport: Rc::new(ViewportMetrics::new(f64::INFINITY, 0.0)),
            position_fn: None,
        }
    }

    /// Attach with the default placement policy measured against `viewport`
    pub fn attach<R: InteractiveRegion + ?Sized>(
        label: FloatingLabel,
        region: &mut R,
        formatter: impl Fn(&BrushEvent) -> Option<String> + 'static,
        options: TooltipOptions,
        viewport: Rc<dyn Viewport>,
    ) -> Self {
        Self::builder(label, formatter)
            .options(options)
            .viewport(viewport)
            .attach(region)
    }

    /// Remove every listener this controller registered and take the label down
    pub fn detach<R: InteractiveRegion + ?Sized>(self, region: &mut R) {
        let mut removed = 0;
        for id in &self.listener_ids {
            if region.remove_listener(*id) {
                removed += 1;
            }
        }
        self.core.borrow_mut().shut_down();
        log::debug!("{}: detached, removed {removed} listeners", self.namespace);
    }

    /// Fire a due hide and advance fades. Call from the host's event loop.
    pub fn tick(&self) -> bool {
        self.core.borrow_mut().tick()
    }

    /// When the host should call [`TooltipController::tick`] next
    pub fn next_deadline(&self) -> Option<Instant> {
        self.core.borrow().next_deadline()
    }

    pub fn label(&self) -> Ref<'_, FloatingLabel> {
        Ref::map(self.core.borrow(), |core| core.label())
    }

    pub fn state(&self) -> Ref<'_, TooltipState> {
        Ref::map(self.core.borrow(), |core| core.state())
    }

    pub fn is_locked(&self) -> bool {
        self.core.borrow().state().locked
    }

    #[cfg(test)]
    pub(crate) fn hides_scheduled(&self) -> u64 {
        self.core.borrow().hides_scheduled()
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn listener_count(&self) -> usize {
        self.listener_ids.len()
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
