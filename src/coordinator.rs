//! Toolbar coordination
//!
//! [`ToolbarCoordinator`] is the single owner of "which input is active and
//! where the toolbar goes". Every registered input talks to the same instance,
//! so at most one toolbar is visible for the whole application.
//!
//! # Transitions
//!
//! - focus → [`ToolbarCoordinator::show`]
//! - blur → [`ToolbarCoordinator::schedule_hide`], fired later by
//!   [`ToolbarCoordinator::poll_timers`] unless a new `show`, a `hide` or
//!   [`ToolbarCoordinator::cancel_scheduled_hide`] gets there first
//! - toolbar action → [`ToolbarCoordinator::apply_format`]
//!
//! Every transition is published synchronously to all subscribers before the
//! call returns, including redundant ones (hiding an already hidden toolbar).

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use crate::element::{ChangeEvent, ChangeHandler, ElementRef, TextInput};
use crate::formatter::{compute_formatted_value, try_compute_formatted_value};
use crate::geometry::Point;
use crate::scheduler::{Clock, HideTimer, SystemClock};

// ============================================================================
// State snapshot
// ============================================================================

/// Immutable snapshot of the toolbar
///
/// The toolbar is visible exactly when it has both an active element and a
/// position; the two are stored together so neither can exist alone.
#[derive(Clone, Default)]
pub struct ToolbarState {
    active: Option<(ElementRef, Point)>,
}

impl ToolbarState {
    /// The initial state: nothing focused, nothing shown
    pub fn hidden() -> Self {
        Self { active: None }
    }

    /// Toolbar shown for `element` at `position`
    pub fn visible(element: ElementRef, position: Point) -> Self {
        Self {
            active: Some((element, position)),
        }
    }

    pub fn active_element(&self) -> Option<&ElementRef> {
        self.active.as_ref().map(|(element, _)| element)
    }

    pub fn position(&self) -> Option<Point> {
        self.active.as_ref().map(|(_, position)| *position)
    }

    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }

    /// Whether `element` is the active element (identity, not value equality)
    pub fn is_active(&self, element: &ElementRef) -> bool {
        self.active_element()
            .is_some_and(|active| Rc::ptr_eq(active, element))
    }
}

impl PartialEq for ToolbarState {
    fn eq(&self, other: &Self) -> bool {
        match (&self.active, &other.active) {
            (None, None) => true,
            (Some((a, pa)), Some((b, pb))) => Rc::ptr_eq(a, b) && pa == pb,
            _ => false,
        }
    }
}

impl fmt::Debug for ToolbarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolbarState")
            .field("active_element", &self.active_element().map(Rc::as_ptr))
            .field("is_visible", &self.is_visible())
            .field("position", &self.position())
            .finish()
    }
}

// ============================================================================
// Subscribers
// ============================================================================

type Subscriber = Rc<dyn Fn(&ToolbarState)>;

#[derive(Default)]
struct SubscriberRegistry {
    next_id: u64,
    entries: Vec<(u64, Subscriber)>,
}

impl SubscriberRegistry {
    fn insert(&mut self, callback: Subscriber) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    fn snapshot(&self) -> Vec<Subscriber> {
        self.entries.iter().map(|(_, cb)| Rc::clone(cb)).collect()
    }
}

/// Handle returned by [`ToolbarCoordinator::subscribe`]
///
/// The callback stays registered until [`Subscription::unsubscribe`] is called
/// or the handle is dropped.
#[must_use = "dropping a Subscription unsubscribes it immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<SubscriberRegistry>>,
}

impl Subscription {
    /// Remove the callback. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}

    fn detach(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(self.id);
        }
        self.registry = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

// ============================================================================
// Coordinator
// ============================================================================

/// Owner of the toolbar state, the subscriber set, and the deferred-hide timer
///
/// Single-threaded: share it with `Rc` between input handlers and the toolbar
/// view. Methods take `&self` and never hold an internal borrow while calling
/// out to subscribers or change handlers, so those may call back in.
pub struct ToolbarCoordinator {
    state: RefCell<ToolbarState>,
    /// Change callback of the active element, captured at `show` time
    on_change: RefCell<Option<ChangeHandler>>,
    timer: RefCell<HideTimer>,
    subscribers: Rc<RefCell<SubscriberRegistry>>,
    /// Bumped on every publish
    revision: Cell<u64>,
    clock: Rc<dyn Clock>,
}

impl ToolbarCoordinator {
    /// Create a coordinator timed by the system clock
    pub fn new() -> Self {
        Self::with_clock(Rc::new(SystemClock))
    }

    /// Create a coordinator reading time from `clock`
    pub fn with_clock(clock: Rc<dyn Clock>) -> Self {
        Self {
            state: RefCell::new(ToolbarState::hidden()),
            on_change: RefCell::new(None),
            timer: RefCell::new(HideTimer::new()),
            subscribers: Rc::new(RefCell::new(SubscriberRegistry::default())),
            revision: Cell::new(0),
            clock,
        }
    }

    /// Snapshot of the current state
    pub fn get_state(&self) -> ToolbarState {
        self.state.borrow().clone()
    }

    /// Show the toolbar for `element`
    ///
    /// Cancels any pending hide, remembers `on_change` for later
    /// [`apply_format`](Self::apply_format) calls, and places the toolbar at
    /// `position_fn(element)`. Panics in `position_fn` propagate before
    /// anything changes: the pending hide and captured handler stay as they were.
    pub fn show<P>(&self, element: &ElementRef, position_fn: P, on_change: Option<ChangeHandler>)
    where
        P: FnOnce(&dyn TextInput) -> Point,
    {
        let position = {
            let input = element.borrow();
            position_fn(&*input)
        };

        self.cancel_scheduled_hide();
        *self.on_change.borrow_mut() = on_change;

        tracing::debug!(x = position.x, y = position.y, "Showing toolbar");
        self.publish(ToolbarState::visible(Rc::clone(element), position));
    }

    /// Hide the toolbar immediately
    pub fn hide(&self) {
        self.cancel_scheduled_hide();
        *self.on_change.borrow_mut() = None;

        tracing::debug!("Hiding toolbar");
        self.publish(ToolbarState::hidden());
    }

    /// Hide after `delay`, replacing any hide already scheduled
    ///
    /// Nothing happens until [`poll_timers`](Self::poll_timers) runs at or
    /// after the deadline, even for a zero delay.
    pub fn schedule_hide(&self, delay: Duration) {
        let now = self.clock.now();
        let generation = self.timer.borrow_mut().schedule(now, delay);
        tracing::trace!(
            delay_ms = delay.as_millis() as u64,
            generation,
            "Scheduled toolbar hide"
        );
    }

    /// Cancel the pending hide, if any
    pub fn cancel_scheduled_hide(&self) {
        if self.timer.borrow_mut().cancel() {
            tracing::trace!("Cancelled scheduled toolbar hide");
        }
    }

    /// Whether a deferred hide is waiting to fire
    pub fn has_pending_hide(&self) -> bool {
        self.timer.borrow().is_pending()
    }

    /// When the pending hide is due, for hosts that sleep until the next timer
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.borrow().deadline()
    }

    /// Fire the pending hide if its deadline has passed
    ///
    /// Returns whether a hide fired. Call this from the host event loop.
    pub fn poll_timers(&self) -> bool {
        let now = self.clock.now();
        let due = self.timer.borrow_mut().take_due(now);
        match due {
            Some(generation) => {
                tracing::trace!(generation, "Scheduled toolbar hide fired");
                self.hide();
                true
            }
            None => false,
        }
    }

    /// Apply `formatter` to the active element's selection, or its whole value
    ///
    /// Writes the result back, dispatches the element's input event, calls
    /// `on_change_override` (or the handler captured by `show`), then
    /// re-focuses the element. Without an active element this only logs a
    /// warning. Panics in `formatter` propagate and leave the element as it was.
    pub fn apply_format<F>(&self, formatter: F, on_change_override: Option<ChangeHandler>)
    where
        F: FnOnce(&str) -> String,
    {
        let Some(element) = self.active_element_or_warn() else {
            return;
        };

        let new_value = {
            let input = element.borrow();
            compute_formatted_value(
                &input.value(),
                input.selection_start(),
                input.selection_end(),
                formatter,
            )
        };

        self.commit(&element, new_value, on_change_override);
    }

    /// Like [`apply_format`](Self::apply_format) for a formatter that can fail
    ///
    /// A formatter error is returned to the caller and the element is left
    /// untouched; the toolbar stays on the same element.
    pub fn try_apply_format<F>(
        &self,
        formatter: F,
        on_change_override: Option<ChangeHandler>,
    ) -> anyhow::Result<()>
    where
        F: FnOnce(&str) -> anyhow::Result<String>,
    {
        let Some(element) = self.active_element_or_warn() else {
            return Ok(());
        };

        let new_value = {
            let input = element.borrow();
            try_compute_formatted_value(
                &input.value(),
                input.selection_start(),
                input.selection_end(),
                formatter,
            )?
        };

        self.commit(&element, new_value, on_change_override);
        Ok(())
    }

    /// Register `callback` for every future state transition
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ToolbarState) + 'static,
    {
        let id = self.subscribers.borrow_mut().insert(Rc::new(callback));
        Subscription {
            id,
            registry: Rc::downgrade(&self.subscribers),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().entries.len()
    }

    fn active_element_or_warn(&self) -> Option<ElementRef> {
        let element = self.state.borrow().active_element().cloned();
        if element.is_none() {
            tracing::warn!("Format requested with no active input, ignoring");
        }
        element
    }

    fn commit(&self, element: &ElementRef, value: String, on_change_override: Option<ChangeHandler>) {
        {
            let mut input = element.borrow_mut();
            input.set_value(value);
            input.dispatch_input_event();
        }

        let handler = on_change_override.or_else(|| self.on_change.borrow().clone());
        if let Some(handler) = handler {
            handler(&ChangeEvent::new(element));
        }

        element.borrow().focus();
    }

    fn publish(&self, state: ToolbarState) {
        *self.state.borrow_mut() = state.clone();
        let revision = self.revision.get().wrapping_add(1);
        self.revision.set(revision);

        let subscribers = self.subscribers.borrow().snapshot();
        for subscriber in subscribers {
            subscriber(&state);
            // A subscriber published a newer state, which already reached everyone
            if self.revision.get() != revision {
                tracing::trace!("Transition superseded during delivery");
                break;
            }
        }
    }
}

impl Default for ToolbarCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToolbarCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolbarCoordinator")
            .field("state", &*self.state.borrow())
            .field("timer", &*self.timer.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
