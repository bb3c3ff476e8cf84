//! Glue between the coordinator and the host UI layer
//!
//! - [`bind_input`]: focus/blur handlers for one input
//! - [`ToolbarView`]: subscription-backed view of the toolbar state
//! - [`toolbar_props`]: placement style and pointer guard for rendering

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::ToolbarConfig;
use crate::coordinator::{Subscription, ToolbarCoordinator, ToolbarState};
use crate::element::{ChangeHandler, ElementRef};
use crate::geometry::ToolbarStyle;

// ============================================================================
// Input binding
// ============================================================================

/// Focus/blur handlers for a registered input
pub struct InputHandlers {
    coordinator: Rc<ToolbarCoordinator>,
    element: ElementRef,
    config: ToolbarConfig,
    on_change: Option<ChangeHandler>,
}

impl InputHandlers {
    /// Call when the input gains focus
    pub fn on_focus(&self) {
        let config = &self.config;
        self.coordinator.show(
            &self.element,
            |input| config.position_for(input),
            self.on_change.clone(),
        );
    }

    /// Call when the input loses focus
    pub fn on_blur(&self) {
        self.coordinator.schedule_hide(self.config.hide_delay());
    }
}

/// Register `element` with the toolbar
///
/// `on_change` is the input's controlled-component change callback; it is
/// handed to the coordinator on every focus.
pub fn bind_input(
    coordinator: &Rc<ToolbarCoordinator>,
    element: &ElementRef,
    config: &ToolbarConfig,
    on_change: Option<ChangeHandler>,
) -> InputHandlers {
    InputHandlers {
        coordinator: Rc::clone(coordinator),
        element: Rc::clone(element),
        config: config.clone(),
        on_change,
    }
}

// ============================================================================
// Toolbar view
// ============================================================================

/// Live view of the toolbar state for the component that renders it
///
/// Subscribes on creation and unsubscribes when dropped.
pub struct ToolbarView {
    coordinator: Rc<ToolbarCoordinator>,
    state: Rc<RefCell<ToolbarState>>,
    dirty: Rc<Cell<bool>>,
    _subscription: Subscription,
}

impl ToolbarView {
    pub fn new(coordinator: &Rc<ToolbarCoordinator>) -> Self {
        let state = Rc::new(RefCell::new(coordinator.get_state()));
        let dirty = Rc::new(Cell::new(true));

        let subscription = {
            let state = Rc::clone(&state);
            let dirty = Rc::clone(&dirty);
            coordinator.subscribe(move |next| {
                *state.borrow_mut() = next.clone();
                dirty.set(true);
            })
        };

        Self {
            coordinator: Rc::clone(coordinator),
            state,
            dirty,
            _subscription: subscription,
        }
    }

    /// Latest published state
    pub fn state(&self) -> ToolbarState {
        self.state.borrow().clone()
    }

    /// Whether a transition arrived since the last call; clears the flag
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Delegate to [`ToolbarCoordinator::apply_format`]
    pub fn apply_format<F>(&self, formatter: F, on_change_override: Option<ChangeHandler>)
    where
        F: FnOnce(&str) -> String,
    {
        self.coordinator.apply_format(formatter, on_change_override);
    }

    /// Render props for the current state
    pub fn props(&self, config: &ToolbarConfig) -> Option<ToolbarProps> {
        toolbar_props(&self.coordinator, &self.state.borrow(), config)
    }
}

// ============================================================================
// Render props
// ============================================================================

/// What the host should do with a pointer-down on the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDown {
    /// Suppress the default action so the input keeps focus
    PreventDefault,
    /// Let the event through
    Default,
}

/// Pointer-down handler that keeps toolbar clicks from hiding the toolbar
#[derive(Clone)]
pub struct PointerGuard {
    coordinator: Rc<ToolbarCoordinator>,
}

impl PointerGuard {
    pub fn on_pointer_down(&self) -> PointerDown {
        // The host suppresses focus loss, but a blur may already be pending
        self.coordinator.cancel_scheduled_hide();
        PointerDown::PreventDefault
    }
}

/// Style and handlers for rendering the toolbar
#[derive(Clone)]
pub struct ToolbarProps {
    pub style: ToolbarStyle,
    /// Present when `prevent_close_on_click` is enabled
    pub pointer_guard: Option<PointerGuard>,
}

impl ToolbarProps {
    /// Route a pointer-down on the toolbar through the guard, if any
    pub fn on_pointer_down(&self) -> PointerDown {
        match &self.pointer_guard {
            Some(guard) => guard.on_pointer_down(),
            None => PointerDown::Default,
        }
    }
}

/// Render props for `state`, or `None` while the toolbar is hidden
pub fn toolbar_props(
    coordinator: &Rc<ToolbarCoordinator>,
    state: &ToolbarState,
    config: &ToolbarConfig,
) -> Option<ToolbarProps> {
    let position = state.position()?;
    let pointer_guard = config.prevent_close_on_click().then(|| PointerGuard {
        coordinator: Rc::clone(coordinator),
    });

    Some(ToolbarProps {
        style: ToolbarStyle::fixed_at(position).with_z_index(config.settings.z_index),
        pointer_guard,
    })
}
