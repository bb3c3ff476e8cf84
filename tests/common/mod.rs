//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use format_toolbar::{
    ChangeEvent, ChangeHandler, ElementRef, ManualClock, Point, Rect, TextField, TextInput,
    ToolbarCoordinator, ToolbarState,
};

/// A field kept both as its concrete type (for inspection) and as an element handle
pub struct TestField {
    pub field: Rc<RefCell<TextField>>,
    pub element: ElementRef,
}

impl TestField {
    pub fn value(&self) -> String {
        self.field.borrow().value()
    }

    pub fn focus_count(&self) -> usize {
        self.field.borrow().focus_count()
    }

    pub fn input_events(&self) -> usize {
        self.field.borrow().input_events
    }
}

/// Create a field with `text`, selecting `anchor..head`
pub fn field(text: &str, anchor: usize, head: usize) -> TestField {
    field_at(text, anchor, head, Rect::new(10.0, 20.0, 200.0, 30.0))
}

pub fn field_at(text: &str, anchor: usize, head: usize, rect: Rect) -> TestField {
    let field = Rc::new(RefCell::new(
        TextField::new(text).with_selection(anchor, head).with_rect(rect),
    ));
    let element: ElementRef = field.clone();
    TestField { field, element }
}

/// Coordinator driven by a manual clock
pub fn test_coordinator() -> (Rc<ToolbarCoordinator>, Rc<ManualClock>) {
    let clock = Rc::new(ManualClock::new());
    let coordinator = Rc::new(ToolbarCoordinator::with_clock(clock.clone()));
    (coordinator, clock)
}

/// Position function placing the toolbar at a fixed point
pub fn fixed(x: f32, y: f32) -> impl Fn(&dyn TextInput) -> Point {
    move |_| Point::new(x, y)
}

/// Record every published state
pub fn record_states(
    coordinator: &ToolbarCoordinator,
) -> (Rc<RefCell<Vec<ToolbarState>>>, format_toolbar::Subscription) {
    let states = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&states);
    let subscription = coordinator.subscribe(move |state| sink.borrow_mut().push(state.clone()));
    (states, subscription)
}

/// Change handler that records the value it observed each time it ran
pub fn recording_handler() -> (ChangeHandler, Rc<RefCell<Vec<String>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let handler: ChangeHandler = Rc::new(move |event: &ChangeEvent| {
        assert!(Rc::ptr_eq(&event.target, &event.current_target));
        sink.borrow_mut().push(event.value());
    });
    (handler, seen)
}

/// Check the visibility invariant on a snapshot
pub fn assert_consistent(state: &ToolbarState) {
    assert_eq!(
        state.is_visible(),
        state.active_element().is_some() && state.position().is_some(),
        "visibility must match active element + position: {:?}",
        state
    );
    assert_eq!(state.active_element().is_some(), state.position().is_some());
}
