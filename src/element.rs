//! Text-input elements as seen by the toolbar.
//!
//! The coordinator never owns inputs. It holds [`ElementRef`] handles that the
//! host UI layer hands in on focus, and talks to them only through the
//! [`TextInput`] trait.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::geometry::Rect;
use crate::selection::Selection;

/// A text-input-like element the toolbar can format
pub trait TextInput {
    /// Current text content
    fn value(&self) -> String;

    /// Replace the text content
    fn set_value(&mut self, value: String);

    /// Selection lower bound in chars, `None` if the element has no selection API
    fn selection_start(&self) -> Option<usize>;

    /// Selection upper bound in chars, `None` if the element has no selection API
    fn selection_end(&self) -> Option<usize>;

    /// On-screen bounding rectangle in viewport coordinates
    fn bounding_rect(&self) -> Rect;

    /// Move keyboard focus to this element
    ///
    /// Hosts that fire focus events synchronously may call straight back into
    /// the coordinator from here; the element is only shared-borrowed.
    fn focus(&self);

    /// Emit the element-level "input" notification after a programmatic edit
    fn dispatch_input_event(&mut self);
}

/// Shared, non-owning handle to an input
pub type ElementRef = Rc<RefCell<dyn TextInput>>;

/// Wrap a concrete input into an [`ElementRef`]
pub fn element_ref<T: TextInput + 'static>(input: T) -> ElementRef {
    Rc::new(RefCell::new(input))
}

/// Payload delivered to change callbacks after a formatting edit
#[derive(Clone)]
pub struct ChangeEvent {
    pub target: ElementRef,
    pub current_target: ElementRef,
}

impl ChangeEvent {
    pub fn new(element: &ElementRef) -> Self {
        Self {
            target: Rc::clone(element),
            current_target: Rc::clone(element),
        }
    }

    /// Value of the target at the time the callback reads it
    pub fn value(&self) -> String {
        self.target.borrow().value()
    }
}

impl fmt::Debug for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeEvent")
            .field("target", &Rc::as_ptr(&self.target))
            .finish()
    }
}

/// Change callback of a controlled input
pub type ChangeHandler = Rc<dyn Fn(&ChangeEvent)>;

/// In-memory single-line input
///
/// Used by the demo binary and tests; hosts with a real widget tree implement
/// [`TextInput`] on their own widget type.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
    /// `None` models an input type without a selection API
    selection: Option<Selection>,
    rect: Rect,
    /// Number of times `focus()` was called
    focus_count: Cell<usize>,
    /// Number of "input" events dispatched
    pub input_events: usize,
}

impl TextField {
    /// Create a field with the caret at the end of `value`
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let len = value.chars().count();
        Self {
            value,
            selection: Some(Selection::collapsed(len)),
            ..Self::default()
        }
    }

    /// Set the bounding rectangle (builder pattern)
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Set the selection (builder pattern)
    pub fn with_selection(mut self, anchor: usize, head: usize) -> Self {
        self.select(anchor, head);
        self
    }

    /// Drop selection support, as for input types that have none
    pub fn without_selection(mut self) -> Self {
        self.selection = None;
        self
    }

    /// Select `anchor..head`, clamped to the value
    pub fn select(&mut self, anchor: usize, head: usize) {
        let len = self.value.chars().count();
        self.selection = Some(Selection::new(anchor, head).clamp(len));
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Number of times the field was focused
    pub fn focus_count(&self) -> usize {
        self.focus_count.get()
    }
}

impl TextInput for TextField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        // Programmatic assignment leaves the caret at the end of the text
        let len = value.chars().count();
        self.value = value;
        if self.selection.is_some() {
            self.selection = Some(Selection::collapsed(len));
        }
    }

    fn selection_start(&self) -> Option<usize> {
        self.selection.map(|s| s.start())
    }

    fn selection_end(&self) -> Option<usize> {
        self.selection.map(|s| s.end())
    }

    fn bounding_rect(&self) -> Rect {
        self.rect
    }

    fn focus(&self) {
        self.focus_count.set(self.focus_count.get() + 1);
    }

    fn dispatch_input_event(&mut self) {
        self.input_events += 1;
    }
}
