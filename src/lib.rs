//! Format toolbar - one floating formatting toolbar shared by every text input
//!
//! Inputs report focus and blur to a [`ToolbarCoordinator`], which decides
//! which input is active, where the toolbar sits, and when it hides. Toolbar
//! actions hand a formatter to the coordinator, which applies it to the
//! active input's selection (or whole value) and notifies the host.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use format_toolbar::{
//!     bind_input, element_ref, TextField, TextInput, ToolbarConfig, ToolbarCoordinator,
//! };
//!
//! let coordinator = Rc::new(ToolbarCoordinator::new());
//! let field = element_ref(TextField::new("hello world").with_selection(0, 5));
//! let handlers = bind_input(&coordinator, &field, &ToolbarConfig::default(), None);
//!
//! handlers.on_focus();
//! coordinator.apply_format(|s| s.to_uppercase(), None);
//!
//! assert_eq!(field.borrow().value(), "HELLO world");
//! ```

pub mod binding;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod coordinator;
pub mod element;
pub mod formatter;
pub mod geometry;
pub mod scheduler;
pub mod selection;
pub mod tracing;

// Re-export commonly used types
pub use binding::{bind_input, toolbar_props, InputHandlers, PointerDown, ToolbarProps, ToolbarView};
pub use config::{PositionFn, ToolbarConfig, ToolbarSettings};
pub use coordinator::{Subscription, ToolbarCoordinator, ToolbarState};
pub use element::{element_ref, ChangeEvent, ChangeHandler, ElementRef, TextField, TextInput};
pub use formatter::compute_formatted_value;
pub use geometry::{Point, Rect, ToolbarStyle};
pub use scheduler::{Clock, ManualClock, SystemClock};
pub use selection::Selection;
