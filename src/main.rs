use std::cell::RefCell;
use std::rc::Rc;
use std::thread;

use anyhow::Result;
use clap::Parser;

use format_toolbar::cli::{CliArgs, DemoConfig};
use format_toolbar::{
    bind_input, ChangeEvent, ChangeHandler, ElementRef, Rect, TextField, TextInput,
    ToolbarConfig, ToolbarCoordinator, ToolbarState, ToolbarView,
};

/// Print a published state, one line per transition
fn describe(label: &str, state: &ToolbarState, fields: &[(&str, &ElementRef)]) {
    let active = state.active_element().and_then(|element| {
        fields
            .iter()
            .find(|(_, field)| Rc::ptr_eq(field, element))
            .map(|(name, _)| *name)
    });

    match (active, state.position()) {
        (Some(name), Some(pos)) => {
            println!("[{label}] toolbar visible for {name} at ({}, {})", pos.x, pos.y)
        }
        _ => println!("[{label}] toolbar hidden"),
    }
}

/// Sleep until the pending hide is due, then let it fire
fn drain_timers(coordinator: &ToolbarCoordinator) {
    while let Some(deadline) = coordinator.next_deadline() {
        let now = std::time::Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
        coordinator.poll_timers();
    }
}

fn run(config: DemoConfig) -> Result<()> {
    // The one coordinator for this application
    let coordinator = Rc::new(ToolbarCoordinator::new());
    let toolbar_config = ToolbarConfig::new(config.settings.clone());

    let mut first = TextField::new(config.text.clone()).with_rect(Rect::new(20.0, 40.0, 240.0, 24.0));
    if let Some((anchor, head)) = config.selection {
        first.select(anchor, head);
    }
    let first: ElementRef = Rc::new(RefCell::new(first));
    let second: ElementRef = Rc::new(RefCell::new(
        TextField::new("second input").with_rect(Rect::new(20.0, 100.0, 240.0, 24.0)),
    ));

    // Controlled-component state mirrored through the change callback
    let mirrored = Rc::new(RefCell::new(config.text.clone()));
    let on_change: ChangeHandler = {
        let mirrored = Rc::clone(&mirrored);
        Rc::new(move |event: &ChangeEvent| {
            *mirrored.borrow_mut() = event.value();
        })
    };

    let first_handlers = bind_input(&coordinator, &first, &toolbar_config, Some(on_change));
    let second_handlers = bind_input(&coordinator, &second, &toolbar_config, None);

    let fields = [("input-1", &first), ("input-2", &second)];
    let view = ToolbarView::new(&coordinator);

    let step = |label: &str| {
        if view.take_dirty() {
            describe(label, &view.state(), &fields);
        }
    };

    first_handlers.on_focus();
    step("focus input-1");

    if let Some(props) = view.props(&toolbar_config) {
        tracing::debug!(style = ?props.style, "Toolbar props");
        props.on_pointer_down();
    }
    let transform = config.transform;
    view.apply_format(|text| transform.apply(text), None);
    println!("input-1 value: {:?}", first.borrow().value());
    println!("input-1 change callback saw: {:?}", mirrored.borrow());

    // Blur then focus elsewhere before the delay elapses: no hide in between
    first_handlers.on_blur();
    second_handlers.on_focus();
    step("blur input-1, focus input-2");

    second_handlers.on_blur();
    drain_timers(&coordinator);
    step(&format!("blur input-2, after {:?}", config.hide_delay()));

    Ok(())
}

fn main() -> Result<()> {
    format_toolbar::tracing::init();

    let args = CliArgs::parse();
    let config = args.into_config()?;
    tracing::info!(?config, "Starting toolbar demo");

    run(config)
}
