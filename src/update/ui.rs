use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::update_field;
use crate::Effect;

/// Handle UI-related events (initial seeding, clearing messages)
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // The page is rendered with the current setting before the core
        // starts; the shell pushes that state in once at load.
        Event::Initialize { ondemand } => update_field!(model.ondemand, ondemand),
        Event::AlertDismissed | Event::ClearError => update_field!(model.error_message, None),
        _ => unreachable!("Non-UI event passed to UI handler"),
    }
}
