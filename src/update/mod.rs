mod toggle;
mod ui;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Toggle domain (confirm → request → update-or-keep cycle)
        Event::Activate { .. }
        | Event::ConfirmResponse { .. }
        | Event::UpdateOndemandResponse { .. } => toggle::handle(event, model),

        // UI actions domain
        Event::Initialize { .. } | Event::AlertDismissed | Event::ClearError => {
            ui::handle(event, model)
        }
    }
}
