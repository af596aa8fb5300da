use crux_core::{render::render, Command};
use log::{error, warn};

use crate::commands::dialog::DialogOutput;
use crate::events::Event;
use crate::http_helpers::{build_url, classify_update_response};
use crate::model::Model;
use crate::types::ToggleOutcome;
use crate::{DialogCmd, Effect, HttpCmd};

/// Handle the toggle cycle (activate → confirm → request → response)
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Activate { target } => {
            // Already in the requested state: no prompt, no request.
            if model.ondemand == target {
                return Command::done();
            }

            DialogCmd::confirm(target.confirm_message())
                .build()
                .then_send(move |output| Event::ConfirmResponse { target, output })
        }

        Event::ConfirmResponse { target, output } => match output {
            DialogOutput::Confirmed => {
                model.start_loading();
                Command::all([
                    render(),
                    // The endpoint mutates the setting and reports the
                    // outcome in the same GET.
                    HttpCmd::get(build_url(&target.endpoint()))
                        .build()
                        .then_send(move |result| Event::UpdateOndemandResponse {
                            target,
                            outcome: classify_update_response("Update ondemand", result),
                        }),
                ])
            }
            // Declined: terminate with no side effects.
            _ => Command::done(),
        },

        Event::UpdateOndemandResponse { target, outcome } => match outcome {
            ToggleOutcome::Applied => {
                model.stop_loading();
                // The only point at which the visual state changes; both
                // control elements follow in the view.
                model.ondemand = target;
                render()
            }
            ToggleOutcome::Rejected { message } => {
                warn!("ondemand update rejected: {message}");
                notify_failure(model, message)
            }
            ToggleOutcome::TransportFailed { message } => {
                error!("ondemand update failed in transit: {message}");
                notify_failure(model, message)
            }
        },

        _ => unreachable!("Non-toggle event passed to toggle handler"),
    }
}

/// Surface a failed update: alert the user once, keep the current setting.
fn notify_failure(model: &mut Model, message: String) -> Command<Effect, Event> {
    let alert = format!("An error occurred: {message}");
    model.set_error(alert.clone());
    Command::all([
        render(),
        DialogCmd::alert(alert)
            .build()
            .then_send(|_| Event::AlertDismissed),
    ])
}
