use serde::{Deserialize, Serialize};

use crate::commands::dialog::DialogOutput;
use crate::types::*;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    // Initialization (shell seeds the server-rendered state at page load)
    Initialize {
        ondemand: OndemandState,
    },

    // Toggle actions (one parameterized action for both control elements)
    Activate {
        target: OndemandState,
    },

    // Dialog answers (internal events, skipped from serialization)
    #[serde(skip)]
    ConfirmResponse {
        target: OndemandState,
        output: DialogOutput,
    },
    #[serde(skip)]
    AlertDismissed,

    // HTTP responses (internal events)
    #[serde(skip)]
    UpdateOndemandResponse {
        target: OndemandState,
        outcome: ToggleOutcome,
    },

    // UI actions
    ClearError,
}
