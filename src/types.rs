use serde::{Deserialize, Serialize};

/// The two named states of the ondemand-ordering setting.
///
/// Defaults to `Off`: the console treats a missing configuration value as
/// disabled, so an unseeded core renders the off element selected.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OndemandState {
    On,
    #[default]
    Off,
}

impl OndemandState {
    pub fn as_str(self) -> &'static str {
        match self {
            OndemandState::On => "on",
            OndemandState::Off => "off",
        }
    }

    /// Endpoint path that drives the server setting toward this state.
    pub fn endpoint(self) -> String {
        format!("/console/update-ondemand/{}", self.as_str())
    }

    /// Question shown to the user before the request is sent.
    pub fn confirm_message(self) -> &'static str {
        match self {
            OndemandState::On => "Enable ondemand ordering?",
            OndemandState::Off => "Disable ondemand ordering?",
        }
    }
}

/// Wire shape of the update endpoint's JSON body.
///
/// `message` is only populated on failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateOndemandResponse {
    pub result: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Tagged outcome of an update request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The server applied the new state.
    Applied,
    /// The server answered but refused the change.
    Rejected { message: String },
    /// The request never produced a usable answer.
    TransportFailed { message: String },
}
