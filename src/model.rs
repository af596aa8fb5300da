use serde::{Deserialize, Serialize};

use crate::types::OndemandState;

/// Application Model - the complete state
///
/// `ondemand` is the single authoritative copy of the last known-good server
/// setting; both control elements are derived from it in the view.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    /// Last server setting we successfully observed or changed
    pub ondemand: OndemandState,

    // UI state
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl Model {
    /// Start a loading operation (sets is_loading=true, clears error)
    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// Stop loading and clear error
    pub fn stop_loading(&mut self) {
        self.is_loading = false;
        self.error_message = None;
    }

    /// Set an error message and stop loading
    pub fn set_error(&mut self, error: String) {
        self.is_loading = false;
        self.error_message = Some(error);
    }
}

/// View of the Model as the two control elements.
///
/// The selected attributes are a pure function of `Model::ondemand`, so
/// exactly one of them is true at all times.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub on_selected: bool,
    pub off_selected: bool,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        let on_selected = model.ondemand == OndemandState::On;
        Self {
            on_selected,
            off_selected: !on_selected,
            is_loading: model.is_loading,
            error_message: model.error_message.clone(),
        }
    }
}
