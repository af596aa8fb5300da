//! Dialog command definitions.
//!
//! These types define the interface between the Core and the Shell for the
//! blocking user prompts (`window.confirm` / `window.alert` in the browser).

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Prompts the Shell needs to present
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DialogOperation {
    Confirm { message: String },
    Alert { message: String },
}

// The user's answer (shell tells us what happened)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DialogOutput {
    /// The user accepted a confirm prompt
    Confirmed,
    /// The user declined a confirm prompt
    Cancelled,
    /// The user closed an alert
    Dismissed,
}

impl Operation for DialogOperation {
    type Output = DialogOutput;
}

/// Command-based Dialog API
pub struct Dialog<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Dialog<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DialogOperation>> + 'static,
    Event: Send + 'static,
{
    /// Ask the user a yes/no question; blocks the page until answered
    pub fn confirm(message: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(DialogOperation::Confirm {
            message: message.into(),
        })
    }

    /// Show the user an informational alert
    pub fn alert(message: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(DialogOperation::Alert {
            message: message.into(),
        })
    }
}

/// Request builder for Dialog operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: DialogOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DialogOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: DialogOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = DialogOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
