use serde::Serialize;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::schema::{Recipe, User};

/// Payloads handed to the persistence layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum CoreEvent {
    RecipeSubmitted(Recipe),
    ProfileUpdated(User),
}

impl CoreEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RecipeSubmitted(_) => "recipe_submitted",
            Self::ProfileUpdated(_) => "profile_updated",
        }
    }
}

/// Sending half of the persistence hand-off. Sends never block and never
/// report back; a missing or closed receiver only gets logged.
#[derive(Clone, Debug, Default)]
pub struct Outbox {
    sender: Option<UnboundedSender<CoreEvent>>,
}

impl Outbox {
    pub fn channel() -> (Self, UnboundedReceiver<CoreEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                sender: Some(sender),
            },
            receiver,
        )
    }

    /// An outbox with nobody listening.
    pub fn detached() -> Self {
        Self { sender: None }
    }

    pub fn emit(&self, event: CoreEvent) {
        let kind = event.kind();
        match &self.sender {
            Some(sender) => {
                if let Err(e) = sender.send(event) {
                    log::warn!("> Dropped {kind}, persistence channel closed: {e}");
                } else {
                    log::trace!("> Emitted {kind}");
                }
            }
            None => log::warn!("> Dropped {kind}, no persistence channel attached"),
        }
    }
}
