use serde::Serialize;

use crate::{
    outbox::{CoreEvent, Outbox},
    schema::{ProfileField, ProfileFields, User},
    session::Session,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "draft", rename_all = "snake_case")]
pub enum ProfileState {
    #[default]
    Viewing,
    Editing(ProfileFields),
}

/// View/edit toggle over the signed-in user's profile.
///
/// Edits go to a separate draft; the committed [`User`] only changes on
/// [`ProfileEditor::save`]. Calls made in the wrong state return `false`
/// and change nothing.
#[derive(Debug)]
pub struct ProfileEditor {
    user: User,
    state: ProfileState,
    outbox: Outbox,
}

impl ProfileEditor {
    pub fn new(user: User, outbox: Outbox) -> Self {
        Self {
            user,
            state: ProfileState::Viewing,
            outbox,
        }
    }

    /// Only a signed-in user has a profile to edit.
    pub fn from_session(session: &Session, outbox: Outbox) -> Option<Self> {
        session
            .user()
            .map(|user| Self::new(user.to_owned(), outbox))
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, ProfileState::Editing(_))
    }

    pub fn draft(&self) -> Option<&ProfileFields> {
        match &self.state {
            ProfileState::Viewing => None,
            ProfileState::Editing(draft) => Some(draft),
        }
    }

    pub fn begin_edit(&mut self) -> bool {
        if self.is_editing() {
            log::warn!("Profile {} is already being edited", self.user.id);
            return false;
        }

        self.state = ProfileState::Editing(self.user.profile());
        true
    }

    pub fn update_draft_field(&mut self, field: ProfileField, value: &str) -> bool {
        match &mut self.state {
            ProfileState::Editing(draft) => {
                draft.set(field, value.to_string());
                log::debug!("Updated profile draft field {field}");
                true
            }
            ProfileState::Viewing => {
                log::warn!("Ignoring {field} update outside of edit mode");
                false
            }
        }
    }

    /// Commits the draft verbatim and notifies the persistence layer.
    pub fn save(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            ProfileState::Editing(draft) => {
                self.user.commit_profile(draft);
                log::info!("Profile {} updated", self.user.id);
                self.outbox
                    .emit(CoreEvent::ProfileUpdated(self.user.to_owned()));
                true
            }
            ProfileState::Viewing => {
                log::warn!("Nothing to save, profile is not being edited");
                false
            }
        }
    }

    pub fn cancel(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            ProfileState::Editing(_) => true,
            ProfileState::Viewing => {
                log::warn!("Nothing to cancel, profile is not being edited");
                false
            }
        }
    }
}
