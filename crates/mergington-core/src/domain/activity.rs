//! Activity domain model
//!
//! An activity owns its participant roster. Rosters are compared by
//! normalized email but store exactly what the caller sent.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Normalize an email for comparison: trim surrounding whitespace and
/// lower-case. Never used for storage.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// An extracurricular activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description
    pub description: String,

    /// Meeting days and times
    pub schedule: String,

    /// Advertised capacity. Informational, not enforced at sign-up.
    pub max_participants: u32,

    /// Participant emails in sign-up order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with an empty roster
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Replace the roster
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Whether any roster entry matches `email` after normalization
    pub fn is_signed_up(&self, email: &str) -> bool {
        let normalized = normalize_email(email);
        self.participants
            .iter()
            .any(|p| normalize_email(p) == normalized)
    }

    /// Append `email` to the roster.
    ///
    /// Fails with [`CoreError::EmailRequired`] when the email is blank and
    /// with [`CoreError::AlreadySignedUp`] when a normalized match exists.
    /// The raw `email` is stored, not its normalized form.
    pub fn sign_up(&mut self, email: &str) -> CoreResult<()> {
        if normalize_email(email).is_empty() {
            return Err(CoreError::EmailRequired);
        }

        if self.is_signed_up(email) {
            return Err(CoreError::AlreadySignedUp {
                email: email.to_string(),
            });
        }

        self.participants.push(email.to_string());
        Ok(())
    }

    /// Remove every roster entry matching `email` after normalization.
    ///
    /// Remaining entries keep their relative order. Returns the number of
    /// entries removed, which is at least one on success.
    pub fn unregister(&mut self, email: &str) -> CoreResult<usize> {
        let normalized = normalize_email(email);
        if normalized.is_empty() {
            return Err(CoreError::EmailRequired);
        }

        let before = self.participants.len();
        self.participants
            .retain(|p| normalize_email(p) != normalized);
        let removed = before - self.participants.len();

        if removed == 0 {
            return Err(CoreError::ParticipantNotFound {
                email: email.to_string(),
            });
        }

        Ok(removed)
    }
}
