use std::str::FromStr;

use crate::foundation::error::{ScrollweaveError, ScrollweaveResult};

/// Editable field of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    /// Sender name.
    Name,
    /// Reply address.
    Email,
    /// Project description.
    Message,
}

impl FromStr for ContactField {
    type Err = ScrollweaveError;

    fn from_str(s: &str) -> ScrollweaveResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            other => Err(ScrollweaveError::validation(format!(
                "unknown contact field '{other}'"
            ))),
        }
    }
}

/// Lifecycle of the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    /// Accepting input.
    #[default]
    Editing,
    /// Sent; further edits are ignored.
    Submitted,
}

/// Client-side contact form. Nothing leaves the process.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Project description.
    pub message: String,
    /// Lifecycle.
    #[serde(default)]
    pub status: FormStatus,
}

impl ContactForm {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Replace a field's value. Returns false once the form has been submitted.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if self.status == FormStatus::Submitted {
            tracing::trace!(?field, "edit after submit ignored");
            return false;
        }
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
        true
    }

    /// Mark the form as sent. Only the first call has an effect.
    pub fn submit(&mut self) -> bool {
        if self.status == FormStatus::Submitted {
            return false;
        }
        tracing::debug!(name = %self.name, "contact form submitted");
        self.status = FormStatus::Submitted;
        true
    }

    /// True after [`ContactForm::submit`].
    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }
}
