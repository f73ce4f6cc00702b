use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::fallback::Fallback;

/// Body of `POST /contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// What the API answered to a contact submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContactReply {
    Delivered {
        message: Option<String>,
    },
    Rejected {
        /// Field name to messages, in the order the API sent them.
        errors: Option<Map<String, Value>>,
        message: Option<String>,
    },
}

/// Raw JSON body the API sends back for either outcome.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactResponseBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<Map<String, Value>>,
}

impl ContactReply {
    pub fn from_body(success: bool, body: ContactResponseBody) -> Self {
        if success {
            ContactReply::Delivered {
                message: body.message,
            }
        } else {
            ContactReply::Rejected {
                errors: body.errors,
                message: body.message,
            }
        }
    }
}

/// Every message of every field, joined with `", "`. Field names are dropped.
pub fn flatten_errors(errors: &Map<String, Value>) -> String {
    errors
        .values()
        .flat_map(|messages| match messages {
            Value::Array(items) => items.iter().map(message_text).collect::<Vec<_>>(),
            other => vec![message_text(other)],
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactStatus {
    pub kind: StatusKind,
    pub message: String,
}

/// Lifecycle of one contact form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Starts an attempt, clearing any previous status. `None` while one is already in flight.
    pub fn begin(&self) -> Option<SubmissionState> {
        if self.is_submitting() {
            None
        } else {
            Some(SubmissionState::Submitting)
        }
    }

    /// Resolves an attempt. Never returns `Submitting`.
    pub fn settle<E: Display>(result: Result<ContactReply, E>) -> SubmissionState {
        match result {
            Ok(ContactReply::Delivered { message }) => SubmissionState::Success(
                Fallback::ContactSent.or(message.as_deref()).to_string(),
            ),
            Ok(ContactReply::Rejected { errors, message }) => match errors {
                Some(errors) => SubmissionState::Error(flatten_errors(&errors)),
                None => {
                    log::debug!("contact rejected without field errors: {message:?}");
                    SubmissionState::Error(Fallback::ContactRejected.text().to_string())
                }
            },
            Err(e) => {
                log::warn!("contact submission failed: {e}");
                SubmissionState::Error(Fallback::ContactTransport.text().to_string())
            }
        }
    }

    /// Banner to show, if any. A settled state with an empty message shows nothing.
    pub fn status(&self) -> Option<ContactStatus> {
        match self {
            Self::Idle | Self::Submitting => None,
            Self::Success(message) | Self::Error(message) if message.is_empty() => None,
            Self::Success(message) => Some(ContactStatus {
                kind: StatusKind::Success,
                message: message.clone(),
            }),
            Self::Error(message) => Some(ContactStatus {
                kind: StatusKind::Error,
                message: message.clone(),
            }),
        }
    }
}
