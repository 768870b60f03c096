//! Event records dispatched to the form reducer.

use serde::{Deserialize, Serialize};

use crate::mvi::Intent;

use super::state::{FormId, GroupId, InputName, Validity};

pub const UPDATE_FORM_VALIDITY: &str = "UPDATE_FORM_VALIDITY";
pub const UPDATE_INPUT_GROUP_VALIDITY: &str = "UPDATE_INPUT_GROUP_VALIDITY";
pub const UPDATE_INPUT_VALIDITY: &str = "UPDATE_INPUT_VALIDITY";
pub const UPDATE_FORM_SUBMITTING: &str = "UPDATE_FORM_SUBMITTING";
pub const UPDATE_FORM_SUBMITTED: &str = "UPDATE_FORM_SUBMITTED";
pub const UPDATE_PRISTINE: &str = "UPDATE_PRISTINE";

/// Every kind the reducer understands, in declaration order.
pub const KNOWN_KINDS: [&str; 6] = [
    UPDATE_FORM_VALIDITY,
    UPDATE_INPUT_GROUP_VALIDITY,
    UPDATE_INPUT_VALIDITY,
    UPDATE_FORM_SUBMITTING,
    UPDATE_FORM_SUBMITTED,
    UPDATE_PRISTINE,
];

/// Intents that can be dispatched to the form reducer.
///
/// Serialized in the Redux action shape `{"type": ..., "payload": {...}}`,
/// see [`super::codec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "super::codec::RawAction", into = "super::codec::RawAction")]
pub enum FormIntent {
    /// Creates the form if needed and records its aggregate validity.
    UpdateFormValidity(FormValidity),

    /// Creates or updates a group inside an existing form.
    UpdateInputGroupValidity(InputGroupValidity),

    /// Creates or updates an input inside an existing group and clears the
    /// form's pristine flag.
    UpdateInputValidity(InputValidity),

    UpdateSubmitting(FormSubmitting),

    /// Marks an existing form as submitted.
    UpdateSubmitted(FormTarget),

    /// Clears the pristine flag of an existing form.
    UpdatePristine(FormTarget),

    /// A kind this reducer does not handle. Always a no-op.
    ///
    /// The payload is kept as received so the action encodes back unchanged.
    Unrecognized {
        kind: String,
        payload: serde_json::Value,
    },
}

impl Intent for FormIntent {}

impl FormIntent {
    /// The stable kind identifier of this intent.
    pub fn kind(&self) -> &str {
        match self {
            FormIntent::UpdateFormValidity(_) => UPDATE_FORM_VALIDITY,
            FormIntent::UpdateInputGroupValidity(_) => UPDATE_INPUT_GROUP_VALIDITY,
            FormIntent::UpdateInputValidity(_) => UPDATE_INPUT_VALIDITY,
            FormIntent::UpdateSubmitting(_) => UPDATE_FORM_SUBMITTING,
            FormIntent::UpdateSubmitted(_) => UPDATE_FORM_SUBMITTED,
            FormIntent::UpdatePristine(_) => UPDATE_PRISTINE,
            FormIntent::Unrecognized { kind, .. } => kind,
        }
    }

    /// The form this intent addresses, if any.
    pub fn form_id(&self) -> Option<&str> {
        match self {
            FormIntent::UpdateFormValidity(p) => Some(&p.form_id),
            FormIntent::UpdateInputGroupValidity(p) => Some(&p.form_id),
            FormIntent::UpdateInputValidity(p) => Some(&p.form_id),
            FormIntent::UpdateSubmitting(p) => Some(&p.form_id),
            FormIntent::UpdateSubmitted(p) | FormIntent::UpdatePristine(p) => Some(&p.form_id),
            FormIntent::Unrecognized { .. } => None,
        }
    }
}

/// Payload of [`UPDATE_INPUT_VALIDITY`].
///
/// Defaults: empty identifiers, `null` validity, empty message.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputValidity {
    pub form_id: FormId,
    pub group_id: GroupId,
    pub name: InputName,
    pub validity: Validity,
    pub validation_message: String,
}

/// Payload of [`UPDATE_INPUT_GROUP_VALIDITY`].
///
/// Defaults: empty identifiers, `valid = false`, no errors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputGroupValidity {
    pub form_id: FormId,
    pub group_id: GroupId,
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Payload of [`UPDATE_FORM_VALIDITY`].
///
/// Defaults: empty identifier, `valid = false`, empty error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormValidity {
    pub form_id: FormId,
    pub valid: bool,
    pub error: String,
}

/// Payload of [`UPDATE_FORM_SUBMITTING`].
///
/// Defaults: empty identifier, `submitting = false`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormSubmitting {
    pub form_id: FormId,
    pub submitting: bool,
}

/// Payload naming a form only ([`UPDATE_PRISTINE`], [`UPDATE_FORM_SUBMITTED`]).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormTarget {
    pub form_id: FormId,
}

impl From<InputValidity> for FormIntent {
    fn from(payload: InputValidity) -> Self {
        FormIntent::UpdateInputValidity(payload)
    }
}

impl From<InputGroupValidity> for FormIntent {
    fn from(payload: InputGroupValidity) -> Self {
        FormIntent::UpdateInputGroupValidity(payload)
    }
}

impl From<FormValidity> for FormIntent {
    fn from(payload: FormValidity) -> Self {
        FormIntent::UpdateFormValidity(payload)
    }
}

impl From<FormSubmitting> for FormIntent {
    fn from(payload: FormSubmitting) -> Self {
        FormIntent::UpdateSubmitting(payload)
    }
}
