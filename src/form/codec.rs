//! Redux-shaped wire format for [`FormIntent`].
//!
//! An action is `{"type": <kind>, "payload": {...}}`. `"kind"` is accepted in
//! place of `"type"`. Missing payload fields take their defaults, unknown
//! fields are ignored and unknown kinds decode to
//! [`FormIntent::Unrecognized`] with their payload kept verbatim.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::intent::{
    FormIntent, UPDATE_FORM_SUBMITTED, UPDATE_FORM_SUBMITTING, UPDATE_FORM_VALIDITY,
    UPDATE_INPUT_GROUP_VALIDITY, UPDATE_INPUT_VALIDITY, UPDATE_PRISTINE,
};

/// Errors that can occur when decoding an action.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Invalid payload for '{kind}': {source}")]
    InvalidPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Untyped action as it travels over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

impl TryFrom<RawAction> for FormIntent {
    type Error = ActionError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let RawAction { kind, payload } = raw;
        let intent = match kind.as_str() {
            UPDATE_FORM_VALIDITY => FormIntent::UpdateFormValidity(decode(&kind, payload)?),
            UPDATE_INPUT_GROUP_VALIDITY => {
                FormIntent::UpdateInputGroupValidity(decode(&kind, payload)?)
            }
            UPDATE_INPUT_VALIDITY => FormIntent::UpdateInputValidity(decode(&kind, payload)?),
            UPDATE_FORM_SUBMITTING => FormIntent::UpdateSubmitting(decode(&kind, payload)?),
            UPDATE_FORM_SUBMITTED => FormIntent::UpdateSubmitted(decode(&kind, payload)?),
            UPDATE_PRISTINE => FormIntent::UpdatePristine(decode(&kind, payload)?),
            _ => FormIntent::Unrecognized { kind, payload },
        };
        Ok(intent)
    }
}

impl From<FormIntent> for RawAction {
    fn from(intent: FormIntent) -> Self {
        let kind = intent.kind().to_string();
        let payload = match intent {
            FormIntent::UpdateFormValidity(p) => encode(&p),
            FormIntent::UpdateInputGroupValidity(p) => encode(&p),
            FormIntent::UpdateInputValidity(p) => encode(&p),
            FormIntent::UpdateSubmitting(p) => encode(&p),
            FormIntent::UpdateSubmitted(p) | FormIntent::UpdatePristine(p) => encode(&p),
            FormIntent::Unrecognized { payload, .. } => payload,
        };
        RawAction { kind, payload }
    }
}

fn decode<T>(kind: &str, payload: Value) -> Result<T, ActionError>
where
    T: DeserializeOwned + Default,
{
    if payload.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(payload).map_err(|source| ActionError::InvalidPayload {
        kind: kind.to_string(),
        source,
    })
}

// Payload structs hold only strings, bools, vecs and JSON values, which
// always serialize.
fn encode<T: Serialize>(payload: &T) -> Value {
    serde_json::to_value(payload).unwrap_or_default()
}
