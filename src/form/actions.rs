//! Action builders.
//!
//! Each builder wraps its positional arguments into a fresh [`FormIntent`].
//! To leave arguments out, start from the payload's `Default` instead, e.g.
//! `FormIntent::from(InputValidity::default())`; defaults are documented on
//! each payload type.

use super::intent::{
    FormIntent, FormSubmitting, FormTarget, FormValidity, InputGroupValidity, InputValidity,
};
use super::state::Validity;

pub fn update_input_validity(
    form_id: impl Into<String>,
    group_id: impl Into<String>,
    name: impl Into<String>,
    validity: Validity,
    validation_message: impl Into<String>,
) -> FormIntent {
    FormIntent::UpdateInputValidity(InputValidity {
        form_id: form_id.into(),
        group_id: group_id.into(),
        name: name.into(),
        validity,
        validation_message: validation_message.into(),
    })
}

pub fn update_input_group_validity(
    form_id: impl Into<String>,
    group_id: impl Into<String>,
    valid: bool,
    errors: Vec<String>,
) -> FormIntent {
    FormIntent::UpdateInputGroupValidity(InputGroupValidity {
        form_id: form_id.into(),
        group_id: group_id.into(),
        valid,
        errors,
    })
}

pub fn update_form_validity(
    form_id: impl Into<String>,
    valid: bool,
    error: impl Into<String>,
) -> FormIntent {
    FormIntent::UpdateFormValidity(FormValidity {
        form_id: form_id.into(),
        valid,
        error: error.into(),
    })
}

pub fn update_pristine(form_id: impl Into<String>) -> FormIntent {
    FormIntent::UpdatePristine(FormTarget {
        form_id: form_id.into(),
    })
}

pub fn update_submitting(form_id: impl Into<String>, submitting: bool) -> FormIntent {
    FormIntent::UpdateSubmitting(FormSubmitting {
        form_id: form_id.into(),
        submitting,
    })
}

/// Marks a form as submitted. There is no flag: the event only ever sets it.
pub fn update_submitted(form_id: impl Into<String>) -> FormIntent {
    FormIntent::UpdateSubmitted(FormTarget {
        form_id: form_id.into(),
    })
}
