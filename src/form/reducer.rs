//! Reducer for the form read model.

use crate::mvi::Reducer;

use super::intent::{
    FormIntent, FormSubmitting, FormTarget, FormValidity, InputGroupValidity, InputValidity,
};
use super::state::{FormEntry, FormState, InputEntry, InputGroupEntry};

/// Reducer for form, group and input validity.
///
/// Form-level validity creates the form on first sight. Every other intent
/// requires its parent entries to exist already and otherwise hands back the
/// state it was given untouched, so stale events from unmounted inputs are
/// ignored.
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::UpdateFormValidity(payload) => update_form_validity(state, payload),
            FormIntent::UpdatePristine(payload) => update_pristine(state, payload),
            FormIntent::UpdateSubmitting(payload) => update_submitting(state, payload),
            FormIntent::UpdateSubmitted(payload) => update_submitted(state, payload),
            FormIntent::UpdateInputGroupValidity(payload) => {
                update_input_group_validity(state, payload)
            }
            FormIntent::UpdateInputValidity(payload) => update_input_validity(state, payload),
            FormIntent::Unrecognized { kind, .. } => {
                tracing::trace!(kind = %kind, "Ignoring unrecognized intent");
                state
            }
        }
    }
}

/// Reduce from an optional state; `None` starts from an empty read model.
pub fn reduce(state: Option<FormState>, intent: FormIntent) -> FormState {
    FormReducer::reduce(state.unwrap_or_default(), intent)
}

fn update_form_validity(mut state: FormState, payload: FormValidity) -> FormState {
    let FormValidity {
        form_id,
        valid,
        error,
    } = payload;
    let form = state.form_mut_or_insert_with(&form_id, || FormEntry::new(form_id.as_str()));
    form.valid = valid;
    form.error = error;
    state
}

fn update_pristine(mut state: FormState, payload: FormTarget) -> FormState {
    if !state.contains_form(&payload.form_id) {
        tracing::trace!(form_id = %payload.form_id, "Pristine update for unknown form");
        return state;
    }
    if let Some(form) = state.form_mut(&payload.form_id) {
        form.pristine = false;
    }
    state
}

fn update_submitting(mut state: FormState, payload: FormSubmitting) -> FormState {
    if !state.contains_form(&payload.form_id) {
        tracing::trace!(form_id = %payload.form_id, "Submitting update for unknown form");
        return state;
    }
    if let Some(form) = state.form_mut(&payload.form_id) {
        form.submitting = payload.submitting;
    }
    state
}

fn update_submitted(mut state: FormState, payload: FormTarget) -> FormState {
    if !state.contains_form(&payload.form_id) {
        tracing::trace!(form_id = %payload.form_id, "Submitted update for unknown form");
        return state;
    }
    if let Some(form) = state.form_mut(&payload.form_id) {
        form.submitted = true;
    }
    state
}

fn update_input_group_validity(mut state: FormState, payload: InputGroupValidity) -> FormState {
    let InputGroupValidity {
        form_id,
        group_id,
        valid,
        errors,
    } = payload;

    if !state.contains_form(&form_id) {
        tracing::trace!(form_id = %form_id, group_id = %group_id, "Group update for unknown form");
        return state;
    }
    if let Some(form) = state.form_mut(&form_id) {
        let group =
            form.group_mut_or_insert_with(&group_id, || InputGroupEntry::new(group_id.as_str()));
        group.valid = valid;
        group.errors = errors;
    }
    state
}

fn update_input_validity(mut state: FormState, payload: InputValidity) -> FormState {
    let InputValidity {
        form_id,
        group_id,
        name,
        validity,
        validation_message,
    } = payload;

    let has_group = state
        .form(&form_id)
        .is_some_and(|form| form.group(&group_id).is_some());
    if !has_group {
        tracing::trace!(
            form_id = %form_id,
            group_id = %group_id,
            name = %name,
            "Input update for unknown form or group"
        );
        return state;
    }

    if let Some(form) = state.form_mut(&form_id) {
        form.pristine = false;
        if let Some(group) = form.group_mut(&group_id) {
            let input = group
                .inputs
                .entry(name.clone())
                .or_insert_with(|| InputEntry::new(name));
            input.validity = validity;
            input.validation_message = validation_message;
        }
    }
    state
}
