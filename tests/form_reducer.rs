mod common;

use common::{register_form, register_group, FIX_FORM_ID, FIX_GROUP_ID, FIX_NAME};
use html5form::form::{actions, reduce, FormIntent, FormReducer, FormState};
use html5form::mvi::Reducer;
use serde_json::json;

#[test]
fn default_state_is_empty() {
    let state = FormState::default();
    assert!(state.is_empty());
    assert_eq!(serde_json::to_value(&state).unwrap(), json!({ "forms": {} }));
}

#[test]
fn unrecognized_kind_returns_same_state() {
    let before = FormState::default();
    let after = FormReducer::reduce(
        before.clone(),
        FormIntent::Unrecognized {
            kind: "NONEXISITNG".to_string(),
            payload: json!({}),
        },
    );
    assert!(after.ptr_eq(&before));
    assert_eq!(after, FormState::default());
}

#[test]
fn unrecognized_kind_on_populated_state_is_identity() {
    let before = register_group();
    let after = FormReducer::reduce(
        before.clone(),
        FormIntent::Unrecognized {
            kind: "RESET".to_string(),
            payload: json!({ "formId": FIX_FORM_ID }),
        },
    );
    assert!(after.ptr_eq(&before));
}

#[test]
fn reduce_from_none_starts_empty() {
    let state = reduce(None, actions::update_form_validity(FIX_FORM_ID, true, ""));
    assert_eq!(state.len(), 1);
}

#[test]
fn registers_form() {
    let state = register_form();
    assert_eq!(state.len(), 1);
    assert_eq!(state.form(FIX_FORM_ID).unwrap().id, FIX_FORM_ID);
}

#[test]
fn updates_form() {
    let prev = register_form();
    let next = FormReducer::reduce(prev, actions::update_form_validity(FIX_FORM_ID, false, ""));

    assert_eq!(next.len(), 1);
    assert!(!next.form(FIX_FORM_ID).unwrap().valid);
}

#[test]
fn updates_pristine() {
    let next = FormReducer::reduce(register_form(), actions::update_pristine(FIX_FORM_ID));
    assert!(!next.form(FIX_FORM_ID).unwrap().pristine);
}

#[test]
fn pristine_is_a_one_way_latch() {
    let state = FormReducer::reduce(register_form(), actions::update_pristine(FIX_FORM_ID));
    let state = FormReducer::reduce(state, actions::update_form_validity(FIX_FORM_ID, true, ""));
    let state = FormReducer::reduce(state, actions::update_pristine(FIX_FORM_ID));
    assert!(!state.form(FIX_FORM_ID).unwrap().pristine);
}

#[test]
fn updates_pristine_for_non_existing_form() {
    let prev = register_form();
    let next = FormReducer::reduce(prev.clone(), actions::update_pristine("NONEXISITNG"));

    assert!(next.form(FIX_FORM_ID).unwrap().pristine);
    assert!(next.form("NONEXISITNG").is_none());
    assert!(next.ptr_eq(&prev));
}

#[test]
fn updates_submitting() {
    let next = FormReducer::reduce(
        register_form(),
        actions::update_submitting(FIX_FORM_ID, true),
    );
    assert!(next.form(FIX_FORM_ID).unwrap().submitting);

    let next = FormReducer::reduce(next, actions::update_submitting(FIX_FORM_ID, false));
    assert!(!next.form(FIX_FORM_ID).unwrap().submitting);
}

#[test]
fn updates_submitting_for_non_existing_form() {
    let next = FormReducer::reduce(
        register_form(),
        actions::update_submitting("NONEXISITNG", true),
    );
    assert!(!next.form(FIX_FORM_ID).unwrap().submitting);
    assert_eq!(next.len(), 1);
}

#[test]
fn updates_submitted() {
    let next = FormReducer::reduce(register_form(), actions::update_submitted(FIX_FORM_ID));
    assert!(next.form(FIX_FORM_ID).unwrap().submitted);
}

#[test]
fn submitted_does_not_clear_submitting() {
    let state = FormReducer::reduce(
        register_form(),
        actions::update_submitting(FIX_FORM_ID, true),
    );
    let state = FormReducer::reduce(state, actions::update_submitted(FIX_FORM_ID));

    let form = state.form(FIX_FORM_ID).unwrap();
    assert!(form.submitting);
    assert!(form.submitted);
}

#[test]
fn updates_submitted_for_non_existing_form() {
    let prev = register_form();
    let next = FormReducer::reduce(prev.clone(), actions::update_submitted("NONEXISITNG"));

    let form = next.form(FIX_FORM_ID).unwrap();
    assert!(!form.submitting);
    assert!(!form.submitted);
    assert!(next.ptr_eq(&prev));
}

#[test]
fn registers_input_group() {
    let state = register_group();
    let form = state.form(FIX_FORM_ID).unwrap();

    assert_eq!(form.input_groups.len(), 1);
    assert_eq!(form.group(FIX_GROUP_ID).unwrap().id, FIX_GROUP_ID);
}

#[test]
fn registers_input() {
    let next = FormReducer::reduce(
        register_group(),
        actions::update_input_validity(
            FIX_FORM_ID,
            FIX_GROUP_ID,
            FIX_NAME,
            json!({ "valid": false, "valueMissing": true }),
            "Please fill out this field.",
        ),
    );

    let group = next.form(FIX_FORM_ID).unwrap().group(FIX_GROUP_ID).unwrap();
    assert_eq!(group.inputs.len(), 1);

    let input = group.input(FIX_NAME).unwrap();
    assert_eq!(input.name, FIX_NAME);
    assert_eq!(input.validity, json!({ "valid": false, "valueMissing": true }));
    assert_eq!(input.validation_message, "Please fill out this field.");
}

#[test]
fn registers_input_out_of_form() {
    let before = FormState::default();
    let after = FormReducer::reduce(
        before.clone(),
        actions::update_input_validity(FIX_FORM_ID, FIX_GROUP_ID, FIX_NAME, json!({}), ""),
    );
    assert!(after.ptr_eq(&before));
    assert_eq!(after, FormState::default());
}

#[test]
fn registers_input_out_of_group() {
    let prev = register_form();
    let next = FormReducer::reduce(
        prev.clone(),
        actions::update_input_validity(FIX_FORM_ID, FIX_GROUP_ID, FIX_NAME, json!({}), ""),
    );

    assert!(next.ptr_eq(&prev));
    assert!(next.form(FIX_FORM_ID).unwrap().pristine);
}

#[test]
fn registers_group_out_of_form() {
    let before = FormState::default();
    let after = FormReducer::reduce(
        before.clone(),
        actions::update_input_group_validity(FIX_FORM_ID, FIX_GROUP_ID, true, vec![]),
    );
    assert!(after.ptr_eq(&before));
    assert!(after.is_empty());
}

#[test]
fn repeated_registration_is_idempotent() {
    let event = actions::update_input_validity(FIX_FORM_ID, FIX_GROUP_ID, FIX_NAME, json!({}), "");
    let once = FormReducer::reduce(register_group(), event.clone());
    let twice = FormReducer::reduce(once.clone(), event);
    assert_eq!(once, twice);

    let form_event = actions::update_form_validity(FIX_FORM_ID, true, "");
    let once = FormReducer::reduce(FormState::default(), form_event.clone());
    let twice = FormReducer::reduce(once.clone(), form_event);
    assert_eq!(once, twice);
}

#[test]
fn retained_state_is_never_mutated() {
    let before = register_group();
    let snapshot = serde_json::to_value(&before).unwrap();

    let _after = FormReducer::reduce(
        before.clone(),
        actions::update_input_validity(FIX_FORM_ID, FIX_GROUP_ID, FIX_NAME, json!({}), "oops"),
    );
    let _after = FormReducer::reduce(before.clone(), actions::update_submitted(FIX_FORM_ID));

    assert_eq!(serde_json::to_value(&before).unwrap(), snapshot);
}

#[test]
fn untouched_forms_are_shared() {
    let state = FormReducer::reduce(
        register_form(),
        actions::update_form_validity("other", true, ""),
    );
    let next = FormReducer::reduce(state.clone(), actions::update_pristine("other"));

    assert!(std::ptr::eq(
        state.form(FIX_FORM_ID).unwrap(),
        next.form(FIX_FORM_ID).unwrap()
    ));
    assert!(!std::ptr::eq(
        state.form("other").unwrap(),
        next.form("other").unwrap()
    ));
}

#[test]
fn state_serializes_in_camel_case() {
    let state = common::register_input();
    let value = serde_json::to_value(&state).unwrap();

    let form = &value["forms"][FIX_FORM_ID];
    assert_eq!(form["pristine"], false);
    assert_eq!(form["inputGroups"][FIX_GROUP_ID]["id"], FIX_GROUP_ID);
    assert_eq!(
        form["inputGroups"][FIX_GROUP_ID]["inputs"][FIX_NAME]["validationMessage"],
        ""
    );

    let restored: FormState = serde_json::from_value(value).unwrap();
    assert_eq!(restored, state);
}

#[test]
fn reduce_all_applies_intents_in_order() {
    let state = FormReducer::reduce_all(
        FormState::default(),
        vec![
            actions::update_form_validity(FIX_FORM_ID, true, ""),
            actions::update_input_group_validity(FIX_FORM_ID, FIX_GROUP_ID, true, vec![]),
            actions::update_input_validity(FIX_FORM_ID, FIX_GROUP_ID, FIX_NAME, json!({}), ""),
            actions::update_submitting(FIX_FORM_ID, true),
        ],
    );
    assert_eq!(state, {
        let state = common::register_input();
        FormReducer::reduce(state, actions::update_submitting(FIX_FORM_ID, true))
    });
}

#[test]
fn reduce_all_in_wrong_order_drops_orphans() {
    let state = FormReducer::reduce_all(
        FormState::default(),
        vec![
            actions::update_input_group_validity(FIX_FORM_ID, FIX_GROUP_ID, true, vec![]),
            actions::update_form_validity(FIX_FORM_ID, true, ""),
        ],
    );
    let form = state.form(FIX_FORM_ID).unwrap();
    assert!(form.input_groups.is_empty());
}

#[test]
fn unchanged_check_uses_identity() {
    use html5form::mvi::UiState;

    let before = register_form();
    let noop = FormReducer::reduce(before.clone(), actions::update_pristine("NONEXISITNG"));
    assert!(noop.is_unchanged_from(&before));

    let rebuilt = FormReducer::reduce(before.clone(), actions::update_form_validity(FIX_FORM_ID, true, ""));
    assert_eq!(rebuilt, before);
    assert!(!rebuilt.is_unchanged_from(&before));
}
