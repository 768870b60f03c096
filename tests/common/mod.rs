//! Shared fixtures for form state tests.

#![allow(dead_code, unused_imports)]

use html5form::form::{actions, FormReducer, FormState};
use html5form::mvi::Reducer;
use serde_json::json;

pub const FIX_FORM_ID: &str = "myForm";
pub const FIX_GROUP_ID: &str = "myGroup";
pub const FIX_NAME: &str = "myName";

/// State with `myForm` registered as valid.
pub fn register_form() -> FormState {
    FormReducer::reduce(
        FormState::default(),
        actions::update_form_validity(FIX_FORM_ID, true, ""),
    )
}

/// State with `myForm` and its `myGroup` registered.
pub fn register_group() -> FormState {
    FormReducer::reduce(
        register_form(),
        actions::update_input_group_validity(FIX_FORM_ID, FIX_GROUP_ID, true, vec![]),
    )
}

/// State with `myForm/myGroup/myName` registered.
pub fn register_input() -> FormState {
    FormReducer::reduce(
        register_group(),
        actions::update_input_validity(FIX_FORM_ID, FIX_GROUP_ID, FIX_NAME, json!({}), ""),
    )
}
