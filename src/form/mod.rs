//! Validation state of HTML forms, input groups and inputs.
//!
//! Event records ([`FormIntent`]) are built with the helpers in [`actions`]
//! and folded into the read model ([`FormState`]) by [`FormReducer`].

pub mod actions;
pub mod codec;
mod intent;
mod reducer;
mod state;

pub use codec::{ActionError, RawAction};
pub use intent::{
    FormIntent, FormSubmitting, FormTarget, FormValidity, InputGroupValidity, InputValidity,
    KNOWN_KINDS, UPDATE_FORM_SUBMITTED, UPDATE_FORM_SUBMITTING, UPDATE_FORM_VALIDITY,
    UPDATE_INPUT_GROUP_VALIDITY, UPDATE_INPUT_VALIDITY, UPDATE_PRISTINE,
};
pub use reducer::{reduce, FormReducer};
pub use state::{
    FormEntry, FormId, FormState, GroupId, InputEntry, InputGroupEntry, InputName, Validity,
};
