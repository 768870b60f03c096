//! Read model for forms, input groups and inputs.
//!
//! The tree is three levels deep (forms → input groups → inputs) and owned by
//! value. Forms and groups sit behind `Arc` so that an update copies only the
//! branch it touches while untouched siblings stay shared.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

/// Identifier of a form.
pub type FormId = String;
/// Identifier of an input group within a form.
pub type GroupId = String;
/// Name of an input within a group.
pub type InputName = String;

/// Engine-defined validity object, passed through unchanged.
///
/// `Value::Null` stands for "not provided".
pub type Validity = serde_json::Value;

/// Root of the read model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormState {
    #[serde(default)]
    forms: Arc<BTreeMap<FormId, Arc<FormEntry>>>,
}

impl UiState for FormState {
    fn is_unchanged_from(&self, previous: &Self) -> bool {
        self.ptr_eq(previous)
    }
}

impl FormState {
    /// Returns true when both values are the same allocation.
    ///
    /// A reducer no-op hands back the state it was given, so this is the
    /// cheap way to tell that nothing changed.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.forms, &other.forms)
    }

    pub fn form(&self, form_id: &str) -> Option<&FormEntry> {
        self.forms.get(form_id).map(Arc::as_ref)
    }

    pub fn contains_form(&self, form_id: &str) -> bool {
        self.forms.contains_key(form_id)
    }

    pub fn forms(&self) -> impl Iterator<Item = &FormEntry> {
        self.forms.values().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Describes the first entry whose identifier differs from the key it is
    /// stored under. States built by the reducer never have one; states
    /// deserialized from elsewhere might.
    pub fn find_key_mismatch(&self) -> Option<String> {
        for (form_key, form) in self.forms.iter() {
            if form.id != *form_key {
                return Some(format!("form '{}' has id '{}'", form_key, form.id));
            }
            for (group_key, group) in &form.input_groups {
                if group.id != *group_key {
                    return Some(format!(
                        "group '{}/{}' has id '{}'",
                        form_key, group_key, group.id
                    ));
                }
                for (input_key, input) in &group.inputs {
                    if input.name != *input_key {
                        return Some(format!(
                            "input '{}/{}/{}' has name '{}'",
                            form_key, group_key, input_key, input.name
                        ));
                    }
                }
            }
        }
        None
    }

    /// Copy-on-write access to a form entry, inserting one built by `create`
    /// when absent.
    pub(crate) fn form_mut_or_insert_with(
        &mut self,
        form_id: &str,
        create: impl FnOnce() -> FormEntry,
    ) -> &mut FormEntry {
        let forms = Arc::make_mut(&mut self.forms);
        let entry = forms
            .entry(form_id.to_string())
            .or_insert_with(|| Arc::new(create()));
        Arc::make_mut(entry)
    }

    /// Copy-on-write access to an existing form entry.
    ///
    /// Callers must check presence first: this copies the forms map even
    /// when the form turns out to be missing.
    pub(crate) fn form_mut(&mut self, form_id: &str) -> Option<&mut FormEntry> {
        Arc::make_mut(&mut self.forms)
            .get_mut(form_id)
            .map(Arc::make_mut)
    }
}

/// Validation and lifecycle flags of a single form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEntry {
    pub id: FormId,
    pub valid: bool,
    pub error: String,
    /// Latches to `false` once any input of the form reports validity.
    pub pristine: bool,
    pub submitting: bool,
    pub submitted: bool,
    #[serde(default)]
    pub input_groups: BTreeMap<GroupId, Arc<InputGroupEntry>>,
}

impl FormEntry {
    /// A freshly registered form: pristine, idle, with no groups.
    pub fn new(id: impl Into<FormId>) -> Self {
        Self {
            id: id.into(),
            valid: false,
            error: String::new(),
            pristine: true,
            submitting: false,
            submitted: false,
            input_groups: BTreeMap::new(),
        }
    }

    pub fn group(&self, group_id: &str) -> Option<&InputGroupEntry> {
        self.input_groups.get(group_id).map(Arc::as_ref)
    }

    pub fn groups(&self) -> impl Iterator<Item = &InputGroupEntry> {
        self.input_groups.values().map(Arc::as_ref)
    }

    pub(crate) fn group_mut_or_insert_with(
        &mut self,
        group_id: &str,
        create: impl FnOnce() -> InputGroupEntry,
    ) -> &mut InputGroupEntry {
        let entry = self
            .input_groups
            .entry(group_id.to_string())
            .or_insert_with(|| Arc::new(create()));
        Arc::make_mut(entry)
    }

    pub(crate) fn group_mut(&mut self, group_id: &str) -> Option<&mut InputGroupEntry> {
        self.input_groups.get_mut(group_id).map(Arc::make_mut)
    }
}

/// Aggregate validity of a named set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputGroupEntry {
    pub id: GroupId,
    pub valid: bool,
    pub errors: Vec<String>,
    #[serde(default)]
    pub inputs: BTreeMap<InputName, InputEntry>,
}

impl InputGroupEntry {
    pub fn new(id: impl Into<GroupId>) -> Self {
        Self {
            id: id.into(),
            valid: false,
            errors: Vec::new(),
            inputs: BTreeMap::new(),
        }
    }

    pub fn input(&self, name: &str) -> Option<&InputEntry> {
        self.inputs.get(name)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &InputEntry> {
        self.inputs.values()
    }
}

/// Last reported validity of a single input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputEntry {
    pub name: InputName,
    pub validity: Validity,
    pub validation_message: String,
}

impl InputEntry {
    pub fn new(name: impl Into<InputName>) -> Self {
        Self {
            name: name.into(),
            validity: Validity::Null,
            validation_message: String::new(),
        }
    }
}
