//! Validation state container for HTML forms.
//!
//! A pure reducer ([`form::FormReducer`]) folds event records
//! ([`form::FormIntent`]) into a read model of forms, input groups and
//! inputs. [`store::FormStore`] and [`replay`] are conveniences for callers
//! that hold the canonical state themselves.

pub mod config;
pub mod form;
pub mod logging;
pub mod mvi;
pub mod replay;
pub mod store;
