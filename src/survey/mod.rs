//! The survey domain: field schema, draft state, validation, the submit
//! protocol, and aggregation over stored responses.

pub mod controller;
pub mod draft;
pub mod fields;
pub mod stats;
pub mod validation;
