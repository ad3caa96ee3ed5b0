//! State machine behind the work slip intake form.

pub mod model;
