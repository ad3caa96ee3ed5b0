mod form;

#[rustfmt::skip]
pub use form::{IntakeForm, ReportField};
