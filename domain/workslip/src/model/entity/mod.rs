pub mod draft;
pub mod work_slip;

#[rustfmt::skip]
pub use {
    draft::{DraftRecord, RecordOrigin},
    work_slip::WorkSlip,
};
