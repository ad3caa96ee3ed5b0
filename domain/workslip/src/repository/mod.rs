mod base;
mod draft;
mod so_counter;
mod work_slip;

#[rustfmt::skip]
pub use {
    base::{DBRepository, MutableRepository, ReadOnlyRepository},
    draft::DraftRepo,
    so_counter::SoCounterRepo,
    work_slip::WorkSlipRepo,
};
