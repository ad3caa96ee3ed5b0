mod auth;
mod draft;
mod export;
mod report;
mod so_number;
mod work_slip;

#[rustfmt::skip]
pub use {
    auth::AuthProvider,
    draft::DraftService,
    export::ExportService,
    report::ReportService,
    so_number::SoNumberService,
    work_slip::WorkSlipService,
};
