mod area;
pub mod catalog;
mod export;
mod filter;
mod identity;
mod quarter;
mod raw;
mod report;
mod required;
mod so_number;
mod technical_report;

#[rustfmt::skip]
pub use {
    area::*,
    catalog::{RequestCategory, RequestType},
    export::CsvDownload,
    filter::{offices_in_use, SlipFilter},
    identity::{Credentials, Identity},
    quarter::Quarter,
    raw::{RawTechnicalReport, RawWorkSlip},
    report::*,
    required::RequiredField,
    so_number::{ParseSoNumberError, SoNumber},
    technical_report::TechnicalReport,
};
