mod auth;
mod draft;
mod export;
mod report;
mod session;
mod so_number;
mod work_slip;

pub use auth::{StaticAccount, StaticAuthSettings, StaticCredentialProvider};
pub use draft::DraftServiceImpl;
pub use export::ExportServiceImpl;
pub use report::ReportServiceImpl;
pub use session::{Flash, IntakeSession, FLASH_DURATION};
pub use so_number::SoNumberServiceImpl;
pub use work_slip::WorkSlipServiceImpl;
