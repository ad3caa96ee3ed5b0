//! Infrastructure of a client installation: the HTTP record service and the
//! files holding drafts and the SO counter.

mod config;
mod draft_file;
mod remote;
mod so_counter_file;

pub use config::ClientConfig;
pub use draft_file::JsonFileDraftRepo;
pub use remote::RemoteWorkSlipService;
pub use so_counter_file::FileSoCounterRepo;
