/// A rendered CSV file ready to be offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDownload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl CsvDownload {
    pub const CONTENT_TYPE: &'static str = "text/csv; charset=utf-8";
}
