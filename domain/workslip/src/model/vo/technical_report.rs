use serde::{Deserialize, Serialize};

use super::{RawTechnicalReport, RequestType};

/// One row of the technical report table.
///
/// `request` is kept as text: records written before the request dropdown
/// existed carry free-form action text in this column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawTechnicalReport")]
pub struct TechnicalReport {
    pub request: String,
    pub action_done: String,
    pub recommendation: String,
}

impl TechnicalReport {
    /// Row rebuilt from the flattened fields of a legacy record.
    pub fn from_legacy(action_done: &str, recommendation: &str) -> Self {
        Self {
            request: action_done.to_owned(),
            action_done: action_done.to_owned(),
            recommendation: recommendation.to_owned(),
        }
    }

    pub fn request_type(&self) -> Option<RequestType> {
        RequestType::from_label(self.request.trim())
    }

    pub fn is_printer_isolation(&self) -> bool {
        self.request_type() == Some(RequestType::PrinterIsolation)
    }

    pub fn trimmed(&self) -> Self {
        Self {
            request: self.request.trim().to_owned(),
            action_done: self.action_done.trim().to_owned(),
            recommendation: self.recommendation.trim().to_owned(),
        }
    }
}

impl From<RawTechnicalReport> for TechnicalReport {
    fn from(raw: RawTechnicalReport) -> Self {
        Self {
            request: raw.request.unwrap_or_default(),
            action_done: raw.action_done.unwrap_or_default(),
            recommendation: raw.recommendation.unwrap_or_default(),
        }
    }
}
