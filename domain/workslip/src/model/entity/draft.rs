use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::WorkSlip;
use crate::model::AggregateRoot;

/// Where a slip currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOrigin {
    /// Client-local storage only; never checked for SO uniqueness.
    Local,
    /// Stored by the record service.
    Persisted,
}

/// A slip saved locally before submission.
///
/// The only way to a persisted [`WorkSlip`] is [`DraftRecord::into_submission`],
/// which hands out a fresh slip identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftRecord(WorkSlip);

impl DraftRecord {
    pub const ORIGIN: RecordOrigin = RecordOrigin::Local;

    /// `draft-<unix millis>-<7 base36 chars>`
    pub fn new_id() -> String {
        WorkSlip::prefixed_id("draft")
    }

    pub fn new(mut slip: WorkSlip, now: DateTime<Utc>) -> Self {
        slip.id = Self::new_id();
        slip.stamp_created(now);
        Self(slip)
    }

    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn slip(&self) -> &WorkSlip {
        &self.0
    }

    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.0.created_at
    }

    /// The slip to send to the record service: new identifier, no
    /// persistence time.
    pub fn into_submission(self) -> WorkSlip {
        let mut slip = self.0;
        slip.id = WorkSlip::new_id();
        slip.created_at = None;
        slip
    }
}

impl AggregateRoot for DraftRecord {
    fn id(&self) -> &str {
        &self.0.id
    }
}
