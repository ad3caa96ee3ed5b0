use super::DBRepository;
use crate::model::entity::DraftRecord;

/// Client-local drafts, newest first.
pub trait DraftRepo: DBRepository<DraftRecord> + Send + Sync {}
