use crate::model::vo::{Credentials, Identity};

/// Resolves credentials to an identity. Unknown users and wrong passwords
/// both yield `None`.
pub trait AuthProvider: Send + Sync {
    fn authenticate(&self, credentials: &Credentials) -> Option<Identity>;
}
