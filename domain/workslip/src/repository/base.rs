use async_trait::async_trait;

#[async_trait]
pub trait ReadOnlyRepository<T>: Send + Sync
where
    T: Send + Sync,
{
    /// The entity with `id`, if present.
    async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<T>>;

    async fn get_all(&self) -> anyhow::Result<Vec<T>>;
}

/// Writes may be staged until [`MutableRepository::save_changed`] is called.
#[async_trait]
pub trait MutableRepository<T>: Send + Sync
where
    T: Send + Sync,
{
    /// Returns the id of the inserted entity.
    async fn insert(&self, entity: &T) -> anyhow::Result<String>;

    async fn update(&self, entity: &T) -> anyhow::Result<()>;

    /// Deleting an absent id is not an error.
    async fn delete_by_id(&self, id: &str) -> anyhow::Result<()>;

    /// Commits staged writes, returning whether anything was committed.
    async fn save_changed(&self) -> anyhow::Result<bool>;
}

pub trait DBRepository<T>: ReadOnlyRepository<T> + MutableRepository<T>
where
    T: Send + Sync,
{
}
