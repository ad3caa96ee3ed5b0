use async_trait::async_trait;

/// Last SO number handed out by this installation.
#[async_trait]
pub trait SoCounterRepo: Send + Sync {
    async fn load(&self) -> anyhow::Result<Option<String>>;

    async fn store(&self, so_number: &str) -> anyhow::Result<()>;
}
