use crate::domain::model::{CreatedModel, CreatedReservation, Model, Reservation};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The six operations the remote store exposes. Every round trip either
/// succeeds with the store's response or fails with the store's error
/// text; there is no retry, no partial success.
#[async_trait]
pub trait Store: Send + Sync {
    async fn list_models(&self) -> Result<Vec<Model>>;

    /// Sends a draft (no id); the store assigns the identifier.
    async fn create_model(&self, draft: &Model) -> Result<CreatedModel>;

    async fn delete_model(&self, id: &str) -> Result<()>;

    /// `date` filters server-side by exact match; `None` returns all.
    async fn list_reservations(&self, date: Option<&str>) -> Result<Vec<Reservation>>;

    /// Sends a draft (no id/total); the store assigns both.
    async fn create_reservation(&self, draft: &Reservation) -> Result<CreatedReservation>;

    async fn delete_reservation(&self, id: &str) -> Result<()>;
}
