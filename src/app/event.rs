use crate::domain::{CreatedModel, CreatedReservation, Model, Reservation, Store};
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Outcome of a store round trip, delivered back to the UI loop.
/// Create/delete events carry enough of the request to merge the
/// store's answer into the session without refetching.
#[derive(Debug)]
pub enum StoreEvent {
    Models(Result<Vec<Model>>),
    Reservations {
        generation: u64,
        result: Result<Vec<Reservation>>,
    },
    ModelCreated {
        draft: Model,
        result: Result<CreatedModel>,
    },
    ModelDeleted {
        id: String,
        result: Result<()>,
    },
    ReservationCreated {
        draft: Reservation,
        result: Result<CreatedReservation>,
    },
    ReservationDeleted {
        id: String,
        result: Result<()>,
    },
}

/// Fires store round trips as background tasks so the UI thread never
/// blocks on the network. Each task reports exactly one `StoreEvent`.
#[derive(Clone)]
pub struct StoreHandle {
    store: Arc<dyn Store>,
    tx: mpsc::UnboundedSender<StoreEvent>,
}

impl StoreHandle {
    pub fn new(store: Arc<dyn Store>, tx: mpsc::UnboundedSender<StoreEvent>) -> Self {
        Self { store, tx }
    }

    pub fn fetch_models(&self) {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = store.list_models().await;
            let _ = tx.send(StoreEvent::Models(result));
        });
    }

    /// `generation` travels with the response so the session can drop
    /// fetches that were superseded by a newer date change.
    pub fn fetch_reservations(&self, date: String, generation: u64) {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = store.list_reservations(Some(&date)).await;
            let _ = tx.send(StoreEvent::Reservations { generation, result });
        });
    }

    pub fn create_model(&self, draft: Model) {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = store.create_model(&draft).await;
            let _ = tx.send(StoreEvent::ModelCreated { draft, result });
        });
    }

    pub fn delete_model(&self, id: String) {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = store.delete_model(&id).await;
            let _ = tx.send(StoreEvent::ModelDeleted { id, result });
        });
    }

    pub fn create_reservation(&self, draft: Reservation) {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = store.create_reservation(&draft).await;
            let _ = tx.send(StoreEvent::ReservationCreated { draft, result });
        });
    }

    pub fn delete_reservation(&self, id: String) {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = store.delete_reservation(&id).await;
            let _ = tx.send(StoreEvent::ReservationDeleted { id, result });
        });
    }
}
