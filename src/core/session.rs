use crate::core::availability::{aggregate_reservations, compute_availability, Availability};
use crate::domain::{Model, Reservation};

/// In-memory session state: the authoritative client-side copies of the
/// model list, the reservation list for the selected date, the date
/// itself and the last round-trip error. The store owns the durable
/// records; nothing here is persisted.
///
/// All mutation funnels through the named transitions below. None of
/// them touch the store: callers round-trip first and merge the
/// store's response, so a failed request leaves the session untouched.
#[derive(Debug)]
pub struct Session {
    pub models: Vec<Model>,
    pub reservations: Vec<Reservation>,
    pub date: String,
    pub last_error: Option<String>,
    fetch_generation: u64,
}

impl Session {
    pub fn new(date: String) -> Self {
        Self {
            models: Vec::new(),
            reservations: Vec::new(),
            date,
            last_error: None,
            fetch_generation: 0,
        }
    }

    /// Today's local calendar date, zero-padded `YYYY-MM-DD`.
    pub fn today() -> String {
        chrono::Local::now().format("%Y-%m-%d").to_string()
    }

    /// Stamps a new reservation fetch. Responses carrying an older
    /// stamp are dropped by `apply_reservations`, so a slow fetch for a
    /// previously selected date can never overwrite newer state.
    pub fn next_fetch_generation(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.fetch_generation
    }

    /// Switches the selected date and stamps the refetch it requires.
    /// The old reservation list stays visible until the fetch lands;
    /// there is no per-date cache.
    pub fn set_date(&mut self, date: String) -> u64 {
        self.date = date;
        self.next_fetch_generation()
    }

    pub fn set_models(&mut self, models: Vec<Model>) {
        self.models = models;
        self.last_error = None;
    }

    /// Replaces the reservation list, unless a newer fetch has been
    /// issued since `generation` was stamped. Returns whether the
    /// response was accepted.
    pub fn apply_reservations(&mut self, generation: u64, reservations: Vec<Reservation>) -> bool {
        if generation < self.fetch_generation {
            tracing::debug!(
                generation,
                current = self.fetch_generation,
                "discarding stale reservation fetch"
            );
            return false;
        }
        self.reservations = reservations;
        self.last_error = None;
        true
    }

    /// Appends a store-confirmed model: the submitted draft merged with
    /// the store-assigned id. Any id on the draft is overwritten.
    pub fn merge_created_model(&mut self, mut draft: Model, id: String) {
        draft.id = Some(id);
        self.models.push(draft);
        self.last_error = None;
    }

    /// Prepends a store-confirmed reservation: draft merged with the
    /// store-assigned id and store-computed total.
    pub fn merge_created_reservation(&mut self, mut draft: Reservation, id: String, total: u64) {
        draft.id = Some(id);
        draft.total = Some(total);
        self.reservations.insert(0, draft);
        self.last_error = None;
    }

    /// Removes exactly the model with `id`; everything else keeps its
    /// position and fields.
    pub fn remove_model(&mut self, id: &str) {
        self.models.retain(|m| m.id.as_deref() != Some(id));
        self.last_error = None;
    }

    pub fn remove_reservation(&mut self, id: &str) {
        self.reservations.retain(|r| r.id.as_deref() != Some(id));
        self.last_error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "store round trip failed");
        self.last_error = Some(message);
    }

    /// Remaining stock per model for the selected date, recomputed from
    /// the current lists on every call.
    pub fn availability(&self) -> Vec<Availability> {
        let totals = aggregate_reservations(&self.reservations, &self.date);
        compute_availability(&self.models, &totals)
    }
}
