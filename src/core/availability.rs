use crate::domain::{Model, Reservation};
use std::collections::HashMap;

/// Bucket key for reservations carrying no model reference. Nothing
/// ever looks it up; it only keeps unassigned counts out of real models.
pub const UNASSIGNED_BUCKET: &str = "sin";

/// Units reserved for one model on one date.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReservedCounts {
    pub men: u32,
    pub women: u32,
}

/// Remaining availability for one model on the selected date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub model_id: String,
    pub model_name: String,
    pub men: u32,
    pub women: u32,
}

/// Sums reserved men/women per model over the reservations whose date
/// equals `date` exactly. No range matching, no timezone normalization.
pub fn aggregate_reservations(
    reservations: &[Reservation],
    date: &str,
) -> HashMap<String, ReservedCounts> {
    let mut totals: HashMap<String, ReservedCounts> = HashMap::new();

    for reservation in reservations.iter().filter(|r| r.date == date) {
        let key = if reservation.model_id.is_empty() {
            UNASSIGNED_BUCKET.to_string()
        } else {
            reservation.model_id.clone()
        };
        let entry = totals.entry(key).or_default();
        entry.men += reservation.men;
        entry.women += reservation.women;
    }

    totals
}

/// Projects remaining stock per model: `stock - reserved`, floored at
/// zero. Models absent from the aggregate keep full stock. Assumes the
/// aggregate was built for a single date; this function does not filter.
pub fn compute_availability(
    models: &[Model],
    reserved: &HashMap<String, ReservedCounts>,
) -> Vec<Availability> {
    models
        .iter()
        .map(|model| {
            let counts = model
                .id
                .as_deref()
                .and_then(|id| reserved.get(id))
                .copied()
                .unwrap_or_default();
            Availability {
                model_id: model.id.clone().unwrap_or_default(),
                model_name: model.name.clone(),
                men: model.stock_men.saturating_sub(counts.men),
                women: model.stock_women.saturating_sub(counts.women),
            }
        })
        .collect()
}
