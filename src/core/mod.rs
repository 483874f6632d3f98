pub mod availability;
pub mod session;

pub use availability::{
    aggregate_reservations, compute_availability, Availability, ReservedCounts, UNASSIGNED_BUCKET,
};
pub use session::Session;
