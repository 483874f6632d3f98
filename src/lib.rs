pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod store;
pub mod utils;

pub use config::{AppSettings, CliConfig, FileConfig};
pub use core::{aggregate_reservations, compute_availability, Availability, Session};
pub use domain::{CreatedModel, CreatedReservation, Model, Reservation, Store};
pub use store::HttpStore;
pub use utils::error::{AppError, Result};
