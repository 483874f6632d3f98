pub mod model;
pub mod ports;

pub use model::{CreatedModel, CreatedReservation, Model, Reservation};
pub use ports::Store;
