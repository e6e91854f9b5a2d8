pub mod calendar;
mod service;
mod status;
mod transaction;

pub use service::Service;
pub use status::Status;
pub use transaction::{AuthoritativeDate, Transaction};
