mod amount;
mod errors;
pub mod text;

pub use amount::Amount;

pub type ServiceId = String;
pub type TransactionId = String;
