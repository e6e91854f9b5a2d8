mod response;

pub use response::{normalize, normalize_records};
