mod service_directory;

pub use service_directory::{fetch_services, list_service_ids};
