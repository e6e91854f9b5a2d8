mod csv_output;
#[cfg(test)]
mod tests;

pub use csv_output::{write_audit, write_report, write_services};
