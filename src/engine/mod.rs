mod aggregation_engine;
mod report;
mod tally;

pub use aggregation_engine::{AggregationEngine, FETCH_OFFSET, FETCH_PAGE_SIZE};
pub use report::{AggregateReport, ServiceError};
pub use tally::{tally_current_month, StatusBreakdown};
