use chrono::{DateTime, Local};
use tracing::debug;

use crate::models::calendar::start_of_month;
use crate::models::{AuthoritativeDate, Status, Transaction};

/// Per-status counts of the transactions that fall in the current month.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct StatusBreakdown {
    pub pending: usize,
    pub success: usize,
    pub failed: usize,
    pub unknown: usize
}

impl StatusBreakdown {
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Pending => self.pending += 1,
            Status::Success => self.success += 1,
            Status::Failed => self.failed += 1,
            Status::Unknown => self.unknown += 1
        }
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Pending => self.pending,
            Status::Success => self.success,
            Status::Failed => self.failed,
            Status::Unknown => self.unknown
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.success + self.failed + self.unknown
    }
}

/// Counts the transactions dated on or after the start of the month containing `now`.
///
/// Only the lower bound is applied: records dated after the end of the
/// current month are still counted.
pub fn tally_current_month(transactions: &[Transaction], now: DateTime<Local>) -> StatusBreakdown {
    let month_start = start_of_month(now);
    let mut breakdown = StatusBreakdown::default();

    for transaction in transactions {
        match transaction.authoritative_date(now) {
            AuthoritativeDate::Parsed(date) if date >= month_start => breakdown.record(transaction.status()),
            AuthoritativeDate::Parsed(_) => {}
            AuthoritativeDate::Unreadable => {
                debug!("Transaction [{}] has an unreadable date and is not counted", transaction.id);
            }
        }
    }

    breakdown
}
