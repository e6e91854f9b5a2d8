use std::fmt;
use std::fmt::{Display, Formatter};

use crate::models::Transaction;

const ACCOUNT_TO_MOBILE: &str = "AM";
const MOBILE_TO_ACCOUNT: &str = "MA";
const RESPONSE_ACCEPTED: &str = "000";
const COMPLETION_MARKER: &str = "04";

/// Audit status derived from the raw backend fields of a transaction.
///
/// Never persisted, always recomputed from `transtype`, `param4` and
/// `responsecode` so that a stale backend status string cannot leak into an
/// audit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Status {
    Pending,
    Success,
    Failed,
    Unknown
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Severity {
    Warning,
    Positive,
    Negative,
    Neutral
}

impl Status {
    pub const ALL: [Status; 4] = [Status::Pending, Status::Success, Status::Failed, Status::Unknown];

    /// Classifies a transaction.
    ///
    /// Only account/mobile transfer flows (`AM`, `MA`) are classified, every
    /// other flow is `Unknown`. Within those flows anything that is not
    /// recognisably pending or successful is `Failed`.
    pub fn resolve(transaction: &Transaction) -> Self {
        let transtype = transaction.transtype.as_str();

        if transtype != ACCOUNT_TO_MOBILE && transtype != MOBILE_TO_ACCOUNT {
            return Status::Unknown;
        }

        let accepted = transaction.responsecode == RESPONSE_ACCEPTED;

        match transaction.param4.as_deref() {
            None if accepted => Status::Pending,
            Some(COMPLETION_MARKER) if accepted => Status::Success,
            _ => Status::Failed
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Success => "Success",
            Status::Failed => "Failed",
            Status::Unknown => "Unknown"
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Status::Pending => Severity::Warning,
            Status::Success => Severity::Positive,
            Status::Failed => Severity::Negative,
            Status::Unknown => Severity::Neutral
        }
    }
}

impl Display for Status {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Pending => "pending",
            Status::Success => "success",
            Status::Failed => "failed",
            Status::Unknown => "unknown"
        };

        formatter.write_str(name)
    }
}

impl Display for Severity {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Warning => "warning",
            Severity::Positive => "positive",
            Severity::Negative => "negative",
            Severity::Neutral => "neutral"
        };

        formatter.write_str(name)
    }
}

impl Transaction {
    pub fn status(&self) -> Status {
        Status::resolve(self)
    }
}
