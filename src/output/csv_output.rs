use std::io::Write;

use csv::Writer;

use crate::engine::AggregateReport;
use crate::models::{Service, Status, Transaction};

pub const AUDIT_HEADER: [&str; 9] = ["id", "transtype", "param4", "responsecode", "amount", "backend_status", "status", "label", "severity"];
pub const SERVICES_HEADER: [&str; 3] = ["id", "name", "active"];

/// Writes one row per transaction with its resolved status next to the raw fields.
pub fn write_audit<W: Write>(writer: W, transactions: &[Transaction]) -> Result<(), csv::Error> {
    let mut output = Writer::from_writer(writer);

    output.write_record(AUDIT_HEADER)?;

    for transaction in transactions {
        let status = Status::resolve(transaction);
        let amount = transaction.amount.map(|amount| amount.to_string()).unwrap_or_default();
        let status_name = status.to_string();
        let severity = status.severity().to_string();

        output.write_record([
            transaction.id.as_str(),
            transaction.transtype.as_str(),
            transaction.param4.as_deref().unwrap_or(""),
            transaction.responsecode.as_str(),
            amount.as_str(),
            transaction.backend_status.as_deref().unwrap_or(""),
            status_name.as_str(),
            status.label(),
            severity.as_str()
        ])?;
    }

    output.flush()?;

    Ok(())
}

/// Writes the per-service counts, one column per status, in request order.
pub fn write_report<W: Write>(writer: W, report: &AggregateReport) -> Result<(), csv::Error> {
    let mut output = Writer::from_writer(writer);

    let mut header = vec!["service".to_string(), "count".to_string()];
    header.extend(Status::ALL.iter().map(Status::to_string));
    header.push("error".to_string());

    output.write_record(&header)?;

    for service_id in &report.services {
        let breakdown = report.breakdowns.get(service_id).copied().unwrap_or_default();
        let error = report.errors.get(service_id)
            .map(|error| error.to_string())
            .unwrap_or_default();

        let mut record = vec![service_id.clone(), report.count(service_id).to_string()];
        record.extend(Status::ALL.iter().map(|status| breakdown.get(*status).to_string()));
        record.push(error);

        output.write_record(&record)?;
    }

    output.flush()?;

    Ok(())
}

pub fn write_services<W: Write>(writer: W, services: &[Service]) -> Result<(), csv::Error> {
    let mut output = Writer::from_writer(writer);

    output.write_record(SERVICES_HEADER)?;

    for service in services {
        output.write_record([service.id.as_str(), service.name.as_str(), if service.status { "true" } else { "false" }])?;
    }

    output.flush()?;

    Ok(())
}
