use super::csv_output::{AUDIT_HEADER, SERVICES_HEADER};
use super::{write_audit, write_report, write_services};
use crate::engine::{AggregateReport, ServiceError, StatusBreakdown};
use crate::models::{Service, Transaction};

use anyhow::Result;
use chrono::Local;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_audit_lists_raw_fields_next_to_resolved_status() -> Result<()> {
    let transactions: Vec<Transaction> = serde_json::from_value(json!([
        { "id": 1, "transtype": "AM", "param4": null, "responsecode": "000", "amount": "150.00", "status": "SUCCESS" },
        { "id": 2, "transtype": "MA", "param4": "04", "responsecode": "000" },
        { "id": 3, "transtype": "BP", "param4": "04", "responsecode": "001" }
    ]))?;

    let mut buffer = Vec::new();
    write_audit(&mut buffer, &transactions)?;
    let output = String::from_utf8(buffer)?;

    assert_eq!(output.lines().collect::<Vec<_>>(), vec![
        "id,transtype,param4,responsecode,amount,backend_status,status,label,severity",
        "1,AM,,000,150.00,SUCCESS,pending,Pending,warning",
        "2,MA,04,000,,,success,Success,positive",
        "3,BP,04,001,,,unknown,Unknown,neutral"
    ]);
    assert_eq!(AUDIT_HEADER.join(","), output.lines().next().unwrap_or_default());

    Ok(())
}

#[test]
fn test_report_rows_follow_request_order_and_quote_errors() -> Result<()> {
    let mut report = AggregateReport::new(1, Local::now());
    report.record_success("6".to_string(), StatusBreakdown { pending: 2, success: 1, failed: 0, unknown: 3 });
    report.record_failure("5".to_string(), ServiceError::Task { service_id: "5".to_string(), reason: "task cancelled, retry later".to_string() });

    let mut buffer = Vec::new();
    write_report(&mut buffer, &report)?;
    let output = String::from_utf8(buffer)?;

    assert_eq!(output.lines().collect::<Vec<_>>(), vec![
        "service,count,pending,success,failed,unknown,error",
        "6,6,2,1,0,3,",
        "5,0,0,0,0,0,\"Aggregation for service [5] did not complete: task cancelled, retry later\""
    ]);

    Ok(())
}

#[test]
fn test_services_are_listed_with_their_active_flag() -> Result<()> {
    let services: Vec<Service> = serde_json::from_value(json!([
        { "id": 5, "name": "Wallet Transfer", "status": true },
        { "id": 6, "name": "Airtime", "status": null }
    ]))?;

    let mut buffer = Vec::new();
    write_services(&mut buffer, &services)?;
    let output = String::from_utf8(buffer)?;

    assert_eq!(output.lines().collect::<Vec<_>>(), vec![
        SERVICES_HEADER.join(",").as_str(),
        "5,Wallet Transfer,true",
        "6,Airtime,false"
    ]);

    Ok(())
}
