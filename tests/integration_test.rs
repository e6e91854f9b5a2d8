use std::process::Command;
use anyhow::Result;

const UNREACHABLE_BACKEND: &str = "http://127.0.0.1:9";

fn service_audit() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_service-audit"));
    command.env_remove("SERVICE_AUDIT_BASE_URL");
    command
}

#[test]
fn test_cli_reports_every_service_when_backend_is_unreachable() -> Result<()> {
    let output = service_audit()
        .args(["--base-url", UNREACHABLE_BACKEND, "--timeout-secs", "2", "counts", "5", "6"])
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some("service,count,pending,success,failed,unknown,error"));

    let rows: Vec<&str> = lines.collect();

    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("5,0,0,0,0,0,"));
    assert!(rows[1].starts_with("6,0,0,0,0,0,"));
    assert!(rows.iter().all(|row| row.contains("Fetching transactions for service")));

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("2 of 2 services failed to load"));

    Ok(())
}

#[test]
fn test_cli_rejects_base_url_without_scheme() -> Result<()> {
    let output = service_audit()
        .args(["--base-url", "backend.example", "counts", "5"])
        .output()?;

    assert!(!output.status.success());

    Ok(())
}

#[test]
fn test_cli_audit_fails_when_backend_is_unreachable() -> Result<()> {
    let output = service_audit()
        .args(["--base-url", UNREACHABLE_BACKEND, "--timeout-secs", "2", "audit", "5"])
        .output()?;

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("Could not fetch transactions for service [5]"));

    Ok(())
}
