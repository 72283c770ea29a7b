// Unit tests for ConnectionDirectory and its output parsing

mod common;

use common::fake_runner::FakeRunner;
use togl_core::error::DirectoryError;
use togl_core::vpn::directory::parse_directory_output;
use togl_core::vpn::{ConnectionDirectory, ConnectionStatus};

#[test]
fn test_parse_array_of_records() {
    let stdout = r#"[{"Name":"TestVPN1","ConnectionStatus":"Connected"},{"Name":"TestVPN2","ConnectionStatus":"Disconnected"}]"#;
    let connections = parse_directory_output(stdout).unwrap();

    assert_eq!(connections.len(), 2);
    assert_eq!(connections[0].name, "TestVPN1");
    assert_eq!(connections[0].status, ConnectionStatus::Connected);
    assert_eq!(connections[1].name, "TestVPN2");
    assert_eq!(connections[1].status, ConnectionStatus::Disconnected);
}

#[test]
fn test_parse_single_object_normalized_to_one_record() {
    // PowerShell emits a bare object when only one profile exists
    let stdout = r#"{"Name":"OnlyVPN","ConnectionStatus":"Connected"}"#;
    let connections = parse_directory_output(stdout).unwrap();

    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0].name, "OnlyVPN");
    assert_eq!(connections[0].status, ConnectionStatus::Connected);
}

#[test]
fn test_status_match_is_case_sensitive() {
    let stdout = r#"[{"Name":"A","ConnectionStatus":"connected"},{"Name":"B","ConnectionStatus":"CONNECTED"}]"#;
    let connections = parse_directory_output(stdout).unwrap();

    // Anything other than the exact string "Connected" is Disconnected
    assert!(connections
        .iter()
        .all(|c| c.status == ConnectionStatus::Disconnected));
}

#[test]
fn test_missing_or_malformed_status_is_disconnected() {
    let stdout = r#"[{"Name":"NoStatus"},{"Name":"NumericStatus","ConnectionStatus":7}]"#;
    let connections = parse_directory_output(stdout).unwrap();

    assert_eq!(connections.len(), 2);
    assert!(connections
        .iter()
        .all(|c| c.status == ConnectionStatus::Disconnected));
}

#[test]
fn test_records_without_name_are_filtered() {
    let stdout = r#"[{"ConnectionStatus":"Connected"},{"Name":"","ConnectionStatus":"Connected"},{"Name":"Kept","ConnectionStatus":"Connected"}]"#;
    let connections = parse_directory_output(stdout).unwrap();

    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0].name, "Kept");
}

#[test]
fn test_empty_output_is_no_connections_configured() {
    let err = parse_directory_output("").unwrap_err();
    assert_eq!(err, DirectoryError::NoConnectionsConfigured);

    let err = parse_directory_output("   \n").unwrap_err();
    assert_eq!(err, DirectoryError::NoConnectionsConfigured);
}

#[test]
fn test_all_records_filtered_is_no_connections_configured() {
    let stdout = r#"[{"ConnectionStatus":"Connected"},{"Name":""}]"#;
    let err = parse_directory_output(stdout).unwrap_err();
    assert_eq!(err, DirectoryError::NoConnectionsConfigured);
}

#[test]
fn test_malformed_json_is_process_error() {
    let err = parse_directory_output("not json at all").unwrap_err();
    match err {
        DirectoryError::Process { message } => {
            assert!(message.contains("Failed to parse connection list"));
        }
        other => panic!("Expected Process error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_invokes_powershell_pipeline() {
    let runner = FakeRunner::ok(r#"[{"Name":"TestVPN1","ConnectionStatus":"Connected"}]"#);
    let calls = runner.calls();
    let directory = ConnectionDirectory::with_runner(Box::new(runner));

    let connections = directory.list().await.unwrap();
    assert_eq!(connections.len(), 1);

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (program, args) = &calls[0];
    assert_eq!(program, "powershell.exe");
    assert_eq!(args[0], "-NoProfile");
    assert_eq!(args[1], "-Command");
    assert!(args[2].contains("Get-VpnConnection"));
    assert!(args[2].contains("ConvertTo-Json"));
}

#[tokio::test]
async fn test_list_maps_cmdlet_failure_to_unavailable() {
    // PowerShell reports a missing cmdlet by naming it in the error text
    let runner = FakeRunner::fail(
        "The term 'Get-VpnConnection' is not recognized as the name of a cmdlet",
    );
    let directory = ConnectionDirectory::with_runner(Box::new(runner));

    let err = directory.list().await.unwrap_err();
    assert_eq!(err, DirectoryError::Unavailable);
    assert!(err.to_string().contains("Windows VPN feature"));
}

#[tokio::test]
async fn test_list_passes_other_failures_through() {
    let runner = FakeRunner::fail("powershell.exe exited with exit status: 1");
    let calls = runner.calls();
    let directory = ConnectionDirectory::with_runner(Box::new(runner));

    let err = directory.list().await.unwrap_err();
    match err {
        DirectoryError::Process { message } => {
            assert_eq!(message, "powershell.exe exited with exit status: 1");
        }
        other => panic!("Expected Process error, got {:?}", other),
    }
    assert_eq!(calls.lock().unwrap().len(), 1);
}
