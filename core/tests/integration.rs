//! Task operations against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every `TaskApiClient`
//! operation over real HTTP through `UreqTransport`.

use std::net::SocketAddr;

use task_core::{parse_due_date, ApiError, ClientConfig, TaskApiClient};

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn client_for(addr: SocketAddr) -> TaskApiClient {
    let config = ClientConfig::new(&addr.port().to_string())
        .unwrap()
        .with_host("127.0.0.1")
        .unwrap();
    TaskApiClient::connect(&config)
}

#[test]
fn crud_lifecycle() {
    let client = client_for(start_server());

    // Step 1: list is empty.
    let tasks = client.list_tasks().unwrap();
    assert!(tasks.is_empty(), "expected empty list");

    // Step 2: create, then fetch what was created.
    let due = "2026-11-01T09:30:00+02:00";
    let created = client.create_task("Integration test", "end to end", due).unwrap();
    assert!(created.id > 0);
    assert_eq!(created.title, "Integration test");

    let fetched = client.get_task(created.id).unwrap();
    assert_eq!(fetched.title, "Integration test");
    assert_eq!(fetched.description, "end to end");
    assert_eq!(fetched.due_date, parse_due_date(due).unwrap());
    assert_eq!(fetched, created);

    // Step 3: a second task keeps server order.
    let second = client.create_task("Second", "", "2026-12-01T00:00:00Z").unwrap();
    let tasks = client.list_tasks().unwrap();
    assert_eq!(
        tasks.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![created.id, second.id]
    );

    // Step 4: update replaces title, description and due date.
    let updated = client
        .update_task(created.id, "Updated title", "", "2027-01-01T00:00:00Z")
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Updated title");
    assert!(updated.description.is_empty());
    assert_eq!(updated.created_at, created.created_at);

    // Step 5: delete, then it is gone.
    client.delete_task(created.id).unwrap();
    let err = client.get_task(created.id).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    let err = client
        .update_task(created.id, "Ghost", "", "2027-01-01T00:00:00Z")
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 6: deleting again is a plain failure carrying the status.
    let err = client.delete_task(created.id).unwrap_err();
    assert!(matches!(err, ApiError::RequestFailed { status: 404, .. }));

    let tasks = client.list_tasks().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, second.id);
}

#[test]
fn unknown_task_is_not_found() {
    let client = client_for(start_server());

    let err = client.get_task(404).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    assert_eq!(err.status_code(), 404);
}

#[test]
fn unreachable_server_is_a_transport_error_for_every_operation() {
    // Bind then drop to obtain a port nothing is listening on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = ClientConfig::new(&port.to_string())
        .unwrap()
        .with_host("127.0.0.1")
        .unwrap();
    let client = TaskApiClient::connect(&config);
    let due = "2026-11-01T09:00:00Z";

    let results = [
        client.create_task("t", "", due).map(|_| ()),
        client.list_tasks().map(|_| ()),
        client.get_task(1).map(|_| ()),
        client.update_task(1, "t", "", due).map(|_| ()),
        client.delete_task(1),
    ];
    for result in results {
        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
        assert_eq!(err.status_code(), 500);
    }
}
