// Per-test server bootstrap for the collect-info integration tests.
use std::net::SocketAddr;

// Start a fresh server on the calling test's runtime and return its base URL.
pub async fn spawn_server() -> String {
    // Bind to an ephemeral port so parallel tests never collide.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    // Capture the port the OS picked before handing the listener over.
    let addr: SocketAddr = listener.local_addr().expect("get local addr");

    // The listener is already accepting, so requests can be sent right away.
    // The task is dropped together with the test's runtime.
    tokio::spawn(async move {
        collect_info_server::run(listener)
            .await
            .expect("server failed");
    });

    format!("http://{addr}")
}
