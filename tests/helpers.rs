// Shared test helpers for the local HTTP server.

use httptest::{Server, ServerBuilder};

/// Starts a test server on IPv4 loopback.
///
/// `Server::run()` binds `localhost`, which may resolve to `[::1]` first, and
/// a bracketed IPv6 host is never extracted from text.
#[allow(dead_code)] // Used by other test files
pub fn local_server() -> Server {
    ServerBuilder::new()
        .bind_addr(([127, 0, 0, 1], 0).into())
        .run()
        .expect("Failed to start test server")
}

