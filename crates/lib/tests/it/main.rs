/*! Integration tests for shiftgate.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - auth: Tests for AuthService (login, permissions, page gate, UI refresh)
 * - directory: Tests for the JSON-backed user directory
 * - storage: Tests for session storage implementations driven through AuthService
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("shiftgate=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod directory;
