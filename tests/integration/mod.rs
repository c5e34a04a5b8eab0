//! Integration tests: the full compile → execute → extract → merge pipeline
//! against a mocked execution collaborator, plus schema configuration loading.

mod end_to_end;
mod schema_config;

/// Route `log` output through the test harness's capture. Safe to call from
/// every test; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
