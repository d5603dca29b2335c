//! Runs in its own process: `init` installs the global subscriber and reads
//! the process environment.

#[test]
fn malformed_rust_log_still_installs_a_subscriber() {
    // Only test in this binary, so nothing else reads the environment concurrently.
    unsafe {
        std::env::set_var("RUST_LOG", "domain_shared_core=notalevel");
        std::env::remove_var("LOG_FORMAT");
    }

    assert!(domain_shared_observability::TracingConfig::from_env().is_err());

    domain_shared_observability::init();

    assert!(tracing::dispatcher::has_been_set());
}
