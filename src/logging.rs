//! Log output setup.

use tracing::Level;

/// Install the global fmt subscriber writing to stderr. Later calls are no-ops.
pub fn init(max_level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}
