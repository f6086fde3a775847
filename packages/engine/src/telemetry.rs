use tracing::Level;

/// Install the global tracing subscriber. Unknown level strings fall back to
/// `info` rather than failing startup.
pub fn init_tracing(level: &str) {
    let level = level.parse().unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();
}
