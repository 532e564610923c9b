pub mod clock;

use std::sync::Once;

pub use clock::{Clock, FixedClock, SystemClock};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "questionnaire=warn";

/// Initializes the global tracing subscriber, writing to stderr so log lines
/// never interleave with prompts or rendered tables.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
