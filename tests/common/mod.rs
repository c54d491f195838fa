use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init_log() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy();
        let console_layer = fmt::layer()
            .with_target(false)
            .with_test_writer()
            .with_filter(filter);
        let _ = tracing_subscriber::registry()
            .with(console_layer)
            .with(ErrorLayer::default())
            .try_init();
        let _ = color_eyre::install();
    });
}
