use std::sync::Once;

use env_logger::{Builder, WriteStyle};
use log::LevelFilter;

/// Module that emits one `trace` record per assembled triangle.
const TRIANGLE_TRACE_MODULE: &str = "softgpu_engine::exec::draw";

/// How the host wants engine diagnostics printed.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter directives; when set, `RUST_LOG` is ignored.
    pub filter: Option<String>,
    /// Level used when neither `filter` nor `RUST_LOG` says anything.
    pub fallback_level: LevelFilter,
    pub write_style: WriteStyle,
    /// Turns on per-triangle output of the draw executor regardless of the
    /// other directives.
    pub trace_triangles: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            fallback_level: LevelFilter::Info,
            write_style: WriteStyle::Auto,
            trace_triangles: false,
        }
    }
}

impl LoggingConfig {
    fn builder(self) -> Builder {
        let mut builder = Builder::new();
        match self.filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(directives) => {
                builder.parse_filters(&directives);
            }
            None => {
                builder.filter_level(self.fallback_level);
            }
        }
        if self.trace_triangles {
            builder.filter_module(TRIANGLE_TRACE_MODULE, LevelFilter::Trace);
        }
        builder.write_style(self.write_style);
        builder
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the `log` backend.
///
/// Returns `true` only for the call that installed it. Later calls, or a
/// host that already set its own logger, leave logging untouched.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        installed = config.builder().try_init().is_ok();
        if installed {
            log::debug!("softgpu logging installed");
        }
    });
    installed
}
