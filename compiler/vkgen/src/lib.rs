//! Vulkan loader dispatch generator.
//!
//! Drives the full pipeline: read `vk.xml`, build the symbol table, check the
//! configuration lists against it, classify every function and render the
//! `INIT_PROC` statements the loader's dispatch-table initialization uses.
//!
//! # Architecture
//!
//! ```text
//! vkgen_ir ← vkgen_registry
//!     ↑            ↑
//! vkgen_dispatch   │
//!          \       │
//!           vkgen  ← this crate (driver + `vkgen` binary)
//! ```
//!
//! # Debugging
//!
//! - `RUST_LOG=vkgen_registry=debug`: per-pass summaries and skipped entries.
//! - `RUST_LOG=trace`: every alias resolution and ownership decision.
//!
//! Without `RUST_LOG`, only warnings (unresolved configuration entries) are
//! printed, to stderr.

mod error;
mod output;
mod pipeline;

pub use error::DriverError;
pub use output::CompileOutput;
pub use pipeline::{compile, compile_file, load_dispatch_config, CompileConfig};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing.
///
/// Call this once at startup. Safe to call multiple times. Honors
/// `RUST_LOG`; defaults to `warn`. Logs go to stderr so generated output on
/// stdout stays clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
