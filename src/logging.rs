//! Logging setup controlled by the `WHEREHOUSE_DEBUG` environment variable.
//!
//! # Environment Variables
//!
//! - `WHEREHOUSE_DEBUG=true` - Enable debug logging
//! - `WHEREHOUSE_LOG_LEVEL=trace|debug|info|warn|error` - Set a specific log level
//! - `WHEREHOUSE_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! Library code logs through the standard `tracing` macros; nothing is
//! emitted unless a subscriber is installed, either by calling
//! [`init`] (with the `tracing-subscriber` feature enabled) or by the
//! embedding application.

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if debug logging is enabled via `WHEREHOUSE_DEBUG`.
///
/// Returns `true` if set to "true", "1", or "yes" (case-insensitive).
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("WHEREHOUSE_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Get the configured log level from `WHEREHOUSE_LOG_LEVEL`.
///
/// Defaults to "debug" if `WHEREHOUSE_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    if let Ok(level) = env::var("WHEREHOUSE_LOG_LEVEL") {
        match level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => {
                if is_debug_enabled() {
                    "debug"
                } else {
                    "warn"
                }
            }
        }
    } else if is_debug_enabled() {
        "debug"
    } else {
        "warn"
    }
}

/// Get the configured log format from `WHEREHOUSE_LOG_FORMAT`.
///
/// Defaults to "json" for structured logging.
pub fn get_log_format() -> &'static str {
    env::var("WHEREHOUSE_LOG_FORMAT")
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize logging. Call once at application startup; subsequent calls
/// are no-ops. Does nothing unless `WHEREHOUSE_DEBUG` or
/// `WHEREHOUSE_LOG_LEVEL` is set.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("WHEREHOUSE_LOG_LEVEL").is_err() {
            // No logging requested, skip initialization
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(format!("wherehouse={level}"))
                .unwrap_or_else(|_| EnvFilter::new("warn"));

            match get_log_format() {
                "json" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().json())
                        .init();
                }
                "compact" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().compact())
                        .init();
                }
                _ => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().pretty())
                        .init();
                }
            }

            tracing::info!(
                level = level,
                format = get_log_format(),
                "wherehouse logging initialized"
            );
        }

        #[cfg(not(feature = "tracing-subscriber"))]
        {
            // Subscriber crate not compiled in; logging stays silent
            // unless the user installs their own subscriber.
        }
    });
}

/// Initialize logging at a specific level.
///
/// # Safety
///
/// This function modifies environment variables, which is unsafe in
/// multi-threaded programs. Call this early in your program before
/// spawning threads.
pub fn init_with_level(level: &str) {
    // SAFETY: This should only be called at program startup before threads are spawned.
    // The user is responsible for calling this safely.
    unsafe {
        env::set_var("WHEREHOUSE_LOG_LEVEL", level);
    }
    init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_disabled_by_default() {
        // SAFETY: Test runs in isolation
        unsafe {
            env::remove_var("WHEREHOUSE_DEBUG");
        }
        assert!(!is_debug_enabled());
    }

    #[test]
    fn test_log_level_default() {
        // SAFETY: Test runs in isolation
        unsafe {
            env::remove_var("WHEREHOUSE_DEBUG");
            env::remove_var("WHEREHOUSE_LOG_LEVEL");
        }
        assert_eq!(get_log_level(), "warn");
    }
}
