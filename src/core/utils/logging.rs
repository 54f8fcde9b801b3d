//! Console Logging Macros
//!
//! In the browser (wasm32): forwards to `console.log` / `console.warn`
//! Natively: prints to stderr in debug builds, compiled out in release
//!
//! Usage:
//! ```rust
//! use sketch_kernel::console_log;
//!
//! let particles = 128;
//! console_log!("spawned {} particles", particles);
//! ```

/// Log an informational line to the browser console (or stderr natively)
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if cfg!(debug_assertions) {
                eprintln!($($arg)*);
            }
        }
    }};
}

/// Log a warning to the browser console (or stderr natively)
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if cfg!(debug_assertions) {
                eprintln!("warning: {}", format!($($arg)*));
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_console_log_native_does_not_panic() {
        let n = 3;
        console_log!("stepping {} particles", n);
        console_warn!("odd coordinate count: {}", n);
    }
}
