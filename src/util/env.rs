//! Environment detection utilities.

use std::io::IsTerminal;

/// Check if stderr is a TTY.
#[must_use]
pub fn stderr_is_tty() -> bool {
    std::io::stderr().is_terminal()
}

/// Check if colored error output should be enabled.
///
/// Disabled by `NO_COLOR` (any value), `TERM=dumb`, or a non-terminal stderr.
#[must_use]
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var("TERM").is_ok_and(|t| t == "dumb") {
        return false;
    }

    stderr_is_tty()
}

/// Serializes tests that mutate process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Run `f` with the given variables set (`Some`) or removed (`None`), then
/// restore their prior values.
#[cfg(test)]
#[allow(unsafe_code)]
pub(crate) fn with_env(vars: &[(&str, Option<&str>)], f: impl FnOnce()) {
    let _guard = ENV_LOCK
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    let prior: Vec<_> = vars
        .iter()
        .map(|(key, _)| (*key, std::env::var(key).ok()))
        .collect();
    for (key, value) in vars {
        unsafe {
            match value {
                Some(val) => std::env::set_var(key, val),
                None => std::env::remove_var(key),
            }
        }
    }
    f();
    for (key, value) in prior {
        unsafe {
            match value {
                Some(val) => std::env::set_var(key, val),
                None => std::env::remove_var(key),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_disables_color() {
        with_env(&[("NO_COLOR", Some("1"))], || {
            assert!(!should_use_color());
        });
    }

    #[test]
    fn dumb_terminal_disables_color() {
        with_env(&[("NO_COLOR", None), ("TERM", Some("dumb"))], || {
            assert!(!should_use_color());
        });
    }
}
