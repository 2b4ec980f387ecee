//! Application configuration loaded from environment variables.
//!
//! All settings are optional and fall back to defaults:
//! - `CAMPUS_EATS_DELIVERY_FEE` — flat delivery fee as a decimal (default 1.99)
//! - `CAMPUS_EATS_CURRENCY` — currency symbol for displayed prices (default `$`)
//! - `CAMPUS_EATS_TICK_MS` — UI tick interval in milliseconds (default 200)

use std::str::FromStr;

use rust_decimal::Decimal;

/// Default flat delivery fee (1.99).
const DEFAULT_DELIVERY_FEE: Decimal = Decimal::from_parts(199, 0, 0, false, 2);

/// Default currency symbol.
const DEFAULT_CURRENCY: &str = "$";

/// Default UI tick interval in milliseconds.
const DEFAULT_TICK_MS: u64 = 200;

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub delivery_fee: Decimal,
    pub currency: String,
    pub tick_ms: u64,
}

/// Loads the application configuration from environment variables.
///
/// Empty values are treated as absent and replaced by defaults.
///
/// # Errors
///
/// Returns [`CampusError::Config`](crate::CampusError::Config) if the
/// delivery fee is not a non-negative decimal or the tick interval is not
/// a positive integer.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let delivery_fee = match non_empty_var("CAMPUS_EATS_DELIVERY_FEE") {
        Some(raw) => {
            let fee = Decimal::from_str(&raw).map_err(|e| {
                crate::CampusError::Config(format!(
                    "CAMPUS_EATS_DELIVERY_FEE is not a decimal: {e}"
                ))
            })?;
            if fee.is_sign_negative() {
                return Err(crate::CampusError::Config(
                    "CAMPUS_EATS_DELIVERY_FEE must not be negative".to_string(),
                ));
            }
            fee
        }
        None => DEFAULT_DELIVERY_FEE,
    };

    let currency =
        non_empty_var("CAMPUS_EATS_CURRENCY").unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    let tick_ms = match non_empty_var("CAMPUS_EATS_TICK_MS") {
        Some(raw) => {
            let ms: u64 = raw.parse().map_err(|e| {
                crate::CampusError::Config(format!("CAMPUS_EATS_TICK_MS is not an integer: {e}"))
            })?;
            if ms == 0 {
                return Err(crate::CampusError::Config(
                    "CAMPUS_EATS_TICK_MS must be positive".to_string(),
                ));
            }
            ms
        }
        None => DEFAULT_TICK_MS,
    };

    Ok(AppConfig {
        delivery_fee,
        currency,
        tick_ms,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use std::sync::{Mutex, MutexGuard};

    /// Serializes tests that mutate process environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Helper that temporarily sets env vars, runs `f`, then restores originals.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let _guard: MutexGuard<'_, ()> = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let originals: Vec<(&str, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            // SAFETY: ENV_LOCK serializes all env mutation in this test binary.
            unsafe {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values under the same lock.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn defaults_without_env_vars() {
        with_env(
            &[
                ("CAMPUS_EATS_DELIVERY_FEE", None),
                ("CAMPUS_EATS_CURRENCY", None),
                ("CAMPUS_EATS_TICK_MS", None),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.delivery_fee, dec!(1.99));
                assert_eq!(config.currency, "$");
                assert_eq!(config.tick_ms, 200);
            },
        );
    }

    #[test]
    fn overrides_from_env() {
        with_env(
            &[
                ("CAMPUS_EATS_DELIVERY_FEE", Some("2.50")),
                ("CAMPUS_EATS_CURRENCY", Some("€")),
                ("CAMPUS_EATS_TICK_MS", Some("100")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.delivery_fee, dec!(2.50));
                assert_eq!(config.currency, "€");
                assert_eq!(config.tick_ms, 100);
            },
        );
    }

    #[test]
    fn empty_values_treated_as_absent() {
        with_env(
            &[
                ("CAMPUS_EATS_DELIVERY_FEE", Some("")),
                ("CAMPUS_EATS_CURRENCY", Some("")),
                ("CAMPUS_EATS_TICK_MS", Some("")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.delivery_fee, dec!(1.99));
                assert_eq!(config.currency, "$");
                assert_eq!(config.tick_ms, 200);
            },
        );
    }

    #[test]
    fn rejects_malformed_fee() {
        with_env(&[("CAMPUS_EATS_DELIVERY_FEE", Some("free"))], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("CAMPUS_EATS_DELIVERY_FEE"));
        });
    }

    #[test]
    fn rejects_negative_fee() {
        with_env(&[("CAMPUS_EATS_DELIVERY_FEE", Some("-1.99"))], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("must not be negative"));
        });
    }

    #[test]
    fn rejects_zero_tick() {
        with_env(
            &[
                ("CAMPUS_EATS_DELIVERY_FEE", None),
                ("CAMPUS_EATS_TICK_MS", Some("0")),
            ],
            || {
                let err = fetch_config().unwrap_err();
                assert!(err.to_string().contains("must be positive"));
            },
        );
    }
}
