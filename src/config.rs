//! Runtime configuration read from the environment (and `.env` if present).
//!
//! | variable                     | default                  |
//! |------------------------------|--------------------------|
//! | `GRADESHIFT_BIND`            | `127.0.0.1:8080`         |
//! | `GRADESHIFT_WORKERS`         | number of CPUs           |
//! | `GRADESHIFT_CORS_ORIGIN`     | `http://localhost:5173`  |
//! | `GRADESHIFT_ANALYZER_GRADES` | `ABC` (or `ABCDF`)       |

use actix_web::http::header::HeaderValue;
use actix_web::http::Uri;

use crate::algorithm::grades::{GradeScale, UPGRADE_PATH};
use crate::error::ConfigError;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Loads `.env` from the working directory; a missing file is fine.
pub fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Settings the planner handlers read per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerSettings {
    /// Grade set the combination analyzer walks.
    pub analyzer_scale: GradeScale,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        PlannerSettings { analyzer_scale: UPGRADE_PATH }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind: String,
    pub workers: usize,
    pub cors_origin: String,
    pub planner: PlannerSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: DEFAULT_BIND.to_string(),
            workers: num_cpus::get().max(1),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            planner: PlannerSettings::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut cfg = ServerConfig::default();

        if let Some(bind) = get("GRADESHIFT_BIND") {
            cfg.bind = bind;
        }

        if let Some(raw) = get("GRADESHIFT_WORKERS") {
            cfg.workers = match raw.parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "GRADESHIFT_WORKERS",
                        value: raw,
                        reason: "expected a whole number >= 1".to_string(),
                    });
                }
            };
        }

        if let Some(origin) = get("GRADESHIFT_CORS_ORIGIN") {
            check_origin(&origin)?;
            cfg.cors_origin = origin;
        }

        if let Some(raw) = get("GRADESHIFT_ANALYZER_GRADES") {
            cfg.planner.analyzer_scale = GradeScale::by_name(&raw).ok_or_else(|| ConfigError::InvalidValue {
                key: "GRADESHIFT_ANALYZER_GRADES",
                value: raw.clone(),
                reason: "expected ABC or ABCDF".to_string(),
            })?;
        }

        Ok(cfg)
    }
}

/// `*` or an absolute `scheme://host[:port]` that can go in a header.
fn check_origin(origin: &str) -> Result<(), ConfigError> {
    if origin == "*" {
        return Ok(());
    }
    let valid = origin
        .parse::<Uri>()
        .is_ok_and(|uri| uri.scheme().is_some() && uri.host().is_some())
        && HeaderValue::from_str(origin).is_ok();
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            key: "GRADESHIFT_CORS_ORIGIN",
            value: origin.to_string(),
            reason: "expected * or an origin such as https://planner.example.edu".to_string(),
        })
    }
}
