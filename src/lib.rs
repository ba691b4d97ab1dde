// Library root of the `gradeshift` crate.
// The planning engine lives in `algorithm`; `api_json` and `server` expose it over HTTP.
pub mod algorithm;
pub mod api_json;
pub mod config;
pub mod error;
pub mod models;
pub mod server;

/// Runs the HTTP server (re-exported for `main`)
pub use server::run_server;
