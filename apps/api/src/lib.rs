//! Job match analyzer: scores a candidate profile against a free-text job
//! posting and serves the engine over HTTP.

pub mod config;
pub mod errors;
pub mod matching;
pub mod routes;
pub mod state;
