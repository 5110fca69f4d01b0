//! HTTP endpoints served in pairs: each injectable handler under `/vuln`
//! has a counterpart under `/safe` that binds or encodes its input.

pub mod api;
pub mod config;
pub mod db;
pub mod encode;
pub mod error;
pub mod exec;
pub mod logging;
