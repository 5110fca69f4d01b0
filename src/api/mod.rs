pub mod safe;
pub mod server;
pub mod vuln;
