pub mod config;
pub mod dispatch;
pub mod filter;
pub mod invoker;
pub mod report;
pub mod result;
pub mod workdir;

// Public API - curated exports only
pub mod api;

// Re-export key items at module level for convenience
pub use api::*;
