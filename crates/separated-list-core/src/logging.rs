//! Logging facilities for separated-list.
//!
//! separated-list uses the `tracing` crate for instrumentation. Library code
//! never installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("separated_list=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "separated_list_core::signal";
    /// Concrete list adapters (array adapters, header rendering).
    pub const ADAPTER: &str = "separated_list::adapter";
    /// Section composition and flat-index translation.
    pub const SECTIONS: &str = "separated_list::sections";
}
