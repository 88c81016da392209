//! OS-level primitives: environment access, platform detection and native directory lookups.

pub mod env;
pub mod native;
pub mod platform;
