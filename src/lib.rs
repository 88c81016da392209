//! xdg-portable - XDG Base Directory, home and temp directory resolution for every OS.
//!
//! This crate resolves paths only: it never creates directories or touches the filesystem.
//! Resolution reads environmental variables on every call, through an [`Adapter`] which can be
//! swapped for tests or for resolving another platform's paths.
//!
//! ```rust,no_run
//! let dirs = xdg_portable::xdg();
//! let config = dirs.config().join("my-app");
//! let runtime = dirs.runtime(); // `None` unless `$XDG_RUNTIME_DIR` is set.
//! let temp = dirs.os_paths().temp();
//! # let _ = (config, runtime, temp);
//! ```

pub mod adapter;
pub mod os;
pub mod os_paths;
pub mod path;
pub mod xdg;

pub use adapter::Adapter;
pub use os_paths::OsPaths;
pub use xdg::Xdg;

/// [`Xdg`] for the running process.
pub fn xdg() -> Xdg {
    Xdg::new(Adapter::native())
}

/// [`OsPaths`] for the running process.
pub fn os_paths() -> OsPaths {
    OsPaths::new(Adapter::native())
}
