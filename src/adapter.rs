//! Capabilities bundle handed to the resolvers.
//!
//! An [`Adapter`] decides where environmental variables come from, which native lookups exist,
//! how paths are joined, and which platform rules apply. [`Adapter::native`] describes the running
//! process; anything else is assembled from parts, which is how tests resolve Windows paths on a
//! Linux host.
//!
//! ```rust
//! use xdg_portable::Adapter;
//! use xdg_portable::os::env::Env;
//!
//! let env: Env = [("USERPROFILE", r"C:\Users\alice")].into_iter().collect();
//! let adapter = Adapter::new("win32", env).with_temp_dir(|| Some(r"C:\Temp".to_owned()));
//! assert!(adapter.platform().is_windows());
//! ```

use std::fmt;

use crate::os::env::{ProcessEnv, VarSource};
use crate::os::native;
use crate::os::platform::Platform;
use crate::path::{PathOps, PathStyle};

/// Native directory lookup, such as the OS notion of a home directory.
pub type NativeLookup = Box<dyn Fn() -> Option<String> + Send + Sync>;

/// Environment, OS and path capabilities consumed by [`OsPaths`](crate::OsPaths) and
/// [`Xdg`](crate::Xdg).
pub struct Adapter {
    env: Box<dyn VarSource>,
    home_dir: Option<NativeLookup>,
    temp_dir: Option<NativeLookup>,
    path: Box<dyn PathOps>,
    platform: Platform,
}

impl Adapter {
    /// Adapter for the running process: live environment, native lookups and the host's path
    /// flavour.
    pub fn native() -> Self {
        let platform = Platform::current();
        Self::for_platform(platform, ProcessEnv)
            .with_home_dir(native::home_dir)
            .with_temp_dir(native::temp_dir)
    }

    /// Adapter for the platform named by `identifier` (see [`Platform::detect`]), without native
    /// lookups.
    pub fn new(identifier: &str, env: impl VarSource + 'static) -> Self {
        Self::for_platform(Platform::detect(identifier), env)
    }

    /// Adapter for `platform`, without native lookups.
    pub fn for_platform(platform: Platform, env: impl VarSource + 'static) -> Self {
        Self {
            env: Box::new(env),
            home_dir: None,
            temp_dir: None,
            path: Box::new(PathStyle::for_platform(platform)),
            platform,
        }
    }

    /// Use `lookup` as the native home directory lookup.
    pub fn with_home_dir(
        mut self,
        lookup: impl Fn() -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.home_dir = Some(Box::new(lookup));
        self
    }

    /// Use `lookup` as the native temp directory lookup.
    pub fn with_temp_dir(
        mut self,
        lookup: impl Fn() -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.temp_dir = Some(Box::new(lookup));
        self
    }

    /// Replace the path flavour derived from the platform.
    pub fn with_path_ops(mut self, path: impl PathOps + 'static) -> Self {
        self.path = Box::new(path);
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn path(&self) -> &dyn PathOps {
        self.path.as_ref()
    }

    /// Value of `key`, if set to a non-empty UTF-8 string.
    pub fn var(&self, key: &str) -> Option<String> {
        self.env.non_empty(key)
    }

    /// Native home directory, if the lookup exists and yields a non-empty value.
    pub fn native_home_dir(&self) -> Option<String> {
        self.home_dir
            .as_ref()
            .and_then(|lookup| lookup())
            .filter(|home| !home.is_empty())
    }

    /// Native temp directory, if the lookup exists and yields a non-empty value.
    pub fn native_temp_dir(&self) -> Option<String> {
        self.temp_dir
            .as_ref()
            .and_then(|lookup| lookup())
            .filter(|temp| !temp.is_empty())
    }
}

impl Default for Adapter {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("platform", &self.platform)
            .field("home_dir", &self.home_dir.is_some())
            .field("temp_dir", &self.temp_dir.is_some())
            .field("delimiter", &self.path.delimiter())
            .finish_non_exhaustive()
    }
}
