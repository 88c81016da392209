//! Home and temp directory resolution.
//!
//! macOS follows the POSIX rules here; only Windows differs.
//!
//! ```rust
//! use std::path::PathBuf;
//!
//! use xdg_portable::Adapter;
//! use xdg_portable::os::env::Env;
//! use xdg_portable::os_paths;
//!
//! let env: Env = [("HOME", "/home/alice/")].into_iter().collect();
//! let paths = os_paths::adapt(Adapter::new("linux", env));
//! assert_eq!(paths.home(), Some(PathBuf::from("/home/alice")));
//! assert_eq!(paths.temp(), PathBuf::from("/tmp"));
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, trace};

use crate::adapter::Adapter;

/// Temp directory used on POSIX when nothing else is known.
pub const POSIX_TEMP_FALLBACK: &str = "/tmp";

/// Temp directory used on Windows when nothing else is known.
pub const WINDOWS_TEMP_FALLBACK: &str = r"C:\Temp";

type Candidate<'a> = (&'static str, &'a dyn Fn() -> Option<String>);

/// First candidate producing a non-empty value. Later candidates are not evaluated.
fn first_non_empty(what: &str, candidates: &[Candidate<'_>]) -> Option<String> {
    candidates.iter().find_map(|(source, candidate)| {
        let value = candidate().filter(|value| !value.is_empty())?;
        trace!("{what} directory taken from {source}: {value}");
        Some(value)
    })
}

/// Resolver of the user's home directory and the temp directory.
///
/// Nothing is cached: every call reads the environment again.
#[derive(Debug, Clone)]
pub struct OsPaths {
    adapter: Arc<Adapter>,
}

/// Create [`OsPaths`] backed by `adapter`.
pub fn adapt(adapter: Adapter) -> OsPaths {
    OsPaths::new(adapter)
}

impl OsPaths {
    pub fn new(adapter: Adapter) -> Self {
        Self::from_shared(Arc::new(adapter))
    }

    pub(crate) fn from_shared(adapter: Arc<Adapter>) -> Self {
        Self { adapter }
    }

    pub(crate) fn adapter(&self) -> &Adapter {
        &self.adapter
    }

    /// Home directory of the user.
    ///
    /// # Returns
    ///
    /// Normalized path, or [`None`] if neither the native lookup nor the environment knows it.
    pub fn home(&self) -> Option<PathBuf> {
        self.home_str().map(PathBuf::from)
    }

    /// Directory for temporary files. Never fails, see [`POSIX_TEMP_FALLBACK`] and
    /// [`WINDOWS_TEMP_FALLBACK`].
    pub fn temp(&self) -> PathBuf {
        PathBuf::from(self.temp_str())
    }

    pub(crate) fn home_str(&self) -> Option<String> {
        let found = if self.adapter.platform().is_windows() {
            self.windows_home()
        } else {
            self.posix_home()
        };
        found.map(|home| self.normalize(&home))
    }

    pub(crate) fn temp_str(&self) -> String {
        if self.adapter.platform().is_windows() {
            self.windows_temp()
        } else {
            self.posix_temp()
        }
    }

    fn normalize(&self, path: &str) -> String {
        let ops = self.adapter.path();
        ops.normalize(&ops.join(&[path, "."]))
    }

    fn join_to_base(&self, base: Option<String>, segments: &[&str]) -> Option<String> {
        let base = base.filter(|base| !base.is_empty())?;
        let mut parts = Vec::with_capacity(segments.len() + 1);
        parts.push(base.as_str());
        parts.extend_from_slice(segments);
        Some(self.adapter.path().join(&parts))
    }

    fn posix_home(&self) -> Option<String> {
        let a = &*self.adapter;
        first_non_empty(
            "home",
            &[
                ("native lookup", &|| a.native_home_dir()),
                ("$HOME", &|| a.var("HOME")),
            ],
        )
    }

    fn windows_home(&self) -> Option<String> {
        let a = &*self.adapter;
        let drive_and_path = || {
            let drive = a.var("HOMEDRIVE");
            let path = a.var("HOMEPATH");
            if drive.is_none() && path.is_none() {
                return None;
            }
            Some(a.path().join(&[
                drive.as_deref().unwrap_or_default(),
                path.as_deref().unwrap_or_default(),
            ]))
        };
        first_non_empty(
            "home",
            &[
                ("native lookup", &|| a.native_home_dir()),
                ("%USERPROFILE%", &|| a.var("USERPROFILE")),
                ("%HOME%", &|| a.var("HOME")),
                ("%HOMEDRIVE%%HOMEPATH%", &drive_and_path),
            ],
        )
    }

    fn posix_temp(&self) -> String {
        let a = &*self.adapter;
        let found = first_non_empty(
            "temp",
            &[
                ("native lookup", &|| a.native_temp_dir()),
                ("$TMPDIR", &|| a.var("TMPDIR")),
                ("$TEMP", &|| a.var("TEMP")),
                ("$TMP", &|| a.var("TMP")),
            ],
        );
        match found {
            Some(temp) => self.normalize(&temp),
            None => {
                debug!("no temp directory configured, falling back to {POSIX_TEMP_FALLBACK}");
                POSIX_TEMP_FALLBACK.to_owned()
            }
        }
    }

    fn windows_temp(&self) -> String {
        let a = &*self.adapter;
        let temp_under = |key: &str| self.join_to_base(a.var(key), &["Temp"]);
        let found = first_non_empty(
            "temp",
            &[
                ("native lookup", &|| a.native_temp_dir()),
                ("%TEMP%", &|| a.var("TEMP")),
                ("%TMP%", &|| a.var("TMP")),
                ("%LOCALAPPDATA%", &|| temp_under("LOCALAPPDATA")),
                ("home", &|| {
                    self.join_to_base(self.home_str(), &["AppData", "Local", "Temp"])
                }),
                ("%ALLUSERSPROFILE%", &|| temp_under("ALLUSERSPROFILE")),
                ("%SystemRoot%", &|| temp_under("SystemRoot")),
                ("%windir%", &|| temp_under("windir")),
                // Root of the drive, not the drive's current directory.
                ("%SystemDrive%", &|| {
                    self.join_to_base(a.var("SystemDrive"), &["\\", "Temp"])
                }),
            ],
        );
        match found {
            Some(temp) => self.normalize(&temp),
            None => {
                debug!("no temp directory configured, falling back to {WINDOWS_TEMP_FALLBACK}");
                WINDOWS_TEMP_FALLBACK.to_owned()
            }
        }
    }
}

impl Default for OsPaths {
    fn default() -> Self {
        Self::new(Adapter::native())
    }
}
