//! XDG Base Directory Specification support.
//!
//! Implements cross-platform path resolution following the XDG Base Directory spec
//! (<https://specifications.freedesktop.org/basedir-spec/latest/>), with platform-specific
//! fallbacks for Windows and macOS.
//!
//! | Directory | Override | Linux | macOS | Windows |
//! | --- | --- | --- | --- | --- |
//! | cache | `$XDG_CACHE_HOME` | `~/.cache` | `~/Library/Caches` | `%LOCALAPPDATA%\xdg.cache` |
//! | config | `$XDG_CONFIG_HOME` | `~/.config` | `~/Library/Preferences` | `%APPDATA%\xdg.config` |
//! | data | `$XDG_DATA_HOME` | `~/.local/share` | `~/Library/Application Support` | `%APPDATA%\xdg.data` |
//! | state | `$XDG_STATE_HOME` | `~/.local/state` | `~/Library/State` | `%LOCALAPPDATA%\xdg.state` |
//! | runtime | `$XDG_RUNTIME_DIR` | none | none | none |
//!
//! `~` stands for the home directory, or the temp directory if the user has no home.
//!
//! ```rust
//! use std::path::PathBuf;
//!
//! use xdg_portable::Adapter;
//! use xdg_portable::os::env::Env;
//! use xdg_portable::xdg;
//!
//! let env: Env = [
//!     ("HOME", "/home/alice"),
//!     ("XDG_CACHE_HOME", "/var/cache/alice"),
//!     ("XDG_CONFIG_DIRS", "/etc/xdg:/usr/local/etc/xdg"),
//! ]
//! .into_iter()
//! .collect();
//! let dirs = xdg::adapt(Adapter::new("linux", env));
//!
//! assert_eq!(dirs.cache(), PathBuf::from("/var/cache/alice"));
//! assert_eq!(dirs.config(), PathBuf::from("/home/alice/.config"));
//! assert_eq!(dirs.runtime(), None);
//! assert_eq!(
//!     dirs.config_dirs(),
//!     ["/home/alice/.config", "/etc/xdg", "/usr/local/etc/xdg"].map(PathBuf::from)
//! );
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use log::trace;

use crate::adapter::Adapter;
use crate::os::platform::Platform;
use crate::os_paths::OsPaths;

mod strategy;

use strategy::BaseDirs;

pub const CACHE_HOME: &str = "XDG_CACHE_HOME";
pub const CONFIG_HOME: &str = "XDG_CONFIG_HOME";
pub const DATA_HOME: &str = "XDG_DATA_HOME";
pub const STATE_HOME: &str = "XDG_STATE_HOME";
pub const RUNTIME_DIR: &str = "XDG_RUNTIME_DIR";
pub const CONFIG_DIRS: &str = "XDG_CONFIG_DIRS";
pub const DATA_DIRS: &str = "XDG_DATA_DIRS";

/// Resolver of the XDG base directories.
///
/// The platform rules are picked once, when the resolver is created; the directories themselves
/// are recomputed on every call.
#[derive(Debug, Clone)]
pub struct Xdg {
    paths: OsPaths,
    dirs: &'static dyn BaseDirs,
}

/// Create [`Xdg`] backed by `adapter`.
pub fn adapt(adapter: Adapter) -> Xdg {
    Xdg::new(adapter)
}

impl Xdg {
    pub fn new(adapter: Adapter) -> Self {
        let platform = adapter.platform();
        trace!("using {platform} base directory rules");
        Self {
            paths: OsPaths::from_shared(Arc::new(adapter)),
            dirs: strategy::for_platform(platform),
        }
    }

    /// [`OsPaths`] sharing this resolver's adapter.
    pub fn os_paths(&self) -> &OsPaths {
        &self.paths
    }

    pub fn platform(&self) -> Platform {
        self.paths.adapter().platform()
    }

    /// Directory for user-specific non-essential (cached) data.
    pub fn cache(&self) -> PathBuf {
        self.resolve(CACHE_HOME, |dirs, paths| dirs.cache(paths))
    }

    /// Directory for user-specific configuration files.
    pub fn config(&self) -> PathBuf {
        self.resolve(CONFIG_HOME, |dirs, paths| dirs.config(paths))
    }

    /// Directory for user-specific data files.
    pub fn data(&self) -> PathBuf {
        self.resolve(DATA_HOME, |dirs, paths| dirs.data(paths))
    }

    /// Directory for user-specific state files: non-essential, and more volatile than
    /// configuration.
    pub fn state(&self) -> PathBuf {
        self.resolve(STATE_HOME, |dirs, paths| dirs.state(paths))
    }

    /// Directory for user-specific runtime files (sockets, named pipes, ...).
    ///
    /// # Returns
    ///
    /// [`None`] unless `$XDG_RUNTIME_DIR` is set: runtime directories are managed by the OS and
    /// there is no sensible default.
    pub fn runtime(&self) -> Option<PathBuf> {
        self.paths.adapter().var(RUNTIME_DIR).map(PathBuf::from)
    }

    /// Preference-ordered directories to search for configuration files, starting with
    /// [`Xdg::config`].
    pub fn config_dirs(&self) -> Vec<PathBuf> {
        self.search_path(self.config(), CONFIG_DIRS)
    }

    /// Preference-ordered directories to search for data files, starting with [`Xdg::data`].
    pub fn data_dirs(&self) -> Vec<PathBuf> {
        self.search_path(self.data(), DATA_DIRS)
    }

    /// `$key` verbatim if set, otherwise the platform default.
    fn resolve(
        &self,
        key: &str,
        default: impl FnOnce(&dyn BaseDirs, &OsPaths) -> String,
    ) -> PathBuf {
        match self.paths.adapter().var(key) {
            Some(dir) => {
                trace!("${key} overrides the default: {dir}");
                PathBuf::from(dir)
            }
            None => PathBuf::from(default(self.dirs, &self.paths)),
        }
    }

    fn search_path(&self, first: PathBuf, key: &str) -> Vec<PathBuf> {
        let adapter = self.paths.adapter();
        let mut dirs = vec![first];
        if let Some(list) = adapter.var(key) {
            dirs.extend(list.split(adapter.path().delimiter()).map(PathBuf::from));
        }
        dirs
    }
}

impl Default for Xdg {
    fn default() -> Self {
        Self::new(Adapter::native())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::os::env::Env;
    use claim::{assert_none, assert_some, assert_some_eq};

    const PLATFORMS: [&str; 3] = ["linux", "darwin", "win32"];

    fn xdg<const N: usize>(platform: &str, vars: [(&str, &str); N]) -> Xdg {
        let env = vars.into_iter().collect::<Env>().case_insensitive(false);
        adapt(Adapter::new(platform, env))
    }

    #[test]
    fn strategy_follows_platform() {
        assert_eq!(xdg("linux", []).platform(), Platform::Linux);
        assert_eq!(xdg("darwin", []).platform(), Platform::MacOs);
        assert_eq!(xdg("win32", []).platform(), Platform::Windows);
        assert_eq!(xdg("sunos", []).platform(), Platform::Linux);
    }

    #[test]
    fn search_paths_start_with_home_dirs() {
        for platform in PLATFORMS {
            for vars in [
                [("HOME", "/home/u"), ("XDG_CONFIG_DIRS", "/a:/b")],
                [("XDG_CONFIG_HOME", "/custom/config"), ("XDG_DATA_HOME", "/custom/data")],
                [("USERPROFILE", r"C:\Users\u"), ("XDG_DATA_DIRS", r"C:\a;C:\b")],
            ] {
                let dirs = xdg(platform, vars);
                assert_eq!(dirs.config_dirs()[0], dirs.config(), "{platform} {vars:?}");
                assert_eq!(dirs.data_dirs()[0], dirs.data(), "{platform} {vars:?}");
            }
        }
    }

    #[test]
    fn overrides_are_verbatim() {
        let vars = [
            ("HOME", "/home/u"),
            ("XDG_CACHE_HOME", "/custom/cache/"),
            ("XDG_CONFIG_HOME", "/custom/config"),
            ("XDG_DATA_HOME", "/custom/../data"),
            ("XDG_STATE_HOME", "/custom/state"),
            ("XDG_RUNTIME_DIR", "/custom/runtime"),
        ];
        for platform in PLATFORMS {
            let dirs = xdg(platform, vars);
            assert_eq!(dirs.cache(), PathBuf::from("/custom/cache/"));
            assert_eq!(dirs.config(), PathBuf::from("/custom/config"));
            assert_eq!(dirs.data(), PathBuf::from("/custom/../data"));
            assert_eq!(dirs.state(), PathBuf::from("/custom/state"));
            assert_some_eq!(dirs.runtime(), PathBuf::from("/custom/runtime"));
        }
    }

    #[test]
    fn empty_overrides_are_ignored() {
        let dirs = xdg(
            "linux",
            [("HOME", "/home/u"), ("XDG_CONFIG_HOME", ""), ("XDG_RUNTIME_DIR", "")],
        );
        assert_eq!(dirs.config(), PathBuf::from("/home/u/.config"));
        assert_none!(dirs.runtime());
    }

    #[test]
    fn runtime_without_override() {
        for platform in PLATFORMS {
            assert_none!(xdg(platform, [("HOME", "/home/u")]).runtime());
        }
    }

    #[test]
    fn linux_defaults() {
        let dirs = xdg("linux", [("HOME", "/home/u/")]);
        let home = assert_some!(dirs.os_paths().home());
        assert_eq!(home, PathBuf::from("/home/u"));
        assert_eq!(dirs.cache(), home.join(".cache"));
        assert_eq!(dirs.config(), home.join(".config"));
        assert_eq!(dirs.data(), PathBuf::from("/home/u/.local/share"));
        assert_eq!(dirs.state(), PathBuf::from("/home/u/.local/state"));
    }

    #[test]
    fn macos_defaults() {
        let dirs = xdg("darwin", [("HOME", "/Users/u")]);
        assert_eq!(dirs.cache(), PathBuf::from("/Users/u/Library/Caches"));
        assert_eq!(dirs.config(), PathBuf::from("/Users/u/Library/Preferences"));
        assert_eq!(dirs.data(), PathBuf::from("/Users/u/Library/Application Support"));
        assert_eq!(dirs.state(), PathBuf::from("/Users/u/Library/State"));
    }

    #[test]
    fn windows_defaults_from_app_data() {
        let dirs = xdg(
            "win32",
            [
                ("USERPROFILE", r"C:\Users\u"),
                ("APPDATA", r"D:\Roaming"),
                ("LOCALAPPDATA", r"E:\Local"),
            ],
        );
        assert_eq!(dirs.cache(), PathBuf::from(r"E:\Local\xdg.cache"));
        assert_eq!(dirs.config(), PathBuf::from(r"D:\Roaming\xdg.config"));
        assert_eq!(dirs.data(), PathBuf::from(r"D:\Roaming\xdg.data"));
        assert_eq!(dirs.state(), PathBuf::from(r"E:\Local\xdg.state"));
    }

    #[test]
    fn windows_defaults_from_home() {
        let dirs = xdg("win32", [("USERPROFILE", r"C:\Users\u")]);
        assert_eq!(dirs.cache(), PathBuf::from(r"C:\Users\u\AppData\Local\xdg.cache"));
        assert_eq!(dirs.config(), PathBuf::from(r"C:\Users\u\AppData\Roaming\xdg.config"));
        assert_eq!(dirs.data(), PathBuf::from(r"C:\Users\u\AppData\Roaming\xdg.data"));
        assert_eq!(dirs.state(), PathBuf::from(r"C:\Users\u\AppData\Local\xdg.state"));
    }

    #[test]
    fn base_falls_back_to_temp() {
        assert_eq!(
            xdg("linux", [("TMPDIR", "/scratch")]).config(),
            PathBuf::from("/scratch/.config")
        );
        assert_eq!(xdg("linux", []).cache(), PathBuf::from("/tmp/.cache"));
        assert_eq!(
            xdg("darwin", []).data(),
            PathBuf::from("/tmp/Library/Application Support")
        );
        assert_eq!(
            xdg("win32", []).config(),
            PathBuf::from(r"C:\Temp\AppData\Roaming\xdg.config")
        );
    }

    #[test]
    fn config_dirs_split_on_platform_delimiter() {
        let linux = xdg("linux", [("HOME", "/home/u"), ("XDG_CONFIG_DIRS", "/a:/b")]);
        assert_eq!(linux.config_dirs(), ["/home/u/.config", "/a", "/b"].map(PathBuf::from));

        let windows = xdg(
            "win32",
            [("USERPROFILE", r"C:\Users\u"), ("XDG_CONFIG_DIRS", r"C:\a;D:\b")],
        );
        assert_eq!(
            windows.config_dirs(),
            [r"C:\Users\u\AppData\Roaming\xdg.config", r"C:\a", r"D:\b"].map(PathBuf::from)
        );
    }

    #[test]
    fn data_dirs() {
        let dirs = xdg(
            "darwin",
            [("HOME", "/Users/u"), ("XDG_DATA_DIRS", "/usr/local/share:/usr/share")],
        );
        assert_eq!(
            dirs.data_dirs(),
            ["/Users/u/Library/Application Support", "/usr/local/share", "/usr/share"]
                .map(PathBuf::from)
        );
    }

    #[test]
    fn unset_search_paths_hold_only_home_dirs() {
        let dirs = xdg("linux", [("HOME", "/home/u"), ("XDG_DATA_DIRS", "")]);
        assert_eq!(dirs.config_dirs(), vec![dirs.config()]);
        assert_eq!(dirs.data_dirs(), vec![dirs.data()]);
    }

    #[test]
    fn search_path_entries_are_verbatim() {
        let dirs = xdg("linux", [("HOME", "/home/u"), ("XDG_CONFIG_DIRS", "/a/::/b/../c")]);
        assert_eq!(
            dirs.config_dirs(),
            ["/home/u/.config", "/a/", "", "/b/../c"].map(PathBuf::from)
        );
    }

    #[test]
    fn os_paths_share_adapter() {
        let dirs = xdg("linux", [("HOME", "/home/u"), ("TMPDIR", "/scratch")]);
        assert_some_eq!(dirs.os_paths().home(), PathBuf::from("/home/u"));
        assert_eq!(dirs.os_paths().temp(), PathBuf::from("/scratch"));
    }
}
