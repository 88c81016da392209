//! Per-platform defaults used when no `$XDG_*` override is set.

use std::fmt;

use crate::os::platform::Platform;
use crate::os_paths::OsPaths;

/// Default locations of the XDG base directories on one platform.
pub(super) trait BaseDirs: fmt::Debug + Send + Sync {
    fn cache(&self, paths: &OsPaths) -> String;
    fn config(&self, paths: &OsPaths) -> String;
    fn data(&self, paths: &OsPaths) -> String;
    fn state(&self, paths: &OsPaths) -> String;
}

/// Strategy for `platform`.
pub(super) fn for_platform(platform: Platform) -> &'static dyn BaseDirs {
    match platform {
        Platform::Linux => &Linux,
        Platform::MacOs => &MacOs,
        Platform::Windows => &Windows,
    }
}

/// Home, or temp if the user has no home.
fn base_dir(paths: &OsPaths) -> String {
    paths.home_str().unwrap_or_else(|| paths.temp_str())
}

fn join(paths: &OsPaths, base: &str, segments: &[&str]) -> String {
    let mut parts = Vec::with_capacity(segments.len() + 1);
    parts.push(base);
    parts.extend_from_slice(segments);
    paths.adapter().path().join(&parts)
}

fn under_base(paths: &OsPaths, segments: &[&str]) -> String {
    join(paths, &base_dir(paths), segments)
}

#[derive(Debug)]
struct Linux;

impl BaseDirs for Linux {
    fn cache(&self, paths: &OsPaths) -> String {
        under_base(paths, &[".cache"])
    }

    fn config(&self, paths: &OsPaths) -> String {
        under_base(paths, &[".config"])
    }

    fn data(&self, paths: &OsPaths) -> String {
        under_base(paths, &[".local", "share"])
    }

    fn state(&self, paths: &OsPaths) -> String {
        under_base(paths, &[".local", "state"])
    }
}

#[derive(Debug)]
struct MacOs;

impl BaseDirs for MacOs {
    fn cache(&self, paths: &OsPaths) -> String {
        under_base(paths, &["Library", "Caches"])
    }

    fn config(&self, paths: &OsPaths) -> String {
        under_base(paths, &["Library", "Preferences"])
    }

    fn data(&self, paths: &OsPaths) -> String {
        under_base(paths, &["Library", "Application Support"])
    }

    fn state(&self, paths: &OsPaths) -> String {
        under_base(paths, &["Library", "State"])
    }
}

/// Windows has no convention for these, so they live in `xdg.*` folders under `AppData`.
#[derive(Debug)]
struct Windows;

impl Windows {
    /// `AppData\Roaming`: follows the user between machines.
    fn roaming(paths: &OsPaths) -> String {
        paths
            .adapter()
            .var("APPDATA")
            .unwrap_or_else(|| under_base(paths, &["AppData", "Roaming"]))
    }

    /// `AppData\Local`: stays on this machine.
    fn local(paths: &OsPaths) -> String {
        paths
            .adapter()
            .var("LOCALAPPDATA")
            .unwrap_or_else(|| under_base(paths, &["AppData", "Local"]))
    }
}

impl BaseDirs for Windows {
    fn cache(&self, paths: &OsPaths) -> String {
        join(paths, &Self::local(paths), &["xdg.cache"])
    }

    fn config(&self, paths: &OsPaths) -> String {
        join(paths, &Self::roaming(paths), &["xdg.config"])
    }

    fn data(&self, paths: &OsPaths) -> String {
        join(paths, &Self::roaming(paths), &["xdg.data"])
    }

    fn state(&self, paths: &OsPaths) -> String {
        join(paths, &Self::local(paths), &["xdg.state"])
    }
}
