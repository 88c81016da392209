//! Lexical path operations for a given OS family.
//!
//! Everything here works on strings and never touches the filesystem, so Windows paths can be
//! resolved on a Unix host and the other way around.
//!
//! ```rust
//! use xdg_portable::path::{PathOps, PathStyle};
//!
//! let config = PathStyle::Posix.join(&["/home/alice/", "..", "bob", ".config"]);
//! assert_eq!(config, "/home/bob/.config");
//! assert_eq!(PathStyle::Windows.join(&["C:", r"\", "Temp"]), r"C:\Temp");
//! ```

use crate::os::platform::Platform;

mod posix;
mod windows;

/// Join/normalize primitives used when computing default directories.
pub trait PathOps: Send + Sync {
    /// Join non-empty `segments` with the separator and normalize the result.
    ///
    /// Returns `"."` if there is nothing to join.
    fn join(&self, segments: &[&str]) -> String;

    /// Collapse `.`, `..` and repeated separators, keeping a trailing separator.
    fn normalize(&self, path: &str) -> String;

    /// Separator of path lists, as found in `$XDG_CONFIG_DIRS`.
    fn delimiter(&self) -> char;
}

/// Built-in [`PathOps`] flavours.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum PathStyle {
    /// `/` separated paths, `:` separated lists.
    Posix,
    /// `\` (or `/`) separated paths with drive and UNC prefixes, `;` separated lists.
    Windows,
}

impl PathStyle {
    /// Flavour native to `platform`.
    pub const fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Windows => Self::Windows,
            Platform::Linux | Platform::MacOs => Self::Posix,
        }
    }
}

impl PathOps for PathStyle {
    fn join(&self, segments: &[&str]) -> String {
        match self {
            Self::Posix => posix::join(segments),
            Self::Windows => windows::join(segments),
        }
    }

    fn normalize(&self, path: &str) -> String {
        match self {
            Self::Posix => posix::normalize(path),
            Self::Windows => windows::normalize(path),
        }
    }

    fn delimiter(&self) -> char {
        match self {
            Self::Posix => ':',
            Self::Windows => ';',
        }
    }
}

/// Resolve `.` and `..` in `segments`.
///
/// With `rooted`, `..` cannot climb above the root and is dropped; otherwise leading `..` are
/// kept.
fn resolve_segments<'a>(segments: impl Iterator<Item = &'a str>, rooted: bool) -> Vec<&'a str> {
    let mut resolved: Vec<&str> = Vec::new();
    for segment in segments {
        match segment {
            "" | "." => {}
            ".." => match resolved.last() {
                Some(&last) if last != ".." => {
                    resolved.pop();
                }
                _ if rooted => {}
                _ => resolved.push(".."),
            },
            _ => resolved.push(segment),
        }
    }
    resolved
}
