use std::fmt;

/// OS family deciding which fallback rules apply.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Platform {
    /// Linux and every platform not recognised otherwise.
    Linux,
    /// macOS (and the other Darwin-based systems).
    MacOs,
    /// Windows.
    Windows,
}

impl Platform {
    /// Detect [`Platform`] from an identifier such as `"linux"`, `"darwin"`, `"win32"` or a target
    /// triple.
    ///
    /// Matching is case-insensitive. Darwin is checked before Windows, as `"darwin"` contains
    /// `"win"`. Anything unrecognised is treated as [`Platform::Linux`].
    ///
    /// # Examples
    /// ```rust
    /// use xdg_portable::os::platform::Platform;
    ///
    /// assert_eq!(Platform::detect("x86_64-apple-darwin"), Platform::MacOs);
    /// assert_eq!(Platform::detect("Win32"), Platform::Windows);
    /// assert_eq!(Platform::detect("freebsd"), Platform::Linux);
    /// ```
    pub fn detect(identifier: &str) -> Self {
        let identifier = identifier.to_ascii_lowercase();
        if identifier.contains("darwin") || identifier == "macos" || identifier == "ios" {
            Self::MacOs
        } else if identifier.contains("win") {
            Self::Windows
        } else {
            Self::Linux
        }
    }

    /// [`Platform`] of the running process, based on [`std::env::consts::OS`].
    pub fn current() -> Self {
        Self::detect(std::env::consts::OS)
    }

    /// Returns `true` for [`Platform::Windows`].
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Windows => "windows",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_darwin_before_windows() {
        assert_eq!(Platform::detect("darwin"), Platform::MacOs);
        assert_eq!(Platform::detect("DARWIN"), Platform::MacOs);
        assert_eq!(Platform::detect("aarch64-apple-darwin"), Platform::MacOs);
        assert_eq!(Platform::detect("macos"), Platform::MacOs);
    }

    #[test]
    fn detects_windows() {
        assert_eq!(Platform::detect("win32"), Platform::Windows);
        assert_eq!(Platform::detect("windows"), Platform::Windows);
        assert_eq!(Platform::detect("x86_64-pc-windows-msvc"), Platform::Windows);
        assert_eq!(Platform::detect("cygwin"), Platform::Windows);
    }

    #[test]
    fn unknown_is_linux() {
        assert_eq!(Platform::detect("linux"), Platform::Linux);
        assert_eq!(Platform::detect("openbsd"), Platform::Linux);
        assert_eq!(Platform::detect(""), Platform::Linux);
    }

    #[test]
    fn current_matches_cfg() {
        let expected = if cfg!(windows) {
            Platform::Windows
        } else if cfg!(any(target_os = "macos", target_os = "ios")) {
            Platform::MacOs
        } else {
            Platform::Linux
        };
        assert_eq!(Platform::current(), expected);
    }
}
