use std::borrow::Cow;
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use thiserror::Error;

/// Errors encountered when getting environmental variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvStrError {
    /// This variant indicates, that variable `Missing.0` is missing.
    #[error("there is no environmental variable `${0:?}`")]
    Missing(OsString),

    /// This variant indicates, that variable `$NonUTF8.0` is not an UTF-8 string.
    #[error("environmental variable `${0:?}` is not an UTF-8 string")]
    NonUTF8(OsString),
}

/// Source of environmental variables consulted by the resolvers.
pub trait VarSource: Send + Sync {
    /// Get environmental variable pointed by `key` as UTF-8.
    fn var(&self, key: &str) -> Result<Cow<'_, str>, EnvStrError>;

    /// Get environmental variable pointed by `key`, treating missing, non UTF-8 and empty values
    /// alike.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key)
            .ok()
            .filter(|value| !value.is_empty())
            .map(Cow::into_owned)
    }
}

/// Live view of the process environment: every lookup goes to [`std::env::var_os`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn var(&self, key: &str) -> Result<Cow<'_, str>, EnvStrError> {
        std::env::var_os(key)
            .ok_or_else(|| EnvStrError::Missing(key.into()))?
            .into_string()
            .map(Cow::Owned)
            .map_err(|_| EnvStrError::NonUTF8(key.into()))
    }
}

/// Snapshot of environmental variables.
///
/// Lookups are case-sensitive, unless [`Env::case_insensitive`] was requested (Windows treats
/// `windir` and `WINDIR` as the same variable). Snapshots built with [`Env::new`] on Windows are
/// case-insensitive by default.
#[derive(Debug, Clone)]
pub struct Env {
    keys: HashMap<OsString, OsString>,

    normalised_keys: HashMap<OsString, OsString>,

    case_insensitive: bool,
}

impl Env {
    /// Create new default [`Env`].
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os().collect())
    }

    /// Create new [`Env`] using `keys` as existing environmental variables.
    pub fn new_from(env: HashMap<OsString, OsString>) -> Self {
        Self {
            keys: env.clone(),
            normalised_keys: Env::normalize_map(env),
            case_insensitive: cfg!(target_os = "windows"),
        }
    }

    /// Choose whether lookups fall back to case-insensitive key matching.
    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    fn normalize_key(key: impl AsRef<OsStr>) -> OsString {
        key.as_ref().to_ascii_uppercase()
    }
    fn normalize_map(keys: HashMap<OsString, OsString>) -> HashMap<OsString, OsString> {
        keys.into_iter()
            .map(|(key, value)| (Env::normalize_key(key), value))
            .collect()
    }

    /// Reload environmental variables from `env`.
    pub fn reload_from(&mut self, env: HashMap<OsString, OsString>) {
        let normalised = Env::normalize_map(env.clone());
        self.keys = env;
        self.normalised_keys = normalised;
    }

    /// Reload environmental variables from [`std::env::vars_os`].
    pub fn reload(&mut self) {
        self.reload_from(std::env::vars_os().collect())
    }

    /// Get environmental variable pointed by `key`.
    ///
    /// # Returns
    /// `Option<&OsStr>`. `None` variant indicates missing key, `Some`: existing key.
    ///
    /// # Examples
    /// ```rust
    /// use xdg_portable::os::env::Env;
    ///
    /// let env: Env = [("FOO", "bar")].into_iter().collect();
    /// assert_eq!(env.get_os("FOO"), Some("bar".as_ref()));
    /// assert_eq!(env.get_os("BAZ"), None);
    /// ```
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        match self.keys.get(key) {
            Some(x) => Some(x),
            None if self.case_insensitive => self
                .normalised_keys
                .get(&Env::normalize_key(key))
                .map(|x| x.as_ref()),
            None => None,
        }
    }

    /// Get environmental variable pointed by `key` and convert it to UTF-8.
    ///
    /// # Returns
    /// `Result<&str, EnvStrError>`. `Ok` variant indicates existing UTF-8 variable, `Err`
    /// indicates some kind of error. See [`EnvStrError`] for details.
    ///
    /// # Examples
    /// ```rust
    /// use xdg_portable::os::env::{Env, EnvStrError};
    ///
    /// let env: Env = [("HOME", "/home/alice")].into_iter().collect();
    /// assert_eq!(env.get("HOME"), Ok("/home/alice"));
    /// assert!(matches!(env.get("TMPDIR"), Err(EnvStrError::Missing(_))));
    /// ```
    pub fn get(&self, key: impl AsRef<OsStr>) -> Result<&str, EnvStrError> {
        let key = key.as_ref();
        self.get_os(key)
            .ok_or_else(|| EnvStrError::Missing(key.to_os_string()))?
            .to_str()
            .ok_or_else(|| EnvStrError::NonUTF8(key.to_os_string()))
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new_from(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl VarSource for Env {
    fn var(&self, key: &str) -> Result<Cow<'_, str>, EnvStrError> {
        self.get(key).map(Cow::Borrowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_none, assert_ok_eq, assert_some_eq};

    #[test]
    fn snapshot_lookup() {
        let env: Env = [("HOME", "/home/alice"), ("EMPTY", "")].into_iter().collect();
        assert_ok_eq!(env.get("HOME"), "/home/alice");
        assert_ok_eq!(env.get("EMPTY"), "");
        assert_eq!(
            env.get("MISSING"),
            Err(EnvStrError::Missing("MISSING".into()))
        );
    }

    #[test]
    fn non_empty_skips_empty_values() {
        let env: Env = [("HOME", "/home/alice"), ("EMPTY", "")].into_iter().collect();
        assert_some_eq!(env.non_empty("HOME"), "/home/alice");
        assert_none!(env.non_empty("EMPTY"));
        assert_none!(env.non_empty("MISSING"));
    }

    #[test]
    fn case_insensitive_fallback() {
        let env: Env = [("WINDIR", r"C:\Windows")].into_iter().collect();
        let sensitive = env.clone().case_insensitive(false);
        let insensitive = env.case_insensitive(true);

        assert_err!(sensitive.get("windir"));
        assert_ok_eq!(insensitive.get("windir"), r"C:\Windows");
        assert_ok_eq!(insensitive.get("WINDIR"), r"C:\Windows");
    }

    #[test]
    fn reload_replaces_variables() {
        let mut env: Env = [("A", "1")].into_iter().collect();
        env.reload_from([("B".into(), "2".into())].into_iter().collect());
        assert_err!(env.get("A"));
        assert_ok_eq!(env.get("B"), "2");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_is_reported() {
        use std::os::unix::ffi::OsStringExt;

        let env: Env = [(OsString::from("BAD"), OsString::from_vec(vec![0xff, 0xfe]))]
            .into_iter()
            .collect();
        assert_eq!(env.get("BAD"), Err(EnvStrError::NonUTF8("BAD".into())));
        assert_none!(env.non_empty("BAD"));
    }

    #[test]
    fn process_env_reports_missing() {
        let key = "XDG_PORTABLE_SURELY_UNSET_VARIABLE";
        assert_eq!(ProcessEnv.var(key), Err(EnvStrError::Missing(key.into())));
    }
}
