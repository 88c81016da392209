//! Native home and temp directory lookups of the running OS.
//!
//! Both return [`None`] when the OS has nothing to say, so callers can fall through to
//! environmental variables.

/// Wrapper around [`std::env::home_dir`].
#[allow(deprecated)]
pub fn home_dir() -> Option<String> {
    std::env::home_dir()
        .and_then(|path| path.into_os_string().into_string().ok())
        .filter(|path| !path.is_empty())
}

/// Per-user temporary directory as reported by `confstr(_CS_DARWIN_USER_TEMP_DIR)`.
#[cfg(target_vendor = "apple")]
pub fn temp_dir() -> Option<String> {
    use std::ffi::CStr;

    // SAFETY: querying the required length with a null buffer is allowed.
    let len = unsafe { libc::confstr(libc::_CS_DARWIN_USER_TEMP_DIR, std::ptr::null_mut(), 0) };
    if len == 0 {
        return None;
    }
    let mut buf = vec![0u8; len];
    // SAFETY: `buf` is valid for `len` bytes, which includes the trailing nul.
    let written = unsafe {
        libc::confstr(
            libc::_CS_DARWIN_USER_TEMP_DIR,
            buf.as_mut_ptr().cast::<libc::c_char>(),
            len,
        )
    };
    if written == 0 || written > len {
        return None;
    }
    CStr::from_bytes_until_nul(&buf)
        .ok()?
        .to_str()
        .ok()
        .filter(|path| !path.is_empty())
        .map(str::to_owned)
}

/// Wrapper around [`std::env::temp_dir`], which asks `GetTempPath2W`.
#[cfg(windows)]
pub fn temp_dir() -> Option<String> {
    std::env::temp_dir()
        .into_os_string()
        .into_string()
        .ok()
        .filter(|path| !path.is_empty())
}

// Other platforms only have `$TMPDIR` and friends, which the resolver reads itself.
#[cfg(not(any(target_vendor = "apple", windows)))]
pub fn temp_dir() -> Option<String> {
    None
}
