//! Terminal size detection.

/// Width used when neither the terminal nor `COLUMNS` reports one.
pub const DEFAULT_COLUMNS: u32 = 80;

/// Width of the attached terminal in columns.
///
/// Asks the terminal behind stdout first, then falls back to the `COLUMNS`
/// environment variable and finally to [`DEFAULT_COLUMNS`].
pub fn columns() -> u32 {
    query_columns()
        .or_else(|| columns_from_env(std::env::var("COLUMNS").ok().as_deref()))
        .unwrap_or(DEFAULT_COLUMNS)
}

fn columns_from_env(value: Option<&str>) -> Option<u32> {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&c| c > 0)
}

#[cfg(unix)]
fn query_columns() -> Option<u32> {
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };
    // SAFETY: TIOCGWINSZ only writes into the provided winsize struct.
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };
    if rc == 0 && size.ws_col > 0 {
        Some(size.ws_col as u32)
    } else {
        None
    }
}

#[cfg(not(unix))]
fn query_columns() -> Option<u32> {
    None
}
