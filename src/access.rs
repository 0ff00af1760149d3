//! Pre-flight checks run on each input before it is opened

use crate::error::{CatContext, CatError, CatResult};
use crate::input::InputSpec;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Verify that an input exists, is not a directory and is readable.
///
/// Standard input always passes. The result only reflects the state of the
/// filesystem at the time of the call; the later open may still fail.
pub fn check_access(input: &InputSpec) -> CatResult<()> {
    let path = match input.path() {
        Some(path) => path,
        None => return Ok(()),
    };
    let name = input.display_name();

    let metadata = fs::metadata(path).with_access_context(&name)?;
    if metadata.is_dir() {
        return Err(CatError::is_directory(&name));
    }

    check_readable(path).with_access_context(&name)?;

    debug!(file = %name, len = metadata.len(), "access check passed");
    Ok(())
}

/// Explicit read-permission check via access(2)
#[cfg(unix)]
fn check_readable(path: &Path) -> io::Result<()> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains a nul byte"))?;

    // SAFETY: c_path is a valid NUL-terminated string that outlives the call
    let rc = unsafe { libc::access(c_path.as_ptr(), libc::R_OK) };
    if rc == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn check_readable(path: &Path) -> io::Result<()> {
    fs::File::open(path).map(drop)
}
