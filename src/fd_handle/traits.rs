//! [`HandleTraits`] implementation for raw file descriptors.

use crate::framework::HandleTraits;
use std::io;
use std::os::fd::RawFd;
use tracing::warn;

/// Descriptor capability: sentinel `-1`, released with `close(2)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FdTraits;

impl HandleTraits for FdTraits {
    type Value = RawFd;

    fn invalid() -> RawFd {
        -1
    }

    /// Closes the descriptor. A failed `close` is logged; the descriptor is gone either way.
    fn destroy(fd: RawFd) {
        // SAFETY: the owning handle passes each descriptor here at most once.
        let rc = unsafe { libc::close(fd) };
        if rc == -1 {
            warn!(
                resource = Self::name(),
                fd,
                error = %io::Error::last_os_error(),
                "close failed"
            );
        }
    }

    fn name() -> &'static str {
        "fd"
    }
}
