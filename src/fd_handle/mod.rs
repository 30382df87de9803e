//! Owned file descriptors.
//!
//! [`UniqueFd`] is [`UniqueHandle`] over [`FdTraits`]: it closes its descriptor when it
//! goes out of scope. The constructors below acquire descriptors from the filesystem;
//! an existing descriptor is adopted with [`UniqueHandle::new`].

pub mod traits;

pub use traits::FdTraits;

use crate::framework::{HandleError, HandleTraits, Result, UniqueHandle};
use std::fs::File;
use std::io;
use std::mem::ManuallyDrop;
use std::os::fd::{AsRawFd, FromRawFd, IntoRawFd, RawFd};
use std::path::Path;
use tracing::debug;

/// A file descriptor closed on drop.
pub type UniqueFd = UniqueHandle<FdTraits>;

impl UniqueHandle<FdTraits> {
    /// Opens `path` read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let fd = Self::from_file(File::open(path)?);
        debug!(path = %path.display(), fd = fd.get(), "Opened");
        Ok(fd)
    }

    /// Creates (or truncates) `path` for writing.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let fd = Self::from_file(File::create(path)?);
        debug!(path = %path.display(), fd = fd.get(), "Created");
        Ok(fd)
    }

    /// Takes over the descriptor owned by `file`.
    pub fn from_file(file: File) -> Self {
        Self::new(file.into_raw_fd())
    }

    /// Hands the descriptor to a [`File`], or `None` if the handle is empty.
    pub fn into_file(self) -> Option<File> {
        if self.is_empty() {
            return None;
        }
        let fd = self.into_raw();
        // SAFETY: `fd` was exclusively owned by the handle, which has given it up.
        Some(unsafe { File::from_raw_fd(fd) })
    }

    /// Runs `f` with the descriptor viewed as a [`File`]; the handle keeps ownership.
    ///
    /// `Read`, `Write` and `Seek` are implemented for `&File`. Returns `None` if the
    /// handle is empty.
    pub fn with_file<R>(&self, f: impl FnOnce(&File) -> R) -> Option<R> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the descriptor stays open for the borrow of `self`, and the view is
        // never dropped, so it never closes it.
        let file = ManuallyDrop::new(unsafe { File::from_raw_fd(self.get()) });
        Some(f(&file))
    }

    /// Duplicates the descriptor into a new, independently owned handle.
    ///
    /// This acquires a second descriptor with `dup(2)`; it is not a copy of the handle.
    pub fn try_clone_fd(&self) -> Result<Self> {
        if self.is_empty() {
            return Err(HandleError::Invalid {
                resource: FdTraits::name(),
            });
        }
        // SAFETY: `dup` only reads the descriptor number, which is open while `self` lives.
        let fd = unsafe { libc::dup(self.get()) };
        if fd == -1 {
            return Err(io::Error::last_os_error().into());
        }
        Ok(Self::new(fd))
    }
}

impl AsRawFd for UniqueHandle<FdTraits> {
    fn as_raw_fd(&self) -> RawFd {
        self.get()
    }
}
