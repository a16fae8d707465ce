use std::fmt::Debug;
use std::io;
use std::os::unix::thread::RawPthread;

use libc::cpu_set_t;

/// Bindings for FFI calls into the operating system's thread scheduling
/// APIs.
///
/// All FFI calls go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    /// `pthread_setaffinity_np()` for a thread identified by its raw pthread
    /// handle.
    fn pthread_setaffinity(&self, thread: RawPthread, cpuset: &cpu_set_t) -> Result<(), io::Error>;

    /// `sched_getaffinity()` for the current thread.
    fn sched_getaffinity_current(&self) -> Result<cpu_set_t, io::Error>;
}
