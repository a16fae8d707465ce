use std::io;
use std::mem;
use std::os::unix::thread::RawPthread;

use libc::cpu_set_t;

use crate::bindings::Bindings;

/// FFI bindings that target the real operating system that the build is
/// targeting.
///
/// You would only use different bindings in unit tests that need to mock
/// out the operating system. Even then, whenever possible, unit tests
/// should use the real bindings for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

impl Bindings for BuildTargetBindings {
    fn pthread_setaffinity(
        &self,
        thread: RawPthread,
        cpuset: &cpu_set_t,
    ) -> Result<(), io::Error> {
        // SAFETY: No safety requirements beyond passing a valid thread
        // handle and cpu set.
        let result =
            unsafe { libc::pthread_setaffinity_np(thread, mem::size_of::<cpu_set_t>(), cpuset) };

        if result == 0 {
            Ok(())
        } else {
            // pthread functions return the error number directly instead of
            // setting errno.
            Err(io::Error::from_raw_os_error(result))
        }
    }

    fn sched_getaffinity_current(&self) -> Result<cpu_set_t, io::Error> {
        // SAFETY: Zero-initialized cpu_set_t is a valid value.
        let mut cpuset: cpu_set_t = unsafe { mem::zeroed() };

        // 0 means current thread.
        // SAFETY: No safety requirements beyond passing valid arguments.
        let result = unsafe { libc::sched_getaffinity(0, mem::size_of::<cpu_set_t>(), &mut cpuset) };

        if result == 0 {
            Ok(cpuset)
        } else {
            Err(io::Error::last_os_error())
        }
    }
}
