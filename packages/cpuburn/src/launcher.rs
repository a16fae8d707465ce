use std::mem;
use std::num::NonZero;
use std::os::unix::thread::JoinHandleExt;
use std::thread;

use nonempty::NonEmpty;

use crate::bindings::{Bindings, BindingsFacade};
use crate::error::{Error, Result};
use crate::primitive_types::{ProcessorId, WorkerIdentity};

/// The highest worker thread count the launcher accepts.
///
/// Requests beyond this fail with [`Error::TooManyWorkers`] before any
/// thread is created.
pub(crate) const MAX_WORKERS: usize = 128;

/// Creates worker threads and binds each one to its target processor.
///
/// Binding happens on the launching thread, immediately after the worker
/// thread is created. The worker is already runnable at that point, so it
/// may execute briefly on an arbitrary processor before the binding takes
/// effect - workers observe and report whatever affinity they ended up
/// with.
#[derive(Debug)]
pub(crate) struct Launcher {
    bindings: BindingsFacade,
}

impl Launcher {
    pub(crate) fn new() -> Self {
        Self {
            bindings: BindingsFacade::real(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_bindings(bindings: BindingsFacade) -> Self {
        Self { bindings }
    }

    /// Spawns `worker_count` threads, each bound round-robin to one of
    /// `cores` and running `entrypoint` with its own 0-based identity.
    ///
    /// Thread creation failure aborts the launch. Binding failure does not:
    /// affinity is advisory, and a worker whose binding failed keeps the
    /// affinity it inherited from this thread.
    pub(crate) fn launch<E>(
        &self,
        worker_count: NonZero<usize>,
        cores: &NonEmpty<ProcessorId>,
        entrypoint: E,
    ) -> Result<WorkerSet>
    where
        E: Fn(WorkerIdentity) + Send + Clone + 'static,
    {
        if worker_count.get() > MAX_WORKERS {
            return Err(Error::TooManyWorkers {
                requested: worker_count.get(),
                maximum: MAX_WORKERS,
            });
        }

        let mut handles = Vec::with_capacity(worker_count.get());

        for identity in 0..worker_count.get() {
            let handle = thread::Builder::new()
                .name(format!("worker-{identity}"))
                .spawn({
                    let entrypoint = entrypoint.clone();
                    move || entrypoint(identity)
                })
                .map_err(|source| Error::ThreadCreation { identity, source })?;

            let cpu_set = single_processor_cpu_set(target_core(identity, cores));

            // Best effort - if the binding fails the worker simply keeps the
            // inherited affinity.
            drop(
                self.bindings
                    .pthread_setaffinity(handle.as_pthread_t(), &cpu_set),
            );

            handles.push(handle);
        }

        Ok(WorkerSet { handles })
    }
}

/// Selects the processor that worker `identity` is bound to: workers cycle
/// through `cores` in order, wrapping around when there are more workers
/// than processors.
fn target_core(identity: WorkerIdentity, cores: &NonEmpty<ProcessorId>) -> ProcessorId {
    let index = identity % cores.len();

    *cores
        .get(index)
        .expect("index is taken modulo the list length, so it is always in bounds")
}

/// Builds a cpu set that allows exactly one processor.
fn single_processor_cpu_set(processor: ProcessorId) -> libc::cpu_set_t {
    // SAFETY: Zero-initialized cpu_set_t is a valid value.
    let mut cpu_set: libc::cpu_set_t = unsafe { mem::zeroed() };

    // SAFETY: No safety requirements.
    unsafe {
        libc::CPU_SET(processor as usize, &mut cpu_set);
    }

    cpu_set
}

/// The worker threads created by one [`Launcher::launch()`] call, in
/// identity order.
///
/// Owning this keeps the handles alive through the join phase; joining
/// consumes it.
#[derive(Debug)]
pub(crate) struct WorkerSet {
    handles: Vec<thread::JoinHandle<()>>,
}

impl WorkerSet {
    /// Blocks until every worker thread has terminated.
    ///
    /// Workers in the running program spin forever, so this returns only if
    /// a worker panics; it exists to give the main thread somewhere to park
    /// while the workers burn CPU.
    pub(crate) fn join_all(self) {
        for handle in self.handles {
            handle.join().expect("worker thread panicked");
        }
    }
}
