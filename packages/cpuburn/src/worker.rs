use std::hint;

use libc::cpu_set_t;

use crate::bindings::{Bindings, BindingsFacade};
use crate::primitive_types::{ProcessorId, WorkerIdentity};

/// Entry point of a worker thread: reports the processors this thread is
/// allowed to run on, then burns its processor until the process dies.
pub(crate) fn entrypoint(identity: WorkerIdentity) {
    report_own_affinity(identity, &BindingsFacade::real());

    // Pure CPU burn. `spin_loop()` is a processor-level pause hint and never
    // yields to the scheduler - the thread occupies its processor entirely
    // until the process is killed.
    loop {
        hint::spin_loop();
    }
}

/// Prints one line for every processor the OS currently allows this thread
/// to run on.
///
/// The launcher binds this thread from the outside, so the reported set may
/// still be the inherited one when that binding has not taken effect yet,
/// or failed entirely - more than one line per worker is possible.
fn report_own_affinity(identity: WorkerIdentity, bindings: &BindingsFacade) {
    match bindings.sched_getaffinity_current() {
        Ok(cpu_set) => {
            for processor in allowed_processors(&cpu_set) {
                println!("Thread {identity:2} bound to CPU {processor}");
            }
        }
        Err(error) => {
            eprintln!("Thread {identity:2} could not query its affinity: {error}");
        }
    }
}

/// Extracts the processors present in a scheduler cpu set, in ascending
/// order.
#[expect(
    clippy::cast_sign_loss,
    reason = "CPU_SETSIZE is a small positive constant"
)]
fn allowed_processors(cpu_set: &cpu_set_t) -> Vec<ProcessorId> {
    (0..libc::CPU_SETSIZE as ProcessorId)
        // SAFETY: No safety requirements.
        .filter(|processor| unsafe { libc::CPU_ISSET(*processor as usize, cpu_set) })
        .collect()
}
