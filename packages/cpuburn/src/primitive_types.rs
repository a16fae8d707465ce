/// A processor identifier, matching the numeric identifier used by standard
/// tooling of the operating system.
pub(crate) type ProcessorId = u32;

/// The 0-based sequential index assigned to each worker thread at launch,
/// used to select the processor the worker is bound to.
pub(crate) type WorkerIdentity = usize;
