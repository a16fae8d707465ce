//! Utilities for parsing and emitting the comma-separated processor index
//! lists used to distribute worker threads over processors.
//!
//! Example list: `0,2,4,6`
//!
//! # Format
//!
//! The value is a comma-separated list of zero-based processor indexes, each
//! a non-negative integer of size `u32`. Empty items (produced by leading,
//! trailing or doubled commas) are skipped without error.
//!
//! Unlike the kernel's `cpulist` format there are no ranges and no strides,
//! and the parsed result is deliberately *not* sorted or deduplicated: item
//! order and repetition are meaningful to callers that hand out processors
//! round-robin. A list like `0,0,1` legitimately directs two out of every
//! three assignments at processor 0.
//!
//! A list that contains no indexes at all is an error, never an empty
//! result - there is no meaningful "zero processors" outcome for callers
//! distributing work, which is also why parsing returns a
//! [`NonEmpty`][nonempty::NonEmpty] collection.
//!
//! # Example
//!
//! ```
//! use new_zealand::nz;
//!
//! let cores = corelist::parse("0,2,4,6", nz!(128)).unwrap();
//! assert_eq!(cores.len(), 4);
//!
//! println!("Selected processors: {cores:?}");
//! println!("As a list: {}", corelist::emit(&cores));
//! ```

mod emit;
mod error;
mod parse;

pub use emit::*;
pub use error::*;
pub use parse::*;

pub(crate) type Item = u32;
