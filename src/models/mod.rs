//! Simulation domain models.
//!
//! Provides the data types shared by every scheduling engine: the input
//! description of a process, the mutable record an engine works on, the
//! completed record handed back to callers, and the execution timeline.
//!
//! # Lifecycle
//!
//! | Stage | Type | Owner |
//! |-------|------|-------|
//! | Input | `ProcessSpec` | caller |
//! | Simulation | `Process` | one engine run |
//! | Result | `CompletedProcess` | caller |

mod completed;
mod process;
mod timeline;

pub use completed::CompletedProcess;
pub use process::{Process, ProcessId, ProcessSpec};
pub use timeline::{Slice, Timeline};
