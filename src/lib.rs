//! Single-CPU process scheduling simulator.
//!
//! Simulates a finite, statically known set of processes under one of four
//! classic policies and reports completion, turnaround and waiting times.
//! Nothing is executed for real: the simulation is a deterministic function
//! of its input.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessSpec`, `Process`, `CompletedProcess`,
//!   `Timeline`
//! - **`engines`**: One engine per policy — FCFS, SJF, SRTF, round-robin
//! - **`simulator`**: Policy dispatch, metric derivation, KPIs, reports
//! - **`validation`**: Input integrity checks (empty list, duplicate IDs,
//!   negative arrival, non-positive burst, time range)
//! - **`input`**: `id burst arrival` text parsing
//! - **`workload`**: Random workload generation
//!
//! # Example
//!
//! ```
//! use cpu_schedsim::input::parse_processes;
//! use cpu_schedsim::simulator::{Policy, SimulationRequest, Simulator};
//!
//! let processes = parse_processes("1 8 0\n2 4 1").unwrap();
//! let request = SimulationRequest::new(Policy::Srtf, processes);
//! let report = Simulator::new().run(&request).unwrap();
//!
//! assert_eq!(report.completions(), vec![12, 5]);
//! println!("{report}");
//! ```
//!
//! # Concurrency
//!
//! Every call works on its own copy of the input and shares no state, so
//! independent simulations may run on separate threads without coordination.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Schrage (1968), "A Proof of the Optimality of the Shortest Remaining
//!   Processing Time Discipline"

pub mod engines;
pub mod error;
pub mod input;
pub mod models;
pub mod simulator;
pub mod validation;
pub mod workload;

pub use error::{SimulationError, SimulationResult};
pub use simulator::{simulate, Policy};
