//! Simulation dispatcher, metric derivation and KPI evaluation.
//!
//! Selects one engine per request, applies the metric deriver to its
//! output, and summarizes the run.
//!
//! # Pipeline
//!
//! `SimulationRequest` → validation → engine → `derive_metrics` →
//! `SimulationReport` (sorted by ID, with timeline and `SimulationKpi`).

mod dispatcher;
mod kpi;
mod metrics;
mod policy;
mod report;

pub use dispatcher::{simulate, SimulationReport, SimulationRequest, Simulator};
pub use kpi::SimulationKpi;
pub use metrics::derive_metrics;
pub use policy::Policy;
