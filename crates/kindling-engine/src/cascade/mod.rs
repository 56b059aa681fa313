//! Multi-round adoption spread over a (possibly growing) friendship graph.

pub mod report;
pub mod simulator;

pub use report::CascadeReport;
pub use simulator::CascadeSimulator;
