//! Core services for scanning, classification, planning, and execution

pub mod batch;
pub mod classify;
pub mod execute;
pub mod plan;
pub mod scan;
