//! # Business Logic Services
//!
//! Services encapsulate domain-specific functionality and provide clean
//! interfaces for use by HTTP handlers.
//!
//! ## Available Services
//!
//! - **Calculator** (`calculator`) - Checked integer addition

pub mod calculator;
