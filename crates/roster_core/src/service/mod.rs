//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep callers decoupled from storage details.

pub mod catalog_service;
pub mod employee_service;
pub mod location_service;
pub mod payroll_service;
pub mod student_service;
