//! Taskboard: task management backend.
//!
//! This crate provides the core of a to-do application: tasks with a
//! pending/completed lifecycle, derived presentation fields such as overdue
//! state and priority, and dashboard statistics.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, derived state and statistics
//! - [`board`]: Service wiring from configuration
//! - [`config`]: Environment-driven configuration
//! - [`telemetry`]: Logging setup

pub mod board;
pub mod config;
pub mod task;
pub mod telemetry;
