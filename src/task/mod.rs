//! Task management.
//!
//! Tasks are to-do items that move between pending and completed. Alongside
//! their stored fields they expose derived, time-relative state (overdue
//! flag, days until due, priority bucket), and the collection as a whole
//! feeds the dashboard statistics. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Serialisable views in [`presentation`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod presentation;
pub mod services;
