//! Bundle catalog core - domain model and pure query services
//!
//! Nothing in here performs I/O. Snapshots come in through the ports and
//! every index is derived synchronously when a snapshot is built.
pub mod domain;
pub mod services;
