//! Decision Steward - Tenant-Scoped Authorization Core
//!
//! This crate implements the authorization and session-resolution core of a
//! collaborative decision-governance platform: resolving an actor's opaque
//! identity into a tenant-scoped `Profile`, and gating every read and
//! mutation of decision records (and their sub-entities) against
//! multi-tenant isolation and ownership rules.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
