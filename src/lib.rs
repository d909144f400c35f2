//! Data-controller core of the platform admin console.
//!
//! The console's Users, Tasks and Transactions screens all render the same
//! shape: a paginated, searchable table fed by a remote API. This crate
//! implements that shape once. [`controller::ListController`] owns the
//! query/result pair for one list view and enforces last-request-wins over
//! in-flight fetches, [`detail::DetailLookup`] resolves a single record
//! addressed by a navigation parameter, and [`api`] abstracts the remote
//! collaborator behind traits with HTTP and in-memory implementations.

pub mod api;
pub mod config;
pub mod controller;
pub mod detail;
pub mod domain;
pub mod forms;
pub mod pagination;
pub mod services;
