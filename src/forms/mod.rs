//! Form definitions backing the task modals.

pub mod task;
