//! Async operations: each one dispatches `Started`, awaits the HTTP
//! call, and dispatches the terminal slice action.

pub mod auth;
pub mod tasks;
