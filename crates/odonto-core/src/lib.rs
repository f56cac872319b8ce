//! State logic for the Odonto dashboard.
//!
//! Each UI slice is a plain state struct plus a pure
//! `reduce(state, action)` function, so transitions can be tested
//! without a browser. The wasm crate wraps these in Yew reducer
//! handles and feeds actions in from events and HTTP responses.

pub mod auth;
pub mod consultation;
pub mod datetime;
pub mod forms;
pub mod tasks;
