//! Admission Control
//!
//! Bounds the number of concurrently open sessions.
//!
//! # Design
//! - [`SessionQuota`] is the capacity counter: a wait-free counting
//!   semaphore exposing only `try_acquire`/`release`
//! - [`Session`] is an RAII handle over one granted slot
//!
//! # Properties
//! - The counter never goes negative and never exceeds its capacity
//! - A denial is an ordinary outcome, surfaced as `ResourceExhausted`

pub mod quota;
pub mod session;


pub use quota::{QuotaError, SessionQuota};
pub use session::{OpenError, Session};
