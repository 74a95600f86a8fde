//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (issuing requests, wiring
//! timers) and delegates rendering details to `components`.

pub mod home;
pub mod map;
pub mod valuation;
