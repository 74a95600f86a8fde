//! Reactive application state shared via Leptos context.
//!
//! DESIGN
//! ======
//! Each flow owns its own state struct so the map/search view, the detail
//! modal, and the valuation panel cannot couple through ambient globals.
//! Render functions receive these through context signals.

pub mod detail;
pub mod market;
pub mod search;
pub mod valuation;
