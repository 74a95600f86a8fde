//! Pure helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is DOM-free so it unit-tests natively; browser concerns
//! stay in `components` and `pages`.

pub mod cities;
pub mod form;
pub mod format;
pub mod histogram;
