//! Reusable view components.
//!
//! ARCHITECTURE
//! ============
//! `map_host` and `valuation_chart` are thin bridges to the external Leaflet
//! and Chart.js widgets; everything else is plain declarative rendering over
//! the state structs.

pub mod map_host;
pub mod property_card;
pub mod property_list;
pub mod property_modal;
pub mod search_panel;
pub mod valuation_chart;
pub mod valuation_form;
pub mod valuation_result;
