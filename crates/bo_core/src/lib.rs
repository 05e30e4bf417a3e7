//! # bo_core - Cricket Batting Order Generator
//!
//! Collects up to eleven player names and assigns each a random batting
//! position with a Fisher–Yates shuffle.
//!
//! ## Features
//! - Explicit, serializable form state (`OrderGenerator`)
//! - Injectable random source; same seed = same order
//! - Plain-text form rendering and a JSON API for hosts

pub mod api;
pub mod error;
pub mod generator;
pub mod input;
pub mod view;

pub use api::{generate_order_json, ApiError, ApiResponse, OrderRequest, OrderResponse};
pub use error::{BattingError, Result};
pub use generator::{
    shuffle_positions, BattingSlot, ChaChaDraw, OrderGenerator, RandDraw, ScriptedDraw, SlotDraw,
};
pub use input::{apply_roster_text, parse_roster_text, RosterInput, CAP_ADVISORY};

/// Largest roster a cricket team can field
pub const MAX_ROSTER_SIZE: usize = 11;

/// Version of the JSON API envelope
pub const SCHEMA_VERSION: u8 = 1;
