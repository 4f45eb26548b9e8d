//! Flashcard drill session for FlashDrill
//!
//! This module provides:
//! - The card deck (bundled or loaded from JSON)
//! - Session state with daily counters and a day-over-day streak
//! - The session controller applying flip / again / got it / shuffle
//! - Rendering onto optional display surfaces
//! - Single-slot persistence

pub mod clock;
pub mod deck;
pub mod models;
pub mod session;
pub mod shuffle;
pub mod storage;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use deck::{Deck, DeckError};
pub use models::*;
pub use session::DrillSession;
pub use storage::{
    FileStateStore, MemoryStateStore, StateStore, StorageError, DEFAULT_STORAGE_KEY,
};
pub use view::{render, CardView, DisplaySurfaces, TextSurface};
