//! # Core Practice Logic
//!
//! Deck, session and the reducer that drives them.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Deck (13 ranks)      │
//!                    │  • Session (state)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • render() (view text) │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`deck`]: Ranks, Hi-Lo values, the shuffled 13-card deck
//! - [`state`]: The `Session` struct, all practice state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`view`]: `render()`, session → text
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod deck;
pub mod state;
pub mod view;

pub use action::{Action, Effect, update};
pub use state::Session;
