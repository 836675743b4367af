//! # Core Quiz Logic
//!
//! This module contains the sorting quiz's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • QuizState (data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┼───────────┐
//!                    ▼           ▼           ▼
//!             ┌───────────┐ ┌──────────┐ ┌──────────┐
//!             │    CLI    │ │   Web    │ │   ...    │
//!             │  Adapter  │ │ (future) │ │          │
//!             └───────────┘ └──────────┘ └──────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `QuizState` struct - session state plus derived views
//! - [`action`]: The `Action` enum and the `update()` reducer

pub mod action;
pub mod state;
