//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability. The pure pieces
//! (validation, layout math, debounce bookkeeping, formatting) compile and
//! test natively; the browser-bound orchestration is gated behind the
//! `hydrate` feature.

pub mod auth;
pub mod debounce;
pub mod export;
pub mod flow_actions;
pub mod format;
pub mod geometry;
pub mod layout;
pub mod storage;
