//! Navigation seam for typed query-string state.
//!
//! The codec in `qsync-codec` is pure; this crate owns the side effect. A
//! host implements [`Navigator`] (current snapshot + navigate primitive),
//! and [`QueryState`] wires schema, codec, and navigator together into the
//! `params` / `set_params` / `set_param` / `href` surface. The engine holds
//! no reactive machinery: hosts re-read `params()` whenever their location
//! changes.

pub mod memory;
pub mod navigator;
pub mod state;

pub use memory::MemoryNavigator;
pub use navigator::{DispatchOptions, HistoryMode, NavError, Navigator, TransitionOptions};
pub use state::QueryState;
