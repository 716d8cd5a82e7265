//! View adapter: renderable game data in, user intents out.
//!
//! Renderers never touch the engine directly. They draw a [`GameView`] and
//! hand user actions back as [`Intent`]s; the adapter decides whether an
//! invalid intent is ignored or reported, and tells observers when the
//! view changed.

mod adapter;
mod model;

pub use adapter::{Intent, InvalidIntentPolicy, TracingObserver, ViewAdapter, ViewObserver};
pub use model::{CellView, GameView, MoveEntry};
