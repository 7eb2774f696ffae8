//! User-interaction adapters.

mod scripted;

pub use scripted::ScriptedInteraction;
