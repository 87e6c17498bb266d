//! API dispatcher: request building, transport and classification for one call.
//!
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;

pub use builder::ApiDispatcherBuilder;
pub use self::core::ApiDispatcher;
