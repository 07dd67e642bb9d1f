//! Interactive behaviors for the Diseñoría landing page, compiled to wasm and
//! attached to the server-rendered markup.

pub mod behaviors;
pub mod config;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod state;
pub mod timer;
pub mod view;

pub use behaviors::PageBehaviors;
pub use dom::start;
pub use error::BehaviorError;
