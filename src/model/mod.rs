//! Domain model types (pure).
//!
//! All types in this module are immutable values with no hidden state.

pub mod error;
pub mod handle;
pub mod key_action;
pub mod module;

// Re-export for convenience
pub use error::{DetailError, Dimension, LayoutError, RegistryError};
pub use handle::ViewHandle;
pub use key_action::KeyAction;
pub use module::ModuleVariant;
