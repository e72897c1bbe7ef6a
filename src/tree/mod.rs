//! Directory tree rendering
//!
//! The tree phase either delegates to an external tree-drawing command or
//! runs the built-in walker:
//!
//! - `TreeRenderer`: chooses between the two once at startup
//! - `TreeWalker`: built-in renderer with list-axis filtering and pruning

mod renderer;
mod walker;

pub use renderer::TreeRenderer;
pub use walker::TreeWalker;
