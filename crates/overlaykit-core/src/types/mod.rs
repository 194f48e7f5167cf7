//! Shared-ownership type aliases.
//!
//! - [`aliases`]: `Rc<RefCell<T>>` for single-threaded hosts, `Arc<Mutex<T>>`
//!   for hosts that drive the engine from several threads.

pub mod aliases;

pub use aliases::*;
