//! Type aliases for sharing an engine with its host.
//!
//! The engine itself is single-threaded and owns all of its state. A host
//! that needs to reach it from several places wraps it in one of these:
//!
//! ```rust,ignore
//! use overlaykit_core::types::*;
//!
//! // UI thread only
//! let engine: Shared<OverlayEngine> = shared(OverlayEngine::with_builtins());
//!
//! // Several threads; every store mutation is serialized by the mutex
//! let engine: ThreadSafe<OverlayEngine> = thread_safe(OverlayEngine::with_builtins());
//! ```

use parking_lot::Mutex;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex`; holding the guard is the single-writer
/// discipline a concurrent embedding needs around `create`/`update`/`remove`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// Creates a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Creates a new `ThreadSafe<T>` from a value.
#[inline]
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
