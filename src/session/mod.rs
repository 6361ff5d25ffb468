//! Session Store
//!
//! Tracks who is logged in and keeps that record in a local cache so a
//! reload lands back on the dashboard instead of the login screen.
//!
//! ```text
//! open:   cache.get(key) → decode → current
//! login:  current = identity → cache.set(key, json)
//! logout: current = None    → cache.remove(key)
//! ```

pub mod cache;
pub mod error;
pub mod store;
pub mod types;

#[cfg(feature = "native")]
pub use cache::FileCache;
pub use cache::{KeyValueCache, MemoryCache};
pub use error::{SessionError, SessionResult};
pub use store::{SessionStore, DEFAULT_CACHE_KEY};
pub use types::UserIdentity;
