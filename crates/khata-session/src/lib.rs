//! # khata-session: Persisted Session for Khata
//!
//! Owns the signed-in session as an **explicit value** with an explicit
//! lifecycle: `load` at launch, `save` on login and token refresh,
//! `clear` on logout. There is no module-level auth singleton anywhere
//! in this workspace; components that issue authenticated requests are
//! handed a [`SessionStore`].
//!
//! ## Modules
//!
//! - [`session`] - The [`Session`] value (user + token pair)
//! - [`store`] - [`SessionStore`] trait, [`FileStore`] and [`MemoryStore`] impls
//! - [`error`] - Typed store errors

pub mod error;
pub mod session;
pub mod store;

pub use error::{SessionError, SessionResult};
pub use session::Session;
pub use store::{FileStore, MemoryStore, SessionStore};
