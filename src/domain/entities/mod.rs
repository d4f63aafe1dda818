//! Domain entities and the ad aggregate.
//!
//! Fields are private; state changes go through methods that enforce the
//! invariants. Each entity has a `restore` constructor for rebuilding it from
//! storage without re-running creation rules.

pub mod ad;
pub mod conversation;
pub mod message;
pub mod user;

pub use ad::{Ad, AdParts, AdPatch, AdStatus, NewAd};
pub use conversation::Conversation;
pub use message::Message;
pub use user::{NewUser, User, UserParts, UserRole};
