//! Medium integration: the client, typed envelopes, and each discovery stage.
//!
//! Data flows strictly downward:
//! `client` (five endpoints, all through `transport`) → `followings` → `posts`
//! → `responses` (paced) → `filter` → back through `client` for handles.
//! `pipeline::Scout` strings the stages together.
pub mod client;
pub mod error;
pub mod filter;
pub mod followings;
pub mod pacing;
pub mod pipeline;
pub mod posts;
pub mod responses;
pub mod transport;
pub mod types;

pub use client::{MediumApi, MediumSettings};
pub use error::{Result, ScoutError};
pub use filter::ResponseFilter;
pub use pacing::{FixedDelay, Pacer};
pub use pipeline::Scout;
pub use types::{Cursor, Handle, PostId, ResponseRecord, UserId};
