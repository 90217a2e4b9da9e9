use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Public username, without the leading `@`.
    Handle
);
string_id!(
    /// Medium's internal user identifier.
    UserId
);
string_id!(PostId);
string_id!(
    /// Opaque continuation token for the followings listing.
    Cursor
);

/// The `{ "payload": ... }` wrapper every endpoint returns.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<P> {
    pub payload: Option<P>,
}

// ---- /@{handle}?format=json ----

#[derive(Debug, Clone, Deserialize)]
pub struct ProfilePayload {
    #[serde(default)]
    pub user: Option<ProfileUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUser {
    #[serde(default, rename = "userId")]
    pub user_id: Option<UserId>,
}

// ---- /_/api/users/{id}/following ----

#[derive(Debug, Clone, Deserialize)]
pub struct FollowingPayload {
    #[serde(default)]
    pub value: Option<Vec<FollowedUser>>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FollowedUser {
    pub username: Handle,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Paging {
    #[serde(default)]
    pub next: Option<PagingNext>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PagingNext {
    #[serde(default)]
    pub to: Option<Cursor>,
}

/// One page of the followings listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowingsPage {
    pub handles: Vec<Handle>,
    /// `None` only when `payload.paging.next.to` is absent.
    pub next: Option<Cursor>,
}

// ---- /@{handle}/latest?format=json ----

#[derive(Debug, Clone, Deserialize)]
pub struct LatestPayload {
    #[serde(default)]
    pub references: Option<References>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct References {
    #[serde(default, rename = "Post")]
    pub post: Option<HashMap<String, PostReference>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostReference {
    pub id: PostId,
}

/// What a latest-posts envelope says about a user's posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostReferences {
    /// `payload.references.Post` is not there: the user has nothing to show.
    Absent,
    /// Post ids in the map's iteration order, which Medium does not define.
    Present(Vec<PostId>),
}

// ---- /_/api/posts/{id}/responses ----

#[derive(Debug, Clone, Deserialize)]
pub struct ResponsesPayload {
    #[serde(default)]
    pub value: Option<Vec<ResponseRecord>>,
}

/// A public response to a post, reduced to what the filter needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ResponseWire")]
pub struct ResponseRecord {
    #[serde(rename = "creatorId")]
    pub creator_id: UserId,
    /// Epoch milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    pub recommends: u64,
}

// Responses are full post objects; the count is top-level on some and under
// `virtuals` on others.
#[derive(Deserialize)]
struct ResponseWire {
    #[serde(rename = "creatorId")]
    creator_id: UserId,
    #[serde(rename = "createdAt")]
    created_at: i64,
    #[serde(default)]
    recommends: Option<u64>,
    #[serde(default)]
    virtuals: Option<Virtuals>,
}

#[derive(Deserialize)]
struct Virtuals {
    #[serde(default)]
    recommends: Option<u64>,
}

impl From<ResponseWire> for ResponseRecord {
    fn from(w: ResponseWire) -> Self {
        let recommends = w
            .recommends
            .or_else(|| w.virtuals.and_then(|v| v.recommends))
            .unwrap_or(0);
        Self {
            creator_id: w.creator_id,
            created_at: w.created_at,
            recommends,
        }
    }
}

// ---- /_/api/users/{id} ----

#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub value: Option<UserValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserValue {
    #[serde(default)]
    pub username: Option<Handle>,
}
