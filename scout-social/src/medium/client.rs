//! Thin wrapper over Medium's undocumented JSON endpoints.
//!
//! Five fixed request shapes, each decoded through [`transport`] into the typed
//! envelopes in [`types`]. No auth, no retries; every call carries the
//! configured timeout.
use crate::medium::error::{Result, ScoutError};
use crate::medium::transport;
use crate::medium::types::{
    Cursor, Envelope, FollowingPayload, FollowingsPage, Handle, LatestPayload, PostId,
    PostReferences, ProfilePayload, ResponseRecord, ResponsesPayload, UserId, UserPayload,
};
use scout_http::{HttpClient, RequestOpts};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::time::Duration;

pub const MEDIUM_ORIGIN: &str = "https://medium.com";

/// Page size Medium's web client requests for followings after the first page.
pub const FOLLOWINGS_PAGE_LIMIT: u32 = 8;

/// Connection-level knobs for [`MediumApi`].
#[derive(Debug, Clone)]
pub struct MediumSettings {
    pub origin: String,
    pub request_timeout: Duration,
}

impl Default for MediumSettings {
    fn default() -> Self {
        Self {
            origin: MEDIUM_ORIGIN.to_string(),
            request_timeout: Duration::from_secs(15),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MediumApi {
    http: HttpClient,
}

impl MediumApi {
    pub fn new(settings: &MediumSettings) -> Result<Self> {
        let http = HttpClient::new(&settings.origin)?.with_timeout(settings.request_timeout);
        Ok(Self { http })
    }

    /// GET, unwrap, and return the envelope's payload.
    async fn payload<P: DeserializeOwned>(&self, path: &str, opts: RequestOpts<'_>) -> Result<P> {
        let body = self.http.get_text(path, opts).await?;
        let envelope: Envelope<P> = transport::decode(&body)?;
        envelope
            .payload
            .ok_or(ScoutError::NotFound { path: "payload" })
    }

    fn json_format() -> RequestOpts<'static> {
        RequestOpts::with_query(vec![("format", Cow::Borrowed("json"))])
    }

    /// `@handle` → internal user id (`payload.user.userId`).
    pub async fn resolve_user_id(&self, handle: &Handle) -> Result<UserId> {
        let payload: ProfilePayload = self
            .payload(&format!("/@{handle}"), Self::json_format())
            .await?;
        let user_id = payload
            .user
            .and_then(|u| u.user_id)
            .ok_or(ScoutError::NotFound {
                path: "payload.user.userId",
            })?;
        tracing::debug!(%handle, %user_id, "medium.resolve_user_id");
        Ok(user_id)
    }

    /// Internal user id → `@handle` (`payload.value.username`).
    pub async fn resolve_handle(&self, user_id: &UserId) -> Result<Handle> {
        let payload: UserPayload = self
            .payload(&format!("/_/api/users/{user_id}"), RequestOpts::default())
            .await?;
        let handle = payload
            .value
            .and_then(|v| v.username)
            .ok_or(ScoutError::NotFound {
                path: "payload.value.username",
            })?;
        tracing::debug!(%user_id, %handle, "medium.resolve_handle");
        Ok(handle)
    }

    /// One page of the accounts `user_id` follows.
    ///
    /// The first page must be requested with `cursor = None`; every later page
    /// with the cursor returned by the page before it.
    pub async fn followings_page(
        &self,
        user_id: &UserId,
        cursor: Option<&Cursor>,
    ) -> Result<FollowingsPage> {
        let opts = match cursor {
            None => RequestOpts::default(),
            Some(c) => RequestOpts::with_query(vec![
                ("limit", Cow::Owned(FOLLOWINGS_PAGE_LIMIT.to_string())),
                ("to", Cow::Borrowed(c.as_str())),
            ]),
        };
        let payload: FollowingPayload = self
            .payload(&format!("/_/api/users/{user_id}/following"), opts)
            .await?;

        let handles = payload
            .value
            .ok_or(ScoutError::NotFound {
                path: "payload.value",
            })?
            .into_iter()
            .map(|u| u.username)
            .collect();
        let next = payload.paging.and_then(|p| p.next).and_then(|n| n.to);

        Ok(FollowingsPage { handles, next })
    }

    /// Ids of the posts referenced by `handle`'s latest-posts page.
    pub async fn latest_posts(&self, handle: &Handle) -> Result<PostReferences> {
        let payload: LatestPayload = self
            .payload(&format!("/@{handle}/latest"), Self::json_format())
            .await?;
        Ok(match payload.references.and_then(|r| r.post) {
            None => PostReferences::Absent,
            Some(posts) => PostReferences::Present(posts.into_values().map(|p| p.id).collect()),
        })
    }

    /// Every public response to `post_id`.
    pub async fn responses(&self, post_id: &PostId) -> Result<Vec<ResponseRecord>> {
        let payload: ResponsesPayload = self
            .payload(
                &format!("/_/api/posts/{post_id}/responses"),
                RequestOpts::default(),
            )
            .await?;
        payload.value.ok_or(ScoutError::NotFound {
            path: "payload.value",
        })
    }
}
