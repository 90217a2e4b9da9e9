//! End-to-end discovery: starting handle in, handles of interesting responders out.
use crate::medium::client::MediumApi;
use crate::medium::error::Result;
use crate::medium::filter::ResponseFilter;
use crate::medium::followings::crawl_followings;
use crate::medium::pacing::Pacer;
use crate::medium::posts::collect_latest_post_ids;
use crate::medium::responses::collect_responses;
use crate::medium::types::Handle;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct Scout {
    api: MediumApi,
    pacer: Arc<dyn Pacer>,
    filter: ResponseFilter,
}

impl Scout {
    pub fn new(api: MediumApi, pacer: Arc<dyn Pacer>, filter: ResponseFilter) -> Self {
        Self { api, pacer, filter }
    }

    /// Run every stage in sequence against the current time.
    pub async fn discover(&self, handle: &Handle) -> Result<Vec<Handle>> {
        self.discover_at(handle, OffsetDateTime::now_utc()).await
    }

    /// Run every stage in sequence, judging recency against `now`.
    ///
    /// The result keeps one entry per qualifying response, so the same person
    /// can appear more than once.
    pub async fn discover_at(&self, handle: &Handle, now: OffsetDateTime) -> Result<Vec<Handle>> {
        let user_id = self.api.resolve_user_id(handle).await?;
        tracing::info!(target: "scout.stage", %handle, %user_id, "resolved starting user");

        let followings = crawl_followings(&self.api, &user_id).await?;
        tracing::info!(target: "scout.stage", count = followings.len(), "followings collected");

        let post_ids = collect_latest_post_ids(&self.api, &followings).await?;
        tracing::info!(target: "scout.stage", count = post_ids.len(), "latest posts collected");

        let responses = collect_responses(&self.api, &*self.pacer, &post_ids).await?;
        tracing::info!(target: "scout.stage", count = responses.len(), "responses collected");

        let creators = self.filter.select_creators(&responses, now);
        tracing::info!(
            target: "scout.stage",
            count = creators.len(),
            min_recommends = self.filter.min_recommends,
            window_days = self.filter.window.whole_days(),
            "responses selected"
        );

        let mut handles = Vec::with_capacity(creators.len());
        for creator in &creators {
            handles.push(self.api.resolve_handle(creator).await?);
        }
        tracing::info!(target: "scout.stage", count = handles.len(), "creators resolved");

        Ok(handles)
    }
}
