//! Crawl of a user's "following" list.
//!
//! Pagination is an explicit three-state machine. The crawl ends only when a
//! page comes back without `payload.paging.next.to`; any failure on any page is
//! returned as an error instead of a shortened list.
use crate::medium::client::MediumApi;
use crate::medium::error::Result;
use crate::medium::types::{Cursor, Handle, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
enum CrawlState {
    Initial,
    Continuing(Cursor),
    Done,
}

/// Every handle `user_id` follows, in page order. Duplicates across pages are kept.
pub async fn crawl_followings(api: &MediumApi, user_id: &UserId) -> Result<Vec<Handle>> {
    let mut state = CrawlState::Initial;
    let mut followings = Vec::new();
    let mut pages = 0usize;

    loop {
        let cursor = match &state {
            CrawlState::Initial => None,
            CrawlState::Continuing(cursor) => Some(cursor),
            CrawlState::Done => break,
        };

        let page = api.followings_page(user_id, cursor).await?;
        pages += 1;
        tracing::debug!(
            %user_id,
            page = pages,
            cursor = ?cursor.map(Cursor::as_str),
            count = page.handles.len(),
            has_next = page.next.is_some(),
            "medium.followings.page"
        );

        followings.extend(page.handles);
        state = match page.next {
            Some(next) => CrawlState::Continuing(next),
            None => CrawlState::Done,
        };
    }

    tracing::info!(%user_id, pages, total = followings.len(), "medium.followings.done");
    Ok(followings)
}
