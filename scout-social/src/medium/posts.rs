use crate::medium::client::MediumApi;
use crate::medium::error::Result;
use crate::medium::types::{Handle, PostId, PostReferences};

/// Latest post ids for each handle, flattened in handle order.
///
/// A handle whose latest page has no post references contributes nothing;
/// every other failure aborts the collection.
pub async fn collect_latest_post_ids(api: &MediumApi, handles: &[Handle]) -> Result<Vec<PostId>> {
    let mut post_ids = Vec::new();

    for handle in handles {
        match api.latest_posts(handle).await? {
            PostReferences::Absent => {
                tracing::debug!(%handle, "medium.posts.none");
            }
            PostReferences::Present(ids) => {
                tracing::debug!(%handle, count = ids.len(), "medium.posts.latest");
                post_ids.extend(ids);
            }
        }
    }

    Ok(post_ids)
}
