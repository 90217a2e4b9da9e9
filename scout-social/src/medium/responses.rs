use crate::medium::client::MediumApi;
use crate::medium::error::Result;
use crate::medium::pacing::Pacer;
use crate::medium::types::{PostId, ResponseRecord};

/// All responses to every post, in post order.
///
/// The pacer runs once per post, after its fetch, including the last one.
pub async fn collect_responses(
    api: &MediumApi,
    pacer: &dyn Pacer,
    post_ids: &[PostId],
) -> Result<Vec<ResponseRecord>> {
    let mut records = Vec::new();

    for post_id in post_ids {
        let batch = api.responses(post_id).await?;
        tracing::debug!(%post_id, count = batch.len(), "medium.responses.post");
        records.extend(batch);
        pacer.pause().await;
    }

    Ok(records)
}
