use async_graphql::*;
use tracing::debug;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::core_error_to_graphql_error;
use crate::graphql::types::TakeoverPayload;

#[derive(Default)]
pub struct TakeoverMutation;

#[Object]
impl TakeoverMutation {
    /// Take exclusive control of a channel, replacing any running takeover
    async fn start_takeover(&self, ctx: &Context<'_>, channel: i32) -> Result<TakeoverPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        debug!("startTakeover {}", channel);
        let session = context
            .app
            .start_takeover(channel)
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(TakeoverPayload::from(session))
    }

    async fn end_takeover(&self, ctx: &Context<'_>) -> Result<TakeoverPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        context.app.end_takeover().await;
        Ok(TakeoverPayload::inactive())
    }
}
