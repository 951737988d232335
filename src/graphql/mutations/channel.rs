use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::core_error_to_graphql_error;
use crate::graphql::types::{Channel, ChannelChangesInput, ChannelInput, DeletePayload};

#[derive(Default)]
pub struct ChannelMutation;

#[Object]
impl ChannelMutation {
    async fn create_channel(&self, ctx: &Context<'_>, model: ChannelInput) -> Result<Channel> {
        let context = ctx.data::<GraphQLContext>()?;
        let channel = context
            .app
            .channel_service()
            .create(model.into())
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(Channel::from(channel))
    }

    async fn update_channel(
        &self,
        ctx: &Context<'_>,
        id: i32,
        changes: ChannelChangesInput,
    ) -> Result<Channel> {
        let context = ctx.data::<GraphQLContext>()?;
        let channel = context
            .app
            .channel_service()
            .update(id, changes.into())
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(Channel::from(channel))
    }

    async fn delete_channel(&self, ctx: &Context<'_>, id: i32) -> Result<DeletePayload<Channel>> {
        let context = ctx.data::<GraphQLContext>()?;
        let outcome = context.app.delete_channel(id).await;
        Ok(DeletePayload::from_outcome(outcome))
    }
}
