use async_graphql::*;
use tracing::debug;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::core_error_to_graphql_error;

#[derive(Default)]
pub struct ConnectionMutation;

#[Object]
impl ConnectionMutation {
    /// Launch the app for every supported device
    async fn connect_all(&self, ctx: &Context<'_>) -> Result<bool> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .app
            .connect_all_devices()
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(true)
    }

    /// Launch the app for one device; false when the device does not exist
    async fn connect(&self, ctx: &Context<'_>, id: i32) -> Result<bool> {
        let context = ctx.data::<GraphQLContext>()?;
        debug!("connect {}", id);
        context
            .app
            .connect_device(id)
            .await
            .map_err(core_error_to_graphql_error)
    }
}
