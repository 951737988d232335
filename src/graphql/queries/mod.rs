use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::core_error_to_graphql_error;
use crate::graphql::types::{Alert, Channel, Configuration, Device, TakeoverPayload};

pub struct Query;

#[Object]
impl Query {
    /// All devices with their derived fields
    async fn devices(&self, ctx: &Context<'_>) -> Result<Vec<Device>> {
        let context = ctx.data::<GraphQLContext>()?;
        let devices = context
            .app
            .list_devices()
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(devices.into_iter().map(Device::from).collect())
    }

    async fn device(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Device>> {
        let context = ctx.data::<GraphQLContext>()?;
        let device = context
            .app
            .get_device(id)
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(device.map(Device::from))
    }

    async fn channels(&self, ctx: &Context<'_>) -> Result<Vec<Channel>> {
        let context = ctx.data::<GraphQLContext>()?;
        let channels = context
            .app
            .channel_service()
            .find_all()
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(channels.into_iter().map(Channel::from).collect())
    }

    async fn channel(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Channel>> {
        let context = ctx.data::<GraphQLContext>()?;
        let channel = context
            .app
            .channel_service()
            .find(id)
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(channel.map(Channel::from))
    }

    /// All alerts, newest first
    async fn alerts(&self, ctx: &Context<'_>) -> Result<Vec<Alert>> {
        let context = ctx.data::<GraphQLContext>()?;
        let alerts = context
            .app
            .alert_service()
            .find_all()
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(alerts.into_iter().map(Alert::from).collect())
    }

    async fn alert(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Alert>> {
        let context = ctx.data::<GraphQLContext>()?;
        let alert = context
            .app
            .alert_service()
            .find(id)
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(alert.map(Alert::from))
    }

    /// The running takeover, if any
    async fn takeover(&self, ctx: &Context<'_>) -> Result<TakeoverPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        Ok(TakeoverPayload::from(context.app.takeover_status().await))
    }

    async fn configuration(&self, ctx: &Context<'_>) -> Result<Configuration> {
        let context = ctx.data::<GraphQLContext>()?;
        Ok(Configuration::from(context.app.configuration()))
    }
}
