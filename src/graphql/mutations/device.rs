use async_graphql::*;
use tracing::debug;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::core_error_to_graphql_error;
use crate::graphql::types::{DeletePayload, Device, DeviceChangesInput, DeviceInput};

#[derive(Default)]
pub struct DeviceMutation;

#[Object]
impl DeviceMutation {
    /// Create a device and return it with its derived fields
    async fn create_device(&self, ctx: &Context<'_>, model: DeviceInput) -> Result<Device> {
        let context = ctx.data::<GraphQLContext>()?;
        let device = context
            .app
            .create_device(model.into())
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(Device::from(device))
    }

    /// Update a device; fails when no device has the given id
    async fn update_device(
        &self,
        ctx: &Context<'_>,
        id: i32,
        changes: DeviceChangesInput,
    ) -> Result<Device> {
        let context = ctx.data::<GraphQLContext>()?;
        debug!("updateDevice {}", id);
        let device = context
            .app
            .update_device(id, changes.into())
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(Device::from(device))
    }

    /// Delete a device. Never fails; `status` tells why `ok` is false.
    async fn delete_device(&self, ctx: &Context<'_>, id: i32) -> Result<DeletePayload<Device>> {
        let context = ctx.data::<GraphQLContext>()?;
        let outcome = context.app.delete_device(id).await;
        Ok(DeletePayload::from_outcome(outcome))
    }
}
