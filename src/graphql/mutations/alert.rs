use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::core_error_to_graphql_error;
use crate::graphql::types::{Alert, AlertChangesInput, AlertInput, DeletePayload};

#[derive(Default)]
pub struct AlertMutation;

#[Object]
impl AlertMutation {
    async fn create_alert(&self, ctx: &Context<'_>, model: AlertInput) -> Result<Alert> {
        let context = ctx.data::<GraphQLContext>()?;
        let alert = context
            .app
            .alert_service()
            .create(model.into())
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(Alert::from(alert))
    }

    async fn update_alert(
        &self,
        ctx: &Context<'_>,
        id: i32,
        changes: AlertChangesInput,
    ) -> Result<Alert> {
        let context = ctx.data::<GraphQLContext>()?;
        let alert = context
            .app
            .alert_service()
            .update(id, changes.into())
            .await
            .map_err(core_error_to_graphql_error)?;

        Ok(Alert::from(alert))
    }

    async fn delete_alert(&self, ctx: &Context<'_>, id: i32) -> Result<DeletePayload<Alert>> {
        let context = ctx.data::<GraphQLContext>()?;
        let outcome = context.app.delete_alert(id).await;
        Ok(DeletePayload::from_outcome(outcome))
    }
}
