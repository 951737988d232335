use async_graphql::*;

use crate::config::ConfigurationChanges;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Configuration, ConfigurationInput};

#[derive(Default)]
pub struct ConfigurationMutation;

#[Object]
impl ConfigurationMutation {
    /// Returns the running configuration. Changes are accepted but not yet applied.
    async fn update_configuration(
        &self,
        ctx: &Context<'_>,
        changes: ConfigurationInput,
    ) -> Result<Configuration> {
        let context = ctx.data::<GraphQLContext>()?;
        let changes = ConfigurationChanges::from(changes);
        Ok(Configuration::from(
            context.app.update_configuration(&changes),
        ))
    }
}
