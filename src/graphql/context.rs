use crate::app_context::AppContext;

#[derive(Clone)]
pub struct GraphQLContext {
    pub app: AppContext,
}

impl GraphQLContext {
    pub fn new(app: AppContext) -> Self {
        Self { app }
    }
}
