use async_graphql::*;

use crate::errors::DeleteOutcome;
use crate::graphql::types::{Alert, Channel, Device};

/// Why a delete did or did not remove a record
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum DeleteStatus {
    Deleted,
    NotFound,
    StoreError,
}

#[derive(SimpleObject, Debug)]
#[graphql(concrete(name = "DeviceDeletion", params(Device)))]
#[graphql(concrete(name = "ChannelDeletion", params(Channel)))]
#[graphql(concrete(name = "AlertDeletion", params(Alert)))]
pub struct DeletePayload<T: OutputType> {
    pub ok: bool,
    /// The removed record; null unless `ok`
    pub model: Option<T>,
    pub status: DeleteStatus,
}

impl<T: OutputType> DeletePayload<T> {
    pub fn from_outcome<M>(outcome: DeleteOutcome<M>) -> Self
    where
        T: From<M>,
    {
        match outcome {
            DeleteOutcome::Deleted(model) => Self {
                ok: true,
                model: Some(T::from(model)),
                status: DeleteStatus::Deleted,
            },
            DeleteOutcome::NotFound => Self {
                ok: false,
                model: None,
                status: DeleteStatus::NotFound,
            },
            DeleteOutcome::Failed(_) => Self {
                ok: false,
                model: None,
                status: DeleteStatus::StoreError,
            },
        }
    }
}
