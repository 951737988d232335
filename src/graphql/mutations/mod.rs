// Mutation root, split by entity and by collaborator.

mod alert;
mod channel;
mod configuration;
mod connection;
mod device;
mod takeover;

use async_graphql::*;

#[derive(Default, MergedObject)]
pub struct Mutation(
    pub device::DeviceMutation,
    pub channel::ChannelMutation,
    pub alert::AlertMutation,
    pub connection::ConnectionMutation,
    pub takeover::TakeoverMutation,
    pub configuration::ConfigurationMutation,
);
