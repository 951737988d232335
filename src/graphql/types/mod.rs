pub mod alert;
pub mod channel;
pub mod configuration;
pub mod deletion;
pub mod device;
pub mod takeover;

pub use alert::*;
pub use channel::*;
pub use configuration::*;
pub use deletion::*;
pub use device::*;
pub use takeover::*;

use async_graphql::MaybeUndefined;

/// Maps an input field onto a change: absent leaves the value alone, `null` clears it.
pub(crate) fn optional_change<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(value) => Some(Some(value)),
    }
}
