pub mod alert_service;
pub mod annotator;
pub mod channel_service;
pub mod device_service;
pub mod launcher;
pub mod takeover;

pub use alert_service::*;
pub use annotator::*;
pub use channel_service::*;
pub use device_service::*;
pub use launcher::*;
pub use takeover::*;
