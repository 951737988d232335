pub mod alerts;
pub mod channels;
pub mod devices;
