//! Typed clients, one per renderer service

mod av_transport;
mod connection_manager;
mod rendering_control;

pub use av_transport::AvTransportClient;
pub use connection_manager::ConnectionManagerClient;
pub use rendering_control::RenderingControlClient;
