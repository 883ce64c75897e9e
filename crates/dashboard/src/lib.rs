//! Client library for the rig fleet dashboard: REST client, schema-driven
//! panel renderer, action dispatcher, and the WebSocket push channel.

pub mod api;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod push;
pub mod view;

pub use api::FleetApiClient;
pub use context::Dashboard;
pub use error::{DashboardError, Result};
