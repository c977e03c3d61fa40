//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod notifier;
mod player_gateway;
mod table_view;

pub use notifier::Notifier;
#[cfg(test)]
pub use player_gateway::MockPlayerGateway;
pub use player_gateway::{CountPayload, PlayerGateway, PlayerGatewayError};
pub use table_view::PlayerTableView;
