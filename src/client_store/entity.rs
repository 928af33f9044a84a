//! Entity trait implementation for the Client domain type.

use super::actions::{ClientAction, ClientActionResult};
use crate::framework::Entity;
use crate::model::{Client, ClientCreate, ClientId};

impl Entity for Client {
    type Id = ClientId;
    type CreateParams = ClientCreate;
    type Action = ClientAction;
    type ActionResult = ClientActionResult;

    fn from_create_params(id: ClientId, params: ClientCreate) -> Result<Self, String> {
        Ok(Self::new(id, params.name, params.delivery_address, params.contact))
    }

    fn handle_action(&mut self, action: ClientAction) -> Result<ClientActionResult, String> {
        match action {
            ClientAction::AddOrder(order) => {
                if order.client_id != self.id {
                    return Err(format!("{} belongs to {}, not {}", order.id, order.client_id, self.id));
                }
                self.add_order(order);
                Ok(ClientActionResult::AddOrder(self.orders().len()))
            }
        }
    }
}
