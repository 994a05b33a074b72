//! [`ActorEntity`] implementation for the [`Customer`] model.

use super::error::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use resource_actor::ActorEntity;

impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = ();
    type ActionResult = ();
    type Error = CustomerError;

    fn id(&self) -> &CustomerId {
        &self.id
    }

    /// Rejects registrations without a name or with an email lacking `@`.
    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(CustomerError::ValidationError("name is empty".into()));
        }
        if !params.email.contains('@') {
            return Err(CustomerError::ValidationError(format!(
                "invalid email: {}",
                params.email
            )));
        }
        Ok(Customer::new(id, params.name, params.email))
    }

    fn on_update(&mut self, update: CustomerUpdate) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), Self::Error> {
        Ok(())
    }
}
