use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{cmp_sequential_ids, User, UserCreate, UserPatch, UserRole};
use crate::user_actor::UserError;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    #[instrument(skip(self, user), fields(user_email = %user.email))]
    pub async fn create_user(&self, user: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        let user = self.inner.create(user).await?;
        info!(user_id = %user.id, "User created");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: String, patch: UserPatch) -> Result<User, UserError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    /// Registered users without the admin role.
    #[instrument(skip(self))]
    pub async fn list_customers(&self) -> Result<Vec<User>, UserError> {
        debug!("Sending request");
        let mut customers: Vec<User> = self
            .inner
            .list()
            .await?
            .into_iter()
            .filter(|user| user.role == UserRole::Customer)
            .collect();
        customers.sort_by(|a, b| cmp_sequential_ids(&a.id, &b.id));
        Ok(customers)
    }
}
