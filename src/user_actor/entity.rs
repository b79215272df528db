use chrono::Utc;
use validator::{Validate, ValidateEmail};

use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate, UserPatch};
use super::error::UserError;

impl Entity for User {
    const KIND: &'static str = "user";

    type Id = String;
    type CreateParams = UserCreate;
    type Patch = UserPatch;
    type Action = ();
    type ActionResult = ();
    type Error = UserError;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new User from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the user
    /// * `params` - Name, email, optional contact number and role
    fn from_create_params(id: String, params: UserCreate) -> Result<Self, UserError> {
        params
            .validate()
            .map_err(|e| UserError::ValidationError(e.to_string()))?;

        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            contact_number: params.contact_number,
            role: params.role,
            created_at: Utc::now(),
        })
    }

    /// Updates the user's profile information.
    ///
    /// # Fields Updated
    /// - `name`: User's display name
    /// - `email`: User's email address
    /// - `contact_number`: User's phone number
    fn on_update(&mut self, patch: UserPatch) -> Result<(), UserError> {
        if let Some(email) = patch.email {
            if !email.validate_email() {
                return Err(UserError::ValidationError(format!("invalid email: {email}")));
            }
            self.email = email;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(contact_number) = patch.contact_number {
            self.contact_number = Some(contact_number);
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), UserError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;

    #[test]
    fn test_create_requires_valid_email() {
        let err = User::from_create_params(
            "user_1".to_string(),
            UserCreate::customer("Alice", "alice-at-example"),
        )
        .unwrap_err();
        assert!(matches!(err, UserError::ValidationError(_)));

        let admin = User::from_create_params(
            "user_2".to_string(),
            UserCreate::admin("Front Desk", "desk@hotel.example"),
        )
        .unwrap();
        assert_eq!(admin.role, UserRole::Admin);
        assert!(admin.is_admin());
    }
}
