use sea_orm::DatabaseConnection;

use crate::{
    model::user::RoleFlagsDto,
    server::{
        data::{role::RoleRepository, user::UserRepository},
        error::{validation::ValidationError, Error},
        model::role::RoleName,
    },
};

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    /// Creates a new instance of [`RoleService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_roles(&self, user_id: i32) -> Result<RoleFlagsDto, Error> {
        let roles = RoleRepository::new(self.db).get_role_names(user_id).await?;

        Ok(RoleFlagsDto::from_roles(roles))
    }

    /// Whether the user holds `role`, counting the legacy tenant alias
    pub async fn has_role(&self, user_id: i32, role: RoleName) -> Result<bool, Error> {
        Ok(RoleRepository::new(self.db)
            .has_any_role(user_id, role.stored_names())
            .await?)
    }

    /// Whether the user holds any of `roles`
    pub async fn has_any_role(&self, user_id: i32, roles: &[RoleName]) -> Result<bool, Error> {
        let names: Vec<&str> = roles
            .iter()
            .flat_map(|role| role.stored_names().iter().copied())
            .collect();

        Ok(RoleRepository::new(self.db)
            .has_any_role(user_id, &names)
            .await?)
    }

    /// Grants `role` to the user
    ///
    /// Returns `false` when the user already held the role.
    pub async fn assign_role(&self, user_id: i32, role: &str) -> Result<bool, Error> {
        let role_repository = RoleRepository::new(self.db);

        let Some(role) = RoleName::parse(role.trim()) else {
            return Err(ValidationError::Invalid(format!(
                "Unknown role {:?}, expected admin, pemilik or penyewa",
                role
            ))
            .into());
        };

        if UserRepository::new(self.db).get(user_id).await?.is_none() {
            return Err(ValidationError::Invalid(format!("User ID {} not found", user_id)).into());
        }

        let Some(role_model) = role_repository.find_by_name(role.as_str()).await? else {
            return Err(Error::InternalError(format!(
                "Role {} is missing from the role table",
                role
            )));
        };

        if role_repository.is_assigned(user_id, role_model.id).await? {
            return Ok(false);
        }

        role_repository.assign(user_id, role_model.id).await?;

        tracing::info!("Assigned role {} to user ID {}", role, user_id);

        Ok(true)
    }
}
