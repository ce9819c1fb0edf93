use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{constant::TEST_PASSWORD, error::TestError, TestSetup};

/// Role names seeded by the role migration.
pub static SEEDED_ROLES: [&str; 3] = ["admin", "pemilik", "penyewa"];

impl TestSetup {
    /// Insert the role vocabulary the role migration seeds.
    pub async fn seed_roles(&self) -> Result<(), TestError> {
        let roles = SEEDED_ROLES.iter().map(|name| entity::role::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        });

        entity::prelude::Role::insert_many(roles)
            .exec(&self.state.db)
            .await?;

        Ok(())
    }

    /// Insert a user whose password is [`TEST_PASSWORD`].
    ///
    /// Uses the minimum bcrypt cost to keep tests fast.
    pub async fn insert_user(&self, email: &str) -> Result<entity::app_user::Model, TestError> {
        let now = Utc::now().naive_utc();
        let password_hash = bcrypt::hash(TEST_PASSWORD, 4)?;

        Ok(
            entity::prelude::AppUser::insert(entity::app_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(password_hash),
                name: ActiveValue::Set(Some("Test User".to_string())),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }

    /// Insert a user holding a single role.
    pub async fn insert_user_with_role(
        &self,
        email: &str,
        role: &str,
    ) -> Result<entity::app_user::Model, TestError> {
        let user = self.insert_user(email).await?;
        self.assign_role(user.id, role).await?;

        Ok(user)
    }

    /// Grant a role by name, inserting the role row if it is not seeded.
    pub async fn assign_role(&self, user_id: i32, role: &str) -> Result<(), TestError> {
        let role_model = match entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(role))
            .one(&self.state.db)
            .await?
        {
            Some(role_model) => role_model,
            None => {
                entity::prelude::Role::insert(entity::role::ActiveModel {
                    name: ActiveValue::Set(role.to_string()),
                    ..Default::default()
                })
                .exec_with_returning(&self.state.db)
                .await?
            }
        };

        entity::prelude::UserRole::insert(entity::user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role_id: ActiveValue::Set(role_model.id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec(&self.state.db)
        .await?;

        Ok(())
    }
}
