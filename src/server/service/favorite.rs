use sea_orm::DatabaseConnection;

use crate::{
    model::kos::KosDto,
    server::{
        data::{gambar::GambarKosRepository, kos::KosRepository, like::UserLikesRepository},
        error::{kos::KosError, Error},
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Likes the listing, or removes the like when one exists
    ///
    /// Returns whether the listing is liked afterwards.
    pub async fn toggle_like(&self, user_id: i32, kos_id: i32) -> Result<bool, Error> {
        if KosRepository::new(self.db).get(kos_id).await?.is_none() {
            return Err(KosError::NotFound(kos_id).into());
        }

        let like_repository = UserLikesRepository::new(self.db);

        if like_repository.find(user_id, kos_id).await?.is_some() {
            like_repository.delete(user_id, kos_id).await?;

            return Ok(false);
        }

        like_repository.create(user_id, kos_id).await?;

        Ok(true)
    }

    pub async fn like_status(&self, user_id: i32, kos_id: i32) -> Result<bool, Error> {
        Ok(UserLikesRepository::new(self.db)
            .find(user_id, kos_id)
            .await?
            .is_some())
    }

    /// Liked listings with their images, most recently liked first
    pub async fn list_favorites(&self, user_id: i32) -> Result<Vec<KosDto>, Error> {
        let kos = UserLikesRepository::new(self.db)
            .list_kos_for_user(user_id)
            .await?;

        let ids: Vec<i32> = kos.iter().map(|k| k.id).collect();
        let images = GambarKosRepository::new(self.db)
            .list_by_kos_ids(&ids)
            .await?;

        Ok(kos
            .into_iter()
            .map(|k| KosDto::from_model(k, &images))
            .collect())
    }
}

#[cfg(test)]
mod tests {

    mod toggle_like {
        use kosku_test_utils::prelude::*;

        use crate::server::{
            error::{kos::KosError, Error},
            service::favorite::FavoriteService,
        };

        /// Expect toggling twice to like and then unlike
        #[tokio::test]
        async fn alternates_liked_state() -> Result<(), TestError> {
            let test = test_setup_with_kos_tables!()?;
            let owner = test.insert_user("owner@example.com").await?;
            let tenant = test.insert_user("tenant@example.com").await?;
            let kos = test.insert_kos(owner.id).await?;

            let service = FavoriteService::new(&test.state.db);

            assert!(service.toggle_like(tenant.id, kos.id).await.unwrap());
            assert!(service.like_status(tenant.id, kos.id).await.unwrap());
            assert_eq!(service.list_favorites(tenant.id).await.unwrap().len(), 1);

            assert!(!service.toggle_like(tenant.id, kos.id).await.unwrap());
            assert!(!service.like_status(tenant.id, kos.id).await.unwrap());
            assert!(service.list_favorites(tenant.id).await.unwrap().is_empty());

            Ok(())
        }

        /// Expect not found for a missing listing
        #[tokio::test]
        async fn missing_kos_is_not_found() -> Result<(), TestError> {
            let test = test_setup_with_kos_tables!()?;
            let tenant = test.insert_user("tenant@example.com").await?;

            let service = FavoriteService::new(&test.state.db);
            let result = service.toggle_like(tenant.id, 404).await;

            assert!(matches!(result, Err(Error::KosError(KosError::NotFound(404)))));

            Ok(())
        }
    }
}
