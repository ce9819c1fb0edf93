use sea_orm::DatabaseConnection;

use crate::{
    model::kos::GambarDto,
    server::{
        data::gambar::GambarKosRepository,
        error::{kos::KosError, Error},
        service::kos::KosService,
        storage::LocalStorage,
        util::generate::object_id,
    },
};

/// Image extensions accepted for listing photos
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Lowercased extension of `file_name` when it is an accepted image type
pub fn image_extension(file_name: &str) -> Result<String, KosError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(KosError::UnsupportedImage(file_name.to_string()))
    }
}

pub struct ImageService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a LocalStorage,
}

impl<'a> ImageService<'a> {
    /// Creates a new instance of [`ImageService`]
    pub fn new(db: &'a DatabaseConnection, storage: &'a LocalStorage) -> Self {
        Self { db, storage }
    }

    /// Stores an uploaded photo for a listing the user may modify
    ///
    /// The object is written first; if recording it fails the object is removed again.
    pub async fn upload(
        &self,
        user_id: i32,
        kos_id: i32,
        tipe_gambar_id: i32,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<GambarDto, Error> {
        let kos = KosService::new(self.db, self.storage)
            .get_modifiable(user_id, kos_id)
            .await?;

        let gambar_repository = GambarKosRepository::new(self.db);
        if !gambar_repository.tipe_exists(tipe_gambar_id).await? {
            return Err(KosError::UnknownImageType(tipe_gambar_id).into());
        }

        let extension = image_extension(file_name)?;
        let object_name = format!("kos/{}/{}.{}", kos.id, object_id(), extension);

        let url = self.storage.put(&object_name, bytes).await?;

        let image = match gambar_repository
            .create(kos.id, tipe_gambar_id, &object_name, &url)
            .await
        {
            Ok(image) => image,
            Err(e) => {
                if let Err(remove_err) = self.storage.remove(&object_name).await {
                    tracing::warn!(
                        "Failed to remove orphaned image {}: {}",
                        object_name,
                        remove_err
                    );
                }

                return Err(e.into());
            }
        };

        tracing::debug!("Stored image {} for kos ID {}", object_name, kos.id);

        Ok(image.into())
    }

    /// Deletes an image record and its stored object
    pub async fn delete(&self, user_id: i32, image_id: i32) -> Result<(), Error> {
        let gambar_repository = GambarKosRepository::new(self.db);

        let Some(image) = gambar_repository.get(image_id).await? else {
            return Err(KosError::ImageNotFound(image_id).into());
        };

        KosService::new(self.db, self.storage)
            .get_modifiable(user_id, image.kos_id)
            .await?;

        gambar_repository.delete(image.id).await?;
        self.storage.remove(&image.object_name).await?;

        Ok(())
    }
}
