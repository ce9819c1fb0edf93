//! Local directory acting as object storage for listing images.
//!
//! Objects are addressed by a relative name such as `kos/12/<id>.jpg`, written under
//! `UPLOAD_DIR`, and served to clients from `PUBLIC_ASSET_URL/<name>`.

use std::{
    io,
    path::{Component, Path, PathBuf},
    sync::Arc,
};

#[derive(Clone)]
pub struct LocalStorage {
    inner: Arc<StorageInner>,
}

struct StorageInner {
    root: PathBuf,
    public_url: String,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>, public_url: &str) -> Self {
        Self {
            inner: Arc::new(StorageInner {
                root: root.into(),
                public_url: public_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    pub fn root(&self) -> &Path {
        &self.inner.root
    }

    /// Public URL an object is served from.
    pub fn public_url(&self, object_name: &str) -> String {
        format!("{}/{}", self.inner.public_url, object_name)
    }

    /// Writes an object, creating parent directories, and returns its public URL.
    pub async fn put(&self, object_name: &str, bytes: &[u8]) -> Result<String, io::Error> {
        let path = self.path_for(object_name)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;

        Ok(self.public_url(object_name))
    }

    /// Removes an object; an already missing object is not an error.
    pub async fn remove(&self, object_name: &str) -> Result<(), io::Error> {
        let path = self.path_for(object_name)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    fn path_for(&self, object_name: &str) -> Result<PathBuf, io::Error> {
        let relative = Path::new(object_name);
        let is_plain = !object_name.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));

        if !is_plain {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid object name: {object_name}"),
            ));
        }

        Ok(self.inner.root.join(relative))
    }
}
