use super::ShootProofApi;
use crate::params::{FileAttachment, ParameterValue};
use crate::request::ApiCall;
use crate::response::JsonObject;
use crate::{ApiError, Result};
use std::path::Path;

const PHOTO_FIELD: &str = "photo";

fn attachment_from_path(path: &Path) -> Result<FileAttachment> {
    if path.as_os_str().is_empty() {
        return Err(ApiError::missing_argument(PHOTO_FIELD));
    }
    Ok(FileAttachment::new(path))
}

impl ShootProofApi {
    /// `sp.photo.upload` of the file at `path`.
    ///
    /// The file is checked before the request is sent: a path that does not
    /// name a readable regular file fails with
    /// [`ApiError::InvalidAttachment`].
    pub async fn upload_photo_from_path(
        &self,
        event_id: impl Into<ParameterValue>,
        path: impl AsRef<Path>,
        album_id: Option<u64>,
    ) -> Result<JsonObject> {
        let photo = attachment_from_path(path.as_ref())?;
        self.upload_photo(event_id, photo, album_id).await
    }

    /// `sp.photo.upload` with explicit attachment metadata. `album_id` is sent
    /// empty when `None`, which files the photo at the event's top level.
    pub async fn upload_photo(
        &self,
        event_id: impl Into<ParameterValue>,
        photo: FileAttachment,
        album_id: Option<u64>,
    ) -> Result<JsonObject> {
        self.invoke(
            ApiCall::new("sp.photo.upload")
                .param("event_id", event_id)
                .param("album_id", album_id)
                .attach(PHOTO_FIELD, photo),
        )
        .await
    }

    /// `sp.photo.update`: replace the image behind `photo_id`.
    pub async fn update_photo_from_path(
        &self,
        photo_id: impl Into<ParameterValue>,
        path: impl AsRef<Path>,
    ) -> Result<JsonObject> {
        let photo = attachment_from_path(path.as_ref())?;
        self.invoke(
            ApiCall::new("sp.photo.update")
                .param("photo_id", photo_id)
                .attach(PHOTO_FIELD, photo),
        )
        .await
    }

    /// `sp.photo.delete`
    pub async fn delete_photo(&self, photo_id: impl Into<ParameterValue>) -> Result<JsonObject> {
        self.invoke(ApiCall::new("sp.photo.delete").param("photo_id", photo_id))
            .await
    }
}
