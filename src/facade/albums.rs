use super::{page_or_default, ShootProofApi};
use crate::params::ParameterValue;
use crate::request::ApiCall;
use crate::response::JsonObject;
use crate::Result;

impl ShootProofApi {
    /// `sp.album.get_list`
    pub async fn get_event_albums(&self, event_id: impl Into<ParameterValue>) -> Result<JsonObject> {
        self.invoke(ApiCall::new("sp.album.get_list").param("event_id", event_id))
            .await
    }

    /// `sp.album.get_photos`
    pub async fn get_album_photos(
        &self,
        album_id: impl Into<ParameterValue>,
        page: Option<u32>,
    ) -> Result<JsonObject> {
        self.invoke(
            ApiCall::new("sp.album.get_photos")
                .param("album_id", album_id)
                .param("page", page_or_default(page)),
        )
        .await
    }

    /// `sp.album.create`. A `None` parent creates a top-level album.
    pub async fn create_event_album(
        &self,
        event_id: impl Into<ParameterValue>,
        album_name: &str,
        password: Option<&str>,
        parent_album_id: Option<u64>,
    ) -> Result<JsonObject> {
        self.invoke(
            ApiCall::new("sp.album.create")
                .param("event_id", event_id)
                .param("album_name", album_name)
                .param("password", password)
                .param("parent_id", parent_album_id),
        )
        .await
    }

    /// `sp.album.move`. A `None` parent moves the album to the top level.
    pub async fn move_event_album(
        &self,
        album_id: impl Into<ParameterValue>,
        parent_album_id: Option<u64>,
    ) -> Result<JsonObject> {
        self.invoke(
            ApiCall::new("sp.album.move")
                .param("album_id", album_id)
                .param("parent_id", parent_album_id),
        )
        .await
    }

    /// `sp.album.rename`
    pub async fn rename_event_album(
        &self,
        album_id: impl Into<ParameterValue>,
        album_name: &str,
    ) -> Result<JsonObject> {
        self.invoke(
            ApiCall::new("sp.album.rename")
                .param("album_id", album_id)
                .param("album_name", album_name),
        )
        .await
    }

    /// `sp.album.delete`
    pub async fn delete_event_album(&self, album_id: impl Into<ParameterValue>) -> Result<JsonObject> {
        self.invoke(ApiCall::new("sp.album.delete").param("album_id", album_id))
            .await
    }
}
