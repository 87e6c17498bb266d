use super::{page_or_default, ShootProofApi};
use crate::params::ParameterValue;
use crate::request::ApiCall;
use crate::response::JsonObject;
use crate::Result;

impl ShootProofApi {
    /// `sp.event.get_list`
    pub async fn get_events(&self) -> Result<JsonObject> {
        self.invoke(ApiCall::new("sp.event.get_list")).await
    }

    /// `sp.event.create`
    pub async fn create_event(&self, event_name: &str) -> Result<JsonObject> {
        self.invoke(ApiCall::new("sp.event.create").param("event_name", event_name))
            .await
    }

    /// `sp.event.delete`
    pub async fn delete_event(&self, event_id: impl Into<ParameterValue>) -> Result<JsonObject> {
        self.invoke(ApiCall::new("sp.event.delete").param("event_id", event_id))
            .await
    }

    /// `sp.event.photo_exists`: whether a photo with `photo_name` is already in the event.
    pub async fn photo_exists_in_event(
        &self,
        event_id: impl Into<ParameterValue>,
        photo_name: &str,
    ) -> Result<JsonObject> {
        self.invoke(
            ApiCall::new("sp.event.photo_exists")
                .param("event_id", event_id)
                .param("photo_name", photo_name),
        )
        .await
    }

    /// `sp.event.set_access_level`. `password` is sent empty when `None`.
    pub async fn set_event_access_level(
        &self,
        event_id: impl Into<ParameterValue>,
        access_level: &str,
        password: Option<&str>,
    ) -> Result<JsonObject> {
        self.invoke(
            ApiCall::new("sp.event.set_access_level")
                .param("event_id", event_id)
                .param("access_level", access_level)
                .param("password", password),
        )
        .await
    }

    /// `sp.event.get_photos`, one page at a time (first page when `page` is `None`).
    pub async fn get_event_photos(
        &self,
        event_id: impl Into<ParameterValue>,
        page: Option<u32>,
    ) -> Result<JsonObject> {
        self.invoke(
            ApiCall::new("sp.event.get_photos")
                .param("event_id", event_id)
                .param("page", page_or_default(page)),
        )
        .await
    }
}
