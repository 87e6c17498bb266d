use super::ShootProofApi;
use crate::request::ApiCall;
use crate::response::JsonObject;
use crate::Result;

impl ShootProofApi {
    /// `sp.studio.info`
    pub async fn get_studio_info(&self) -> Result<JsonObject> {
        self.invoke(ApiCall::new("sp.studio.info")).await
    }

    /// `sp.studio.set_setting`. A `None` value is sent empty and clears the setting.
    pub async fn set_studio_setting(&self, key: &str, value: Option<&str>) -> Result<JsonObject> {
        self.invoke(
            ApiCall::new("sp.studio.set_setting")
                .param("setting_key", key)
                .param("setting_value", value),
        )
        .await
    }

    /// `sp.studio.get_setting`
    pub async fn get_studio_setting(&self, key: &str) -> Result<JsonObject> {
        self.invoke(ApiCall::new("sp.studio.get_setting").param("setting_key", key))
            .await
    }
}
