use super::{page_or_default, ShootProofApi};
use crate::params::ParameterValue;
use crate::request::ApiCall;
use crate::response::JsonObject;
use crate::Result;

impl ShootProofApi {
    /// `sp.mobile_app.get_list`. `brand_id` narrows the listing and is left
    /// off the request entirely when `None`.
    pub async fn get_mobile_apps(&self, brand_id: Option<u64>, page: Option<u32>) -> Result<JsonObject> {
        let mut call = ApiCall::new("sp.mobile_app.get_list");
        if let Some(brand_id) = brand_id {
            call = call.param("brand_id", brand_id);
        }
        self.invoke(call.param("page", page_or_default(page))).await
    }

    /// `sp.mobile_app.get_photos`
    pub async fn get_mobile_app_photos(
        &self,
        mobile_app_id: impl Into<ParameterValue>,
    ) -> Result<JsonObject> {
        self.invoke(ApiCall::new("sp.mobile_app.get_photos").param("mobile_app_id", mobile_app_id))
            .await
    }
}
