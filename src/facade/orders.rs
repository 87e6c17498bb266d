use super::{page_or_default, ShootProofApi};
use crate::params::ParameterValue;
use crate::request::ApiCall;
use crate::response::JsonObject;
use crate::Result;

impl ShootProofApi {
    /// `sp.order.get_list`
    pub async fn get_order_list(&self, page: Option<u32>) -> Result<JsonObject> {
        self.invoke(ApiCall::new("sp.order.get_list").param("page", page_or_default(page)))
            .await
    }

    /// `sp.order.get_details`
    pub async fn get_order_details(&self, order_id: impl Into<ParameterValue>) -> Result<JsonObject> {
        self.invoke(ApiCall::new("sp.order.get_details").param("order_id", order_id))
            .await
    }
}
