//! Endpoint HTTP 请求方法

use serde::Serialize;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::types::MessageOperation;

use super::HttpCatalogueClient;

impl HttpCatalogueClient {
    /// POST a form body to the endpoint of `operation`
    pub(crate) async fn post_form<T: Serialize + ?Sized>(
        &self,
        operation: MessageOperation,
        form: &T,
    ) -> Result<()> {
        let url = self.config.endpoint(operation);
        let request = self.client.post(&url).form(form);

        HttpUtils::execute_request_with_retry(request, operation, &url, self.config.max_retries)
            .await
            .map(|_| ())
    }
}
