use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::header::{ACCEPT, AUTHORIZATION};

use crate::{
    builder::ClientBuilder,
    error::Error,
    model::{SnapErrorBody, SnapRequest, SnapResponse},
};

/// Cheaply cloneable Snap API client.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    server_key: String,
    snap_url: String,
    production: bool,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_parts(
        http: reqwest::Client,
        server_key: String,
        snap_url: String,
        production: bool,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http,
                server_key,
                snap_url,
                production,
            }),
        }
    }

    pub fn server_key(&self) -> &str {
        &self.inner.server_key
    }

    pub fn snap_url(&self) -> &str {
        &self.inner.snap_url
    }

    pub fn is_production(&self) -> bool {
        self.inner.production
    }

    /// Creates a Snap transaction and returns its token and redirect URL.
    ///
    /// # Returns
    /// - `Ok(SnapResponse)` - Snap accepted the transaction
    /// - `Err(Error::Api)` - Snap rejected the request, with its error messages
    /// - `Err(Error::Reqwest)` - Transport failure or unparsable body
    pub async fn create_transaction(&self, request: &SnapRequest) -> Result<SnapResponse, Error> {
        let url = format!("{}/snap/v1/transactions", self.inner.snap_url);

        tracing::debug!(
            order_id = %request.transaction_details.order_id,
            gross_amount = request.transaction_details.gross_amount,
            "Creating Snap transaction"
        );

        let response = self
            .inner
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, self.authorization_header())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let messages = match response.json::<SnapErrorBody>().await {
                Ok(body) => body.error_messages,
                Err(_) => Vec::new(),
            };

            return Err(Error::Api {
                status: status.as_u16(),
                messages,
            });
        }

        Ok(response.json::<SnapResponse>().await?)
    }

    fn authorization_header(&self) -> String {
        format!(
            "Basic {}",
            STANDARD.encode(format!("{}:", self.inner.server_key))
        )
    }
}
