use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::{Result, UserDeckError};
use crate::types::User;

pub struct UsersClient {
    http: Client,
    endpoint: Url,
}

impl UsersClient {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("userdeck/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the user list. A JSON `null` body yields an empty list.
    pub async fn fetch_users(&self) -> Result<Vec<User>> {
        debug!(endpoint = %self.endpoint, "requesting user list");

        let response = self.http.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UserDeckError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "received user list body");

        let users: Option<Vec<User>> = serde_json::from_slice(&body)?;
        Ok(users.unwrap_or_default())
    }
}
