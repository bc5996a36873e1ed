// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! App client management
//!
//! CRUD wrappers for `api/apps/{app}/clients` plus client-credential
//! token creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::ApiUrlConfig;
use crate::error::{Error, Result};
use crate::http::Request;
use crate::network::ApiClient;

/// A client registered for an app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppClientDto {
    pub id: String,
    pub name: String,
    pub secret: String,
    pub expires_utc: DateTime<Utc>,
}

/// Payload for registering a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateAppClientDto {
    pub id: String,
}

/// Payload for renaming a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateAppClientDto {
    pub name: String,
}

/// Token issued for a client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessTokenDto {
    pub access_token: String,
    pub token_type: String,
}

/// Service for an app's API clients
#[derive(Clone)]
pub struct AppClientsService {
    client: ApiClient,
    api_url: ApiUrlConfig,
}

impl AppClientsService {
    pub fn new(client: ApiClient, api_url: ApiUrlConfig) -> Self {
        Self { client, api_url }
    }

    /// List the clients of an app
    pub async fn get_clients(&self, app_name: &str) -> Result<Vec<AppClientDto>> {
        let url = self.api_url.build_url(&format!("api/apps/{}/clients", app_name));

        self.client
            .get(&url)
            .await
            .and_then(|response| response.json())
            .map_err(|e| Error::api("Failed to load clients. Please reload.", e))
    }

    /// Register a new client
    pub async fn post_client(
        &self,
        app_name: &str,
        dto: &CreateAppClientDto,
    ) -> Result<AppClientDto> {
        let url = self.api_url.build_url(&format!("api/apps/{}/clients", app_name));

        self.client
            .post(&url, dto)
            .await
            .and_then(|response| response.json())
            .map_err(|e| Error::api("Failed to add client. Please reload.", e))
    }

    /// Rename a client
    pub async fn update_client(
        &self,
        app_name: &str,
        id: &str,
        dto: &UpdateAppClientDto,
    ) -> Result<()> {
        let url = self
            .api_url
            .build_url(&format!("api/apps/{}/clients/{}", app_name, id));

        self.client
            .put(&url, dto)
            .await
            .map(|_| ())
            .map_err(|e| Error::api("Failed to revoke client. Please reload.", e))
    }

    /// Revoke a client
    pub async fn delete_client(&self, app_name: &str, id: &str) -> Result<()> {
        let url = self
            .api_url
            .build_url(&format!("api/apps/{}/clients/{}", app_name, id));

        self.client
            .delete(&url)
            .await
            .map(|_| ())
            .map_err(|e| Error::api("Failed to revoke client. Please reload.", e))
    }

    /// Exchange client credentials for an access token
    ///
    /// Sent anonymously: the client's own credentials authenticate it.
    pub async fn create_token(
        &self,
        app_name: &str,
        client: &AppClientDto,
    ) -> Result<AccessTokenDto> {
        let url = self.api_url.build_url("identity-server/connect/token");
        let client_id = format!("{}:{}", app_name, client.id);

        let request = Request::post(&url)
            .map(|request| {
                request.anonymous().form(&[
                    ("grant_type", "client_credentials"),
                    ("scope", "squidex-api"),
                    ("client_id", client_id.as_str()),
                    ("client_secret", client.secret.as_str()),
                ])
            })
            .map_err(|e| Error::api("Failed to create token. Please retry.", e))?;

        self.client
            .execute(request)
            .await
            .and_then(|response| response.json())
            .map_err(|e| Error::api("Failed to create token. Please retry.", e))
    }
}
