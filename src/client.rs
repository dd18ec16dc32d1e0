use std::collections::HashMap;

use reqwest::{blocking::Client, StatusCode};
use serde::Serialize;

use crate::{LoginError, Result};

pub const LOGIN_PATH: &str = "/api/v1/web/whisk-system/nuv/login";

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub login: &'a str,
    pub password: &'a str,
}

/// Talks to the platform's login action.
#[derive(Debug, Clone, Default)]
pub struct LoginClient {
    client: Client,
}

impl LoginClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts the credentials to `url` and returns the secrets the server hands back.
    pub fn login(&self, url: &str, user: &str, password: &str) -> Result<HashMap<String, String>> {
        tracing::debug!(url, user, "Sending login request");

        let res = self
            .client
            .post(url)
            .json(&LoginRequest {
                login: user,
                password,
            })
            .send()?;

        let status = res.status();
        tracing::debug!(status = status.as_u16(), "Login response received");

        if status != StatusCode::OK {
            return Err(LoginError::Remote {
                status: status.as_u16(),
                body: res.text().ok(),
            });
        }

        let body = res.bytes().map_err(|_| LoginError::Decode)?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::debug!("login response is not a flat string map: {}", e);
            LoginError::Decode
        })
    }
}
