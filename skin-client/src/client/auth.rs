//! Login, logout and profile

use chrono::{TimeDelta, Utc};
use http::Method;
use shared::models::{LoginRequest, LoginResponse, LogoutRequest, UserInfo};

use crate::error::ClientResult;
use crate::session::AuthSession;

use super::SkinClient;

impl SkinClient {
    /// POST `/auth/login` and store the resulting session
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AuthSession> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.post("/auth/login", &request).await?;

        let ttl = response
            .expires_in
            .filter(|secs| *secs > 0)
            .and_then(TimeDelta::try_seconds)
            .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
            .or_else(|| TimeDelta::from_std(self.config().session_ttl).ok())
            .unwrap_or(TimeDelta::days(1));

        let session = AuthSession::new(response.token, response.user_id, response.roles, ttl);
        self.session_store().save(&session)?;
        tracing::info!(user_id = ?session.user_id, expires_at = %session.expires_at, "Logged in");
        Ok(session)
    }

    /// POST `/auth/logout`; the local session is cleared even if the server
    /// call fails.
    pub async fn logout(&self) -> ClientResult<()> {
        let Some(session) = self.session()? else {
            return Ok(());
        };
        let request = LogoutRequest { token: session.token };
        let result = self.call_unit(Method::POST, "/auth/logout", Some(&request)).await;
        self.session_store().clear()?;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Logout call failed, local session cleared anyway");
        }
        result
    }

    /// GET `/users/my-info`
    pub async fn me(&self) -> ClientResult<UserInfo> {
        self.get("/users/my-info").await
    }
}
