//! Session endpoints.
//!
//! Authentication is cookie-based: a successful login sets the session
//! cookie on the shared `reqwest` cookie store, and every later call on the
//! same client rides it. There is no token to hold client-side.

use tracing::{info, instrument};

use super::StorefrontClient;
use crate::errors::CheckoutError;
use crate::models::{Credentials, DataEnvelope, LoginData, Meta, MetaEnvelope, UserAccount};

impl StorefrontClient {
    /// Log in and establish the session cookie. Returns the account with the
    /// saved cart embedded, for seeding client state.
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> Result<UserAccount, CheckoutError> {
        let response = self.post("/user/login").json(credentials).send().await?;
        let envelope: DataEnvelope<LoginData> = self.expect_json(response).await?;
        info!(user_id = %envelope.data.user.id, "session established");
        Ok(envelope.data.user)
    }

    /// End the session; the backend clears the cookie.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<Meta, CheckoutError> {
        let response = self
            .post("/user/logout")
            .json(&serde_json::json!({}))
            .send()
            .await?;
        let envelope: MetaEnvelope = self.expect_json(response).await?;
        Ok(envelope.meta)
    }

    /// Fetch the authenticated user's profile.
    #[instrument(skip(self))]
    pub async fn profile(&self) -> Result<UserAccount, CheckoutError> {
        let response = self.get("/user/profile").send().await?;
        let envelope: DataEnvelope<UserAccount> = self.expect_json(response).await?;
        Ok(envelope.data)
    }
}
