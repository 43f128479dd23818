// SPDX-License-Identifier: MPL-2.0
//! REST client for the back-office catalog backend.
//!
//! The backend is an external collaborator; this module only mirrors its
//! routes. All methods are `async` and are driven from the UI through
//! `Task::perform`. The client is cheap to clone (it wraps the shared
//! `reqwest` connection pool) so each in-flight request owns its own copy.

use crate::domain::{AccountType, CardType, CreditType};
use crate::error::ApiError;
use std::time::Duration;

/// Async client for the catalog routes.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a client against the given base URL (scheme + authority).
    ///
    /// Trailing slashes on the base URL are tolerated. Fails only when the
    /// underlying TLS backend cannot be initialized.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, route: &str) -> String {
        format!("{}/{}", self.base_url, route.trim_start_matches('/'))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        route: &str,
    ) -> Result<T, ApiError> {
        let response = self.http.get(self.url(route)).send().await?;
        let response = response.error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    async fn send_json<B: serde::Serialize>(
        &self,
        request: reqwest::RequestBuilder,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = request.json(body).send().await?;
        response.error_for_status()?;
        Ok(())
    }

    // =========================================================================
    // Card types
    // =========================================================================

    pub async fn list_card_types(&self) -> Result<Vec<CardType>, ApiError> {
        self.get_json("api/cartroutes/getcardtypes").await
    }

    pub async fn get_card_type(&self, id: &str) -> Result<CardType, ApiError> {
        self.get_json(&format!("api/cartroutes/onecart/{id}")).await
    }

    pub async fn create_card_type(&self, card: &CardType) -> Result<(), ApiError> {
        let request = self.http.post(self.url("api/cartroutes/addcardtype"));
        self.send_json(request, card).await
    }

    pub async fn update_card_type(&self, id: &str, card: &CardType) -> Result<(), ApiError> {
        let request = self
            .http
            .put(self.url(&format!("api/cartroutes/updatecardtype/{id}")));
        self.send_json(request, card).await
    }

    pub async fn delete_card_type(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("api/cartroutes/{id}")))
            .send()
            .await?;
        response.error_for_status()?;
        Ok(())
    }

    // =========================================================================
    // Account types
    // =========================================================================

    pub async fn list_account_types(&self) -> Result<Vec<AccountType>, ApiError> {
        self.get_json("api/accountroutes/getaccounttypes").await
    }

    pub async fn get_account_type(&self, id: &str) -> Result<AccountType, ApiError> {
        self.get_json(&format!("api/accountroutes/getaccounttype/{id}"))
            .await
    }

    pub async fn create_account_type(&self, account: &AccountType) -> Result<(), ApiError> {
        let request = self.http.post(self.url("api/accountroutes/addaccounttype"));
        self.send_json(request, account).await
    }

    pub async fn update_account_type(
        &self,
        id: &str,
        account: &AccountType,
    ) -> Result<(), ApiError> {
        let request = self
            .http
            .put(self.url(&format!("api/accountroutes/updateaccounttype/{id}")));
        self.send_json(request, account).await
    }

    pub async fn delete_account_type(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("api/accountroutes/{id}")))
            .send()
            .await?;
        response.error_for_status()?;
        Ok(())
    }

    // =========================================================================
    // Credit types
    // =========================================================================

    pub async fn list_credit_types(&self) -> Result<Vec<CreditType>, ApiError> {
        self.get_json("api/creditroutes/credittypes").await
    }

    pub async fn get_credit_type(&self, id: &str) -> Result<CreditType, ApiError> {
        self.get_json(&format!("api/creditroutes/credittypes/{id}"))
            .await
    }

    pub async fn create_credit_type(&self, credit: &CreditType) -> Result<(), ApiError> {
        let request = self.http.post(self.url("api/creditroutes/credittypes"));
        self.send_json(request, credit).await
    }

    pub async fn update_credit_type(
        &self,
        id: &str,
        credit: &CreditType,
    ) -> Result<(), ApiError> {
        let request = self
            .http
            .put(self.url(&format!("api/creditroutes/credittypes/{id}")));
        self.send_json(request, credit).await
    }

    pub async fn delete_credit_type(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("api/creditroutes/credittypes/{id}")))
            .send()
            .await?;
        response.error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_duplicate_slashes() {
        let client =
            Client::new("http://localhost:5000/", Duration::from_secs(5)).expect("client builds");
        assert_eq!(
            client.url("/api/cartroutes/getcardtypes"),
            "http://localhost:5000/api/cartroutes/getcardtypes"
        );
    }

    #[test]
    fn base_url_is_normalized() {
        let client =
            Client::new("http://10.0.0.2:5000///", Duration::from_secs(5)).expect("client builds");
        assert_eq!(client.base_url(), "http://10.0.0.2:5000");
    }

    #[test]
    fn construction_succeeds_with_a_working_tls_backend() {
        let result = Client::new("http://localhost:5000", Duration::from_secs(5));
        assert!(result.is_ok());
    }
}
