//! Typed HTTP client for the EvHub REST API
//!
//! One method per endpoint. Every response goes through the same contract:
//! non-success statuses are turned into [`SmokeError::ApiRejection`]
//! carrying the server's serialized JSON error payload, success bodies are
//! deserialized into the typed models. Trailing slashes on resource paths
//! are significant to the API and preserved here.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::HarnessConfig;
use crate::error::{SmokeError, SmokeResult};
use crate::model::{
    ContactForm, ContactReceipt, Event, NewEvent, NewRegistration, NewSubscriber, Registration,
    Subscriber,
};

/// Client for the EvHub API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the configured API root. The per-request timeout
    /// comes from the config.
    pub fn new(config: &HarnessConfig) -> SmokeResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    /// API root this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Normalize a response into parsed JSON or an error carrying the
    /// server's error payload. A non-JSON error body surfaces as the JSON
    /// parse failure itself.
    async fn into_json<T: DeserializeOwned>(response: Response) -> SmokeResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            let payload: serde_json::Value = serde_json::from_str(&body)?;
            return Err(SmokeError::ApiRejection {
                status,
                body: payload.to_string(),
            });
        }
        Ok(response.json().await?)
    }

    /// Check a response for the exact 204 a successful DELETE must return.
    async fn expect_no_content(response: Response, context: &str) -> SmokeResult<()> {
        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(());
        }
        if !status.is_success() {
            let body = response.text().await?;
            let payload: serde_json::Value = serde_json::from_str(&body)?;
            return Err(SmokeError::ApiRejection {
                status,
                body: payload.to_string(),
            });
        }
        Err(SmokeError::UnexpectedStatus {
            expected: StatusCode::NO_CONTENT,
            actual: status,
            context: context.to_string(),
        })
    }

    /// Whether the API answers at all. Used by the CLI status command.
    pub async fn probe(&self) -> bool {
        match self.http.get(self.url("events/")).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    // Contact form

    pub async fn submit_contact(&self, form: &ContactForm) -> SmokeResult<ContactReceipt> {
        debug!("POST contact/ for {}", form.email);
        let response = self
            .http
            .post(self.url("contact/"))
            .json(form)
            .send()
            .await?;
        Self::into_json(response).await
    }

    // Events

    pub async fn create_event(&self, event: &NewEvent) -> SmokeResult<Event> {
        debug!("POST events/ '{}'", event.title);
        let response = self
            .http
            .post(self.url("events/"))
            .json(event)
            .send()
            .await?;
        Self::into_json(response).await
    }

    pub async fn list_events(&self) -> SmokeResult<Vec<Event>> {
        let response = self.http.get(self.url("events/")).send().await?;
        Self::into_json(response).await
    }

    pub async fn get_event(&self, id: i64) -> SmokeResult<Event> {
        let response = self
            .http
            .get(self.url(&format!("events/{id}/")))
            .send()
            .await?;
        Self::into_json(response).await
    }

    /// Full-payload replace (PUT).
    pub async fn update_event(&self, id: i64, event: &NewEvent) -> SmokeResult<Event> {
        debug!("PUT events/{id}/ '{}'", event.title);
        let response = self
            .http
            .put(self.url(&format!("events/{id}/")))
            .json(event)
            .send()
            .await?;
        Self::into_json(response).await
    }

    pub async fn delete_event(&self, id: i64) -> SmokeResult<()> {
        debug!("DELETE events/{id}/");
        let response = self
            .http
            .delete(self.url(&format!("events/{id}/")))
            .send()
            .await?;
        Self::expect_no_content(response, "delete event").await
    }

    // Registrations

    pub async fn create_registration(
        &self,
        registration: &NewRegistration,
    ) -> SmokeResult<Registration> {
        debug!(
            "POST registrations/ {} -> event {}",
            registration.email, registration.event
        );
        let response = self
            .http
            .post(self.url("registrations/"))
            .json(registration)
            .send()
            .await?;
        Self::into_json(response).await
    }

    pub async fn list_registrations(&self) -> SmokeResult<Vec<Registration>> {
        let response = self.http.get(self.url("registrations/")).send().await?;
        Self::into_json(response).await
    }

    /// List registrations filtered by event id (`?event={id}`).
    pub async fn list_registrations_for_event(
        &self,
        event_id: i64,
    ) -> SmokeResult<Vec<Registration>> {
        let response = self
            .http
            .get(self.url("registrations/"))
            .query(&[("event", event_id)])
            .send()
            .await?;
        Self::into_json(response).await
    }

    // Subscribers

    pub async fn create_subscriber(&self, subscriber: &NewSubscriber) -> SmokeResult<Subscriber> {
        debug!("POST subscribers/ {}", subscriber.email);
        let response = self
            .http
            .post(self.url("subscribers/"))
            .json(subscriber)
            .send()
            .await?;
        Self::into_json(response).await
    }

    pub async fn list_subscribers(&self) -> SmokeResult<Vec<Subscriber>> {
        let response = self.http.get(self.url("subscribers/")).send().await?;
        Self::into_json(response).await
    }

    /// Opt a subscriber out. The API soft-deletes and answers 204.
    pub async fn opt_out_subscriber(&self, id: i64) -> SmokeResult<()> {
        debug!("DELETE subscribers/{id}/");
        let response = self
            .http
            .delete(self.url(&format!("subscribers/{id}/")))
            .send()
            .await?;
        Self::expect_no_content(response, "opt out subscriber").await
    }
}
