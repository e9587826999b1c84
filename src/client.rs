//! Typed HTTP client for the cars API.

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::store::Car;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status the call does not expect.
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Where a greeting request carries the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    Path,
    Query,
    Body,
}

pub struct CarsClient {
    client: Client,
    base_url: Url,
}

impl CarsClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl {
                url: base_url.to_string(),
                reason: "cannot be a base".to_string(),
            });
        }
        Ok(Self { client, base_url })
    }

    /// GET /
    pub async fn welcome(&self) -> Result<String, ClientError> {
        let resp = self.client.get(self.url(&[""])).send().await?;
        text(resp).await
    }

    /// Ask for a greeting, sending `name` the way `source` says.
    pub async fn greet(&self, name: &str, source: NameSource) -> Result<String, ClientError> {
        let request = match source {
            NameSource::Path => self.client.get(self.url(&["persons", name])),
            NameSource::Query => self
                .client
                .get(self.url(&["persons", ""]))
                .query(&[("name", name)]),
            NameSource::Body => self
                .client
                .post(self.url(&["persons"]))
                .json(&serde_json::json!({ "name": name })),
        };
        text(request.send().await?).await
    }

    /// List cars, optionally filtered by exact make.
    pub async fn list_cars(&self, make: Option<&str>) -> Result<Vec<Car>, ClientError> {
        let mut request = self.client.get(self.url(&["cars", ""]));
        if let Some(make) = make {
            request = request.query(&[("make", make)]);
        }
        json(request.send().await?, StatusCode::OK).await
    }

    /// Fetch one car. A 404 is `Ok(None)`.
    pub async fn get_car(&self, id: &str) -> Result<Option<Car>, ClientError> {
        let resp = self.client.get(self.url(&["cars", id])).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        json(resp, StatusCode::OK).await.map(Some)
    }

    /// Create a car and return the server's copy of it.
    pub async fn create_car(&self, car: &Car) -> Result<Car, ClientError> {
        let resp = self
            .client
            .post(self.url(&["cars"]))
            .json(car)
            .send()
            .await?;
        json(resp, StatusCode::CREATED).await
    }

    // Segments are percent-encoded; an empty last segment yields a trailing slash.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

async fn text(resp: Response) -> Result<String, ClientError> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(ClientError::Status { status, body });
    }
    Ok(body)
}

async fn json<T: DeserializeOwned>(resp: Response, expected: StatusCode) -> Result<T, ClientError> {
    let status = resp.status();
    if status != expected {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Status { status, body });
    }
    Ok(resp.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = CarsClient::new("http://localhost:8082").unwrap();
        assert_eq!(client.url(&[""]).as_str(), "http://localhost:8082/");
        assert_eq!(client.url(&["cars", ""]).as_str(), "http://localhost:8082/cars/");
        assert_eq!(client.url(&["cars", "7"]).as_str(), "http://localhost:8082/cars/7");
        assert_eq!(
            client.url(&["persons", "Jo Ann"]).as_str(),
            "http://localhost:8082/persons/Jo%20Ann"
        );

        let nested = CarsClient::new("http://localhost:8082/api/").unwrap();
        assert_eq!(nested.url(&["cars"]).as_str(), "http://localhost:8082/api/cars");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            CarsClient::new("not a url"),
            Err(ClientError::InvalidUrl { .. })
        ));
        assert!(matches!(
            CarsClient::new("mailto:someone@example.com"),
            Err(ClientError::InvalidUrl { .. })
        ));
    }
}
