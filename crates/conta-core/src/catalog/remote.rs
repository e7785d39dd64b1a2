//! Async client for the remote reference document store

use conta_domain::Reference;

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::http::HttpClient;

/// Client for the plant's reference document endpoint.
///
/// The endpoint serves documents of the form
/// `{reference, line, materials: [{name, material_reference, quantity}]}`.
/// This client only reads; references are maintained elsewhere.
pub struct RemoteCatalog {
    base_url: String,
    client: HttpClient,
}

impl RemoteCatalog {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: HttpClient::with_timeout(
                &config.user_agent,
                std::time::Duration::from_secs(config.timeout_secs),
            ),
        }
    }

    /// Fetch every reference document.
    pub async fn fetch_all(&self) -> Result<Vec<Reference>, CatalogError> {
        let url = format!("{}/references", self.base_url);
        let response = self.client.get(&url).await?;
        Self::parse_references_response(&response.body)
    }

    /// Fetch the reference documents for one production line.
    pub async fn fetch_line(&self, line: &str) -> Result<Vec<Reference>, CatalogError> {
        let url = format!("{}/references", self.base_url);
        let response = self.client.get_with_params(&url, &[("line", line)]).await?;
        Self::parse_references_response(&response.body)
    }

    /// Parse a response body into reference documents. Pure function;
    /// testable without a network.
    pub fn parse_references_response(json: &str) -> Result<Vec<Reference>, CatalogError> {
        let references: Vec<Reference> = serde_json::from_str(json)?;
        Ok(references)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"[
        {
            "reference": "J6276207",
            "line": "COMAS 1",
            "materials": [
                { "name": "Carcasa superior", "material_reference": "MAT-1001", "quantity": 1 },
                { "name": "Tornillo M6", "material_reference": "MAT-0042", "quantity": 4 }
            ]
        },
        { "reference": "J7103550", "line": "COMAS 2", "materials": [] }
    ]"#;

    #[test]
    fn parses_reference_documents() {
        let refs = RemoteCatalog::parse_references_response(BODY).unwrap();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].reference, "J6276207");
        assert_eq!(refs[0].line, "COMAS 1");
        assert_eq!(refs[0].materials[1].quantity, 4);
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let err = RemoteCatalog::parse_references_response("{\"oops\":1}").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let config = CatalogConfig {
            base_url: "https://comas-erp.internal/api/v1/".to_string(),
            ..CatalogConfig::default()
        };
        let catalog = RemoteCatalog::new(&config);
        assert_eq!(catalog.base_url, "https://comas-erp.internal/api/v1");
    }
}
