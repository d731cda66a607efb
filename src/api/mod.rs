pub mod client;
pub mod home;
pub mod search;
pub mod transport;

pub use client::RequestClient;
pub use transport::{HttpTransport, Transport};

use reqwest::Method;
use url::Url;

use crate::app::Result;

/// One API call: host, path, method and query parameters. Parameters with a
/// `None` or empty value are left out of the composed URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    host: String,
    path: String,
    method: Method,
    query: Vec<(&'static str, Option<String>)>,
}

impl ApiRequest {
    pub fn get(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            path: path.into(),
            method: Method::GET,
            query: Vec::new(),
        }
    }

    pub fn query_param(mut self, name: &'static str, value: Option<String>) -> Self {
        self.query.push((name, value));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> Result<Url> {
        let mut url = Url::parse(&format!("https://{}{}", self.host, self.path))?;

        let pairs: Vec<(&str, &str)> = self
            .query
            .iter()
            .filter_map(|(name, value)| match value.as_deref() {
                Some(v) if !v.is_empty() => Some((*name, v)),
                _ => None,
            })
            .collect();

        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_without_params() {
        let request = ApiRequest::get("api.example.com", "/home_sections");
        assert_eq!(
            request.url().unwrap().as_str(),
            "https://api.example.com/home_sections"
        );
    }

    #[test]
    fn test_none_and_empty_params_are_omitted() {
        let request = ApiRequest::get("api.example.com", "/home_sections")
            .query_param("page", None)
            .query_param("q", Some(String::new()));
        assert_eq!(
            request.url().unwrap().as_str(),
            "https://api.example.com/home_sections"
        );
    }

    #[test]
    fn test_present_params_are_appended() {
        let request = ApiRequest::get("api.example.com", "/home_sections")
            .query_param("page", Some("2".to_string()));
        assert_eq!(
            request.url().unwrap().as_str(),
            "https://api.example.com/home_sections?page=2"
        );
    }

    #[test]
    fn test_query_values_are_encoded() {
        let request = ApiRequest::get("api.example.com", "/search")
            .query_param("q", Some("jazz fusion".to_string()));
        assert_eq!(
            request.url().unwrap().as_str(),
            "https://api.example.com/search?q=jazz+fusion"
        );
    }
}
