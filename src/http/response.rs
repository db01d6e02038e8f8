use chrono::prelude::*;
use std::collections::HashMap;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    Html,
    Json,
    Text,
    Binary,
}

impl ResponseType {
    pub fn detect(headers: &HashMap<String, String>, body: &str) -> Self {
        if let Some(content_type) = headers.get("content-type") {
            if content_type.contains("text/html") {
                ResponseType::Html
            } else if content_type.contains("application/json") {
                ResponseType::Json
            } else if content_type.contains("text/") {
                ResponseType::Text
            } else {
                ResponseType::Binary
            }
        } else {
            // Try to detect content type from body
            let start = body.trim_start();
            if start.starts_with('{') || start.starts_with('[') {
                ResponseType::Json
            } else if start.starts_with("<!DOCTYPE")
                || start.starts_with("<!doctype")
                || start.starts_with("<html")
            {
                ResponseType::Html
            } else {
                ResponseType::Text
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub url: Url,
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub response_type: ResponseType,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
