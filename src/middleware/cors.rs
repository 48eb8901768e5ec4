use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::error::{Error, Result};

/// Restricts browsers to `allowed_origin` when set, otherwise allows any.
pub fn cors_layer(allowed_origin: Option<&str>) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match allowed_origin {
        Some(origin) => {
            let origin: HeaderValue = origin
                .parse()
                .map_err(|_| Error::Config(format!("Invalid CORS origin: {}", origin)))?;
            Ok(layer.allow_origin(origin))
        }
        None => Ok(layer.allow_origin(Any)),
    }
}
