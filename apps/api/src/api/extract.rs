use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Numeric `id` route parameter
///
/// Yields `0` when the route has no `id` segment or the segment is not a
/// decimal integer. The adapters treat `0` as a missing identifier, so this
/// extractor never rejects on its own.
///
/// Usage:
/// ```rust,ignore
/// async fn get_thing(PathId(id): PathId) -> Response {
///     helper::get_by_id(id, |id| repo.find(id)).await
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i64);

impl PathId {
    pub fn parse(raw: &str) -> Self {
        PathId(raw.parse().unwrap_or(0))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .ok();

        let id = params
            .as_ref()
            .and_then(|Path(params)| params.get("id"))
            .map(|raw| PathId::parse(raw))
            .unwrap_or(PathId(0));

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_ids() {
        assert_eq!(PathId::parse("42"), PathId(42));
        assert_eq!(PathId::parse("-3"), PathId(-3));
    }

    #[test]
    fn non_numeric_ids_fall_back_to_zero() {
        assert_eq!(PathId::parse("abc"), PathId(0));
        assert_eq!(PathId::parse(""), PathId(0));
        assert_eq!(PathId::parse("1.5"), PathId(0));
        assert_eq!(PathId::parse("99999999999999999999"), PathId(0));
    }
}
