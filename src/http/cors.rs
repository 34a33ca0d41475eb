//! Unconditional permissive cross-origin policy.
//!
//! The catalog is world-readable, so any origin may call it. Applied in the
//! dispatch path, below the router: every response (handler output, 404s)
//! carries `access-control-allow-origin: *`, and `OPTIONS` preflights are
//! answered before routing with the allow set the API accepts.

use http::StatusCode;

use crate::http::response::Response;

/// Stamps the allow-origin header onto an outgoing response.
pub(crate) fn apply(resp: Response) -> Response {
    resp.header("access-control-allow-origin", "*")
}

/// The answer to an `OPTIONS` preflight: `204 No Content` plus the allow
/// set. The API is read-only, so `GET` is the only method advertised.
pub(crate) fn preflight() -> Response {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("access-control-allow-origin", "*")
        .header("access-control-allow-methods", "GET, OPTIONS")
        .header("access-control-allow-headers", "content-type")
        .no_body()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_response_can_carry_the_allow_origin_header() {
        let resp = apply(Response::text("ok")).into_inner();
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    }

    #[test]
    fn preflight_is_a_bodiless_204_with_the_allow_set() {
        let resp = preflight().into_inner();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(resp.headers()["access-control-allow-methods"], "GET, OPTIONS");
    }
}
