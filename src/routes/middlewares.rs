use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// Adds the fixed security headers and the permissive CORS header to every
/// response.
pub async fn security_headers(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers.insert(
        header::X_FRAME_OPTIONS,
        HeaderValue::from_static("SAMEORIGIN"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'self'; object-src 'none'"),
    );
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

/// Redirects plain-HTTP requests to HTTPS, judged by `x-forwarded-proto`
/// from the fronting proxy. Disabled via config in test environments.
pub async fn force_https_redirect(req: Request, next: Next) -> Response {
    let is_https = req
        .headers()
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .map(|proto| proto.eq_ignore_ascii_case("https"))
        .unwrap_or(false);
    if is_https {
        return next.run(req).await;
    }

    match req.headers().get(header::HOST).and_then(|v| v.to_str().ok()) {
        Some(host) => {
            let target = format!("https://{}{}", host, req.uri());
            Redirect::permanent(&target).into_response()
        }
        // Without a Host header there is nowhere to redirect to.
        None => next.run(req).await,
    }
}
