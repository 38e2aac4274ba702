use actix_web::{http::header::AUTHORIZATION, HttpRequest};

/// Cookie the sign-in response stores the session token in.
pub const TOKEN_COOKIE: &str = "t";

/// Locates a candidate token on the request: a well-formed
/// `Authorization: Bearer <token>` header wins, then the `t` cookie.
/// Absence is not an error; gated routes turn `None` into 401 downstream.
pub fn extract_token(req: &HttpRequest) -> Option<String> {
    if let Some(header) = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
    {
        let parts: Vec<&str> = header.split(' ').collect();
        if parts.len() == 2 && parts[0] == "Bearer" {
            return Some(parts[1].to_string());
        }
    }

    req.cookie(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extracts_bearer_header() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer abc.def.ghi"))
            .to_http_request();

        assert_eq!(extract_token(&req), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_rejects_non_bearer_scheme() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Basic abc"))
            .to_http_request();

        assert_eq!(extract_token(&req), None);
    }

    #[test]
    fn test_rejects_extra_parts() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer abc def"))
            .to_http_request();

        assert_eq!(extract_token(&req), None);
    }

    #[test]
    fn test_falls_back_to_cookie() {
        let req = TestRequest::default()
            .cookie(actix_web::cookie::Cookie::new(TOKEN_COOKIE, "tok"))
            .to_http_request();

        assert_eq!(extract_token(&req), Some("tok".to_string()));
    }

    #[test]
    fn test_header_takes_precedence_over_cookie() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer from-header"))
            .cookie(actix_web::cookie::Cookie::new(TOKEN_COOKIE, "from-cookie"))
            .to_http_request();

        assert_eq!(extract_token(&req), Some("from-header".to_string()));
    }

    #[test]
    fn test_none_when_no_credentials() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(extract_token(&req), None);
    }

    #[test]
    fn test_malformed_header_falls_back_to_cookie() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer"))
            .cookie(actix_web::cookie::Cookie::new(TOKEN_COOKIE, "tok"))
            .to_http_request();

        assert_eq!(extract_token(&req), Some("tok".to_string()));
    }
}
