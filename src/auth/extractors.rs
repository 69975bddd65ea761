use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;

use crate::auth::identity::IdentityResolver;
use crate::error::AppError;

/// Extracts the requesting user's id from the `username` request header.
///
/// Identity arrives out-of-band as a bare username header, not as a query
/// parameter or token. A missing or blank header fails with
/// `AppError::AuthRequired` ("not logged in"); a username the resolver does
/// not know fails with `AppError::NotFound` ("user does not exist").
#[derive(Debug, Clone, Copy)]
pub struct RequesterId(pub i64);

impl FromRequest for RequesterId {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let resolver = req
            .app_data::<web::Data<dyn IdentityResolver>>()
            .cloned();
        let username = req
            .headers()
            .get("username")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        Box::pin(async move {
            let username = username
                .filter(|name| !name.trim().is_empty())
                .ok_or_else(|| AppError::AuthRequired("not logged in".into()))?;
            let resolver = resolver
                .ok_or_else(|| AppError::Internal("identity resolver not configured".into()))?;

            let user_id = resolver.resolve(&username).await?;
            Ok(RequesterId(user_id))
        })
    }
}
