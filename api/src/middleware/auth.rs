//! Session guard middleware for protected endpoints.
//!
//! Hands the raw `Authorization` header to the core [`Authorizer`], which
//! consults the denylist before checking the signature. On success the caller
//! identity is stored in request extensions as [`AuthContext`].

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use pa_core::services::session::{bearer_token, Authorizer};

use crate::handlers::error::{extract_language, handle_domain_error_with_lang};

/// Caller identity injected into guarded requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub phone: String,
    /// The bearer token that authorized this request
    pub token: String,
}

/// Session guard middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    authorizer: Arc<dyn Authorizer>,
}

impl JwtAuth {
    pub fn new(authorizer: Arc<dyn Authorizer>) -> Self {
        Self { authorizer }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            authorizer: self.authorizer.clone(),
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    authorizer: Arc<dyn Authorizer>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let authorizer = self.authorizer.clone();

        Box::pin(async move {
            // Non-ASCII header values are treated as malformed credentials
            let header = req
                .headers()
                .get(AUTHORIZATION)
                .map(|value| value.to_str().unwrap_or_default().to_string());

            match authorizer.authorize(header.as_deref()).await {
                Ok(principal) => {
                    let token = bearer_token(header.as_deref())
                        .map(str::to_string)
                        .unwrap_or_default();
                    req.extensions_mut().insert(AuthContext {
                        user_id: principal.user_id,
                        phone: principal.phone,
                        token,
                    });
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Err(error) => {
                    let lang = extract_language(req.request());
                    let response = handle_domain_error_with_lang(&error, lang);
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Extractor for guarded handlers
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
