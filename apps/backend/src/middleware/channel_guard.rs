use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::ResponseError;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::warn;

use crate::config::channel::ChannelConfig;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::caller::{parse_id_header, CHANNEL_HEADER};

/// Rejects commands issued outside the configured channel with 403
/// `WRONG_CHANNEL`. Unrestricted configs let everything through.
#[derive(Clone, Copy)]
pub struct ChannelGuard {
    config: ChannelConfig,
}

impl ChannelGuard {
    pub fn new(config: ChannelConfig) -> Self {
        Self { config }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ChannelGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = ChannelGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ChannelGuardMiddleware {
            service: Rc::new(service),
            config: self.config,
        }))
    }
}

pub struct ChannelGuardMiddleware<S> {
    service: Rc<S>,
    config: ChannelConfig,
}

impl<S, B> Service<ServiceRequest> for ChannelGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let channel = parse_id_header(req.request(), CHANNEL_HEADER).ok().flatten();

        if self.config.permits(channel) {
            let service = Rc::clone(&self.service);
            return Box::pin(async move {
                let res = service.call(req).await?;
                Ok(res.map_into_left_body())
            });
        }

        warn!(
            channel = ?channel,
            allowed = ?self.config.allowed_channel,
            path = %req.path(),
            "command from wrong channel"
        );

        // Build the response inside the future so the trace id scope applies.
        Box::pin(async move {
            let response = AppError::forbidden(
                ErrorCode::WrongChannel,
                "Bingo commands are not allowed in this channel",
            )
            .error_response();
            Ok(req.into_response(response).map_into_right_body())
        })
    }
}
