use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Chat user id of whoever issued the command.
pub const USER_HEADER: &str = "x-bingo-user-id";
/// Chat channel the command came from.
pub const CHANNEL_HEADER: &str = "x-bingo-channel-id";

/// Identity supplied by the chat platform. Not authenticated here: the
/// platform is trusted to fill the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: i64,
}

pub(crate) fn parse_id_header(req: &HttpRequest, name: &str) -> Result<Option<i64>, String> {
    let Some(raw) = req.headers().get(name) else {
        return Ok(None);
    };
    raw.to_str()
        .ok()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .map(Some)
        .ok_or_else(|| format!("Header {name} must be an integer id"))
}

impl FromRequest for Caller {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match parse_id_header(req, USER_HEADER) {
            Ok(Some(user_id)) => Ok(Caller { user_id }),
            Ok(None) => Err(AppError::bad_request(
                ErrorCode::InvalidCaller,
                format!("Missing {USER_HEADER} header"),
            )),
            Err(detail) => Err(AppError::bad_request(ErrorCode::InvalidCaller, detail)),
        };
        ready(result)
    }
}
