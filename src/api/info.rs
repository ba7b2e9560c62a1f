#![allow(unused)]
use actix_web::{HttpResponse, http::StatusCode};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InfoType {
    Info,
    Error,
}

/// Wire shape of every status envelope the API produces.
#[derive(serde::Serialize)]
pub struct InfoBody {
    pub code: u16,
    pub message: Cow<'static, str>,
    #[serde(rename = "type")]
    pub info_type: InfoType,
}

pub struct Info {
    pub status: StatusCode,
    pub message: Cow<'static, str>,
}

impl Info {
    pub fn ok(message: impl Into<Cow<'static, str>>) -> Self {
        Self { status: StatusCode::OK, message: message.into() }
    }

    pub fn created(message: impl Into<Cow<'static, str>>) -> Self {
        Self { status: StatusCode::CREATED, message: message.into() }
    }

    pub fn accepted(message: impl Into<Cow<'static, str>>) -> Self {
        Self { status: StatusCode::ACCEPTED, message: message.into() }
    }
}

impl actix_web::Responder for Info {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::build(self.status).json(InfoBody {
            code: self.status.as_u16(),
            message: self.message,
            info_type: InfoType::Info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_body_serializes_envelope_shape() {
        let body = InfoBody {
            code: 200,
            message: "Successfully updated copyright.".into(),
            info_type: InfoType::Info,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": 200,
                "message": "Successfully updated copyright.",
                "type": "INFO"
            })
        );
    }

    #[test]
    fn test_error_type_serializes_uppercase() {
        let json = serde_json::to_string(&InfoType::Error).unwrap();
        assert_eq!(json, r#""ERROR""#);
    }

    #[test]
    fn test_accepted_status_code() {
        let info = Info::accepted("Deletion added to job queue");
        assert_eq!(info.status, StatusCode::ACCEPTED);
    }
}
