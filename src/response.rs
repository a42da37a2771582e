use std::collections::BTreeMap;

use actix_web::{http::StatusCode, HttpResponse, HttpResponseBuilder};
use serde::{Deserialize, Serialize};

// Body of every api response
#[derive(Serialize, Deserialize, Debug)]
pub struct Envelope<T>{
    pub status: bool,
    pub data: Option<T>,
    pub error: ErrorDetail,
    pub msg: String
}

// Either a per-field map (validation) or a single message
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum ErrorDetail{
    Fields(BTreeMap<String, String>),
    Message(String)
}

impl Default for ErrorDetail {
    fn default() -> Self {
        ErrorDetail::Fields(BTreeMap::new())
    }
}

impl<T: Serialize> Envelope<T> {
    pub fn data(data: T) -> Self {
        Envelope{
            status: true,
            data: Some(data),
            error: ErrorDetail::default(),
            msg: String::new()
        }
    }

    pub fn empty() -> Self {
        Envelope{
            status: true,
            data: None,
            error: ErrorDetail::default(),
            msg: String::new()
        }
    }

    pub fn failure(error: ErrorDetail, msg: String) -> Self {
        Envelope{
            status: false,
            data: None,
            error,
            msg
        }
    }

    pub fn with_msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    pub fn respond(&self, status: StatusCode) -> HttpResponse {
        HttpResponseBuilder::new(status).json(self)
    }

    pub fn ok(&self) -> HttpResponse {
        self.respond(StatusCode::OK)
    }

    pub fn created(&self) -> HttpResponse {
        self.respond(StatusCode::CREATED)
    }
}
