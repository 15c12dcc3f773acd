use crate::relay::{AdviceResult, RelayFailure};
use axum::{
    Json,
    response::{IntoResponse, Response},
};

impl IntoResponse for RelayFailure {
    fn into_response(self) -> Response {
        let body = AdviceResult::Error {
            error: self.message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub fn advice_response(advice: String) -> Json<AdviceResult> {
    Json(AdviceResult::Advice { advice })
}
