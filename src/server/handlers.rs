//! Request handlers and their request/response types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tower_http::request_id::RequestId;
use utoipa::ToSchema;
use zeroize::{Zeroize, Zeroizing};

use super::middleware::request_id_str;
use crate::{parse_card_number, ValidationError, ValidationResult};

// ============================================================================
// Request/Response Types
// ============================================================================

/// Body of `POST /api/v1/validate/`.
///
/// Deliberately not `Debug`: it holds the full card number.
#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"number": "4532 0151 1283 0366"}))]
pub struct ValidateRequest {
    /// Card number to validate. Any non-digit characters are stripped before
    /// validation. A JSON number is accepted as well and read as its text.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = String)]
    number: Option<Value>,
}

/// Keeps an explicit `null` as `Some(Value::Null)`; only an absent field is `None`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl ValidateRequest {
    /// Extracts the raw card number text from the `number` field.
    ///
    /// Numbers are converted to text first. Surrounding whitespace is trimmed,
    /// and an empty result is rejected as blank.
    pub fn into_number(self) -> Result<String, ValidationError> {
        let mut text = match self.number {
            None => return Err(ValidationError::MissingField),
            Some(Value::Null) => return Err(ValidationError::Null),
            Some(Value::String(text)) => text,
            Some(Value::Number(number)) => match number.as_f64() {
                Some(float) if number.is_f64() => float_text(float),
                _ => number.to_string(),
            },
            Some(_) => return Err(ValidationError::InvalidType),
        };

        let trimmed = text.trim().to_owned();
        text.zeroize();
        if trimmed.is_empty() {
            return Err(ValidationError::Blank);
        }
        Ok(trimmed)
    }
}

/// Shortest round-trip text of a float: positional with a trailing `.0` for
/// whole values in `[1e-4, 1e16)`, otherwise scientific with a signed
/// two-digit exponent (`4.5e+16`, `1.5e-05`).
fn float_text(value: f64) -> String {
    if value == 0.0 || (1e-4..1e16).contains(&value.abs()) {
        let text = value.to_string();
        return if value.fract() == 0.0 {
            format!("{}.0", text)
        } else {
            text
        };
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => format!(
                "{}e{}{:02}",
                mantissa,
                if exp < 0 { '-' } else { '+' },
                exp.unsigned_abs()
            ),
            Err(_) => scientific,
        },
        None => scientific,
    }
}

/// Successful validation outcome.
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({"valid": true, "scheme": "visa", "message": "OK"}))]
pub struct ValidateResponse {
    /// Whether the number passed the Luhn checksum
    valid: bool,
    /// Detected scheme: visa, mastercard, amex, discover or unknown
    scheme: String,
    /// "OK" or "Invalid card number"
    message: String,
}

impl From<ValidationResult> for ValidateResponse {
    fn from(result: ValidationResult) -> Self {
        Self {
            valid: result.is_valid,
            scheme: result.scheme.as_str().to_string(),
            message: result.message.to_string(),
        }
    }
}

/// Error body for rejected requests.
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({"error": "Number must be between 12 and 19 digits."}))]
pub struct ErrorResponse {
    /// First validation error encountered
    error: String,
}

/// Body of `GET /api/v1/health/`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status, always "Ok"
    status: String,
}

// ============================================================================
// Errors
// ============================================================================

/// A rejected request, rendered as `400 {"error": ...}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Validate a card number
#[utoipa::path(
    post,
    path = "/api/v1/validate/",
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "Validation result; a failed checksum is reported as valid = false", body = ValidateResponse),
        (status = 400, description = "Missing field or malformed card number", body = ErrorResponse)
    ),
    tag = "Validation"
)]
pub async fn validate_card(
    request_id: Option<Extension<RequestId>>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let Json(request) = payload?;
    let raw = Zeroizing::new(request.into_number()?);
    let number = parse_card_number(&raw)?;
    let result = number.evaluate();

    tracing::info!(
        scheme = %result.scheme,
        valid = result.is_valid,
        masked_number = %number.masked(),
        request_id = request_id_str(request_id.as_ref().map(|Extension(id)| id)),
        "card validation completed"
    );

    Ok(Json(result.into()))
}

/// Health check
#[utoipa::path(
    get,
    path = "/api/v1/health/",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardScheme;
    use serde_json::json;

    fn request(body: Value) -> ValidateRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_into_number_accepts_strings_and_integers() {
        assert_eq!(
            request(json!({"number": "4532 0151"})).into_number().unwrap(),
            "4532 0151"
        );
        assert_eq!(
            request(json!({"number": 4532015112830366u64}))
                .into_number()
                .unwrap(),
            "4532015112830366"
        );
    }

    #[test]
    fn test_into_number_accepts_floats() {
        assert_eq!(
            request(json!({"number": 4532015112830366.0}))
                .into_number()
                .unwrap(),
            "4532015112830366.0"
        );
        assert_eq!(
            request(json!({"number": 45.32})).into_number().unwrap(),
            "45.32"
        );
    }

    #[test]
    fn test_into_number_trims_whitespace() {
        assert_eq!(
            request(json!({"number": "  4532 0151\n"}))
                .into_number()
                .unwrap(),
            "4532 0151"
        );
    }

    #[test]
    fn test_into_number_missing_null_and_blank() {
        assert_eq!(
            request(json!({})).into_number().unwrap_err(),
            ValidationError::MissingField
        );
        assert_eq!(
            request(json!({"number": null})).into_number().unwrap_err(),
            ValidationError::Null
        );
        for blank in ["", "   ", "\t\n"] {
            assert_eq!(
                request(json!({ "number": blank })).into_number().unwrap_err(),
                ValidationError::Blank,
                "{:?}",
                blank
            );
        }
    }

    #[test]
    fn test_float_text() {
        assert_eq!(float_text(4532015112830366.0), "4532015112830366.0");
        assert_eq!(float_text(0.5), "0.5");
        assert_eq!(float_text(0.0), "0.0");
        assert_eq!(float_text(1e16), "1e+16");
        assert_eq!(float_text(4.532015112830366e16), "4.532015112830366e+16");
        assert_eq!(float_text(1.5e-5), "1.5e-05");
        assert_eq!(float_text(-12.0), "-12.0");
    }

    #[test]
    fn test_into_number_wrong_type() {
        for body in [
            json!({"number": ["4532"]}),
            json!({"number": {"digits": "4532"}}),
            json!({"number": true}),
            json!({"number": false}),
        ] {
            assert_eq!(
                request(body).into_number().unwrap_err(),
                ValidationError::InvalidType
            );
        }
    }

    #[test]
    fn test_response_from_result() {
        let response = ValidateResponse::from(ValidationResult::new(false, CardScheme::Amex));
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(
            body,
            json!({"valid": false, "scheme": "amex", "message": "Invalid card number"})
        );
    }

    #[test]
    fn test_api_error_status() {
        let err = ApiError::from(ValidationError::Length { length: 5 });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Number must be between 12 and 19 digits.");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
