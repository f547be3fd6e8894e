//! Domain error to HTTP response mapping
//!
//! Every error variant gets its own status and code. Messages are localized
//! from `Accept-Language`; internal error details are logged, never returned.

use actix_web::{http::header, http::StatusCode, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use pa_core::errors::{AuthError, DomainError, TokenError};
use pa_shared::{error_codes, ErrorResponse, Language};

/// Detect language preference from the Accept-Language header
pub fn extract_language(req: &HttpRequest) -> Language {
    req.headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(Language::from_accept_language)
        .unwrap_or_default()
}

fn localized(lang: Language, en: &str, uz: &str) -> String {
    match lang {
        Language::English => en.to_string(),
        Language::Uzbek => uz.to_string(),
    }
}

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Auth(auth) => match auth {
            AuthError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AuthError::CodeExpiredOrMissing
            | AuthError::InvalidCode
            | AuthError::MissingRegistrationData => StatusCode::BAD_REQUEST,
            AuthError::AlreadyRegistered | AuthError::Conflict => StatusCode::CONFLICT,
            AuthError::NotVerified => StatusCode::FORBIDDEN,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::DeliveryFailed => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
        },
        DomainError::Token(token) => match token {
            TokenError::GenerationFailed => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        },
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict { .. } => StatusCode::CONFLICT,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_body(error: &DomainError, lang: Language) -> ErrorResponse {
    let (code, message) = match error {
        DomainError::Auth(auth) => match auth {
            AuthError::RateLimited => (
                error_codes::RATE_LIMIT_EXCEEDED,
                localized(
                    lang,
                    "Please wait a minute before requesting a new code",
                    "1 daqiqa kuting",
                ),
            ),
            AuthError::CodeExpiredOrMissing => (
                error_codes::VERIFICATION_CODE_EXPIRED,
                localized(
                    lang,
                    "Verification code not found or expired",
                    "Kod topilmadi yoki muddati o'tgan",
                ),
            ),
            AuthError::InvalidCode => (
                error_codes::VERIFICATION_CODE_INVALID,
                localized(lang, "Invalid verification code", "Tasdiqlash kodi xato"),
            ),
            AuthError::MissingRegistrationData => (
                error_codes::MISSING_REGISTRATION_DATA,
                localized(
                    lang,
                    "Registration data not found, please register again",
                    "Foydalanuvchi ma'lumotlari topilmadi, qaytadan ro'yxatdan o'ting",
                ),
            ),
            AuthError::AlreadyRegistered => (
                error_codes::ALREADY_REGISTERED,
                localized(
                    lang,
                    "This phone number is already registered",
                    "Bu telefon raqam allaqachon ro'yxatdan o'tgan",
                ),
            ),
            AuthError::Conflict => (
                error_codes::CONFLICT,
                localized(
                    lang,
                    "An account for this phone number already exists",
                    "Bu telefon raqam uchun hisob allaqachon mavjud",
                ),
            ),
            AuthError::NotVerified => (
                error_codes::NOT_VERIFIED,
                localized(
                    lang,
                    "Phone number must be verified first",
                    "Siz verifikatsiyadan o'tishingiz kerak",
                ),
            ),
            AuthError::InvalidCredentials => (
                error_codes::INVALID_CREDENTIALS,
                localized(
                    lang,
                    "Invalid phone number or password",
                    "Telefon raqam yoki parol noto'g'ri",
                ),
            ),
            AuthError::DeliveryFailed => (
                error_codes::SMS_ERROR,
                localized(
                    lang,
                    "SMS delivery failed, please try again later",
                    "SMS yuborish tizimida xatolik yuz berdi",
                ),
            ),
            AuthError::UserNotFound => (
                error_codes::NOT_FOUND,
                localized(lang, "User not found", "User topilmadi"),
            ),
        },
        DomainError::Token(token) => match token {
            TokenError::MalformedCredential => (
                error_codes::TOKEN_MISSING,
                localized(
                    lang,
                    "Missing or malformed Authorization header",
                    "Token mavjud emas yoki noto'g'ri formatda",
                ),
            ),
            TokenError::Revoked => (
                error_codes::TOKEN_REVOKED,
                localized(lang, "Token has been revoked", "Token bekor qilingan"),
            ),
            TokenError::InvalidOrExpired => (
                error_codes::TOKEN_INVALID,
                localized(
                    lang,
                    "Token is invalid or expired",
                    "Token yaroqsiz yoki muddati tugagan",
                ),
            ),
            TokenError::MalformedToken => (
                error_codes::TOKEN_MALFORMED,
                localized(lang, "Token is malformed", "Token yaroqsiz"),
            ),
            TokenError::GenerationFailed => (
                error_codes::INTERNAL_ERROR,
                localized(lang, "An internal error occurred", "Ichki xatolik yuz berdi"),
            ),
        },
        DomainError::Validation { message } => (error_codes::VALIDATION_ERROR, message.clone()),
        DomainError::NotFound { .. } => (
            error_codes::NOT_FOUND,
            localized(lang, "Resource not found", "Ma'lumot topilmadi"),
        ),
        DomainError::Conflict { .. } => (
            error_codes::CONFLICT,
            localized(lang, "Resource already exists", "Ma'lumot allaqachon mavjud"),
        ),
        DomainError::Internal { .. } => (
            error_codes::INTERNAL_ERROR,
            localized(lang, "An internal error occurred", "Ichki xatolik yuz berdi"),
        ),
    };

    ErrorResponse::new(code, message)
}

/// Handle domain errors with language support
pub fn handle_domain_error_with_lang(error: &DomainError, lang: Language) -> HttpResponse {
    let status = status_for(error);
    if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
    } else {
        tracing::debug!(error = %error, "Request rejected");
    }

    HttpResponse::build(status).json(error_body(error, lang))
}

/// 400 response listing the fields that failed validation
pub fn validation_error(errors: &ValidationErrors, lang: Language) -> HttpResponse {
    let fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();

    let body = ErrorResponse::new(
        error_codes::VALIDATION_ERROR,
        localized(
            lang,
            "Invalid request data",
            "So'rov ma'lumotlari noto'g'ri",
        ),
    )
    .add_detail("fields", fields);

    HttpResponse::BadRequest().json(body)
}

/// 400 response for bodies that are not valid JSON for the endpoint
pub fn malformed_body(message: &str) -> ErrorResponse {
    ErrorResponse::new(error_codes::VALIDATION_ERROR, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&AuthError::RateLimited.into()),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(status_for(&AuthError::InvalidCode.into()), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&AuthError::Conflict.into()), StatusCode::CONFLICT);
        assert_eq!(status_for(&AuthError::NotVerified.into()), StatusCode::FORBIDDEN);
        assert_eq!(
            status_for(&AuthError::DeliveryFailed.into()),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(status_for(&TokenError::Revoked.into()), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_for(&DomainError::Internal {
                message: "db down".to_string()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let body = error_body(
            &DomainError::Internal {
                message: "password=hunter2".to_string(),
            },
            Language::English,
        );
        assert_eq!(body.error, error_codes::INTERNAL_ERROR);
        assert!(!body.message.contains("hunter2"));
    }

    #[test]
    fn test_localized_messages() {
        let en = error_body(&AuthError::InvalidCode.into(), Language::English);
        let uz = error_body(&AuthError::InvalidCode.into(), Language::Uzbek);
        assert_eq!(en.error, uz.error);
        assert_eq!(uz.message, "Tasdiqlash kodi xato");
    }

    #[test]
    fn test_extract_language() {
        let req = TestRequest::default()
            .insert_header((header::ACCEPT_LANGUAGE, "uz-UZ,uz;q=0.9"))
            .to_http_request();
        assert_eq!(extract_language(&req), Language::Uzbek);

        let req = TestRequest::default().to_http_request();
        assert_eq!(extract_language(&req), Language::English);
    }
}
