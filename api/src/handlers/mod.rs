pub mod error;

pub use error::{extract_language, handle_domain_error_with_lang, status_for, validation_error};
