use std::error::Error;

use ebe_core::errors::{EbeError, EbeResult};

#[test]
fn test_ebe_error_display() {
    let not_found = EbeError::NotFound("Meeting not found".to_string());
    let validation = EbeError::Validation("Invalid input".to_string());
    let authentication = EbeError::Authentication("Invalid token".to_string());
    let authorization = EbeError::Authorization("Not a club member".to_string());
    let database = EbeError::Database(eyre::eyre!("Database connection failed"));
    let internal = EbeError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(not_found.to_string(), "Resource not found: Meeting not found");
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(
        authentication.to_string(),
        "Authentication error: Invalid token"
    );
    assert_eq!(
        authorization.to_string(),
        "Authorization error: Not a club member"
    );
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let ebe_error = EbeError::Internal(Box::new(io_error));

    assert!(ebe_error.source().is_some());
}

#[test]
fn test_ebe_result() {
    let result: EbeResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: EbeResult<i32> = Err(EbeError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_trait_implementation() {
    let eyre_error = eyre::eyre!("Database error");
    let ebe_error = EbeError::Database(eyre_error);

    assert!(ebe_error.to_string().contains("Database error"));
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let ebe_error: EbeError = boxed.into();

    assert!(matches!(ebe_error, EbeError::Internal(_)));
}
