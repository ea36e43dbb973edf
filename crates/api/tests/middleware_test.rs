use uuid::Uuid;

use ebe_api::middleware::auth;
use ebe_core::errors::EbeError;

#[tokio::test]
async fn test_error_handling_not_found() {
    // Create a not found error
    let error = EbeError::NotFound("Meeting not found".to_string());

    // Map the error to a response
    let response = ebe_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    // Create a validation error
    let error = EbeError::Validation("user_id is required".to_string());

    // Map the error to a response
    let response = ebe_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_authentication() {
    // Create an authentication error
    let error = EbeError::Authentication("Invalid token".to_string());

    // Map the error to a response
    let response = ebe_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_handling_authorization() {
    // Create an authorization error
    let error = EbeError::Authorization("Not a club member".to_string());

    // Map the error to a response
    let response = ebe_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_error_handling_database() {
    // Create a database error
    let error = EbeError::Database(eyre::eyre!("Database error"));

    // Map the error to a response
    let response = ebe_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_error_handling_internal() {
    // Create an internal error
    let error = EbeError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    // Map the error to a response
    let response = ebe_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_token_round_trip() {
    let user_id = Uuid::new_v4();

    let token = auth::issue_token("secret", user_id, "alice", 3600).unwrap();
    let claims = auth::decode_token("secret", &token).unwrap();

    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.username, "alice");
}

#[tokio::test]
async fn test_token_rejected_with_wrong_secret() {
    let token = auth::issue_token("secret", Uuid::new_v4(), "alice", 3600).unwrap();

    let result = auth::decode_token("other-secret", &token);

    assert!(matches!(result, Err(EbeError::Authentication(_))));
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let result = auth::decode_token("secret", "not-a-token");

    assert!(matches!(result, Err(EbeError::Authentication(_))));
}

#[tokio::test]
async fn test_expired_token_rejected() {
    // Signed two hours in the past, well beyond validation leeway
    let token = auth::issue_token("secret", Uuid::new_v4(), "alice", -7200).unwrap();

    let result = auth::decode_token("secret", &token);

    assert!(matches!(result, Err(EbeError::Authentication(_))));
}
