//! Standard error labels and messages for consistent error responses.

// `error` field labels
pub const VALIDATION_ERROR: &str = "Validation Error";
pub const UNAUTHORIZED: &str = "Unauthorized";
pub const NOT_FOUND: &str = "Not Found";
pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

// `message` field defaults
pub const INVALID_TOKEN: &str = "Please provide a valid authorization token";
pub const INTERNAL_ERROR: &str = "Something went wrong on our end";
pub const INVALID_JSON: &str = "Request body is not valid JSON";
