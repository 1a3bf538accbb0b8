/// Default origin of the CareerMate REST API
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
/// Default timeout in seconds applied to every request that does not set its own
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("careermate-client/", env!("CARGO_PKG_VERSION"));

/// Login endpoint
pub const LOGIN_PATH: &str = "/auth/login";
/// Registration endpoint
pub const REGISTER_PATH: &str = "/auth/register";
/// Token refresh endpoint
pub const REFRESH_PATH: &str = "/auth/refresh";
/// OTP verification endpoint
pub const VERIFY_OTP_PATH: &str = "/auth/verify-otp";
/// Password recovery endpoint
pub const FORGOT_PASSWORD_PATH: &str = "/auth/forgot-password";
/// Password reset endpoint
pub const RESET_PASSWORD_PATH: &str = "/auth/reset-password";
/// Server-side logout endpoint
pub const LOGOUT_PATH: &str = "/auth/logout";

/// Persisted key holding the access token
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Persisted key holding the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// Persisted key holding the user profile
pub const USER_KEY: &str = "user";

/// Default page size for paginated endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Default requests per period for the outgoing throttle
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 100;
/// Default throttle period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 1;
/// Default throttle burst size
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 50;

/// Message shown when an error body carries nothing usable
pub const GENERIC_ERROR_MESSAGE: &str = "Unknown error";
/// Message shown when the session could not be recovered
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please login again.";
/// Message shown when the server could not be reached
pub const NETWORK_ERROR_MESSAGE: &str = "Unable to reach the server";

/// Buffered session events per subscriber before lagging ones start missing events
pub const SESSION_EVENT_CAPACITY: usize = 16;
/// Number of leading characters of a token kept when it is logged
pub const TOKEN_MASK_PREFIX: usize = 8;
