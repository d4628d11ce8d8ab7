/// Device ID used for authentication procedures.
/// librespot opts for UUIDv4s instead
pub const DEVICE_ID: &str = "Psst";

/// Client ID for desktop keymaster client
pub const CLIENT_ID: &str = "65b708073fc0480ea92a077233ca87bd";

/// The semantic version of the Spotify desktop client.
pub const SPOTIFY_SEMANTIC_VERSION: &str = "1.2.52.442";

/// Fixed wire constants the AP expects regardless of auth flavor or build
/// configuration.
pub const SYSTEM_INFORMATION_STRING: &str = "librespot";
pub const VERSION_STRING: &str = "librespot-8315e10";

/// OAuth scopes requested when exchanging a user login for an access token.
pub const ACCESS_SCOPES: &[&str] = &[
    "streaming",
    "user-read-email",
    "user-read-private",
];
