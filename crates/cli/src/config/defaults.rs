pub const DEFAULT_RUST_LOG: &str = "info";
pub const DEFAULT_BASE_URL: &str = pipedrive::DEFAULT_BASE_URL;
