/// Version embedded when the config does not name one
pub const DEFAULT_VERSION: &str = "unknown";
/// File stem of the compiled bridge library when the config does not name one
pub const DEFAULT_LIBRARY_STEM: &str = "bridge";
/// API keys have the form `<identifier>:<secret>`
pub const TOKEN_SEPARATOR: char = ':';
/// Status code the native layer reports on success
pub const STATUS_SUCCESS: i32 = 0;
/// Initial value of every status slot, overwritten by the native call
pub const STATUS_UNSET: i32 = -100;
