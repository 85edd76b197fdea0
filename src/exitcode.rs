//! Standard exit codes (BSD sysexits.h compatible)

/// Command line usage error
pub const USAGE: i32 = 64;

/// Service unavailable (parameter store query failed)
pub const UNAVAILABLE: i32 = 69;

/// System error (e.g., can't create the async runtime)
pub const OSERR: i32 = 71;

/// Configuration error
pub const CONFIG: i32 = 78;
