//! Default values shared with the hosting application.

// ==================== Service URLs ====================

pub const DEFAULT_CHARMSTORE_URL: &str = "https://api.jujucharms.com/charmstore/";

pub const DEFAULT_PLANS_URL: &str = "https://api.jujucharms.com/omnibus/";

pub const DEFAULT_TERMS_URL: &str = "https://api.jujucharms.com/terms/";

// ==================== Model Connection ====================

/// Socket path template; `$uuid` is replaced with the model identifier
pub const DEFAULT_SOCKET_TEMPLATE: &str = "/model/$uuid/api";

// ==================== Host Namespace ====================

/// Namespace the host web server uses for GUI keys in its settings
pub const JUJUGUI_PREFIX: &str = "jujugui.";
