/// Application name used in logs and the CLI banner
pub const APP_NAME: &str = "Gatehouse";

/// Path of the installed-plugins listing, relative to the catalog base URL
pub const CATALOG_INSTALLED_ENDPOINT: &str = "plugins/installed";

/// File name of on-disk plugin descriptors
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Where the not-found page sends the user
pub const DEFAULT_DASHBOARD: &str = "/dashboard";

/// Remote catalog request timeout
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
