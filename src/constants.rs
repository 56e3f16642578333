//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Window title
pub const APP_TITLE: &str = "Multipane Shop";

/// Default window dimensions (landscape, so the split pane shows first)
pub const DEFAULT_WINDOW_WIDTH: f32 = 1080.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 640.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

/// Product list row height in pixels
pub const LIST_ROW_HEIGHT: f32 = 52.0;

/// Padding around list rows and the details column
pub const CONTENT_PADDING: f32 = 16.0;

/// Gap between price and description
pub const DETAILS_SPACING: f32 = 8.0;

/// Height of the stack-navigation top bar
pub const TOP_BAR_HEIGHT: f32 = 56.0;

/// Title of the detail screen in stack navigation
pub const DETAILS_TITLE: &str = "Product Details";

/// Shown when no product is selected (or the selection does not resolve)
pub const DETAILS_PLACEHOLDER: &str = "Select a product to view details.";

/// Label of the back control
pub const BACK_LABEL: &str = "←";

/// Application directory names
pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "example";
pub const APP_NAME: &str = "multipane-shop";

/// Configuration and log file names
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_PREFIX: &str = "multipane-shop.log";
