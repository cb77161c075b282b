//! Presentation-level configuration

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Suppress status lines and spinners
    pub quiet: bool,
    /// Print the category list whenever it changes
    pub echo_categories: bool,
}
