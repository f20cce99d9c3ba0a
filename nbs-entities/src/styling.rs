pub const DEFAULT_COLOR: &str = "#3388ff";

/// Visual styling of a solution on a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styling {
    /// Hex color code for rendering.
    pub color: String,
    /// Whether the feature is hidden on initial render.
    pub hidden: bool,
}

impl Default for Styling {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            hidden: false,
        }
    }
}
