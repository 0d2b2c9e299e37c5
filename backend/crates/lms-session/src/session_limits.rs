/// Configuration for session tracking limits
#[derive(Debug, Clone)]
pub struct SessionLimits {
    /// Maximum concurrently tracked sessions
    pub max_total: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self { max_total: 10000 }
    }
}
