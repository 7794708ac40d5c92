use points_admin_business::{AdminPanel, BusinessConfig};

/// The main application state.
#[derive(Debug)]
pub struct State {
    pub panel: AdminPanel,
}

impl State {
    pub fn new(config: &BusinessConfig) -> Self {
        Self {
            panel: AdminPanel::new(config),
        }
    }

    /// State pointed at a mock backend.
    pub fn test(base_url: impl Into<String>) -> Self {
        Self::new(&BusinessConfig::new(base_url))
    }
}
