//! Service configuration

/// Tuning knobs shared by the ranking and view engines.
///
/// Zero limits are legal and simply yield empty lists; read paths never
/// fail on an empty data set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Entries returned by the top-restaurant and top-user rankings
    pub top_limit: usize,

    /// Entries per list in the activity feed
    pub feed_limit: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            top_limit: 10,
            feed_limit: 10,
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_limit(mut self, top_limit: usize) -> Self {
        self.top_limit = top_limit;
        self
    }

    pub fn with_feed_limit(mut self, feed_limit: usize) -> Self {
        self.feed_limit = feed_limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.top_limit, 10);
        assert_eq!(config.feed_limit, 10);
    }

    #[test]
    fn test_builders() {
        let config = ServiceConfig::new().with_top_limit(3).with_feed_limit(5);
        assert_eq!(config.top_limit, 3);
        assert_eq!(config.feed_limit, 5);
    }
}
