use serde::{Deserialize, Serialize};

/// Behavior switches for a [`BorderTemplate`](crate::BorderTemplate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateOptions {
    /// When a `None` style is drawn on an edge, also record `None` on the neighboring cell's
    /// facing edge.
    ///
    /// Adjacent cells share a grid line, so without this a line cleared from one side can still be
    /// rendered from the other once the template is applied.
    pub clear_adjacent_edges: bool,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            clear_adjacent_edges: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let opts: TemplateOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, TemplateOptions::default());
        assert!(opts.clear_adjacent_edges);

        let opts: TemplateOptions =
            serde_json::from_str(r#"{"clear_adjacent_edges":false}"#).unwrap();
        assert!(!opts.clear_adjacent_edges);
    }
}
