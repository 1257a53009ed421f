use crate::config::types::*;

impl Default for Render {
    fn default() -> Self {
        Self {
            strict: false,
            format: OutputFormat::Fragment,
        }
    }
}
