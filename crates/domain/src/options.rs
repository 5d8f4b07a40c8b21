// crates/domain/src/options.rs
use serde::{Deserialize, Serialize};

/// Flags controlling normalisation and which detail metrics are computed.
///
/// Every flag defaults to `true`. Missing keys in a config file fall back to
/// the default, so `{ check_whitespace: false }` is a valid options file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileOptions {
    /// Fold each text unit to lowercase before measuring and tokenizing.
    pub to_lower: bool,
    /// Count `<x ...>...</x>` style tag pairs.
    pub check_html_tags: bool,
    /// Compute the special character fraction.
    pub check_special_chars: bool,
    /// Compute the whitespace fraction.
    pub check_whitespace: bool,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            to_lower: true,
            check_html_tags: true,
            check_special_chars: true,
            check_whitespace: true,
        }
    }
}

impl ProfileOptions {
    /// Only the base metrics (`text length`, `tokens`, `is empty`).
    pub const fn base_only() -> Self {
        Self {
            to_lower: true,
            check_html_tags: false,
            check_special_chars: false,
            check_whitespace: false,
        }
    }

    pub const fn with_to_lower(mut self, value: bool) -> Self {
        self.to_lower = value;
        self
    }

    pub const fn with_html_tags(mut self, value: bool) -> Self {
        self.check_html_tags = value;
        self
    }

    pub const fn with_special_chars(mut self, value: bool) -> Self {
        self.check_special_chars = value;
        self
    }

    pub const fn with_whitespace(mut self, value: bool) -> Self {
        self.check_whitespace = value;
        self
    }

    /// True if any optional detail metric is enabled.
    pub const fn has_details(&self) -> bool {
        self.check_html_tags || self.check_special_chars || self.check_whitespace
    }
}
