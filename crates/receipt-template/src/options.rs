//! Composition options

use serde::{Deserialize, Serialize};

/// Nesting bound applied when cycle detection is off and no `max_depth` is set
pub const UNCHECKED_DEPTH_LIMIT: usize = 64;

/// What a placeholder renders when its final value is empty
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EmptyValuePolicy {
    /// Print the original `{{ ... }}` token text
    #[default]
    KeepLiteralToken,
    /// Print nothing
    EmitEmptyString,
}

/// Options controlling a composition run
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposeOptions {
    /// Rendering of placeholders whose value ends up empty
    pub empty_value_policy: EmptyValuePolicy,

    /// Maximum nesting of row, iterator and sectionref expansion
    ///
    /// Unbounded when `None`, unless cycle detection is off.
    pub max_depth: Option<usize>,

    /// Fail when a sectionref re-enters a layout already being expanded
    pub detect_cycles: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            empty_value_policy: EmptyValuePolicy::default(),
            max_depth: None,
            detect_cycles: true,
        }
    }
}

impl ComposeOptions {
    /// Set the empty value policy
    pub fn with_empty_value_policy(mut self, policy: EmptyValuePolicy) -> Self {
        self.empty_value_policy = policy;
        self
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Enable or disable sectionref cycle detection
    pub fn with_cycle_detection(mut self, enabled: bool) -> Self {
        self.detect_cycles = enabled;
        self
    }

    /// Nesting bound in effect for a run
    ///
    /// An explicit `max_depth` always wins. Without one, nesting is only
    /// bounded when cycle detection is off, since a sectionref loop would
    /// otherwise recurse until the stack runs out.
    pub fn depth_limit(&self) -> Option<usize> {
        self.max_depth
            .or((!self.detect_cycles).then_some(UNCHECKED_DEPTH_LIMIT))
    }
}
