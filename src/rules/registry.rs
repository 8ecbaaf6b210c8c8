//! Rule registry with the fixed evaluation order

use super::{
    DetectionRule, ExpoRule, GoRule, LaravelRule, NextJsRule, NodeJsRule, PythonRule, RailsRule,
    ReactNativeRule,
};

/// Registry of all detection rules.
///
/// Order matters twice: it fixes the label order in the result, and the
/// nodejs/reactnative rules consult the labels contributed before them.
pub struct RuleRegistry {
    rules: Vec<Box<dyn DetectionRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn DetectionRule>> = vec![
            Box::new(LaravelRule),
            Box::new(NextJsRule),
            Box::new(NodeJsRule),
            Box::new(ExpoRule),
            Box::new(ReactNativeRule),
            Box::new(PythonRule),
            Box::new(RailsRule),
            Box::new(GoRule),
        ];

        Self { rules }
    }

    pub fn rules(&self) -> &[Box<dyn DetectionRule>] {
        &self.rules
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
