//! Read access to the host's runtime options.

use std::collections::HashMap;

#[derive(Clone, PartialEq, Debug)]
pub enum OptionValue {
    Bool(bool),
    Long(i64),
    Double(f64),
    String(String),
}

/// Looks up a runtime option by name.
pub trait OptionManager {
    fn get(&self, name: &str) -> Option<OptionValue>;
}

/// An option manager with no options set.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOptions;

impl OptionManager for NoOptions {
    fn get(&self, _name: &str) -> Option<OptionValue> {
        None
    }
}

impl OptionManager for HashMap<String, OptionValue> {
    fn get(&self, name: &str) -> Option<OptionValue> {
        HashMap::get(self, name).cloned()
    }
}
