use std::collections::BTreeMap;

/// Animated property values of one target, keyed by property name (`opacity`, `y`, ...).
pub type PropMap = BTreeMap<String, f64>;

/// Animated values for a set of targets.
///
/// Targets and properties are kept sorted so snapshots serialize deterministically.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PropertyState {
    targets: BTreeMap<String, PropMap>,
}

impl PropertyState {
    /// Empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one property value.
    pub fn get(&self, target: &str, property: &str) -> Option<f64> {
        self.targets.get(target)?.get(property).copied()
    }

    /// All properties of one target.
    pub fn target(&self, target: &str) -> Option<&PropMap> {
        self.targets.get(target)
    }

    /// Write one property value.
    pub fn set(&mut self, target: &str, property: &str, value: f64) {
        self.targets
            .entry(target.to_string())
            .or_default()
            .insert(property.to_string(), value);
    }

    /// Overwrite values with everything present in `other`.
    pub fn merge(&mut self, other: &PropertyState) {
        for (target, props) in &other.targets {
            let dst = self.targets.entry(target.clone()).or_default();
            for (k, v) in props {
                dst.insert(k.clone(), *v);
            }
        }
    }

    /// Iterate `(target, properties)` in target order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropMap)> {
        self.targets.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// True when no target has any property.
    pub fn is_empty(&self) -> bool {
        self.targets.values().all(|p| p.is_empty())
    }
}
