//! Scoring weights shared across wizard steps
//!
//! The wizard's parent owns the weights. Steps receive an immutable
//! [`WeightsMap`] snapshot together with a [`WeightUpdater`] through which
//! they request changes; the parent decides how a request becomes a new
//! snapshot.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Value the optimization backend assumes for a weight that was never set.
pub const DEFAULT_WEIGHT: f64 = 0.0001;

// ============================================================================
// WEIGHT KEY
// ============================================================================

/// Name of a single scoring weight, e.g. `risk_weight`.
///
/// The full key set is owned by the wizard; only the two keys the overview
/// step binds sliders to have constructors here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightKey(String);

impl WeightKey {
    pub const RISK: &'static str = "risk_weight";
    pub const ESG: &'static str = "esg_weight";

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn risk() -> Self {
        Self::new(Self::RISK)
    }

    pub fn esg() -> Self {
        Self::new(Self::ESG)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WeightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WeightKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

// ============================================================================
// WEIGHTS MAP
// ============================================================================

/// Immutable snapshot of the scoring weights.
///
/// Cloning is cheap and yields a handle to the same snapshot, so
/// [`WeightsMap::ptr_eq`] can tell whether a value was passed through
/// untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightsMap(Arc<BTreeMap<WeightKey, f64>>);

impl WeightsMap {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<WeightKey>,
        I: IntoIterator<Item = (K, f64)>,
    {
        Self(Arc::new(
            pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    pub fn get(&self, key: &WeightKey) -> Option<f64> {
        self.0.get(key).copied()
    }

    #[allow(dead_code)]
    pub fn contains(&self, key: &WeightKey) -> bool {
        self.0.contains_key(key)
    }

    /// Derive a new snapshot with `key` set to `value`. `self` is unchanged.
    pub fn with(&self, key: WeightKey, value: f64) -> Self {
        let mut entries = self.0.as_ref().clone();
        entries.insert(key, value);
        Self(Arc::new(entries))
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = (&WeightKey, f64)> {
        self.0.iter().map(|(k, v)| (k, *v))
    }

    /// True when both handles point at the same snapshot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Serialize for WeightsMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WeightsMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<WeightKey, f64>::deserialize(deserializer).map(|m| Self(Arc::new(m)))
    }
}

// ============================================================================
// WEIGHT UPDATER
// ============================================================================

/// Callback requesting that one weight be set to a new value.
#[derive(Clone)]
pub struct WeightUpdater(Arc<dyn Fn(&WeightKey, f64) + Send + Sync>);

impl WeightUpdater {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&WeightKey, f64) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Updater that drops every request.
    #[allow(dead_code)]
    pub fn noop() -> Self {
        Self::new(|_, _| {})
    }

    pub fn request(&self, key: &WeightKey, value: f64) {
        (self.0)(key, value);
    }

    /// True when both handles share the same callback.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for WeightUpdater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WeightUpdater").finish_non_exhaustive()
    }
}
