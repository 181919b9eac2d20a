//! Line Chart Point Model
//! One (x, y) sample of the plotted series, constructible from the three
//! literal shapes the chart accepts (canonical, positional pair, keyed entries).

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// Counter backing the synthesized per-point identity.
static NEXT_POINT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Error, Debug, PartialEq)]
pub enum PointError {
    #[error("positional literal needs at least [x, y], got {len} element(s)")]
    PairTooShort { len: usize },
    #[error("y value {0} is not a number, a numeric string, or an integer")]
    InvalidY(Scalar),
    #[error("keyed literal is missing a usable '{0}' entry")]
    MissingKey(&'static str),
}

/// A loosely-shaped literal element: what call sites may pass where the
/// canonical form takes a `String` x or an `f64` y. Closed set, no
/// runtime downcasting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    // Int before Float so integral JSON numbers stay integral.
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Coerce to a y value: numbers pass through, strings are parsed as
    /// decimal, integers are widened. `None` means not coercible.
    pub fn as_y(&self) -> Option<f64> {
        match self {
            Scalar::Float(v) => Some(*v),
            Scalar::Text(s) => s.parse().ok(),
            Scalar::Int(i) => Some(*i as f64),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

/// One sample of a plotted series: categorical x-key plus numeric y value.
///
/// Samples are immutable once built. `id` is synthesized at construction and
/// only identifies the instance for list/plot rendering; equality is value
/// equality over `(x, y)` so structurally identical points compare equal.
#[derive(Debug, Clone)]
pub struct LineChartPoint {
    id: u64,
    pub x: String,
    pub y: f64,
}

impl PartialEq for LineChartPoint {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl LineChartPoint {
    /// Canonical form: explicit x-key and y value.
    pub fn new(x: impl Into<String>, y: f64) -> Self {
        Self {
            id: NEXT_POINT_ID.fetch_add(1, Ordering::Relaxed),
            x: x.into(),
            y,
        }
    }

    /// Positional form: `[x, y, ...]`. The first element becomes the x-key via
    /// its string representation, the second is coerced to y (number, numeric
    /// string, or integer). Extra elements are ignored.
    pub fn from_pair(pair: &[Scalar]) -> Result<Self, PointError> {
        if pair.len() < 2 {
            return Err(PointError::PairTooShort { len: pair.len() });
        }
        let y = pair[1]
            .as_y()
            .ok_or_else(|| PointError::InvalidY(pair[1].clone()))?;
        Ok(Self::new(pair[0].to_string(), y))
    }

    /// Keyed form: a sequence of `(key, value)` entries. Only `"x"` and `"y"`
    /// are recognized, everything else is skipped. A later `"x"` replaces an
    /// earlier one; a later `"y"` replaces an earlier one only if it coerces.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, PointError>
    where
        I: IntoIterator<Item = (&'a str, Scalar)>,
    {
        let mut x = None;
        let mut y = None;

        for (key, value) in entries {
            match key {
                "x" => x = Some(value.to_string()),
                "y" => {
                    if let Some(v) = value.as_y() {
                        y = Some(v);
                    }
                }
                _ => continue,
            }
        }

        let x = x.ok_or(PointError::MissingKey("x"))?;
        let y = y.ok_or(PointError::MissingKey("y"))?;
        Ok(Self::new(x, y))
    }

    /// Rendering identity, distinct from the x-key. Not part of equality.
    #[allow(dead_code)]
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// The two serialized shapes a point literal can take.
#[derive(Deserialize)]
#[serde(untagged)]
enum PointRepr {
    Entries(BTreeMap<String, Scalar>),
    Pair(Vec<Scalar>),
}

impl<'de> Deserialize<'de> for LineChartPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match PointRepr::deserialize(deserializer)? {
            PointRepr::Entries(entries) => {
                Self::from_entries(entries.iter().map(|(k, v)| (k.as_str(), v.clone())))
            }
            PointRepr::Pair(pair) => Self::from_pair(&pair),
        }
        .map_err(serde::de::Error::custom)
    }
}
