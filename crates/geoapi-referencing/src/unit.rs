//! Units of measure attached to axes, ellipsoids and prime meridians.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical quantity measured by a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// Length; base unit metre.
    Linear,
    /// Plane angle; base unit radian.
    Angular,
    /// Time; base unit second.
    Temporal,
    /// Dimensionless ratio; base unit unity.
    Scale,
    /// Pressure; base unit pascal.
    Pressure,
}

impl UnitKind {
    /// Returns the snake_case identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Angular => "angular",
            Self::Temporal => "temporal",
            Self::Scale => "scale",
            Self::Pressure => "pressure",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of measure: symbol, quantity kind and factor to the base unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Unit symbol, e.g. `"m"` or `"°"`.
    pub symbol: String,
    /// Quantity measured.
    pub kind: UnitKind,
    /// Multiplication factor converting a value in this unit to the base unit.
    pub to_base: f64,
}

impl Unit {
    /// Create a unit.
    pub fn new(symbol: impl Into<String>, kind: UnitKind, to_base: f64) -> Self {
        Self {
            symbol: symbol.into(),
            kind,
            to_base,
        }
    }

    /// The metre, base linear unit.
    pub fn metre() -> Self {
        Self::new("m", UnitKind::Linear, 1.0)
    }

    /// 1000 metres.
    pub fn kilometre() -> Self {
        Self::new("km", UnitKind::Linear, 1000.0)
    }

    /// The radian, base angular unit.
    pub fn radian() -> Self {
        Self::new("rad", UnitKind::Angular, 1.0)
    }

    /// Decimal degree.
    pub fn degree() -> Self {
        Self::new("°", UnitKind::Angular, std::f64::consts::PI / 180.0)
    }

    /// The second, base temporal unit.
    pub fn second() -> Self {
        Self::new("s", UnitKind::Temporal, 1.0)
    }

    /// 86 400 seconds.
    pub fn day() -> Self {
        Self::new("d", UnitKind::Temporal, 86_400.0)
    }

    /// Dimensionless scale of one.
    pub fn unity() -> Self {
        Self::new("1", UnitKind::Scale, 1.0)
    }

    /// Grid cell count; dimensionless.
    pub fn pixel() -> Self {
        Self::new("pixel", UnitKind::Scale, 1.0)
    }

    /// Pressure unit used by barometric vertical axes.
    pub fn hectopascal() -> Self {
        Self::new("hPa", UnitKind::Pressure, 100.0)
    }

    /// Convert `value` from this unit to the base unit of its kind.
    pub fn to_base_value(&self, value: f64) -> f64 {
        value * self.to_base
    }

    /// Convert an angle in this unit to degrees. `None` for non-angular units.
    pub fn to_degrees(&self, value: f64) -> Option<f64> {
        (self.kind == UnitKind::Angular).then(|| self.to_base_value(value).to_degrees())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_conversion() {
        let deg = Unit::degree();
        let d = deg.to_degrees(180.0).unwrap();
        assert!((d - 180.0).abs() < 1e-9);
        assert!((deg.to_base_value(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!(Unit::metre().to_degrees(1.0).is_none());
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&UnitKind::Angular).unwrap();
        assert_eq!(json, "\"angular\"");
        assert_eq!(UnitKind::Pressure.to_string(), "pressure");
    }
}
