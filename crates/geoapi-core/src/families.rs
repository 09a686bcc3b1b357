//! # Predefined Code-List Families
//!
//! The code lists used by the referencing model and the conformance
//! validators, with their predefined codes in standard order.
//!
//! ## Implements
//!
//! ISO 19115 `MD_ObligationCode`, ISO 19111 `CS_AxisDirection`,
//! `CS_RangeMeaning`, `CD_PixelInCell` and `CD_VerticalDatumType`.

use crate::codelist::{CodeList, CodeListFamily};

crate::code_list! {
    /// Obligation of an element or entity (ISO 19115).
    pub struct Obligation in "org.opengis.annotation" {
        /// Element is always required.
        mandatory => "MANDATORY",
        /// Element is not required.
        optional => "OPTIONAL",
        /// Element is required when a condition holds.
        conditional => "CONDITIONAL",
    }
}

crate::code_list! {
    /// Direction of positive increments along a coordinate system axis.
    pub struct AxisDirection in "org.opengis.referencing.cs" {
        /// Unknown or unspecified direction.
        other => "OTHER",
        north => "NORTH",
        north_north_east => "NORTH_NORTH_EAST",
        north_east => "NORTH_EAST",
        east_north_east => "EAST_NORTH_EAST",
        east => "EAST",
        east_south_east => "EAST_SOUTH_EAST",
        south_east => "SOUTH_EAST",
        south_south_east => "SOUTH_SOUTH_EAST",
        south => "SOUTH",
        south_south_west => "SOUTH_SOUTH_WEST",
        south_west => "SOUTH_WEST",
        west_south_west => "WEST_SOUTH_WEST",
        west => "WEST",
        west_north_west => "WEST_NORTH_WEST",
        north_west => "NORTH_WEST",
        north_north_west => "NORTH_NORTH_WEST",
        /// Towards the zenith.
        up => "UP",
        /// Towards the nadir.
        down => "DOWN",
        /// From the geocentre towards the prime meridian on the equator.
        geocentric_x => "GEOCENTRIC_X",
        /// From the geocentre towards 90°E on the equator.
        geocentric_y => "GEOCENTRIC_Y",
        /// From the geocentre towards the north pole.
        geocentric_z => "GEOCENTRIC_Z",
        /// Towards the future.
        future => "FUTURE",
        /// Towards the past.
        past => "PAST",
        column_positive => "COLUMN_POSITIVE",
        column_negative => "COLUMN_NEGATIVE",
        row_positive => "ROW_POSITIVE",
        row_negative => "ROW_NEGATIVE",
        display_right => "DISPLAY_RIGHT",
        display_left => "DISPLAY_LEFT",
        display_up => "DISPLAY_UP",
        display_down => "DISPLAY_DOWN",
    }
}

/// Compass directions in clockwise order starting at north.
const COMPASS: [&str; 16] = [
    "NORTH",
    "NORTH_NORTH_EAST",
    "NORTH_EAST",
    "EAST_NORTH_EAST",
    "EAST",
    "EAST_SOUTH_EAST",
    "SOUTH_EAST",
    "SOUTH_SOUTH_EAST",
    "SOUTH",
    "SOUTH_SOUTH_WEST",
    "SOUTH_WEST",
    "WEST_SOUTH_WEST",
    "WEST",
    "WEST_NORTH_WEST",
    "NORTH_WEST",
    "NORTH_NORTH_WEST",
];

/// Non-compass opposite pairs; the first member is the absolute direction.
const OPPOSITE_PAIRS: [(&str, &str); 6] = [
    ("UP", "DOWN"),
    ("FUTURE", "PAST"),
    ("COLUMN_POSITIVE", "COLUMN_NEGATIVE"),
    ("ROW_POSITIVE", "ROW_NEGATIVE"),
    ("DISPLAY_RIGHT", "DISPLAY_LEFT"),
    ("DISPLAY_UP", "DISPLAY_DOWN"),
];

impl AxisDirection {
    /// The opposite direction, if this direction has one.
    ///
    /// `OTHER`, the geocentric directions and user-defined codes have none.
    pub fn opposite(&self) -> Option<Self> {
        let name = self.name();
        if let Some(i) = COMPASS.iter().position(|c| *c == name) {
            return Self::value_of(COMPASS[(i + 8) % 16]);
        }
        OPPOSITE_PAIRS.iter().find_map(|(a, b)| {
            if *a == name {
                Self::value_of(b)
            } else if *b == name {
                Self::value_of(a)
            } else {
                None
            }
        })
    }

    /// The "positive" member of this direction's opposite pair.
    ///
    /// `SOUTH` maps to `NORTH`, `DOWN` to `UP`, `PAST` to `FUTURE`. Directions
    /// without an opposite map to themselves.
    pub fn absolute(&self) -> Self {
        let name = self.name();
        if let Some(i) = COMPASS.iter().position(|c| *c == name) {
            if i >= 8 {
                return Self::value_of(COMPASS[i - 8]).unwrap_or(*self);
            }
            return *self;
        }
        OPPOSITE_PAIRS
            .iter()
            .find(|(_, b)| *b == name)
            .and_then(|(a, _)| Self::value_of(a))
            .unwrap_or(*self)
    }

    /// Whether this is one of the sixteen compass directions.
    pub fn is_compass(&self) -> bool {
        COMPASS.contains(&self.name())
    }

    /// Bearing of a compass direction in degrees clockwise from north.
    pub fn compass_angle(&self) -> Option<f64> {
        let name = self.name();
        COMPASS
            .iter()
            .position(|c| *c == name)
            .map(|i| i as f64 * 22.5)
    }

    /// Whether this is `UP` or `DOWN`.
    pub fn is_vertical(&self) -> bool {
        matches!(self.name(), "UP" | "DOWN")
    }

    /// Whether this is `FUTURE` or `PAST`.
    pub fn is_temporal(&self) -> bool {
        matches!(self.name(), "FUTURE" | "PAST")
    }

    /// Whether this is a geocentric direction.
    pub fn is_geocentric(&self) -> bool {
        self.name().starts_with("GEOCENTRIC_")
    }

    /// Whether this is a grid (column/row) direction.
    pub fn is_grid(&self) -> bool {
        self.name().starts_with("COLUMN_") || self.name().starts_with("ROW_")
    }

    /// Whether this is a display direction.
    pub fn is_display(&self) -> bool {
        self.name().starts_with("DISPLAY_")
    }
}

crate::code_list! {
    /// Meaning of the axis value range.
    pub struct RangeMeaning in "org.opengis.referencing.cs" {
        /// Any value outside the range is invalid.
        exact => "EXACT",
        /// The axis is continuous with values wrapping around at the bounds.
        wraparound => "WRAPAROUND",
    }
}

crate::code_list! {
    /// Whether grid values are measured at the cell center or corner.
    pub struct PixelInCell in "org.opengis.referencing.datum" {
        cell_center => "CELL_CENTER",
        cell_corner => "CELL_CORNER",
    }
}

crate::code_list! {
    /// Type of a vertical datum.
    pub struct VerticalDatumType in "org.opengis.referencing.datum" {
        other_surface => "OTHER_SURFACE",
        orthometric => "ORTHOMETRIC",
        ellipsoidal => "ELLIPSOIDAL",
        barometric => "BAROMETRIC",
        geoidal => "GEOIDAL",
        depth => "DEPTH",
    }
}

/// A code-list family known to the catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Fully-qualified name of the family type.
    pub qualified_name: &'static str,
    /// The family registry.
    pub code_list: &'static CodeList,
}

fn entry<F: CodeListFamily>() -> CatalogEntry {
    CatalogEntry {
        qualified_name: F::QUALIFIED_NAME,
        code_list: F::code_list(),
    }
}

/// All predefined code-list families, sorted by qualified name.
pub fn catalog() -> Vec<CatalogEntry> {
    let mut entries = vec![
        entry::<Obligation>(),
        entry::<AxisDirection>(),
        entry::<RangeMeaning>(),
        entry::<PixelInCell>(),
        entry::<VerticalDatumType>(),
    ];
    entries.sort_by_key(|e| e.qualified_name);
    entries
}

/// Find a predefined family by qualified name or simple family name.
pub fn find_family(name: &str) -> Option<CatalogEntry> {
    catalog()
        .into_iter()
        .find(|e| e.qualified_name == name || e.code_list.simple_name() == name)
}
