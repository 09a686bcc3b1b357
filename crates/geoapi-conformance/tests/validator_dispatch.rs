//! Dispatcher behavior over objects read from YAML descriptions.

use geoapi_conformance::{ValidationConfig, Validators};
use geoapi_referencing::{CoordinateReferenceSystem, ReferencingObject};

fn parse(yaml: &str) -> ReferencingObject {
    serde_yaml::from_str(yaml).unwrap()
}

const EMPTY_VERTICAL_CS: &str = r#"
object: coordinate_system
kind: vertical
name:
  code: Height
axes: []
"#;

const UNLABELLED_LATITUDE: &str = r#"
object: axis
name:
  code: Latitude
abbreviation: ""
direction: NORTH
unit:
  symbol: "°"
  kind: angular
  to_base: 0.017453292519943295
minimum_value: -90.0
maximum_value: 90.0
"#;

const GEOGRAPHIC_CRS: &str = r#"
object: crs
type: geographic
name:
  code: WGS 84
  code_space: EPSG
datum:
  name:
    code: World Geodetic System 1984
  kind:
    type: geodetic
    ellipsoid:
      name:
        code: WGS 84
      semi_major_axis: 6378137.0
      semi_minor_axis: 6356752.314245179
      inverse_flattening: 298.257223563
      ivf_definitive: true
      axis_unit:
        symbol: m
        kind: linear
        to_base: 1.0
    prime_meridian:
      name:
        code: Greenwich
      greenwich_longitude: 0.0
      angular_unit:
        symbol: "°"
        kind: angular
        to_base: 0.017453292519943295
coordinate_system:
  kind: ellipsoidal
  name:
    code: Ellipsoidal 2D
  axes:
    - name:
        code: Geodetic latitude
      abbreviation: φ
      direction: NORTH
      unit:
        symbol: "°"
        kind: angular
        to_base: 0.017453292519943295
      minimum_value: -90.0
      maximum_value: 90.0
      range_meaning: EXACT
    - name:
        code: Geodetic longitude
      abbreviation: λ
      direction: EAST
      unit:
        symbol: "°"
        kind: angular
        to_base: 0.017453292519943295
      minimum_value: -180.0
      maximum_value: 180.0
      range_meaning: WRAPAROUND
"#;

#[test]
fn absent_object_is_valid() {
    assert!(Validators::default().dispatch(None).is_ok());
}

#[test]
fn too_few_axes_names_the_kind() {
    let object = parse(EMPTY_VERTICAL_CS);
    let err = Validators::default().dispatch(Some(&object)).unwrap_err();
    assert_eq!(err.subject, "VerticalCS");
    assert!(err.to_string().contains("VerticalCS"));
}

#[test]
fn missing_mandatory_attributes_depend_on_config() {
    let object = parse(UNLABELLED_LATITUDE);
    let strict = Validators::default().dispatch(Some(&object));
    let err = strict.unwrap_err();
    assert_eq!(err.subject, "CoordinateSystemAxis");
    assert!(err.message.contains("abbreviation"));

    let lenient = Validators::new(ValidationConfig::lenient());
    assert!(lenient.dispatch(Some(&object)).is_ok());
}

#[test]
fn geographic_crs_from_yaml_is_valid() {
    let object = parse(GEOGRAPHIC_CRS);
    assert_eq!(object.kind_name(), "GeographicCRS");
    assert_eq!(Validators::default().dispatch(Some(&object)), Ok(()));
}

#[test]
fn first_violation_stops_validation() {
    let mut object = parse(GEOGRAPHIC_CRS);
    if let ReferencingObject::Crs(CoordinateReferenceSystem::Geographic(single)) = &mut object {
        single.coordinate_system.axes[0].name.code = " Geodetic latitude".to_string();
        single.coordinate_system.axes[1].abbreviation.clear();
    }
    let err = Validators::default().dispatch(Some(&object)).unwrap_err();
    assert_eq!(err.subject, "CoordinateSystemAxis");
    assert!(err.message.contains("whitespace"));
}
