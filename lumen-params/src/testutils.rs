//! Helpers for building single-entry `ParamSet` values concisely.
//!
//! Useful for tests and doctests. Generated by `lumen fixtures` and merged
//! here by hand; regenerate instead of editing the helpers directly.

use crate::geometry::{Normal3f, Point2f, Point3f, Vector2f, Vector3f};
use crate::spectrum::Spectrum;
use crate::{Float, ParamEntry, ParamList, ParamSet, Value};

/// Creates a `ParamSet` with a single entry named `name` holding `vals`.
///
/// # Examples
/// ```
/// use lumen_params::testutils::make_bool_param_set;
///
/// let ps = make_bool_param_set("value", vec![true]);
/// assert_eq!(ps.find_one_bool("value", false), true);
/// assert_eq!(ps.find_one_bool("non-existent", false), false);
/// ```
pub fn make_bool_param_set(name: &str, vals: Vec<bool>) -> ParamSet {
    vec![make_bool(name, vals)].into()
}

/// Creates a `ParamEntry` named `name` holding `vals`.
pub fn make_bool(name: &str, vals: Vec<bool>) -> ParamEntry {
    ParamEntry::new(name, Value::Bool(ParamList(vals)))
}

/// Creates a `ParamSet` with a single entry named `name` holding `vals`.
///
/// # Examples
/// ```
/// use lumen_params::testutils::make_float_param_set;
///
/// let ps = make_float_param_set("value", vec![1.]);
/// assert_eq!(ps.find_one_float("value", 2.), 1.);
/// assert_eq!(ps.find_one_float("non-existent", 2.), 2.);
/// ```
pub fn make_float_param_set(name: &str, vals: Vec<Float>) -> ParamSet {
    vec![make_float(name, vals)].into()
}

/// Creates a `ParamEntry` named `name` holding `vals`.
pub fn make_float(name: &str, vals: Vec<Float>) -> ParamEntry {
    ParamEntry::new(name, Value::Float(ParamList(vals)))
}

/// Creates a `ParamSet` with a single entry named `name` holding `vals`.
///
/// # Examples
/// ```
/// use lumen_params::testutils::make_int_param_set;
///
/// let ps = make_int_param_set("value", vec![1]);
/// assert_eq!(ps.find_one_int("value", 2), 1);
/// assert_eq!(ps.find_one_int("non-existent", 2), 2);
/// ```
pub fn make_int_param_set(name: &str, vals: Vec<isize>) -> ParamSet {
    vec![make_int(name, vals)].into()
}

/// Creates a `ParamEntry` named `name` holding `vals`.
pub fn make_int(name: &str, vals: Vec<isize>) -> ParamEntry {
    ParamEntry::new(name, Value::Int(ParamList(vals)))
}

/// Creates a `ParamSet` with a single entry named `name` holding `vals`.
///
/// # Examples
/// ```
/// use lumen_params::geometry::Point2f;
/// use lumen_params::testutils::make_point2f_param_set;
///
/// let ps = make_point2f_param_set("value", vec![Point2f::from([1., 1.])]);
/// assert_eq!(ps.find_one_point2f("value", Point2f::from([2., 2.])), Point2f::from([1., 1.]));
/// assert_eq!(ps.find_one_point2f("non-existent", Point2f::from([2., 2.])), Point2f::from([2., 2.]));
/// ```
pub fn make_point2f_param_set(name: &str, vals: Vec<Point2f>) -> ParamSet {
    vec![make_point2f(name, vals)].into()
}

/// Creates a `ParamEntry` named `name` holding `vals`.
pub fn make_point2f(name: &str, vals: Vec<Point2f>) -> ParamEntry {
    ParamEntry::new(name, Value::Point2f(ParamList(vals)))
}

/// Creates a `ParamSet` with a single entry named `name` holding `vals`.
///
/// # Examples
/// ```
/// use lumen_params::geometry::Vector2f;
/// use lumen_params::testutils::make_vector2f_param_set;
///
/// let ps = make_vector2f_param_set("value", vec![Vector2f::from([1., 1.])]);
/// assert_eq!(ps.find_one_vector2f("value", Vector2f::from([2., 2.])), Vector2f::from([1., 1.]));
/// assert_eq!(ps.find_one_vector2f("non-existent", Vector2f::from([2., 2.])), Vector2f::from([2., 2.]));
/// ```
pub fn make_vector2f_param_set(name: &str, vals: Vec<Vector2f>) -> ParamSet {
    vec![make_vector2f(name, vals)].into()
}

/// Creates a `ParamEntry` named `name` holding `vals`.
pub fn make_vector2f(name: &str, vals: Vec<Vector2f>) -> ParamEntry {
    ParamEntry::new(name, Value::Vector2f(ParamList(vals)))
}

/// Creates a `ParamSet` with a single entry named `name` holding `vals`.
///
/// # Examples
/// ```
/// use lumen_params::geometry::Point3f;
/// use lumen_params::testutils::make_point3f_param_set;
///
/// let ps = make_point3f_param_set("value", vec![Point3f::from([1., 1., 1.])]);
/// assert_eq!(ps.find_one_point3f("value", Point3f::from([2., 2., 2.])), Point3f::from([1., 1., 1.]));
/// assert_eq!(ps.find_one_point3f("non-existent", Point3f::from([2., 2., 2.])), Point3f::from([2., 2., 2.]));
/// ```
pub fn make_point3f_param_set(name: &str, vals: Vec<Point3f>) -> ParamSet {
    vec![make_point3f(name, vals)].into()
}

/// Creates a `ParamEntry` named `name` holding `vals`.
pub fn make_point3f(name: &str, vals: Vec<Point3f>) -> ParamEntry {
    ParamEntry::new(name, Value::Point3f(ParamList(vals)))
}

/// Creates a `ParamSet` with a single entry named `name` holding `vals`.
///
/// # Examples
/// ```
/// use lumen_params::geometry::Vector3f;
/// use lumen_params::testutils::make_vector3f_param_set;
///
/// let ps = make_vector3f_param_set("value", vec![Vector3f::from([1., 1., 1.])]);
/// assert_eq!(ps.find_one_vector3f("value", Vector3f::from([2., 2., 2.])), Vector3f::from([1., 1., 1.]));
/// assert_eq!(ps.find_one_vector3f("non-existent", Vector3f::from([2., 2., 2.])), Vector3f::from([2., 2., 2.]));
/// ```
pub fn make_vector3f_param_set(name: &str, vals: Vec<Vector3f>) -> ParamSet {
    vec![make_vector3f(name, vals)].into()
}

/// Creates a `ParamEntry` named `name` holding `vals`.
pub fn make_vector3f(name: &str, vals: Vec<Vector3f>) -> ParamEntry {
    ParamEntry::new(name, Value::Vector3f(ParamList(vals)))
}

/// Creates a `ParamSet` with a single entry named `name` holding `vals`.
///
/// # Examples
/// ```
/// use lumen_params::geometry::Normal3f;
/// use lumen_params::testutils::make_normal3f_param_set;
///
/// let ps = make_normal3f_param_set("value", vec![Normal3f::from([1., 1., 1.])]);
/// assert_eq!(ps.find_one_normal3f("value", Normal3f::from([2., 2., 2.])), Normal3f::from([1., 1., 1.]));
/// assert_eq!(ps.find_one_normal3f("non-existent", Normal3f::from([2., 2., 2.])), Normal3f::from([2., 2., 2.]));
/// ```
pub fn make_normal3f_param_set(name: &str, vals: Vec<Normal3f>) -> ParamSet {
    vec![make_normal3f(name, vals)].into()
}

/// Creates a `ParamEntry` named `name` holding `vals`.
pub fn make_normal3f(name: &str, vals: Vec<Normal3f>) -> ParamEntry {
    ParamEntry::new(name, Value::Normal3f(ParamList(vals)))
}

/// Creates a `ParamSet` with a single entry named `name` holding `vals`.
///
/// # Examples
/// ```
/// use lumen_params::spectrum::Spectrum;
/// use lumen_params::testutils::make_spectrum_param_set;
///
/// let ps = make_spectrum_param_set("value", vec![Spectrum::from_rgb([1., 1., 1.])]);
/// assert_eq!(ps.find_one_spectrum("value", Spectrum::from_rgb([2., 2., 2.])), Spectrum::from_rgb([1., 1., 1.]));
/// assert_eq!(ps.find_one_spectrum("non-existent", Spectrum::from_rgb([2., 2., 2.])), Spectrum::from_rgb([2., 2., 2.]));
/// ```
pub fn make_spectrum_param_set(name: &str, vals: Vec<Spectrum>) -> ParamSet {
    vec![make_spectrum(name, vals)].into()
}

/// Creates a `ParamEntry` named `name` holding `vals`.
pub fn make_spectrum(name: &str, vals: Vec<Spectrum>) -> ParamEntry {
    ParamEntry::new(name, Value::Spectrum(ParamList(vals)))
}

/// Creates a `ParamSet` with a single entry named `name` holding `vals`.
///
/// # Examples
/// ```
/// use lumen_params::testutils::make_string_param_set;
///
/// let ps = make_string_param_set("value", vec!["found".to_string()]);
/// assert_eq!(ps.find_one_string("value", "default".to_string()), "found".to_string());
/// assert_eq!(ps.find_one_string("non-existent", "default".to_string()), "default".to_string());
/// ```
pub fn make_string_param_set(name: &str, vals: Vec<String>) -> ParamSet {
    vec![make_string(name, vals)].into()
}

/// Creates a `ParamEntry` named `name` holding `vals`.
pub fn make_string(name: &str, vals: Vec<String>) -> ParamEntry {
    ParamEntry::new(name, Value::String(ParamList(vals)))
}

/// Creates a `ParamSet` with a single entry named `name` holding `vals`.
///
/// # Examples
/// ```
/// use lumen_params::testutils::make_texture_param_set;
///
/// let ps = make_texture_param_set("value", vec!["found".to_string()]);
/// assert_eq!(ps.find_one_texture("value", "default".to_string()), "found".to_string());
/// assert_eq!(ps.find_one_texture("non-existent", "default".to_string()), "default".to_string());
/// ```
pub fn make_texture_param_set(name: &str, vals: Vec<String>) -> ParamSet {
    vec![make_texture(name, vals)].into()
}

/// Creates a `ParamEntry` named `name` holding `vals`.
pub fn make_texture(name: &str, vals: Vec<String>) -> ParamEntry {
    ParamEntry::new(name, Value::Texture(ParamList(vals)))
}
