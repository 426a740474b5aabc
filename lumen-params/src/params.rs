//! Generic storage for values parsed from scene descriptions.
//!
//! Scene files describe shapes, lights, materials, and textures as a name
//! plus a bag of parameters. [`ParamSet`] carries that bag to the factory
//! that builds the entity: entries keep their insertion order, lookups fall
//! back to caller-supplied defaults, and every lookup is recorded so a
//! loader can warn about parameters nothing consumed.

use std::cell::Cell;
use std::fmt;
use std::ops::Deref;

use indexmap::IndexMap;

use crate::Float;
use crate::geometry::{Normal3f, Point2f, Point3f, Vector2f, Vector3f};
use crate::spectrum::Spectrum;

/// An ordered list of parameter values of a single native type.
///
/// Order and duplicates are preserved exactly as parsed.
#[derive(Clone, PartialEq)]
pub struct ParamList<T>(pub Vec<T>);

impl<T> From<Vec<T>> for ParamList<T> {
    fn from(vals: Vec<T>) -> Self {
        ParamList(vals)
    }
}

impl<T> Deref for ParamList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for ParamList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        let mut vals = self.0.iter();
        if let Some(first) = vals.next() {
            write!(f, "{first:?}")?;
            for v in vals {
                write!(f, " {v:?}")?;
            }
        }
        write!(f, ">")
    }
}

/// A kind-tagged list of values for one parameter entry.
///
/// The tag is what the typed accessors on [`ParamSet`] dispatch on; asking
/// an entry for a different kind than its tag is a programming error and
/// panics rather than guessing a conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(ParamList<bool>),
    Float(ParamList<Float>),
    Int(ParamList<isize>),
    Point2f(ParamList<Point2f>),
    Vector2f(ParamList<Vector2f>),
    Point3f(ParamList<Point3f>),
    Vector3f(ParamList<Vector3f>),
    Normal3f(ParamList<Normal3f>),
    Spectrum(ParamList<Spectrum>),
    String(ParamList<String>),
    Texture(ParamList<String>),
}

/// A named parameter entry together with its lookup state.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamEntry {
    /// Name the entry is looked up by.
    pub name: String,
    /// The kind-tagged values.
    pub values: Value,
    looked_up: Cell<bool>,
}

impl ParamEntry {
    /// Creates an entry named `name` holding `values`, not yet looked up.
    pub fn new(name: &str, values: Value) -> ParamEntry {
        ParamEntry {
            name: String::from(name),
            values,
            looked_up: Cell::new(false),
        }
    }
}

/// An insertion-ordered collection of named, kind-tagged parameter entries.
///
/// Inserting an entry under an existing name replaces the previous entry
/// but keeps its position, so iteration order always reflects the scene
/// description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSet {
    entries: IndexMap<String, ParamEntry>,
}

impl ParamSet {
    /// Inserts `entry`, replacing any previous entry with the same name.
    pub fn insert(&mut self, entry: ParamEntry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    /// Number of entries in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the set holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of entries no accessor has looked up yet, in insertion order.
    pub fn unused(&self) -> Vec<String> {
        self.entries
            .values()
            .filter(|entry| !entry.looked_up.get())
            .map(|entry| entry.name.clone())
            .collect()
    }

    fn find(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).map(|entry| {
            entry.looked_up.set(true);
            &entry.values
        })
    }

    // The find_one_* accessors are generated by `lumen accessors` and merged
    // here by hand; a sync test in lumen-codegen keeps them from drifting.

    /// find_one_bool returns the first value of the entry named `name`.  Returns
    /// `default` when no entry by that name exists or when the entry holds an
    /// empty value list.
    ///
    /// # Panics
    ///
    /// Panics when the entry named `name` does not hold Bool values.
    ///
    /// # Examples
    /// ```
    /// use lumen_params::testutils::make_bool_param_set;
    ///
    /// let ps = make_bool_param_set("value", vec![true]);
    /// assert_eq!(ps.find_one_bool("value", false), true);
    /// assert_eq!(ps.find_one_bool("non-existent", false), false);
    /// ```
    pub fn find_one_bool(&self, name: &str, default: bool) -> bool {
        match self.find(name) {
            Some(Value::Bool(values)) => values.first().cloned().unwrap_or(default),
            None => default,
            Some(_) => panic!("parameter '{}' does not hold Bool values", name),
        }
    }

    /// find_one_float returns the first value of the entry named `name`.  Returns
    /// `default` when no entry by that name exists or when the entry holds an
    /// empty value list.
    ///
    /// # Panics
    ///
    /// Panics when the entry named `name` does not hold Float values.
    ///
    /// # Examples
    /// ```
    /// use lumen_params::testutils::make_float_param_set;
    ///
    /// let ps = make_float_param_set("value", vec![1.]);
    /// assert_eq!(ps.find_one_float("value", 2.), 1.);
    /// assert_eq!(ps.find_one_float("non-existent", 2.), 2.);
    /// ```
    pub fn find_one_float(&self, name: &str, default: Float) -> Float {
        match self.find(name) {
            Some(Value::Float(values)) => values.first().cloned().unwrap_or(default),
            None => default,
            Some(_) => panic!("parameter '{}' does not hold Float values", name),
        }
    }

    /// find_one_int returns the first value of the entry named `name`.  Returns
    /// `default` when no entry by that name exists or when the entry holds an
    /// empty value list.
    ///
    /// # Panics
    ///
    /// Panics when the entry named `name` does not hold Int values.
    ///
    /// # Examples
    /// ```
    /// use lumen_params::testutils::make_int_param_set;
    ///
    /// let ps = make_int_param_set("value", vec![1]);
    /// assert_eq!(ps.find_one_int("value", 2), 1);
    /// assert_eq!(ps.find_one_int("non-existent", 2), 2);
    /// ```
    pub fn find_one_int(&self, name: &str, default: isize) -> isize {
        match self.find(name) {
            Some(Value::Int(values)) => values.first().cloned().unwrap_or(default),
            None => default,
            Some(_) => panic!("parameter '{}' does not hold Int values", name),
        }
    }

    /// find_one_point2f returns the first value of the entry named `name`.  Returns
    /// `default` when no entry by that name exists or when the entry holds an
    /// empty value list.
    ///
    /// # Panics
    ///
    /// Panics when the entry named `name` does not hold Point2f values.
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
    pub fn find_one_point2f(&self, name: &str, default: Point2f) -> Point2f {
        match self.find(name) {
            Some(Value::Point2f(values)) => values.first().cloned().unwrap_or(default),
            None => default,
            Some(_) => panic!("parameter '{}' does not hold Point2f values", name),
        }
    }

    /// find_one_vector2f returns the first value of the entry named `name`.  Returns
    /// `default` when no entry by that name exists or when the entry holds an
    /// empty value list.
    ///
    /// # Panics
    ///
    /// Panics when the entry named `name` does not hold Vector2f values.
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
    pub fn find_one_vector2f(&self, name: &str, default: Vector2f) -> Vector2f {
        match self.find(name) {
            Some(Value::Vector2f(values)) => values.first().cloned().unwrap_or(default),
            None => default,
            Some(_) => panic!("parameter '{}' does not hold Vector2f values", name),
        }
    }

    /// find_one_point3f returns the first value of the entry named `name`.  Returns
    /// `default` when no entry by that name exists or when the entry holds an
    /// empty value list.
    ///
    /// # Panics
    ///
    /// Panics when the entry named `name` does not hold Point3f values.
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
    pub fn find_one_point3f(&self, name: &str, default: Point3f) -> Point3f {
        match self.find(name) {
            Some(Value::Point3f(values)) => values.first().cloned().unwrap_or(default),
            None => default,
            Some(_) => panic!("parameter '{}' does not hold Point3f values", name),
        }
    }

    /// find_one_vector3f returns the first value of the entry named `name`.  Returns
    /// `default` when no entry by that name exists or when the entry holds an
    /// empty value list.
    ///
    /// # Panics
    ///
    /// Panics when the entry named `name` does not hold Vector3f values.
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
    pub fn find_one_vector3f(&self, name: &str, default: Vector3f) -> Vector3f {
        match self.find(name) {
            Some(Value::Vector3f(values)) => values.first().cloned().unwrap_or(default),
            None => default,
            Some(_) => panic!("parameter '{}' does not hold Vector3f values", name),
        }
    }

    /// find_one_normal3f returns the first value of the entry named `name`.  Returns
    /// `default` when no entry by that name exists or when the entry holds an
    /// empty value list.
    ///
    /// # Panics
    ///
    /// Panics when the entry named `name` does not hold Normal3f values.
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
    pub fn find_one_normal3f(&self, name: &str, default: Normal3f) -> Normal3f {
        match self.find(name) {
            Some(Value::Normal3f(values)) => values.first().cloned().unwrap_or(default),
            None => default,
            Some(_) => panic!("parameter '{}' does not hold Normal3f values", name),
        }
    }

    /// find_one_spectrum returns the first value of the entry named `name`.  Returns
    /// `default` when no entry by that name exists or when the entry holds an
    /// empty value list.
    ///
    /// # Panics
    ///
    /// Panics when the entry named `name` does not hold Spectrum values.
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
    pub fn find_one_spectrum(&self, name: &str, default: Spectrum) -> Spectrum {
        match self.find(name) {
            Some(Value::Spectrum(values)) => values.first().cloned().unwrap_or(default),
            None => default,
            Some(_) => panic!("parameter '{}' does not hold Spectrum values", name),
        }
    }

    /// find_one_string returns the first value of the entry named `name`.  Returns
    /// `default` when no entry by that name exists or when the entry holds an
    /// empty value list.
    ///
    /// # Panics
    ///
    /// Panics when the entry named `name` does not hold String values.
    ///
    /// # Examples
    /// ```
    /// use lumen_params::testutils::make_string_param_set;
    ///
    /// let ps = make_string_param_set("value", vec!["found".to_string()]);
    /// assert_eq!(ps.find_one_string("value", "default".to_string()), "found".to_string());
    /// assert_eq!(ps.find_one_string("non-existent", "default".to_string()), "default".to_string());
    /// ```
    pub fn find_one_string(&self, name: &str, default: String) -> String {
        match self.find(name) {
            Some(Value::String(values)) => values.first().cloned().unwrap_or(default),
            None => default,
            Some(_) => panic!("parameter '{}' does not hold String values", name),
        }
    }

    /// find_one_texture returns the first value of the entry named `name`.  Returns
    /// `default` when no entry by that name exists or when the entry holds an
    /// empty value list.
    ///
    /// # Panics
    ///
    /// Panics when the entry named `name` does not hold Texture values.
    ///
    /// # Examples
    /// ```
    /// use lumen_params::testutils::make_texture_param_set;
    ///
    /// let ps = make_texture_param_set("value", vec!["found".to_string()]);
    /// assert_eq!(ps.find_one_texture("value", "default".to_string()), "found".to_string());
    /// assert_eq!(ps.find_one_texture("non-existent", "default".to_string()), "default".to_string());
    /// ```
    pub fn find_one_texture(&self, name: &str, default: String) -> String {
        match self.find(name) {
            Some(Value::Texture(values)) => values.first().cloned().unwrap_or(default),
            None => default,
            Some(_) => panic!("parameter '{}' does not hold Texture values", name),
        }
    }
}

impl From<Vec<ParamEntry>> for ParamSet {
    fn from(entries: Vec<ParamEntry>) -> Self {
        let mut ps = ParamSet::default();
        for entry in entries {
            ps.insert(entry);
        }
        ps
    }
}
