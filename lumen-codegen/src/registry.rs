//! The catalog of value kinds a `ParamSet` can store.
//!
//! Both generators iterate [`VALUE_KINDS`] in order, so generated output is
//! deterministic and diffs stay reviewable. Supporting a new parameter kind
//! means appending one entry here, re-running `lumen accessors` and
//! `lumen fixtures`, and merging the new blocks into `lumen-params`.

/// One supported parameter value kind.
#[derive(Debug, Clone, Copy)]
pub struct ValueKind {
    /// `Value` enum discriminant; lower-cased it names generated functions.
    pub tag: &'static str,
    /// Native type substituted verbatim into generated signatures.
    pub native: &'static str,
    /// Literal standing in for a stored value in generated doc examples.
    pub example_found: &'static str,
    /// Literal standing in for the fallback in generated doc examples.
    pub example_default: &'static str,
    /// Path under `lumen_params` that doc examples must import, for kinds
    /// whose native type is not already in scope.
    pub import: Option<&'static str>,
}

impl ValueKind {
    /// Name fragment used in generated function names, e.g. `point2f` in
    /// `find_one_point2f` and `make_point2f_param_set`.
    pub fn method_suffix(&self) -> String {
        self.tag.to_ascii_lowercase()
    }
}

/// Every value kind a `ParamSet` can store, in generated-output order.
pub const VALUE_KINDS: &[ValueKind] = &[
    ValueKind {
        tag: "Bool",
        native: "bool",
        example_found: "true",
        example_default: "false",
        import: None,
    },
    ValueKind {
        tag: "Float",
        native: "Float",
        example_found: "1.",
        example_default: "2.",
        import: None,
    },
    ValueKind {
        tag: "Int",
        native: "isize",
        example_found: "1",
        example_default: "2",
        import: None,
    },
    ValueKind {
        tag: "Point2f",
        native: "Point2f",
        example_found: "Point2f::from([1., 1.])",
        example_default: "Point2f::from([2., 2.])",
        import: Some("geometry::Point2f"),
    },
    ValueKind {
        tag: "Vector2f",
        native: "Vector2f",
        example_found: "Vector2f::from([1., 1.])",
        example_default: "Vector2f::from([2., 2.])",
        import: Some("geometry::Vector2f"),
    },
    ValueKind {
        tag: "Point3f",
        native: "Point3f",
        example_found: "Point3f::from([1., 1., 1.])",
        example_default: "Point3f::from([2., 2., 2.])",
        import: Some("geometry::Point3f"),
    },
    ValueKind {
        tag: "Vector3f",
        native: "Vector3f",
        example_found: "Vector3f::from([1., 1., 1.])",
        example_default: "Vector3f::from([2., 2., 2.])",
        import: Some("geometry::Vector3f"),
    },
    ValueKind {
        tag: "Normal3f",
        native: "Normal3f",
        example_found: "Normal3f::from([1., 1., 1.])",
        example_default: "Normal3f::from([2., 2., 2.])",
        import: Some("geometry::Normal3f"),
    },
    ValueKind {
        tag: "Spectrum",
        native: "Spectrum",
        example_found: "Spectrum::from_rgb([1., 1., 1.])",
        example_default: "Spectrum::from_rgb([2., 2., 2.])",
        import: Some("spectrum::Spectrum"),
    },
    ValueKind {
        tag: "String",
        native: "String",
        example_found: "\"found\".to_string()",
        example_default: "\"default\".to_string()",
        import: None,
    },
    ValueKind {
        tag: "Texture",
        native: "String",
        example_found: "\"found\".to_string()",
        example_default: "\"default\".to_string()",
        import: None,
    },
];
