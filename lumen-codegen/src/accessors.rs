//! Emits the typed `find_one_*` accessors for `ParamSet`.

use crate::builder::CodeBuilder;
use crate::registry::ValueKind;

/// The accessor fragment: one typed `find_one_*` lookup per registry kind.
///
/// Renders for stdout review; the blocks go inside `impl ParamSet` in
/// `lumen-params`, so the merge step indents them one level.
pub struct AccessorsFragment<'a> {
    kinds: &'a [ValueKind],
}

impl<'a> AccessorsFragment<'a> {
    /// Creates a fragment over `kinds`, rendered in the given order.
    pub fn new(kinds: &'a [ValueKind]) -> Self {
        Self { kinds }
    }

    /// Renders every accessor block, separated by single blank lines.
    pub fn render(&self) -> String {
        let blocks: Vec<String> = self.kinds.iter().map(accessor_block).collect();
        blocks.join("\n")
    }
}

/// Renders the doc comment, example, and body of one accessor.
fn accessor_block(kind: &ValueKind) -> String {
    let m = kind.method_suffix();
    CodeBuilder::new()
        .doc(&format!(
            "find_one_{m} returns the first value of the entry named `name`.  Returns"
        ))
        .doc("`default` when no entry by that name exists or when the entry holds an")
        .doc("empty value list.")
        .doc("")
        .doc("# Panics")
        .doc("")
        .doc(&format!(
            "Panics when the entry named `name` does not hold {} values.",
            kind.tag
        ))
        .doc("")
        .doc("# Examples")
        .doc("```")
        .each(kind.import, |b, path| {
            b.doc(&format!("use lumen_params::{path};"))
        })
        .doc(&format!("use lumen_params::testutils::make_{m}_param_set;"))
        .doc("")
        .doc(&format!(
            "let ps = make_{m}_param_set(\"value\", vec![{}]);",
            kind.example_found
        ))
        .doc(&format!(
            "assert_eq!(ps.find_one_{m}(\"value\", {}), {});",
            kind.example_default, kind.example_found
        ))
        .doc(&format!(
            "assert_eq!(ps.find_one_{m}(\"non-existent\", {}), {});",
            kind.example_default, kind.example_default
        ))
        .doc("```")
        .block(
            &format!(
                "pub fn find_one_{m}(&self, name: &str, default: {n}) -> {n} {{",
                n = kind.native
            ),
            "}",
            |b| {
                b.block("match self.find(name) {", "}", |b| {
                    b.line(&format!(
                        "Some(Value::{}(values)) => values.first().cloned().unwrap_or(default),",
                        kind.tag
                    ))
                    .line("None => default,")
                    .line(&format!(
                        "Some(_) => panic!(\"parameter '{{}}' does not hold {} values\", name),",
                        kind.tag
                    ))
                })
            },
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::VALUE_KINDS;

    fn kind(tag: &str) -> &'static ValueKind {
        VALUE_KINDS
            .iter()
            .find(|kind| kind.tag == tag)
            .unwrap_or_else(|| panic!("no registry entry tagged {tag}"))
    }

    #[test]
    fn bool_block_renders_exactly() {
        let expected = r#"/// find_one_bool returns the first value of the entry named `name`.  Returns
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
"#;
        assert_eq!(accessor_block(kind("Bool")), expected);
    }

    #[test]
    fn spectrum_block_imports_its_type() {
        let expected = r#"/// find_one_spectrum returns the first value of the entry named `name`.  Returns
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
"#;
        assert_eq!(accessor_block(kind("Spectrum")), expected);
    }

    #[test]
    fn only_kinds_with_imports_emit_use_lines() {
        assert!(!accessor_block(kind("Bool")).contains("use lumen_params::geometry"));
        assert!(
            accessor_block(kind("Point2f")).contains("/// use lumen_params::geometry::Point2f;\n")
        );
        assert!(!accessor_block(kind("Texture")).contains("use lumen_params::geometry"));
    }

    #[test]
    fn texture_dispatches_on_its_own_tag() {
        let block = accessor_block(kind("Texture"));
        assert!(block.contains("Some(Value::Texture(values))"));
        assert!(block.contains("default: String) -> String"));
    }

    #[test]
    fn render_joins_blocks_with_single_blank_lines() {
        let out = AccessorsFragment::new(VALUE_KINDS).render();
        assert!(!out.starts_with('\n'));
        assert!(out.ends_with("}\n"));
        assert!(!out.contains("\n\n\n"));
    }
}
