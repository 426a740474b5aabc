//! Emits the `testutils` fixture-constructor module for `lumen-params`.

use std::collections::{BTreeMap, BTreeSet};

use crate::builder::CodeBuilder;
use crate::registry::ValueKind;

/// The fixtures module: per kind, a single-entry `ParamSet` constructor and
/// a `ParamEntry` constructor.
///
/// Unlike the accessor fragment this renders a complete module file; the
/// merged copy lives at `lumen-params/src/testutils.rs` and must match this
/// output byte for byte.
pub struct FixturesFragment<'a> {
    kinds: &'a [ValueKind],
}

impl<'a> FixturesFragment<'a> {
    /// Creates a fragment over `kinds`, rendered in the given order.
    pub fn new(kinds: &'a [ValueKind]) -> Self {
        Self { kinds }
    }

    /// Renders the module doc, imports, and one constructor pair per kind.
    pub fn render(&self) -> String {
        let mut out = CodeBuilder::new()
            .line("//! Helpers for building single-entry `ParamSet` values concisely.")
            .line("//!")
            .line("//! Useful for tests and doctests. Generated by `lumen fixtures` and merged")
            .line("//! here by hand; regenerate instead of editing the helpers directly.")
            .blank()
            .each(self.imports(), |b, import| b.line(&import))
            .build();
        for kind in self.kinds {
            out.push('\n');
            out.push_str(&fixture_block(kind));
        }
        out
    }

    /// Import lines for the merged module, grouped per submodule and sorted
    /// the way rustfmt orders them.
    fn imports(&self) -> Vec<String> {
        let mut grouped: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for kind in self.kinds {
            if let Some(path) = kind.import {
                if let Some((module, ty)) = path.rsplit_once("::") {
                    grouped.entry(module).or_default().insert(ty);
                }
            }
        }

        let mut lines = Vec::new();
        for (module, types) in grouped {
            let types: Vec<&str> = types.into_iter().collect();
            let line = match types.as_slice() {
                [only] => format!("use crate::{module}::{only};"),
                _ => format!("use crate::{module}::{{{}}};", types.join(", ")),
            };
            lines.push(line);
        }
        lines.push("use crate::{Float, ParamEntry, ParamList, ParamSet, Value};".to_string());
        lines
    }
}

/// Renders the constructor pair for one kind.
fn fixture_block(kind: &ValueKind) -> String {
    let m = kind.method_suffix();
    CodeBuilder::new()
        .doc("Creates a `ParamSet` with a single entry named `name` holding `vals`.")
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
                "pub fn make_{m}_param_set(name: &str, vals: Vec<{}>) -> ParamSet {{",
                kind.native
            ),
            "}",
            |b| b.line(&format!("vec![make_{m}(name, vals)].into()")),
        )
        .blank()
        .doc("Creates a `ParamEntry` named `name` holding `vals`.")
        .block(
            &format!(
                "pub fn make_{m}(name: &str, vals: Vec<{}>) -> ParamEntry {{",
                kind.native
            ),
            "}",
            |b| {
                b.line(&format!(
                    "ParamEntry::new(name, Value::{}(ParamList(vals)))",
                    kind.tag
                ))
            },
        )
        .build()
}
