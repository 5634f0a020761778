//! Regex scan for aliased `import ... from '...'` statements.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::ImportMatch;
use crate::resolve::AliasTable;

/// `import`, a bindings clause, `from`, a quoted literal, optional `;`.
///
/// The bindings clause is opaque: word characters, braces, `*`, commas and
/// whitespace. Quote styles are separate alternatives so they pair up.
static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s+[\w{}*,\s]+?\s+from\s+(?:'([^'\n]*)'|"([^"\n]*)");?"#)
        .unwrap()
});

/// Find aliased import statements in order of appearance.
///
/// Each statement is tested against the table longest-prefix-first and
/// recorded once for the first rule that matches. Relative paths and paths
/// no alias covers are skipped.
pub fn scan_imports<'a>(text: &'a str, table: &'a AliasTable) -> Vec<ImportMatch<'a>> {
    let mut found = Vec::new();

    for caps in IMPORT_RE.captures_iter(text) {
        let (Some(stmt), Some(lit)) = (caps.get(0), caps.get(1).or_else(|| caps.get(2))) else {
            continue;
        };
        let literal = lit.as_str();
        if literal.starts_with('.') {
            continue;
        }
        let Some(rule) = table.find(literal) else {
            continue;
        };

        found.push(ImportMatch {
            statement: stmt.as_str(),
            span: stmt.range(),
            literal,
            literal_span: lit.range(),
            rule,
        });
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::PathConfig;
    use std::path::PathBuf;

    fn table(entries: &[(&str, &str)]) -> AliasTable {
        let cfg = PathConfig {
            base_url: PathBuf::new(),
            aliases: entries
                .iter()
                .map(|(k, v)| (k.to_string(), vec![v.to_string()]))
                .collect(),
        };
        AliasTable::build(&cfg, &[] as &[&str])
    }

    fn literals<'a>(matches: &[ImportMatch<'a>]) -> Vec<&'a str> {
        matches.iter().map(|m| m.literal).collect()
    }

    #[test]
    fn finds_named_and_namespace_imports() {
        let t = table(&[("@app/*", "src/app/*")]);
        let src = "import { a, b as c } from '@app/a';\nimport * as ns from \"@app/ns\";\n";
        let matches = scan_imports(src, &t);
        assert_eq!(literals(&matches), vec!["@app/a", "@app/ns"]);
        assert_eq!(matches[0].statement, "import { a, b as c } from '@app/a';");
        assert_eq!(&src[matches[1].literal_span.clone()], "@app/ns");
    }

    #[test]
    fn finds_default_and_type_imports() {
        let t = table(&[("@app/*", "src/app/*")]);
        let src = "import React from 'react';\nimport Button from '@app/button'\nimport type { X } from '@app/x';";
        assert_eq!(literals(&scan_imports(src, &t)), vec!["@app/button", "@app/x"]);
    }

    #[test]
    fn skips_relative_and_unaliased_imports() {
        let t = table(&[("@app/*", "src/app/*")]);
        let src = "import { a } from './a';\nimport { b } from '../b';\nimport { c } from 'lodash';";
        assert!(scan_imports(src, &t).is_empty());
    }

    #[test]
    fn catch_all_alias_never_matches_relative_paths() {
        let t = table(&[("*", "node_modules/*")]);
        let src = "import { a } from './a';";
        assert!(scan_imports(src, &t).is_empty());
    }

    #[test]
    fn first_rule_in_table_order_wins() {
        let t = table(&[("@app/*", "src/app/*"), ("@app/core/*", "src/app/core/*")]);
        let matches = scan_imports("import { w } from '@app/core/w';", &t);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].rule.pattern, "@app/core/*");
    }

    #[test]
    fn mismatched_quotes_are_not_recognized() {
        let t = table(&[("@app/*", "src/app/*")]);
        assert!(scan_imports("import { a } from '@app/a\";", &t).is_empty());
    }

    #[test]
    fn ignores_dynamic_imports() {
        let t = table(&[("@app/*", "src/app/*")]);
        assert!(scan_imports("const m = await import('@app/lazy');", &t).is_empty());
    }

    #[test]
    fn empty_text_yields_nothing() {
        let t = table(&[("@app/*", "src/app/*")]);
        assert!(scan_imports("", &t).is_empty());
    }
}
