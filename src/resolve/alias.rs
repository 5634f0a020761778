use std::path::PathBuf;

use regex::Regex;

use super::PathConfig;

/// One compiled `compilerOptions.paths` entry.
#[derive(Debug)]
pub struct AliasRule {
    /// Alias key as written in the config, e.g. `@app/*`.
    pub pattern: String,
    /// Alias with its trailing wildcard stripped, e.g. `@app`.
    pub prefix: String,
    /// Anchored matcher where each `*` matches any sequence.
    pub matcher: Regex,
    /// First target path, wildcard stripped, resolved against `baseUrl`.
    pub target_dir: PathBuf,
}

impl AliasRule {
    pub fn matches(&self, specifier: &str) -> bool {
        self.matcher.is_match(specifier)
    }
}

/// Alias rules ordered longest prefix first. Immutable once built.
#[derive(Debug, Default)]
pub struct AliasTable {
    rules: Vec<AliasRule>,
}

impl AliasTable {
    /// Build the table from loaded config, dropping every alias that
    /// contains any of the `excluded` tokens as a substring.
    ///
    /// Only the first target of each alias is used.
    pub fn build<S: AsRef<str>>(config: &PathConfig, excluded: &[S]) -> Self {
        let excluded: Vec<&str> = excluded
            .iter()
            .map(|token| AsRef::<str>::as_ref(token).trim())
            .filter(|token| !token.is_empty())
            .collect();

        let mut rules = Vec::with_capacity(config.aliases.len());
        for (pattern, targets) in &config.aliases {
            if let Some(token) = excluded.iter().find(|t| pattern.contains(*t)) {
                tracing::debug!(alias = %pattern, token = *token, "alias excluded");
                continue;
            }
            let Some(first) = targets.first() else {
                tracing::warn!(alias = %pattern, "alias has no target paths, skipping");
                continue;
            };
            if targets.len() > 1 {
                tracing::debug!(alias = %pattern, target = %first, "using first of several targets");
            }

            let matcher = match compile_matcher(pattern) {
                Ok(m) => m,
                Err(e) => {
                    tracing::warn!(alias = %pattern, error = %e, "alias pattern rejected, skipping");
                    continue;
                }
            };

            rules.push(AliasRule {
                pattern: pattern.clone(),
                prefix: strip_wildcard(pattern).to_string(),
                matcher,
                target_dir: config.base_url.join(strip_wildcard(first)),
            });
        }

        // Stable: equal-length prefixes keep config order.
        rules.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
        Self { rules }
    }

    /// First rule (longest prefix first) whose matcher accepts `specifier`.
    pub fn find(&self, specifier: &str) -> Option<&AliasRule> {
        self.rules.iter().find(|rule| rule.matches(specifier))
    }

    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// `@app/*` -> `@app`, `src/app/*` -> `src/app`, `*` -> ``.
fn strip_wildcard(pattern: &str) -> &str {
    pattern
        .strip_suffix("/*")
        .or_else(|| pattern.strip_suffix('*'))
        .unwrap_or(pattern)
}

/// Anchor the alias and turn each `*` into `.*`; everything else is literal.
fn compile_matcher(pattern: &str) -> Result<Regex, regex::Error> {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Regex::new(&format!("^{body}$"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config(entries: &[(&str, &[&str])]) -> PathConfig {
        PathConfig {
            base_url: PathBuf::new(),
            aliases: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
                .collect(),
        }
    }

    const NONE: &[&str] = &[];

    #[test]
    fn rules_sorted_by_descending_prefix_length() {
        let cfg = config(&[
            ("@/*", &["src/*"]),
            ("@app/core/*", &["src/app/core/*"]),
            ("@app/*", &["src/app/*"]),
            ("@lib", &["src/lib/index.ts"]),
        ]);
        let table = AliasTable::build(&cfg, NONE);
        let lens: Vec<usize> = table.rules().iter().map(|r| r.prefix.len()).collect();
        assert!(lens.windows(2).all(|w| w[0] >= w[1]), "{lens:?}");
        assert_eq!(table.rules()[0].pattern, "@app/core/*");
    }

    #[test]
    fn longer_alias_wins() {
        let cfg = config(&[("@app/*", &["src/app"]), ("@app/core/*", &["src/app/core"])]);
        let table = AliasTable::build(&cfg, NONE);
        let rule = table.find("@app/core/widgets/x").unwrap();
        assert_eq!(rule.pattern, "@app/core/*");
        assert_eq!(rule.target_dir, Path::new("src/app/core"));
    }

    #[test]
    fn exclusion_is_substring_match() {
        let cfg = config(&[("@app/*", &["src/app"]), ("@my-app-thing/*", &["src/thing"])]);
        let table = AliasTable::build(&cfg, &["app"]);
        assert!(table.is_empty());
    }

    #[test]
    fn exclusion_keeps_unrelated_aliases() {
        let cfg = config(&[("@app/*", &["src/app"]), ("@ui/*", &["src/ui"])]);
        let table = AliasTable::build(&cfg, &["app", ""]);
        assert_eq!(table.rules().len(), 1);
        assert_eq!(table.rules()[0].pattern, "@ui/*");
    }

    #[test]
    fn exclusion_tokens_are_trimmed() {
        let cfg = config(&[
            ("@app/*", &["src/app"]),
            ("@legacy/*", &["src/legacy"]),
            ("@ui/*", &["src/ui"]),
        ]);
        let table = AliasTable::build(&cfg, &["@app", " @legacy "]);
        assert_eq!(table.rules().len(), 1);
        assert_eq!(table.rules()[0].pattern, "@ui/*");
    }

    #[test]
    fn only_first_target_is_used() {
        let cfg = config(&[("@app/*", &["src/app/*", "lib/app/*"])]);
        let table = AliasTable::build(&cfg, NONE);
        assert_eq!(table.rules()[0].target_dir, Path::new("src/app"));
    }

    #[test]
    fn alias_without_targets_is_skipped() {
        let cfg = config(&[("@app/*", &[]), ("@ui/*", &["src/ui/*"])]);
        let table = AliasTable::build(&cfg, NONE);
        assert_eq!(table.rules().len(), 1);
    }

    #[test]
    fn target_dir_is_resolved_against_base_url() {
        let mut cfg = config(&[("@/*", &["src/*"])]);
        cfg.base_url = PathBuf::from("/repo/web");
        let table = AliasTable::build(&cfg, NONE);
        assert_eq!(table.rules()[0].target_dir, Path::new("/repo/web/src"));
        assert_eq!(table.rules()[0].prefix, "@");
    }

    #[test]
    fn matcher_is_anchored() {
        let cfg = config(&[("@app/*", &["src/app"])]);
        let table = AliasTable::build(&cfg, NONE);
        assert!(table.find("@app/button").is_some());
        assert!(table.find("@apple/button").is_none());
        assert!(table.find("x/@app/button").is_none());
    }

    #[test]
    fn exact_alias_matches_only_itself() {
        let cfg = config(&[("@config", &["src/config/index"])]);
        let table = AliasTable::build(&cfg, NONE);
        assert!(table.find("@config").is_some());
        assert!(table.find("@config/extra").is_none());
    }

    #[test]
    fn regex_metacharacters_in_alias_are_literal() {
        let cfg = config(&[("$lib.x/*", &["src/lib"])]);
        let table = AliasTable::build(&cfg, NONE);
        assert!(table.find("$lib.x/a").is_some());
        assert!(table.find("$libyx/a").is_none());
    }

    #[test]
    fn strip_wildcard_variants() {
        assert_eq!(strip_wildcard("@app/*"), "@app");
        assert_eq!(strip_wildcard("*"), "");
        assert_eq!(strip_wildcard("@config"), "@config");
    }
}
