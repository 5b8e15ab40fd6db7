//! Include and using directives

use std::fmt;
use std::sync::LazyLock;

use includeme_core::ResolvedSymbol;
use regex::Regex;
use serde::{Deserialize, Serialize};

static INCLUDE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*#\s*include\s*[<"]"#).expect("valid include pattern"));

static USING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*using\s+(namespace\s+)?[A-Za-z0-9_:]+\s*;").expect("valid using pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectiveKind {
    Include,
    Using,
}

impl DirectiveKind {
    /// Whether `line` is an existing directive of this kind.
    pub fn matches(self, line: &str) -> bool {
        match self {
            DirectiveKind::Include => INCLUDE_LINE.is_match(line),
            DirectiveKind::Using => USING_LINE.is_match(line),
        }
    }
}

/// A line to be inserted: `#include <value>` or `using value;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub value: String,
}

impl Directive {
    pub fn include(header: impl Into<String>) -> Self {
        Directive {
            kind: DirectiveKind::Include,
            value: header.into(),
        }
    }

    pub fn using(name: impl Into<String>) -> Self {
        Directive {
            kind: DirectiveKind::Using,
            value: name.into(),
        }
    }

    /// The literal source line.
    pub fn line(&self) -> String {
        match self.kind {
            DirectiveKind::Include => format!("#include <{}>", self.value),
            DirectiveKind::Using => format!("using {};", self.value),
        }
    }

    /// Directives needed to use `resolved` as typed: one include per header
    /// in table order, then a using-declaration when `token` was resolved
    /// to a namespaced canonical name.
    pub fn for_symbol(resolved: &ResolvedSymbol, token: &str) -> Vec<Directive> {
        let mut directives: Vec<Directive> = resolved
            .headers
            .iter()
            .map(|header| Directive::include(header.as_str()))
            .collect();
        if let Some(name) = resolved.using_for(token) {
            directives.push(Directive::using(name));
        }
        directives
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line())
    }
}
