//! Structural patterns for unit scanning.
//!
//! Each pattern matches one declaration shape over comment-stripped text.
//! They are intentionally forgiving: modifier lists are loose word sets,
//! generic arguments must not contain the pattern's own terminator, and a
//! parameter list is anything up to the next closing parenthesis. Input
//! that matches none of them contributes nothing to the model.

use std::sync::LazyLock;

use regex::Regex;

/// The first `package a.b.c;` declaration; group 1 is the dotted path.
pub(crate) static PACKAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*package\s+([\w.]+)\s*;").expect("package regex"));

/// A type declaration: modifiers, kind keyword, name, optional single
/// `extends` reference, optional comma-separated `implements` list, up to
/// the opening brace.
pub(crate) static TYPE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^\s*(?:public|protected|private|abstract|final|static|\s)*(?P<kind>class|interface|enum)\s+(?P<name>[A-Za-z_]\w*)(?:\s+extends\s+(?P<extends>[A-Za-z_]\w*(?:\.[A-Za-z_]\w*)*))?(?:\s+implements\s+(?P<implements>[A-Za-z_]\w*(?:\.[A-Za-z_]\w*)*(?:\s*,\s*[A-Za-z_]\w*(?:\.[A-Za-z_]\w*)*)*))?\s*\{",
    )
    .expect("type declaration regex")
});

/// A field declaration: modifiers, type token (optional single-level
/// generics, array markers), name, optional initializer, semicolon.
pub(crate) static FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^\s*(?P<mods>(?:public|protected|private|static|final|transient|volatile|\s)+)\s*(?P<type>[A-Za-z_]\w*(?:<[^;>]+>)?(?:\[\])*)\s+(?P<name>[A-Za-z_]\w*)\s*(?:=\s*[^;]+)?\s*;",
    )
    .expect("field regex")
});

/// A method declaration: modifiers, return type, name, parameter list,
/// optional throws clause, optional opening brace. Matches whose name
/// equals the member target's simple name are constructors, not methods.
pub(crate) static METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^\s*(?P<mods>(?:public|protected|private|static|final|abstract|synchronized|native|\s)+)\s*(?P<ret>[A-Za-z_]\w*(?:<[^)>]+>)?(?:\[\])*)\s+(?P<name>[A-Za-z_]\w*)\s*\((?P<params>[^)]*)\)\s*(?:throws\s+[^{]+)?\s*\{?",
    )
    .expect("method regex")
});

/// A constructor declaration: visibility modifiers, name, parameter list.
/// Only matches whose name equals the member target's simple name are kept.
pub(crate) static CONSTRUCTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^\s*(?P<mods>(?:public|protected|private|\s)+)\s*(?P<name>[A-Za-z_]\w*)\s*\((?P<params>[^)]*)\)\s*(?:throws\s+[^{]+)?\s*\{?",
    )
    .expect("constructor regex")
});

/// An annotation token (optionally with arguments) inside a parameter chunk.
pub(crate) static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+(?:\([^)]*\))?\s*").expect("annotation regex"));
