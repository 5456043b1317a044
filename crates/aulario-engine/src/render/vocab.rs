//! Fixed vocabularies for the code highlighter.
//!
//! Initialized once, read-only afterwards. Membership is case-sensitive and
//! byte-exact; the lists are part of the rendering contract, so highlighting
//! stays reproducible across versions.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Python reserved words.
pub static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield",
    ])
});

/// Common built-in functions and methods worth highlighting in beginner code.
pub static BUILTINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "print", "input", "len", "range", "type", "int", "float", "str", "bool", "list", "dict",
        "tuple", "set", "sum", "min", "max", "abs", "round", "sorted", "reversed", "enumerate",
        "zip", "open", "help", "isinstance", "append", "pop", "split", "join", "strip", "upper",
        "lower", "replace", "format", "keys", "values", "items", "get", "add", "remove",
    ])
});
