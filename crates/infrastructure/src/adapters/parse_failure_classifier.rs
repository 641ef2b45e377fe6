//! Classification of parser error messages
//!
//! The TOML parser only exposes its failures as text, so the cause is
//! recovered from phrase fragments. Rules are tried in order and the first
//! match wins; a message matching nothing is `Unclassified` and is shown to
//! the operator verbatim.

use domain::ParseFailureKind;

/// A rule matches when every fragment of any one alternative is present and
/// the guard accepts the message
struct Rule {
    kind: ParseFailureKind,
    alternatives: &'static [&'static [&'static str]],
    guard: fn(&str) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        kind: ParseFailureKind::DuplicateUser,
        alternatives: &[&["Cannot declare", "twice"]],
        guard: anywhere,
    },
    // The parser says "duplicate key" for repeated fields too; only a
    // repeated `[table]` header is a duplicate user.
    Rule {
        kind: ParseFailureKind::DuplicateUser,
        alternatives: &[&["duplicate key"]],
        guard: at_table_header,
    },
    Rule {
        kind: ParseFailureKind::EmptyValue,
        alternatives: &[
            &["Invalid value"],
            &["string values must be quoted"],
            &["missing value, expected value"],
        ],
        guard: anywhere,
    },
    Rule {
        kind: ParseFailureKind::MalformedKeyValue,
        alternatives: &[
            &["Expected '=' after a key"],
            &["key with no value"],
            &["missing value for key"],
            &["expected `=`"],
        ],
        guard: anywhere,
    },
];

const fn anywhere(_: &str) -> bool {
    true
}

/// Source line quoted in the message, e.g. `[alice]` from `4 | [alice]`
fn quoted_source_line(message: &str) -> Option<&str> {
    message.lines().find_map(|line| {
        let (gutter, source) = line.split_once(" | ")?;
        let gutter = gutter.trim();
        (!gutter.is_empty() && gutter.bytes().all(|b| b.is_ascii_digit())).then_some(source)
    })
}

fn at_table_header(message: &str) -> bool {
    quoted_source_line(message).is_some_and(|line| line.trim_start().starts_with('['))
}

/// Map a parser error message to a known failure cause
pub fn classify_parse_failure(message: &str) -> ParseFailureKind {
    RULES
        .iter()
        .find(|rule| {
            rule.alternatives
                .iter()
                .any(|fragments| fragments.iter().all(|f| message.contains(f)))
                && (rule.guard)(message)
        })
        .map_or(ParseFailureKind::Unclassified, |rule| rule.kind)
}
