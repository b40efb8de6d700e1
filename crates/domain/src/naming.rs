//! Identifier case conversions used by templates.
//!
//! These are plain string rewrites with no knowledge of C/C++ keywords.
//! Templates reach them as helpers of the same name, e.g.
//! `{{upper (snake_case module.name)}}`.

/// Uppercases the whole string.
///
/// ```
/// use cgen_domain::naming::upper;
///
/// assert_eq!(upper("core_init"), "CORE_INIT");
/// ```
#[must_use]
pub fn upper(text: &str) -> String {
    text.to_uppercase()
}

/// Converts `PascalCase`/`camelCase` text to `snake_case`.
///
/// An underscore is inserted before every ASCII uppercase letter that is not
/// the first character, then the result is lowercased. Acronyms are not
/// grouped: `HTTPServer` becomes `h_t_t_p_server`.
///
/// ```
/// use cgen_domain::naming::snake_case;
///
/// assert_eq!(snake_case("MyModule"), "my_module");
/// ```
#[must_use]
pub fn snake_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(ch);
    }
    out.to_lowercase()
}

/// Converts `snake_case` text to `camelCase`.
///
/// The first segment is kept as written; every following segment is
/// title-cased.
#[must_use]
pub fn camel_case(text: &str) -> String {
    let mut segments = text.split('_');
    let mut out = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        out.push_str(&title_case(segment));
    }
    out
}

/// Converts `snake_case` text to `PascalCase`.
#[must_use]
pub fn pascal_case(text: &str) -> String {
    text.split('_').map(title_case).collect()
}

/// Builds an include-guard macro name from a file name.
///
/// ```
/// use cgen_domain::naming::header_guard;
///
/// assert_eq!(header_guard("foo.h"), "FOO_H_");
/// assert_eq!(header_guard("mylib/core.h"), "MYLIB_CORE_H_");
/// ```
#[must_use]
pub fn header_guard(filename: &str) -> String {
    let mut guard = upper(filename).replace(['.', '/'], "_");
    guard.push('_');
    guard
}

/// Uppercases the first letter of every run of letters and lowercases the rest.
///
/// Digits and punctuation end a run, so `abc1def` becomes `Abc1Def`.
fn title_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut in_word = false;
    for ch in segment.chars() {
        let cased = ch.is_uppercase() || ch.is_lowercase();
        if cased && !in_word {
            out.extend(ch.to_uppercase());
        } else if cased {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
        in_word = cased;
    }
    out
}
