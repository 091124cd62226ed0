//! Name transforms used by the schematic templates
//!
//! Dasherizing is delegated to `heck`; classification capitalizes per word
//! so its own output is a fixed point. Singular/plural inflection uses
//! English suffix rules, which cover the collection-style names schematics
//! are invoked with ("users", "todos", "categories").

use heck::ToKebabCase;

/// Convert a name to a capitalized identifier-style form (PascalCase)
///
/// Splits on separators and capitalizes each word's first character without
/// touching the remainder, so already-classified input is a fixed point:
/// classifying an already-classified name returns it unchanged, digits
/// included.
pub fn classify(name: &str) -> String {
    name.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a name to hyphen-separated lowercase form (kebab-case)
pub fn dasherize(name: &str) -> String {
    name.to_kebab_case()
}

/// Reduce a plural noun to its singular form
///
/// Already-singular input is returned unchanged, so the transform is
/// idempotent.
pub fn singularize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{}y", stem);
        }
    }

    for suffix in ["sses", "xes", "zes", "ches", "shes"] {
        if name.ends_with(suffix) {
            return name[..name.len() - 2].to_string();
        }
    }

    // A trailing "ss" ("address", "progress") is not a plural marker
    if name.ends_with('s') && !name.ends_with("ss") {
        return name[..name.len() - 1].to_string();
    }

    name.to_string()
}

/// Expand a singular noun to its plural form
pub fn pluralize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix('y') {
        let consonant_stem = !stem.is_empty()
            && !stem.ends_with(|c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
        if consonant_stem {
            return format!("{}ies", stem);
        }
    }

    for suffix in ["s", "x", "z", "ch", "sh"] {
        if name.ends_with(suffix) {
            return format!("{}es", name);
        }
    }

    format!("{}s", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_lowercase() {
        assert_eq!(classify("users"), "Users");
    }

    #[test]
    fn test_classify_kebab_case() {
        assert_eq!(classify("user-sessions"), "UserSessions");
    }

    #[test]
    fn test_classify_snake_case() {
        assert_eq!(classify("user_sessions"), "UserSessions");
    }

    #[test]
    fn test_classify_idempotent() {
        assert_eq!(classify("UserSessions"), "UserSessions");
        assert_eq!(classify(&classify("user-sessions")), "UserSessions");
    }

    #[test]
    fn test_classify_idempotent_with_digits() {
        // Digit-adjacent words must not be re-split on a second pass
        assert_eq!(classify("a0-a0"), "A0A0");
        assert_eq!(classify("A0A0"), "A0A0");
        assert_eq!(classify(&classify("a0-a0")), "A0A0");
    }

    #[test]
    fn test_classify_preserves_word_interior() {
        assert_eq!(classify("userSessions"), "UserSessions");
        assert_eq!(classify("v2-api"), "V2Api");
    }

    #[test]
    fn test_dasherize_pascal_case() {
        assert_eq!(dasherize("UserSessions"), "user-sessions");
    }

    #[test]
    fn test_dasherize_single_word() {
        assert_eq!(dasherize("users"), "users");
    }

    #[test]
    fn test_singularize_simple_plural() {
        assert_eq!(singularize("users"), "user");
        assert_eq!(singularize("Todos"), "Todo");
    }

    #[test]
    fn test_singularize_ies_plural() {
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("Categories"), "Category");
    }

    #[test]
    fn test_singularize_es_plural() {
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("branches"), "branch");
        assert_eq!(singularize("addresses"), "address");
    }

    #[test]
    fn test_singularize_leaves_singular_unchanged() {
        assert_eq!(singularize("user"), "user");
        assert_eq!(singularize("address"), "address");
    }

    #[test]
    fn test_singularize_idempotent() {
        assert_eq!(singularize(&singularize("categories")), "category");
        assert_eq!(singularize(&singularize("boxes")), "box");
    }

    #[test]
    fn test_pluralize_simple() {
        assert_eq!(pluralize("user"), "users");
    }

    #[test]
    fn test_pluralize_consonant_y() {
        assert_eq!(pluralize("category"), "categories");
    }

    #[test]
    fn test_pluralize_vowel_y() {
        assert_eq!(pluralize("key"), "keys");
    }

    #[test]
    fn test_pluralize_sibilant() {
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("branch"), "branches");
        assert_eq!(pluralize("address"), "addresses");
    }

    #[test]
    fn test_pluralize_singularize_round_trip() {
        for name in ["user", "category", "box", "branch"] {
            assert_eq!(singularize(&pluralize(name)), name);
        }
    }
}
