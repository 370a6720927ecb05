/// Naming convention applied to generated accessor and parameter names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenameRule {
    /// Keep Rust identifiers as written.
    #[default]
    None,
    CamelCase,
    PascalCase,
    SnakeCase,
}

impl RenameRule {
    /// Parse the attribute spelling (`"camelCase"`, `"PascalCase"`, `"snake_case"`).
    pub fn from_attr(s: &str) -> Option<Self> {
        match s {
            "camelCase" => Some(Self::CamelCase),
            "PascalCase" => Some(Self::PascalCase),
            "snake_case" => Some(Self::SnakeCase),
            _ => None,
        }
    }

    pub fn apply(self, name: &str) -> String {
        match self {
            Self::None => name.to_string(),
            Self::CamelCase => to_camel_case(name),
            Self::PascalCase => to_pascal_case(name),
            Self::SnakeCase => to_snake_case(name),
        }
    }
}

/// Convert snake_case or kebab-case to PascalCase.
///
/// Words separated by `_` or `-` are capitalized; the rest of each word
/// keeps its case, so `sur_name` and `surName` both become `SurName`.
///
/// # Examples
/// ```
/// use morphic_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("sur_name"), "SurName");
/// assert_eq!(to_pascal_case("SurName"), "SurName");  // idempotent
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if matches!(c, '_' | '-') {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert snake_case to camelCase.
///
/// # Examples
/// ```
/// use morphic_core::utils::to_camel_case;
/// assert_eq!(to_camel_case("first_name"), "firstName");
/// assert_eq!(to_camel_case("id"), "id");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => pascal,
    }
}

/// Convert PascalCase or camelCase to snake_case.
///
/// # Examples
/// ```
/// use morphic_core::utils::to_snake_case;
/// assert_eq!(to_snake_case("SurName"), "sur_name");
/// assert_eq!(to_snake_case("firstName"), "first_name");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 && !result.ends_with('_') {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
