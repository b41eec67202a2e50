//! Domain entities for the pie costing application.

pub mod ingredient;
pub mod labor;
pub mod recipe;

/// Generate a filesystem- and URL-safe identifier from a display name.
/// Converts "Steak & Kidney" -> "steak_kidney", "Crème Fraîche" -> "creme_fraiche".
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_separator = true;

    for c in name.trim().chars() {
        let mapped = match c {
            'á' | 'à' | 'ä' | 'â' | 'Á' | 'À' | 'Ä' | 'Â' => Some('a'),
            'é' | 'è' | 'ë' | 'ê' | 'É' | 'È' | 'Ë' | 'Ê' => Some('e'),
            'í' | 'ì' | 'ï' | 'î' | 'Í' | 'Ì' | 'Ï' | 'Î' => Some('i'),
            'ó' | 'ò' | 'ö' | 'ô' | 'Ó' | 'Ò' | 'Ö' | 'Ô' => Some('o'),
            'ú' | 'ù' | 'ü' | 'û' | 'Ú' | 'Ù' | 'Ü' | 'Û' => Some('u'),
            'ñ' | 'Ñ' => Some('n'),
            'ç' | 'Ç' => Some('c'),
            c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
            _ => None,
        };

        match mapped {
            Some(c) => {
                slug.push(c);
                last_was_separator = false;
            }
            None => {
                if !last_was_separator {
                    slug.push('_');
                }
                last_was_separator = true;
            }
        }
    }

    slug.trim_matches('_').to_string()
}

/// Case- and whitespace-insensitive normalization used wherever names act as
/// lookup keys (catalog uniqueness, import alias resolution).
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_replaces_spaces_and_punctuation() {
        assert_eq!(slugify("Steak & Kidney"), "steak_kidney");
        assert_eq!(slugify("  Chicken  Pie  "), "chicken_pie");
    }

    #[test]
    fn slugify_folds_accents() {
        assert_eq!(slugify("Crème Fraîche"), "creme_fraiche");
    }

    #[test]
    fn normalize_name_collapses_case_and_whitespace() {
        assert_eq!(normalize_name("  Cake   FLOUR "), "cake flour");
    }
}
