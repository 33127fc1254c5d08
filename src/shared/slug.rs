use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Derive a URL slug from a listing title: lowercased, Latin diacritics
/// folded to ASCII, whitespace runs collapsed to single hyphens.
///
/// Callers append a creation timestamp to keep slugs globally unique even
/// for identical titles submitted concurrently.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let folded: String = lowered.chars().map(fold_diacritic).collect();
    WHITESPACE.replace_all(folded.trim(), "-").into_owned()
}

fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'ç' => 'c',
        'ñ' => 'n',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_hyphenates() {
        assert_eq!(slugify("Hôtel Carlton"), "hotel-carlton");
        assert_eq!(slugify("Le Jardin d'Antanimena"), "le-jardin-d'antanimena");
        assert_eq!(slugify("Clinique et Maternité"), "clinique-et-maternite");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(slugify("  Baobab   Mall  "), "baobab-mall");
    }

    #[test]
    fn plain_ascii_passes_through() {
        assert_eq!(slugify("Baobab Mall Mahajanga"), "baobab-mall-mahajanga");
    }
}
