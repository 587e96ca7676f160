/// Human-readable overlay name derived from a raw tileset id or file name.
///
/// Names that already contain a space are taken as-is. Otherwise the file
/// extension is dropped, `_`-separated words are capitalized, a trailing
/// `Temp` word is removed and a final `-suffix` becomes a lower-case
/// parenthetical: `grand_mesa-East.tif` reads `Grand Mesa (east)`.
pub fn display_name(raw: &str) -> String {
    if raw.contains(' ') {
        return raw.to_string();
    }

    let stem = strip_extension(raw);
    let mut name = stem
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if let Some(trimmed) = name.strip_suffix(" Temp") {
        name = trimmed.to_string();
    }

    match name.rsplit_once('-') {
        Some((head, tail)) => format!("{} ({})", head, tail.to_lowercase()),
        None => name,
    }
}

fn strip_extension(raw: &str) -> &str {
    match raw.rfind('.') {
        Some(dot) if dot > 0 => &raw[..dot],
        _ => raw,
    }
}

/// Upper-case the first character, lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_with_space_is_untouched() {
        assert_eq!(display_name("Grand Mesa West"), "Grand Mesa West");
    }

    #[test]
    fn test_underscores_become_capitalized_words() {
        assert_eq!(display_name("grand_mesa"), "Grand Mesa");
        assert_eq!(display_name("GRAND_MESA"), "Grand Mesa");
    }

    #[test]
    fn test_extension_is_dropped() {
        assert_eq!(display_name("grand_mesa.tif"), "Grand Mesa");
        assert_eq!(display_name(".hidden"), ".hidden");
    }

    #[test]
    fn test_trailing_temp_is_dropped() {
        assert_eq!(display_name("uncompahgre_temp.tif"), "Uncompahgre");
        assert_eq!(display_name("temp"), "Temp");
    }

    #[test]
    fn test_hyphen_suffix_becomes_parenthetical() {
        assert_eq!(display_name("grand_mesa-East.tif"), "Grand Mesa (east)");
        assert_eq!(display_name("a-b-c"), "A-b (c)");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(display_name(""), "");
    }
}
