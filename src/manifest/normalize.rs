//! Display-name normalization for asset filenames.
//!
//! ```text
//! "Café_com-Leite"  ->  "cafe com leite"
//! "Salto__Duplo"    ->  "salto duplo"
//! "a___b"           ->  "a  b"   (single collapse pass)
//! ```

use unicode_normalization::UnicodeNormalization;

/// Normalize a filename stem into a display label.
///
/// Pipeline, in order:
/// 1. canonical decomposition (NFD)
/// 2. drop every non-ASCII char (combining marks included)
/// 3. `_` -> space
/// 4. `-` -> space
/// 5. one left-to-right pass replacing `"  "` with `" "`
/// 6. lowercase
/// 7. trim surrounding whitespace
///
/// Step 5 is not repeated, so runs of three or more spaces survive
/// partially collapsed. Existing manifests depend on that output.
pub fn normalize_name(stem: &str) -> String {
    let ascii: String = stem.nfd().filter(char::is_ascii).collect();
    let spaced = ascii.replace('_', " ").replace('-', " ").replace("  ", " ");
    spaced.to_ascii_lowercase().trim_matches(is_trim_space).to_string()
}

/// ASCII whitespace stripped by the final trim.
///
/// Wider than `char::is_ascii_whitespace`: vertical tab and the
/// information separators (`\x1c`..=`\x1f`) count too.
const fn is_trim_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r' | '\x1c'..='\x1f')
}

/// Strip the final extension from a file name.
///
/// Leading dots never start an extension, so dotfiles keep their name.
///
/// ```text
/// "hello.gif"   -> "hello"
/// "a.b.gif"     -> "a.b"
/// ".gif"        -> ".gif"
/// "..gif"       -> "..gif"
/// "noext"       -> "noext"
/// ```
pub fn file_stem(file_name: &str) -> &str {
    let leading = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading..].rfind('.') {
        Some(dot) => &file_name[..leading + dot],
        None => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(normalize_name("café"), "cafe");
        assert_eq!(normalize_name("Agachamento Búlgaro"), "agachamento bulgaro");
        assert_eq!(normalize_name("Extensão de Tríceps"), "extensao de triceps");
        assert_eq!(normalize_name("ÇÃÕ"), "cao");
    }

    #[test]
    fn test_separators_become_spaces() {
        assert_eq!(normalize_name("my_funny-gif"), "my funny gif");
        assert_eq!(normalize_name("Supino_Reto"), "supino reto");
    }

    #[test]
    fn test_drops_non_latin_symbols() {
        assert_eq!(normalize_name("salto🔥alto"), "saltoalto");
        assert_eq!(normalize_name("日本"), "");
    }

    #[test]
    fn test_single_collapse_pass() {
        assert_eq!(normalize_name("a__b"), "a b");
        assert_eq!(normalize_name("a_-b"), "a b");
        // three spaces -> two, not one
        assert_eq!(normalize_name("a___b"), "a  b");
        // four spaces -> two
        assert_eq!(normalize_name("a - _b"), "a  b");
    }

    #[test]
    fn test_trims_after_lowercasing() {
        assert_eq!(normalize_name("_Remada_"), "remada");
        assert_eq!(normalize_name("  Rosca  "), "rosca");
        assert_eq!(normalize_name("\x1cPrancha\t"), "prancha");
    }

    #[test]
    fn test_idempotent_on_normalized_input() {
        for input in ["café", "my_funny-gif", "Zebra", "a___b", "  Rosca  "] {
            let once = normalize_name(input);
            if !once.contains("  ") {
                assert_eq!(normalize_name(&once), once, "input: {input:?}");
            }
        }
        assert_eq!(normalize_name("cafe com leite"), "cafe com leite");
    }

    #[test]
    fn test_empty_stem() {
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("hello.gif"), "hello");
        assert_eq!(file_stem("Hello.GIF"), "Hello");
        assert_eq!(file_stem("a.b.gif"), "a.b");
        assert_eq!(file_stem(".gif"), ".gif");
        assert_eq!(file_stem("..gif"), "..gif");
        assert_eq!(file_stem("noext"), "noext");
        assert_eq!(file_stem("café.gif"), "café");
    }
}
