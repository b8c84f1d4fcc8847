//! Pure text transforms shared across the tint crates.
//!
//! Nothing in here touches the DOM; every function is string-to-string and
//! total over its input, so the transforms stay usable from any target and
//! any thread.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // A word run starts at a word character and extends through every
    // following non-whitespace character. Matches never overlap; scanning
    // resumes right after each run ends.
    static ref WORD_RUN: Regex =
        Regex::new(r"[0-9A-Za-z_]\S*").expect("word-run pattern is valid");
}

/// Convert a string to title case.
///
/// The first character of every word run is upper-cased and the rest of the
/// run is lower-cased. Characters outside any run (whitespace, isolated
/// punctuation) are copied through verbatim, so whitespace runs are never
/// collapsed and the output has exactly as many characters as the input.
///
/// Note that a run keeps going through non-whitespace punctuation, so
/// `"abc-def"` becomes `"Abc-def"` and `"a.b"` becomes `"A.b"` — only the
/// head of the run is capitalized.
pub fn title_case(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    WORD_RUN
        .replace_all(input, |caps: &Captures<'_>| recase_run(&caps[0]))
        .into_owned()
}

// The run head is ASCII by construction of the pattern, so its upper-case
// image is always a single character.
fn recase_run(run: &str) -> String {
    let mut chars = run.chars();
    let mut out = String::with_capacity(run.len());

    if let Some(head) = chars.next() {
        out.push(head.to_ascii_uppercase());
    }

    for ch in chars {
        out.push(lower_single(ch));
    }

    out
}

/// Lower-case `ch` only when the mapping stays a single character, so
/// one-to-many mappings (`İ` and friends) cannot change the run length.
fn lower_single(ch: char) -> char {
    let mut lowered = ch.to_lowercase();
    match (lowered.next(), lowered.next()) {
        (Some(lower), None) => lower,
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn single_word() {
        assert_eq!(title_case("abc"), "Abc");
    }

    #[test]
    fn two_words() {
        assert_eq!(title_case("abc def"), "Abc Def");
    }

    #[test]
    fn already_cased_input_is_unchanged() {
        assert_eq!(title_case("Abc Def"), "Abc Def");
    }

    #[test]
    fn hyphen_continues_the_run() {
        assert_eq!(title_case("abc-def"), "Abc-def");
    }

    #[test]
    fn whitespace_runs_are_preserved() {
        assert_eq!(title_case("   abc   def"), "   Abc   Def");
        assert_eq!(title_case("abc\t\tdef\n"), "Abc\t\tDef\n");
    }

    #[test]
    fn shouting_is_normalized() {
        assert_eq!(title_case("hELLO wORLD"), "Hello World");
        assert_eq!(title_case("HELLO"), "Hello");
    }

    #[test]
    fn punctuation_inside_a_run_is_kept_but_not_capitalized() {
        assert_eq!(title_case("it's a.b"), "It's A.b");
    }

    #[test]
    fn punctuation_outside_any_run_is_untouched() {
        assert_eq!(title_case("(abc) [def]"), "(Abc) [Def]");
        assert_eq!(title_case("!!! ???"), "!!! ???");
    }

    #[test]
    fn digits_and_underscores_start_runs() {
        assert_eq!(title_case("3rd place"), "3rd Place");
        assert_eq!(title_case("_private name"), "_private Name");
        assert_eq!(title_case("snake_case words"), "Snake_case Words");
    }

    #[test]
    fn whitespace_only_input_is_unchanged() {
        assert_eq!(title_case("   "), "   ");
        assert_eq!(title_case("\t\n"), "\t\n");
    }

    #[test]
    fn runs_need_an_ascii_word_head() {
        // No character matches the word class, so nothing is a run.
        assert_eq!(title_case("ПРИВЕТ"), "ПРИВЕТ");
        // With an ASCII head the whole tail is part of the run.
        assert_eq!(title_case("xПРИВЕТ"), "Xпривет");
        assert_eq!(title_case("straße"), "Straße");
    }

    #[test]
    fn idempotent() {
        for s in [
            "abc def",
            "  hello-world  ",
            "it's a.b",
            "3rd _place",
            "hELLO wORLD",
            "xПРИВЕТ straße",
            "",
        ] {
            let once = title_case(s);
            assert_eq!(title_case(&once), once, "input: {s:?}");
        }
    }

    #[test]
    fn character_count_is_preserved() {
        for s in [
            "abc def",
            "   abc   def",
            "it's a.b",
            "!!! ???",
            "xİ tail",
            "straße und mehr",
            "hELLO\twORLD\n",
        ] {
            assert_eq!(
                title_case(s).chars().count(),
                s.chars().count(),
                "input: {s:?}"
            );
        }
    }
}
