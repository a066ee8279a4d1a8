//! Company name extraction from a raw job description.
//!
//! Heuristics are tried in order and the first one that yields a clean name wins:
//! 1. a `Company: ...` line
//! 2. `at <Capitalized Phrase>`
//! 3. `<Capitalized Phrase> is a`
//! 4. the first short line that looks like a name
//!
//! Every candidate passes the same rejection filter (digits, currency, salary
//! wording) before and after sanitizing. No match is an empty string.

use std::sync::LazyLock;

use regex::Regex;

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '₹', '¥'];
const REJECT_PHRASES: &[&str] = &["lpa", "per month", "salary"];

/// Fallback line candidates must be shorter than this.
const MAX_FALLBACK_LEN: usize = 40;

const MIN_PHRASE_LEN: usize = 2;
const MAX_PHRASE_LEN: usize = 60;

// A run of capitalized words on one line: "Acme Corp", "Smith & Sons Ltd.".
// A dot only continues a word when a non-space follows, so the run stops at a sentence end.
const CAPITALIZED_PHRASE: &str = r"[A-Z][A-Za-z0-9&\-]*(?:\.[A-Za-z0-9&\-]+)*(?:[ \t]+[A-Z&][A-Za-z0-9&\-]*(?:\.[A-Za-z0-9&\-]+)*)*\.?";

static AT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\bat[ \t]+({CAPITALIZED_PHRASE})")).expect("valid regex")
});

static IS_A_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"({CAPITALIZED_PHRASE})[ \t]+is[ \t]+an?\b")).expect("valid regex")
});

static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9&.\- ]").expect("valid regex"));

/// True when a candidate looks like salary or numeric noise rather than a name.
pub fn is_rejected(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    candidate.chars().any(|c| c.is_ascii_digit() || CURRENCY_SYMBOLS.contains(&c))
        || REJECT_PHRASES.iter().any(|p| lower.contains(p))
}

/// Collapses whitespace, drops characters outside `[A-Za-z0-9&.\- ]`, and trims.
pub fn sanitize_company(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let cleaned = DISALLOWED_RE.replace_all(&collapsed, "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sanitizes and re-checks a candidate. Returns `None` if nothing usable remains.
fn accept(candidate: &str) -> Option<String> {
    if is_rejected(candidate) {
        return None;
    }
    let name = sanitize_company(candidate);
    if name.is_empty() || is_rejected(&name) {
        return None;
    }
    Some(name)
}

fn from_company_line(jd: &str) -> Option<String> {
    jd.lines()
        .map(str::trim)
        .filter(|line| {
            line.get(..7)
                .is_some_and(|head| head.eq_ignore_ascii_case("company"))
                && line.chars().any(|c| c.is_ascii_uppercase())
        })
        .find_map(|line| {
            let (_, rest) = line.split_once([':', '-', '–'])?;
            accept(rest)
        })
}

fn phrase_len_ok(phrase: &str) -> bool {
    (MIN_PHRASE_LEN..=MAX_PHRASE_LEN).contains(&phrase.chars().count())
}

fn from_pattern(jd: &str, re: &Regex) -> Option<String> {
    re.captures_iter(jd)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().trim_end_matches('.'))
        .filter(|phrase| phrase_len_ok(phrase))
        .find_map(accept)
}

// The letter, length, and rejection checks apply to the whole line; only the
// first segment is returned.
fn from_first_short_line(jd: &str) -> Option<String> {
    jd.lines()
        .map(str::trim)
        .filter(|line| {
            line.chars().any(char::is_alphabetic)
                && line.chars().count() < MAX_FALLBACK_LEN
                && !is_rejected(line)
        })
        .find_map(|line| line.split(['-', ':', '|']).next().and_then(accept))
}

/// Best-effort company name for a job description. Empty when nothing plausible is found.
pub fn extract_company_name(jd_text: &str) -> String {
    from_company_line(jd_text)
        .or_else(|| from_pattern(jd_text, &AT_RE))
        .or_else(|| from_pattern(jd_text, &IS_A_RE))
        .or_else(|| from_first_short_line(jd_text))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_company_line_beats_salary_line() {
        assert_eq!(extract_company_name("Company: Acme Corp\nSalary: 10 LPA"), "Acme Corp");
    }

    #[test]
    fn test_company_line_with_dash_separator() {
        assert_eq!(extract_company_name("COMPANY - Globex Industries"), "Globex Industries");
    }

    #[test]
    fn test_company_line_with_salary_is_rejected() {
        // The company line carries a salary figure, so the next heuristic decides.
        let jd = "Company: 5 LPA package\nJoin us at Initech Labs today";
        assert_eq!(extract_company_name(jd), "Initech Labs");
    }

    #[test]
    fn test_rejected_company_line_is_not_reused_as_fallback() {
        let jd = "Company: 5 LPA package\nwe need a data analyst who loves long reports every week";
        assert_eq!(extract_company_name(jd), "");
    }

    #[test]
    fn test_fallback_skips_rejected_line_for_next_short_line() {
        // "Alpaca" contains "lpa", so the header line is out; the next short line wins.
        assert_eq!(extract_company_name("Company: Alpaca Labs\nGreat role"), "Great role");
    }

    #[test]
    fn test_capitalized_phrase_stops_at_sentence_end() {
        let jd = "Join us at Acme. We build reporting tools for hospitals and clinics.";
        assert_eq!(extract_company_name(jd), "Acme");
    }

    #[test]
    fn test_capitalized_phrase_keeps_inner_dots() {
        let jd = "Smith & Sons Ltd. is a family firm hiring a bookkeeper for the season.";
        assert_eq!(extract_company_name(jd), "Smith & Sons Ltd");
        let jd = "You will work at Acme.io on internal dashboards every single week.";
        assert_eq!(extract_company_name(jd), "Acme.io");
    }

    #[test]
    fn test_at_capitalized_phrase() {
        let jd = "We are hiring a junior analyst to work at Umbrella Health on reporting.";
        assert_eq!(extract_company_name(jd), "Umbrella Health");
    }

    #[test]
    fn test_at_requires_word_boundary() {
        // "great" must not be read as "at".
        let jd = "This is a great Opportunity for someone who loves reporting and dashboards.";
        assert_ne!(extract_company_name(jd), "Opportunity for");
    }

    #[test]
    fn test_is_a_phrase() {
        let jd = "Stark Industries is a global engineering firm looking for interns.";
        assert_eq!(extract_company_name(jd), "Stark Industries");
    }

    #[test]
    fn test_fallback_first_short_line() {
        let jd = "Wayne Enterprises | Gotham\nWe need someone who can write clean reports for the board.";
        assert_eq!(extract_company_name(jd), "Wayne Enterprises");
    }

    #[test]
    fn test_fallback_skips_numeric_lines() {
        let jd = "2024 Hiring Drive\nInitech\nLong description line that goes well past forty characters.";
        assert_eq!(extract_company_name(jd), "Initech");
    }

    #[test]
    fn test_no_match_is_empty() {
        let jd = "we need someone who can write clean reports for the board every week";
        assert_eq!(extract_company_name(jd), "");
        assert_eq!(extract_company_name(""), "");
    }

    #[test]
    fn test_currency_is_rejected() {
        assert!(is_rejected("$120k"));
        assert!(is_rejected("₹ negotiable"));
        assert!(is_rejected("Salary negotiable"));
        assert!(is_rejected("Paid per month"));
        assert!(!is_rejected("Acme Corp"));
    }

    #[test]
    fn test_sanitize_strips_disallowed_characters() {
        assert_eq!(sanitize_company("  Acme\t Corp™ (India)  "), "Acme Corp India");
        assert_eq!(sanitize_company("Smith & Sons-Ltd."), "Smith & Sons-Ltd.");
    }

    proptest! {
        #[test]
        fn never_returns_digits_or_currency(jd in "\\PC{0,300}") {
            let name = extract_company_name(&jd);
            prop_assert!(!name.chars().any(|c| c.is_ascii_digit() || CURRENCY_SYMBOLS.contains(&c)));
        }

        #[test]
        fn result_only_contains_allowed_characters(jd in "[A-Za-z0-9 :|\\-\n$]{0,200}") {
            let name = extract_company_name(&jd);
            prop_assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || "&.- ".contains(c)));
            prop_assert_eq!(name.trim(), name.as_str());
        }
    }
}
