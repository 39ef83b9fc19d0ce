//! Rendering plans for highlighted fields.

use crate::common::{assert_plan_well_formed, make_hit, pairs};
use udd::{build_rendering_plan, emphasized_count, highlight_field, plan_text, Segment};

#[test]
fn reference_plan() {
    let text = "A fire broke out in the server room.";
    let plan = build_rendering_plan(text, &["fire", "server room"]);
    assert_eq!(
        pairs(&plan),
        vec![
            ("A ", false),
            ("fire", true),
            (" broke out in the ", false),
            ("server room", true),
            (".", false),
        ]
    );
    assert_plan_well_formed(text, &plan);
}

#[test]
fn every_occurrence_is_emphasized() {
    let plan = build_rendering_plan("fire, FIRE and Fire", &["fire"]);
    assert_eq!(emphasized_count(&plan), 3);
    assert_eq!(plan_text(&plan), "fire, FIRE and Fire");
}

#[test]
fn original_case_is_preserved() {
    let plan = build_rendering_plan("The SERVER Room", &["server room"]);
    assert_eq!(pairs(&plan), vec![("The ", false), ("SERVER Room", true)]);
}

#[test]
fn regex_metacharacters_match_literally() {
    let text = "cost was $5 (approx.) or 5*2";
    let plan = build_rendering_plan(text, &["$5 (approx.)", "5*2"]);
    assert_eq!(
        pairs(&plan),
        vec![
            ("cost was ", false),
            ("$5 (approx.)", true),
            (" or ", false),
            ("5*2", true),
        ]
    );
    // A bare "." must not match arbitrary characters.
    let plan = build_rendering_plan("abc", &["."]);
    assert_eq!(pairs(&plan), vec![("abc", false)]);
}

#[test]
fn longer_term_wins_when_terms_overlap() {
    let plan = build_rendering_plan("server room", &["server", "server room"]);
    assert_eq!(pairs(&plan), vec![("server room", true)]);
}

#[test]
fn earlier_match_wins_over_longer_later_one() {
    let plan = build_rendering_plan("abcd", &["ab", "bcd"]);
    assert_eq!(pairs(&plan), vec![("ab", true), ("cd", false)]);
}

#[test]
fn adjacent_matches_stay_separate_segments() {
    let plan = build_rendering_plan("firefire", &["fire"]);
    assert_eq!(pairs(&plan), vec![("fire", true), ("fire", true)]);
}

#[test]
fn empty_text_is_one_empty_segment() {
    let plan = build_rendering_plan("", &["fire"]);
    assert_eq!(plan, vec![Segment::plain("")]);
}

#[test]
fn no_highlights_passes_text_through() {
    let none: [&str; 0] = [];
    let plan = build_rendering_plan("nothing to see", &none);
    assert_eq!(plan, vec![Segment::plain("nothing to see")]);
}

#[test]
fn empty_terms_are_ignored() {
    let plan = build_rendering_plan("abc", &["", "b"]);
    assert_eq!(pairs(&plan), vec![("a", false), ("b", true), ("c", false)]);
}

#[test]
fn non_ascii_text() {
    let text = "Požar u serverskoj sobi, požar!";
    let plan = build_rendering_plan(text, &["požar"]);
    assert_eq!(emphasized_count(&plan), 2);
    assert_plan_well_formed(text, &plan);
}

#[test]
fn hit_field_is_rendered_from_its_snippets() {
    let hit = make_hit(
        "42",
        "A fire broke out in the server room.",
        &["A <em>fire</em> broke out", "the <em>server room</em>."],
    );
    let plan = highlight_field(
        &hit.index.incident_description_en,
        &hit.highlights,
        "incidentDescriptionEn",
    );
    assert_eq!(emphasized_count(&plan), 2);

    let other = highlight_field(&hit.index.employee_name, &hit.highlights, "employeeName");
    assert_eq!(other, vec![Segment::plain("Ivan Petrovic")]);
}

#[test]
fn case_folding_matches_scan_matcher() {
    use udd::highlight::scan;
    for (text, term) in [("ſ", "s"), ("ς", "Σ"), ("ΣΟΦΟΣ", "σοφος"), ("\u{212A}", "k")] {
        let plan = build_rendering_plan(text, &[term]);
        assert_eq!(emphasized_count(&plan), 1, "{:?} vs {:?}", text, term);
        assert_eq!(scan::find_matches(text, &[term]), vec![0..text.len()]);
    }
}
