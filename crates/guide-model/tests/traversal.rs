use guide_model::{Catalog, NextTarget, Section, Subsection};

fn lesson(id: &str) -> Subsection {
    Subsection {
        id: id.to_string(),
        title: id.to_uppercase(),
        content: format!("content for {id}"),
        tips: Vec::new(),
        shortcuts: Vec::new(),
        examples: Vec::new(),
    }
}

fn section(id: &str, lessons: &[&str]) -> Section {
    Section {
        id: id.to_string(),
        title: id.to_uppercase(),
        description: String::new(),
        icon: "book".to_string(),
        subsections: lessons.iter().map(|l| lesson(l)).collect(),
    }
}

fn catalog() -> Catalog {
    Catalog::new(vec![
        section("basics", &["a", "b", "c"]),
        section("empty", &[]),
        section("advanced", &["x", "y"]),
    ])
}

#[test]
fn first_subsection_is_canonical_child() {
    let catalog = catalog();
    let basics = catalog.section("basics").expect("section");
    assert_eq!(basics.first_subsection().expect("first").id, "a");
    assert!(catalog.section("empty").expect("section").first_subsection().is_none());
}

#[test]
fn prev_is_none_at_first_lesson() {
    let catalog = catalog();
    assert!(catalog.prev_in_section("basics", "a").is_none());
    assert_eq!(catalog.prev_in_section("basics", "b").expect("prev").id, "a");
    assert_eq!(catalog.prev_in_section("basics", "c").expect("prev").id, "b");
}

#[test]
fn next_stays_within_section_until_the_end() {
    let catalog = catalog();
    assert_eq!(
        catalog.next_target("basics", "a"),
        Some(NextTarget::Subsection {
            section: "basics".to_string(),
            subsection: "b".to_string(),
        })
    );
    assert_eq!(
        catalog.next_target("basics", "b"),
        Some(NextTarget::Subsection {
            section: "basics".to_string(),
            subsection: "c".to_string(),
        })
    );
}

#[test]
fn next_from_last_lesson_targets_following_section() {
    let catalog = catalog();
    // The following section has no lessons, so the target is the section
    // itself.
    assert_eq!(
        catalog.next_target("basics", "c"),
        Some(NextTarget::Section {
            section: "empty".to_string(),
        })
    );
}

#[test]
fn next_from_last_lesson_lands_on_first_lesson_of_next_section() {
    let catalog = Catalog::new(vec![
        section("basics", &["a", "b", "c"]),
        section("advanced", &["x", "y"]),
    ]);
    assert_eq!(
        catalog.next_target("basics", "c"),
        Some(NextTarget::Subsection {
            section: "advanced".to_string(),
            subsection: "x".to_string(),
        })
    );
}

#[test]
fn next_at_end_of_catalog_signals_end() {
    let catalog = catalog();
    assert_eq!(
        catalog.next_target("advanced", "y"),
        Some(NextTarget::EndOfCatalog)
    );
}

#[test]
fn next_target_for_unknown_position_is_none() {
    let catalog = catalog();
    assert!(catalog.next_target("basics", "nope").is_none());
    assert!(catalog.next_target("nope", "a").is_none());
}

#[test]
fn locate_subsection_finds_owner_section() {
    let catalog = catalog();
    let (owner, sub) = catalog.locate_subsection("y").expect("located");
    assert_eq!(owner.id, "advanced");
    assert_eq!(sub.id, "y");
    assert!(catalog.locate_subsection("nope").is_none());
}

#[test]
fn validate_rejects_duplicate_ids() {
    let dup_sections = Catalog::new(vec![section("a", &[]), section("a", &[])]);
    assert!(dup_sections.validate().is_err());

    let dup_lessons = Catalog::new(vec![
        section("one", &["same"]),
        section("two", &["same"]),
    ]);
    assert!(dup_lessons.validate().is_err());

    assert!(catalog().validate().is_ok());
}

#[test]
fn search_matches_titles_and_content_case_insensitively() {
    let mut needle = section("needle-section", &["needle-lesson"]);
    needle.subsections[0].content = "This lesson explains Widget Frobnication.".to_string();
    let catalog = Catalog::new(vec![section("basics", &["a"]), needle]);

    let hits = catalog.search("frobnication");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].section.id, "needle-section");
    assert_eq!(hits[0].subsection.expect("lesson hit").id, "needle-lesson");

    assert!(catalog.search("").is_empty());
    assert!(catalog.search("   ").is_empty());
}
