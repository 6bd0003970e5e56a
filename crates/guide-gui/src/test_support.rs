//! Shared fixtures for handler and state tests.

use guide_model::{Catalog, Section, Shortcut, ShortcutPlatform, Subsection};
use guide_store::{EnvSignals, KvStore};

use crate::state::AppState;

pub fn lesson(id: &str, shortcuts: Vec<Shortcut>) -> Subsection {
    Subsection {
        id: id.to_string(),
        title: id.to_uppercase(),
        content: format!("content for {id}"),
        tips: vec![format!("tip for {id}")],
        shortcuts,
        examples: Vec::new(),
    }
}

pub fn shortcut(platform: ShortcutPlatform) -> Shortcut {
    Shortcut {
        keys: vec!["K".to_string()],
        description: format!("{platform:?} shortcut"),
        platform,
    }
}

fn section(id: &str, subsections: Vec<Subsection>) -> Section {
    Section {
        id: id.to_string(),
        title: id.to_uppercase(),
        description: format!("about {id}"),
        icon: "book-open".to_string(),
        subsections,
    }
}

/// Three sections: `basics` with lessons `a`/`b`/`c` (lesson `a` carries one
/// all-platform and one windows-only shortcut), `empty` without lessons,
/// and `advanced` with lessons `x`/`y`.
pub fn catalog() -> Catalog {
    Catalog::new(vec![
        section(
            "basics",
            vec![
                lesson(
                    "a",
                    vec![
                        shortcut(ShortcutPlatform::All),
                        shortcut(ShortcutPlatform::Windows),
                    ],
                ),
                lesson("b", Vec::new()),
                lesson("c", Vec::new()),
            ],
        ),
        section("empty", Vec::new()),
        section(
            "advanced",
            vec![lesson("x", Vec::new()), lesson("y", Vec::new())],
        ),
    ])
}

/// An `AppState` over a tempdir-backed store and fixed environment signals.
///
/// The tempdir guard must stay alive for the duration of the test.
pub fn state_with(catalog: Catalog) -> (tempfile::TempDir, AppState) {
    let dir = tempfile::tempdir().expect("tempdir");
    let signals = EnvSignals {
        prefers_dark: false,
        platform_hint: "windows".to_string(),
    };
    let state = AppState::with_store(catalog, KvStore::at(dir.path()), &signals);
    (dir, state)
}
