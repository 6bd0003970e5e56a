//! Cached derived state.
//!
//! The lesson page renders shortcuts filtered by the selected operating
//! system. The filtered list is cached here, keyed on both inputs, and
//! rebuilt by the handlers whenever the route or the operating-system
//! preference changes - a stale list can never survive an input change.

use guide_model::{Platform, Shortcut, Subsection};

/// Platform-filtered shortcut list for the lesson currently on screen.
#[derive(Debug, Default)]
pub struct ShortcutFilter {
    /// Inputs the cached list was computed from.
    key: Option<(String, Platform)>,
    shortcuts: Vec<Shortcut>,
}

impl ShortcutFilter {
    /// Rebuild the cache for `subsection` and `platform` if either changed.
    pub fn refresh(&mut self, subsection: &Subsection, platform: Platform) {
        if self
            .key
            .as_ref()
            .is_some_and(|(id, p)| id == &subsection.id && *p == platform)
        {
            return;
        }
        self.shortcuts = subsection.visible_shortcuts(platform).cloned().collect();
        self.key = Some((subsection.id.clone(), platform));
    }

    /// Drop the cache; used when leaving lesson pages.
    pub fn clear(&mut self) {
        self.key = None;
        self.shortcuts.clear();
    }

    /// The cached filtered list, in catalog order.
    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guide_model::ShortcutPlatform;

    fn subsection(id: &str, platforms: &[ShortcutPlatform]) -> Subsection {
        Subsection {
            id: id.to_string(),
            title: id.to_string(),
            content: String::new(),
            tips: Vec::new(),
            shortcuts: platforms
                .iter()
                .enumerate()
                .map(|(i, platform)| Shortcut {
                    keys: vec![format!("K{i}")],
                    description: format!("shortcut {i}"),
                    platform: *platform,
                })
                .collect(),
            examples: Vec::new(),
        }
    }

    #[test]
    fn filters_by_platform_preserving_order() {
        let lesson = subsection(
            "l",
            &[
                ShortcutPlatform::All,
                ShortcutPlatform::Windows,
                ShortcutPlatform::Mac,
            ],
        );
        let mut filter = ShortcutFilter::default();
        filter.refresh(&lesson, Platform::Mac);

        let keys: Vec<&str> = filter
            .shortcuts()
            .iter()
            .map(|s| s.keys[0].as_str())
            .collect();
        assert_eq!(keys, ["K0", "K2"]);
    }

    #[test]
    fn platform_change_invalidates_the_cache() {
        let lesson = subsection("l", &[ShortcutPlatform::Windows, ShortcutPlatform::Mac]);
        let mut filter = ShortcutFilter::default();

        filter.refresh(&lesson, Platform::Windows);
        assert_eq!(filter.shortcuts().len(), 1);
        assert_eq!(filter.shortcuts()[0].description, "shortcut 0");

        filter.refresh(&lesson, Platform::Mac);
        assert_eq!(filter.shortcuts().len(), 1);
        assert_eq!(filter.shortcuts()[0].description, "shortcut 1");
    }

    #[test]
    fn lesson_change_invalidates_the_cache() {
        let first = subsection("first", &[ShortcutPlatform::All]);
        let second = subsection("second", &[ShortcutPlatform::All, ShortcutPlatform::All]);
        let mut filter = ShortcutFilter::default();

        filter.refresh(&first, Platform::Linux);
        assert_eq!(filter.shortcuts().len(), 1);

        filter.refresh(&second, Platform::Linux);
        assert_eq!(filter.shortcuts().len(), 2);
    }

    #[test]
    fn unchanged_inputs_keep_the_cache() {
        let lesson = subsection("l", &[ShortcutPlatform::All]);
        let mut filter = ShortcutFilter::default();

        filter.refresh(&lesson, Platform::Linux);
        let before = filter.shortcuts().as_ptr();
        filter.refresh(&lesson, Platform::Linux);
        assert_eq!(filter.shortcuts().as_ptr(), before);
    }
}
