//! Lesson page messages.

use guide_model::NextTarget;

use crate::state::GuideTab;

/// Messages for the lesson page and its composite completion action.
#[derive(Debug, Clone)]
pub enum GuideMessage {
    /// Switch the Tips/Shortcuts/Examples tab
    SelectTab(GuideTab),

    /// Flip the bookmark on a lesson id
    ToggleBookmark(String),

    /// Mark a lesson completed, then advance after a short delay
    MarkComplete(String),

    /// Remove a lesson's completion mark
    MarkIncomplete(String),

    /// The post-completion delay elapsed; move to the precomputed target
    AdvanceElapsed {
        /// Lesson the transition started from
        from: String,
        /// Where traversal lands
        target: NextTarget,
    },
}
