use serde::Serialize;

/// Bumped whenever an entry is added, renamed or re-prompted.
pub const CATALOG_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub name: &'static str,
    /// Glyph the generated icon replaces in the UI.
    pub emoji: &'static str,
    pub prompt: &'static str,
    pub destination_filename: &'static str,
}

/// Icons replacing the emoji used across the poker trainer UI.
pub const CATALOG: &[GenerationRequest] = &[
    GenerationRequest {
        name: "practice",
        emoji: "🎯",
        prompt: "A minimal, modern gaming icon representing practice mode. Single color white icon on transparent background, clean vector style, suitable for dark UI. Simple target or crosshair design.",
        destination_filename: "practice-icon.png",
    },
    GenerationRequest {
        name: "fullgame",
        emoji: "🏆",
        prompt: "A minimal, modern gaming icon representing a full game or tournament. Single color white icon on transparent background, clean vector style, suitable for dark UI. Simple trophy or championship cup design.",
        destination_filename: "fullgame-icon.png",
    },
    GenerationRequest {
        name: "tutorial",
        emoji: "📚",
        prompt: "A minimal, modern icon representing a tutorial or learning. Single color white icon on transparent background, clean vector style, suitable for dark UI. Simple book or education symbol.",
        destination_filename: "tutorial-icon.png",
    },
    GenerationRequest {
        name: "interactive",
        emoji: "🎮",
        prompt: "A minimal, modern gaming icon representing interactive gameplay. Single color white icon on transparent background, clean vector style, suitable for dark UI. Simple game controller or play symbol.",
        destination_filename: "interactive-icon.png",
    },
    GenerationRequest {
        name: "cards",
        emoji: "🃏",
        prompt: "A minimal, modern icon representing playing cards. Single color white icon on transparent background, clean vector style, suitable for dark UI. Simple card or deck symbol.",
        destination_filename: "cards-icon.png",
    },
    GenerationRequest {
        name: "chips",
        emoji: "💰",
        prompt: "A minimal, modern icon representing poker chips or money. Single color white icon on transparent background, clean vector style, suitable for dark UI. Simple chip stack or coin symbol.",
        destination_filename: "chips-icon.png",
    },
    GenerationRequest {
        name: "winner",
        emoji: "👑",
        prompt: "A minimal, modern icon representing a winner or champion. Single color gold/yellow icon on transparent background, clean vector style, suitable for dark UI. Simple crown design.",
        destination_filename: "winner-icon.png",
    },
    GenerationRequest {
        name: "fold",
        emoji: "🚫",
        prompt: "A minimal, modern icon representing fold action in poker. Single color red icon on transparent background, clean vector style, suitable for dark UI. Simple X or stop symbol.",
        destination_filename: "fold-icon.png",
    },
    GenerationRequest {
        name: "check",
        emoji: "✓",
        prompt: "A minimal, modern icon representing check action in poker. Single color green icon on transparent background, clean vector style, suitable for dark UI. Simple checkmark.",
        destination_filename: "check-icon.png",
    },
    GenerationRequest {
        name: "raise",
        emoji: "⬆️",
        prompt: "A minimal, modern icon representing raise action in poker. Single color blue icon on transparent background, clean vector style, suitable for dark UI. Simple upward arrow.",
        destination_filename: "raise-icon.png",
    },
    GenerationRequest {
        name: "allin",
        emoji: "🔥",
        prompt: "A minimal, modern icon representing all-in action in poker. Single color orange/red icon on transparent background, clean vector style, suitable for dark UI. Simple flame or explosion symbol.",
        destination_filename: "allin-icon.png",
    },
    GenerationRequest {
        name: "position",
        emoji: "📍",
        prompt: "A minimal, modern icon representing table position in poker. Single color white icon on transparent background, clean vector style, suitable for dark UI. Simple position marker or seat indicator.",
        destination_filename: "position-icon.png",
    },
];

pub fn find(name: &str) -> Option<&'static GenerationRequest> {
    CATALOG.iter().find(|r| r.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_and_filenames_are_unique() {
        let names: HashSet<_> = CATALOG.iter().map(|r| r.name).collect();
        let files: HashSet<_> = CATALOG.iter().map(|r| r.destination_filename).collect();
        assert_eq!(names.len(), CATALOG.len());
        assert_eq!(files.len(), CATALOG.len());
    }

    #[test]
    fn filenames_are_plain_png_names() {
        for r in CATALOG {
            assert!(r.destination_filename.ends_with(".png"), "{}", r.name);
            assert!(!r.destination_filename.contains('/'), "{}", r.name);
            assert!(!r.prompt.trim().is_empty(), "{}", r.name);
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(find("fold").map(|r| r.destination_filename), Some("fold-icon.png"));
        assert!(find("bluff").is_none());
    }
}
