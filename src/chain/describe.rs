/// Human-readable transition method strings
use crate::chain::{TransitionCondition, Trigger};

/// Which way the transition is being read. The forward and backward phrasings
/// differ only cosmetically ("Level up at level 16" vs "Leveled at 16").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Render a transition condition for display.
///
/// A level or item trigger missing its payload falls back to the title-cased
/// trigger kind; no condition at all renders "Unknown".
pub fn describe(condition: Option<&TransitionCondition>, direction: Direction) -> String {
    let Some(condition) = condition else {
        return "Unknown".to_string();
    };

    match (&condition.trigger, condition.min_level, condition.item.as_deref()) {
        (Trigger::LevelUp, Some(level), _) => match direction {
            Direction::Forward => format!("Level up at level {}", level),
            Direction::Backward => format!("Leveled at {}", level),
        },
        (Trigger::UseItem, _, Some(item)) => match direction {
            Direction::Forward => format!("Use item: {}", title_case(item)),
            Direction::Backward => format!("Used {}", title_case(item)),
        },
        (trigger, _, _) => title_case(trigger.as_str()),
    }
}

/// Capitalize each hyphen- or space-separated word, keeping separators:
/// "fire-stone" -> "Fire-Stone", "mr mime" -> "Mr Mime"
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c == '-' || c == ' ' {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: u32) -> TransitionCondition {
        TransitionCondition {
            trigger: Trigger::LevelUp,
            min_level: Some(n),
            item: None,
        }
    }

    fn item(name: &str) -> TransitionCondition {
        TransitionCondition {
            trigger: Trigger::UseItem,
            min_level: None,
            item: Some(name.to_string()),
        }
    }

    #[test]
    fn test_level_up_phrasings() {
        assert_eq!(
            describe(Some(&level(16)), Direction::Forward),
            "Level up at level 16"
        );
        assert_eq!(describe(Some(&level(16)), Direction::Backward), "Leveled at 16");
    }

    #[test]
    fn test_item_phrasings() {
        assert_eq!(
            describe(Some(&item("fire-stone")), Direction::Forward),
            "Use item: Fire-Stone"
        );
        assert_eq!(
            describe(Some(&item("water-stone")), Direction::Backward),
            "Used Water-Stone"
        );
    }

    #[test]
    fn test_other_trigger_is_title_cased() {
        let trade = TransitionCondition {
            trigger: Trigger::Other("trade".to_string()),
            min_level: None,
            item: None,
        };
        assert_eq!(describe(Some(&trade), Direction::Forward), "Trade");
        assert_eq!(describe(Some(&trade), Direction::Backward), "Trade");
    }

    #[test]
    fn test_missing_payload_falls_back_to_trigger_kind() {
        let bare_level = TransitionCondition {
            trigger: Trigger::LevelUp,
            min_level: None,
            item: None,
        };
        assert_eq!(describe(Some(&bare_level), Direction::Forward), "Level-Up");

        let bare_item = TransitionCondition {
            trigger: Trigger::UseItem,
            min_level: None,
            item: None,
        };
        assert_eq!(describe(Some(&bare_item), Direction::Backward), "Use-Item");
    }

    #[test]
    fn test_no_condition_is_unknown() {
        assert_eq!(describe(None, Direction::Forward), "Unknown");
        assert_eq!(describe(None, Direction::Backward), "Unknown");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("fire-stone"), "Fire-Stone");
        assert_eq!(title_case("pikachu"), "Pikachu");
        assert_eq!(title_case(""), "");
    }
}
