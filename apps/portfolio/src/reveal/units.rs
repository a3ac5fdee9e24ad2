use serde::Serialize;

/// Default gap between consecutive words' start times.
pub const DEFAULT_STAGGER: f64 = 0.05;

/// One word of a revealed text block.
///
/// Units are derived once from the source text and never mutated; `index`
/// preserves source word order and drives the stagger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextUnit {
    pub content: String,
    pub index: usize,
    pub revealed: bool,
}

/// Start-time configuration for a block: `trigger_time(i) = base_delay + i * stagger`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevealSchedule {
    base_delay: f64,
    stagger: f64,
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self {
            base_delay: 0.0,
            stagger: DEFAULT_STAGGER,
        }
    }
}

impl RevealSchedule {
    pub fn with_delay(base_delay: f64) -> Self {
        Self::new(base_delay, DEFAULT_STAGGER)
    }

    /// Negative or non-finite inputs collapse to zero so trigger times never run backwards.
    pub fn new(base_delay: f64, stagger: f64) -> Self {
        Self {
            base_delay: sanitize(base_delay),
            stagger: sanitize(stagger),
        }
    }

    pub fn base_delay(&self) -> f64 {
        self.base_delay
    }

    pub fn stagger(&self) -> f64 {
        self.stagger
    }

    pub fn trigger_time(&self, index: usize) -> f64 {
        self.base_delay + index as f64 * self.stagger
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Splits `text` into ordered word units. Runs of whitespace count as one
/// boundary; empty or blank input yields no units.
pub fn split_units(text: &str) -> Vec<TextUnit> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, word)| TextUnit {
            content: word.to_string(),
            index,
            revealed: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_preserves_order() {
        let units = split_units("About Me");
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].content, "About");
        assert_eq!(units[1].content, "Me");
        assert_eq!(units[1].index, 1);
        assert!(units.iter().all(|u| !u.revealed));
    }

    #[test]
    fn test_split_empty_and_blank() {
        assert!(split_units("").is_empty());
        assert!(split_units("   ").is_empty());
    }

    #[test]
    fn test_split_collapses_repeated_spaces() {
        let units = split_units("Ready  to build");
        let words: Vec<_> = units.iter().map(|u| u.content.as_str()).collect();
        assert_eq!(words, vec!["Ready", "to", "build"]);
    }

    #[test]
    fn test_default_schedule() {
        let schedule = RevealSchedule::default();
        assert_eq!(schedule.trigger_time(0), 0.0);
        assert!((schedule.trigger_time(4) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_delayed_schedule() {
        let schedule = RevealSchedule::with_delay(0.6);
        assert!((schedule.trigger_time(0) - 0.6).abs() < 1e-12);
        assert!((schedule.trigger_time(2) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_negative_inputs_are_clamped() {
        let schedule = RevealSchedule::new(-1.0, f64::NAN);
        assert_eq!(schedule.trigger_time(0), 0.0);
        assert_eq!(schedule.trigger_time(10), 0.0);
    }

    #[test]
    fn test_negative_delay_is_clamped() {
        let schedule = RevealSchedule::with_delay(-0.5);
        assert_eq!(schedule.base_delay(), 0.0);
        assert_eq!(schedule.stagger(), DEFAULT_STAGGER);
        assert!(schedule.trigger_time(0) <= schedule.trigger_time(1));
    }

    proptest! {
        #[test]
        fn prop_units_match_tokens(text in "[ \t\n\r]{0,3}[a-zA-Z.,?é]{0,8}([ \t\n\r\u{a0}]{1,3}[a-zA-Z.,?é]{1,8}){0,20}[ \t\n]{0,3}") {
            let units = split_units(&text);
            prop_assert_eq!(units.len(), text.split_whitespace().count());

            let rejoined: Vec<_> = units.iter().map(|u| u.content.as_str()).collect();
            let normalized: Vec<_> = text.split_whitespace().collect();
            prop_assert_eq!(rejoined.join(" "), normalized.join(" "));

            for (i, unit) in units.iter().enumerate() {
                prop_assert_eq!(unit.index, i);
            }
        }

        #[test]
        fn prop_no_unit_contains_whitespace(text in "\\PC{0,64}") {
            for unit in split_units(&text) {
                prop_assert!(!unit.content.is_empty());
                prop_assert!(!unit.content.chars().any(char::is_whitespace));
            }
        }

        #[test]
        fn prop_with_delay_never_runs_backwards(delay in -10.0f64..10.0, n in 1usize..50) {
            let schedule = RevealSchedule::with_delay(delay);
            prop_assert!(schedule.trigger_time(0) >= 0.0);
            for i in 1..n {
                prop_assert!(schedule.trigger_time(i - 1) <= schedule.trigger_time(i));
            }
        }

        #[test]
        fn prop_trigger_times_are_monotonic(delay in 0.0f64..5.0, stagger in 0.0f64..1.0, n in 1usize..200) {
            let schedule = RevealSchedule::new(delay, stagger);
            for i in 1..n {
                prop_assert!(schedule.trigger_time(i - 1) <= schedule.trigger_time(i));
            }
        }
    }
}
