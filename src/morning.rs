//! Detection of the Russian "morning" root in free text.
//!
//! Text is split into sentences, sentences into words, and every word is
//! reduced with the Snowball Russian stemmer. A message counts as a morning
//! greeting when any stem equals [`MORNING_STEM`].

use anyhow::{bail, Result};
use once_cell::sync::OnceCell;
use rust_stemmers::{Algorithm, Stemmer};
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

/// Stem shared by "утро", "утра", "утром", ...
pub const MORNING_STEM: &str = "утр";

/// Word used to check the stemmer tables at startup.
const PROBE_WORD: &str = "утро";

static SHARED: OnceCell<MorningDetector> = OnceCell::new();

pub struct MorningDetector {
    stemmer: Stemmer,
}

impl MorningDetector {
    /// Build the detector and verify its linguistic resources.
    pub fn load() -> Result<Self> {
        let detector = Self {
            stemmer: Stemmer::create(Algorithm::Russian),
        };

        let probe = detector.stemmer.stem(PROBE_WORD);
        if probe != MORNING_STEM {
            bail!(
                "Russian stemmer self-check failed: '{}' stemmed to '{}', expected '{}'",
                PROBE_WORD,
                probe,
                MORNING_STEM
            );
        }
        debug!("Russian stemmer loaded");

        Ok(detector)
    }

    /// True if any word of `text` stems to [`MORNING_STEM`].
    /// Total over arbitrary input.
    pub fn detect(&self, text: &str) -> bool {
        text.unicode_sentences().any(|sentence| {
            sentence
                .unicode_words()
                .any(|word| self.stem(word) == MORNING_STEM)
        })
    }

    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(&word.to_lowercase()).into_owned()
    }
}

/// Startup phase: load and check the process-wide detector before the
/// first message arrives. The load runs at most once; later calls return
/// the same instance.
pub fn init() -> Result<&'static MorningDetector> {
    SHARED.get_or_try_init(MorningDetector::load)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn detect(text: &str) -> bool {
        init().unwrap().detect(text)
    }

    #[test]
    fn test_load_passes_self_check() {
        assert!(MorningDetector::load().is_ok());
    }

    #[test]
    fn test_init_is_idempotent() {
        let first = init().unwrap() as *const MorningDetector;
        let second = init().unwrap() as *const MorningDetector;
        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_first_use() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                thread::spawn(move || {
                    let detector = init().unwrap();
                    let text = if i % 2 == 0 { "доброе утро" } else { "добрый день" };
                    (
                        detector as *const MorningDetector as usize,
                        detector.detect(text),
                        i % 2 == 0,
                    )
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let first = results[0].0;
        for (addr, found, expected) in results {
            assert_eq!(addr, first);
            assert_eq!(found, expected);
        }
    }

    #[test]
    fn test_one_detector_shared_across_threads() {
        let detector = MorningDetector::load().unwrap();
        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        assert!(detector.detect("с утра пораньше"));
                        assert!(!detector.detect("вечером"));
                    }
                });
            }
        });
    }

    #[test]
    fn test_empty_text() {
        assert!(!detect(""));
    }

    #[test]
    fn test_good_morning() {
        assert!(detect("Доброе утро!"));
        assert!(detect("с добрым утром!!!"));
    }

    #[test]
    fn test_inflected_form() {
        assert!(detect("Я проснулся утром"));
        assert!(detect("до утра"));
    }

    #[test]
    fn test_no_morning() {
        assert!(!detect("Сегодня хороший день"));
        assert!(!detect("привет"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(detect(&"УТРО".to_lowercase()));
        assert!(detect("УТРО"));
    }

    #[test]
    fn test_match_in_later_sentence() {
        assert!(detect("Привет. Как дела? Хорошего утра!"));
    }

    #[test]
    fn test_degenerate_input() {
        assert!(!detect("!!! ... ???"));
        assert!(!detect("😀🌅☕"));
        assert!(!detect("\u{0}\u{1}\u{fffd}\u{7f}"));
        assert!(!detect("good morning"));
    }

    #[test]
    fn test_long_input() {
        let long = "день ".repeat(20_000);
        assert_eq!(long.chars().count(), 100_000);
        assert!(!detect(&long));

        let with_match = format!("{}утро", long);
        assert!(detect(&with_match));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let text = "Доброе утро, друзья";
        assert_eq!(detect(text), detect(text));
        assert_eq!(detect("день"), detect("день"));
    }

    #[test]
    fn test_loaded_and_initialized_agree() {
        let loaded = MorningDetector::load().unwrap();
        for text in ["утро", "утром", "вечер", ""] {
            assert_eq!(loaded.detect(text), detect(text));
        }
    }
}
