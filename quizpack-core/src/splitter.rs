//! Question/answer separation

use crate::markers::MarkerSet;
use crate::parser::split_lines;
use serde::Serialize;

/// A block split into its visible and hidden parts
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SplitQuestion {
    /// Text shown immediately
    pub question_text: String,
    /// Answer text shown behind a spoiler; empty when absent
    pub spoiler_text: String,
}

impl SplitQuestion {
    /// True when the block had an answer section
    pub fn has_spoiler(&self) -> bool {
        !self.spoiler_text.is_empty()
    }
}

/// Split a block into question and spoiler
///
/// Lines before the first question marker are dropped as preamble (tour
/// headers, editor notes). The first answer marker line and everything after
/// it becomes the spoiler. Never fails; empty input gives an empty question.
pub fn split_question(
    block: &str,
    question_markers: &MarkerSet,
    answer_markers: &MarkerSet,
) -> SplitQuestion {
    let mut lines = split_lines(block);

    if let Some(start) = question_markers.find_first(lines.iter().copied()) {
        lines.drain(..start);
    }

    match answer_markers.find_first(lines.iter().copied()) {
        Some(answer) => SplitQuestion {
            question_text: lines[..answer].join("\n").trim().to_string(),
            spoiler_text: lines[answer..].join("\n").trim().to_string(),
        },
        None => SplitQuestion {
            question_text: lines.join("\n").trim().to_string(),
            spoiler_text: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(block: &str) -> SplitQuestion {
        split_question(
            block,
            &MarkerSet::new(["Вопрос"]),
            &MarkerSet::new(["Ответ:"]),
        )
    }

    #[test]
    fn test_question_with_answer() {
        let result = split("Вопрос: what?\nАвтор: Z\nОтвет: 42");
        assert_eq!(result.question_text, "Вопрос: what?\nАвтор: Z");
        assert_eq!(result.spoiler_text, "Ответ: 42");
        assert!(result.has_spoiler());
    }

    #[test]
    fn test_preamble_dropped() {
        let result = split("Тур 3\nРедактор: Иванов\n\nВопрос 5: Кто?\nОтвет: Он\nАвтор: X");
        assert_eq!(result.question_text, "Вопрос 5: Кто?");
        assert_eq!(result.spoiler_text, "Ответ: Он\nАвтор: X");
    }

    #[test]
    fn test_no_question_marker_keeps_everything() {
        let result = split("Intro\nSomething?\nОтвет: yes");
        assert_eq!(result.question_text, "Intro\nSomething?");
        assert_eq!(result.spoiler_text, "Ответ: yes");
    }

    #[test]
    fn test_no_answer_marker() {
        let result = split("Вопрос 1\nText\nАвтор: A\n");
        assert_eq!(result.question_text, "Вопрос 1\nText\nАвтор: A");
        assert_eq!(result.spoiler_text, "");
        assert!(!result.has_spoiler());
    }

    #[test]
    fn test_only_first_answer_marker_splits() {
        let result = split("Вопрос\nОтвет: a\nОтвет: b");
        assert_eq!(result.question_text, "Вопрос");
        assert_eq!(result.spoiler_text, "Ответ: a\nОтвет: b");
    }

    #[test]
    fn test_answer_marker_on_first_line() {
        let result = split("Ответ: сразу\nКомментарий: да");
        assert_eq!(result.question_text, "");
        assert_eq!(result.spoiler_text, "Ответ: сразу\nКомментарий: да");
        assert!(result.has_spoiler());
    }

    #[test]
    fn test_bare_cr_separates_answer() {
        let result = split("Тур 1\rВопрос 1: Кто?\rОтвет: Он");
        assert_eq!(result.question_text, "Вопрос 1: Кто?");
        assert_eq!(result.spoiler_text, "Ответ: Он");
    }

    #[test]
    fn test_indented_markers() {
        let result = split("  Header\n   Вопрос 2: q\n\t Ответ: a");
        assert_eq!(result.question_text, "Вопрос 2: q");
        assert_eq!(result.spoiler_text, "Ответ: a");
    }

    #[test]
    fn test_empty_block() {
        let result = split("");
        assert_eq!(result, SplitQuestion::default());
        assert!(!result.has_spoiler());
    }

    #[test]
    fn test_empty_marker_sets() {
        let result = split_question("a\nb", &MarkerSet::default(), &MarkerSet::default());
        assert_eq!(result.question_text, "a\nb");
        assert!(!result.has_spoiler());
    }
}
