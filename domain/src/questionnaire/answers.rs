//! Answers collected by the questionnaire

use super::question::QuestionKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-text answers keyed by question (Value Object)
///
/// Keys are populated as the user progresses and are only ever overwritten,
/// never removed. The whole set is dropped on restart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionKey, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the raw answer for a question, if one was entered
    pub fn get(&self, key: QuestionKey) -> Option<&str> {
        self.answers.get(&key).map(String::as_str)
    }

    /// Set (or overwrite) the answer for a question
    pub fn set(&mut self, key: QuestionKey, answer: impl Into<String>) {
        self.answers.insert(key, answer.into());
    }

    /// Mutable access to an answer buffer, creating it empty if absent
    pub fn buffer_mut(&mut self, key: QuestionKey) -> &mut String {
        self.answers.entry(key).or_default()
    }

    /// An answer counts only if it has non-whitespace content
    pub fn is_answered(&self, key: QuestionKey) -> bool {
        self.get(key).is_some_and(|a| !a.trim().is_empty())
    }

    /// First question (in questionnaire order) without a usable answer
    pub fn first_unanswered(&self) -> Option<QuestionKey> {
        QuestionKey::ALL.into_iter().find(|k| !self.is_answered(*k))
    }

    pub fn is_complete(&self) -> bool {
        self.first_unanswered().is_none()
    }

    /// Number of keys that have been touched (answered or not)
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Iterate answers in questionnaire order
    pub fn iter(&self) -> impl Iterator<Item = (QuestionKey, &str)> {
        self.answers.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(QuestionKey, S)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionKey, S)>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for (key, answer) in iter {
            set.set(key, answer);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut answers = AnswerSet::new();
        answers.set(QuestionKey::Tarefa, "first");
        answers.set(QuestionKey::Tarefa, "second");
        assert_eq!(answers.get(QuestionKey::Tarefa), Some("second"));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn test_whitespace_is_not_an_answer() {
        let mut answers = AnswerSet::new();
        answers.set(QuestionKey::Valor, "  \n\t ");
        assert!(!answers.is_answered(QuestionKey::Valor));
        assert!(!answers.is_answered(QuestionKey::Tempo));
    }

    #[test]
    fn test_first_unanswered_follows_order() {
        let mut answers: AnswerSet = [
            (QuestionKey::Tarefa, "Enviar relatório"),
            (QuestionKey::Valor, "Evita repreensão"),
        ]
        .into_iter()
        .collect();
        assert_eq!(answers.first_unanswered(), Some(QuestionKey::Expectativa));

        answers.set(QuestionKey::Expectativa, "3/10");
        answers.set(QuestionKey::Tempo, "Hoje");
        answers.set(QuestionKey::Impulsividade, "Celular");
        assert!(answers.is_complete());
    }

    #[test]
    fn test_iter_is_in_questionnaire_order() {
        let answers: AnswerSet = [
            (QuestionKey::Impulsividade, "e"),
            (QuestionKey::Tarefa, "a"),
            (QuestionKey::Tempo, "d"),
        ]
        .into_iter()
        .collect();
        let keys: Vec<_> = answers.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![QuestionKey::Tarefa, QuestionKey::Tempo, QuestionKey::Impulsividade]
        );
    }

    #[test]
    fn test_buffer_mut_creates_entry() {
        let mut answers = AnswerSet::new();
        answers.buffer_mut(QuestionKey::Tempo).push_str("amanhã");
        assert_eq!(answers.get(QuestionKey::Tempo), Some("amanhã"));
    }
}
