//! 答题会话 - 流程层
//!
//! 封装"正在答第几题、答案是否已显示、哪些题答错了"这一状态

use std::collections::BTreeSet;
use std::fmt::Display;

use crate::error::CorpusError;
use crate::models::{AnswerKey, Letter, Question};

/// 答题会话
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    /// 当前题目索引（从 0 开始）
    index: usize,
    /// 当前题目的答案是否已显示
    revealed: bool,
    /// 答错的题目 ID（按答题顺序）
    wrong_ids: Vec<String>,
}

impl QuizSession {
    /// 创建新的答题会话，题库为空时报错
    pub fn new(questions: Vec<Question>) -> Result<Self, CorpusError> {
        if questions.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(Self {
            questions,
            index: 0,
            revealed: false,
            wrong_ids: Vec::new(),
        })
    }

    pub fn current(&self) -> &Question {
        &self.questions[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// 显示当前题目的答案
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// 记录当前题目的作答结果，然后循环前进到下一题并隐藏答案
    pub fn record(&mut self, correct: bool) {
        if !correct {
            let id = self.current().id.clone();
            self.wrong_ids.push(id);
        }
        self.index = (self.index + 1) % self.questions.len();
        self.revealed = false;
    }

    pub fn wrong_ids(&self) -> &[String] {
        &self.wrong_ids
    }

    /// 答错的题目，同一道题只出现一次
    pub fn wrong_questions(&self) -> Vec<&Question> {
        let mut seen = BTreeSet::new();
        self.wrong_ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .filter_map(|id| self.questions.iter().find(|q| q.id == *id))
            .collect()
    }

    pub fn reset_wrong(&mut self) {
        self.wrong_ids.clear();
    }
}

impl Display for QuizSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[题目 {}/{} ID#{}]",
            self.index + 1,
            self.questions.len(),
            self.current().id
        )
    }
}

/// 判断作答是否正确
///
/// 没有答案（或答案为空）时总是判错；否则选择的字母集合必须与答案集合完全相同，顺序无关
pub fn grade(answer_key: Option<&AnswerKey>, selected: &[Letter]) -> bool {
    let Some(key) = answer_key.filter(|key| !key.is_empty()) else {
        return false;
    };

    let expected: BTreeSet<Letter> = key.letters().iter().copied().collect();
    let actual: BTreeSet<Letter> = selected.iter().copied().collect();
    expected == actual
}

/// 按 ID 查找题目
pub fn find_question<'a>(questions: &'a [Question], id: &str) -> Result<&'a Question, CorpusError> {
    questions
        .iter()
        .find(|q| q.id == id)
        .ok_or_else(|| CorpusError::QuestionNotFound { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Question> {
        vec![
            Question::new("10", "Q10", "", "A"),
            Question::new("11", "Q11", "", "B"),
            Question::new("12", "Q12", "", "C"),
        ]
    }

    #[test]
    fn test_empty_corpus_is_rejected() {
        assert!(matches!(QuizSession::new(Vec::new()), Err(CorpusError::Empty)));
    }

    #[test]
    fn test_record_advances_cyclically() {
        let mut session = QuizSession::new(corpus()).unwrap();
        session.reveal();
        assert!(session.is_revealed());

        session.record(true);
        assert_eq!(session.current().id, "11");
        assert!(!session.is_revealed());

        session.record(false);
        session.record(false);
        assert_eq!(session.index(), 0);
        assert_eq!(session.wrong_ids(), &["11".to_string(), "12".to_string()]);
    }

    #[test]
    fn test_wrong_questions_are_unique() {
        let mut session = QuizSession::new(corpus()).unwrap();
        for _ in 0..6 {
            session.record(session.current().id != "10");
        }
        let wrong: Vec<&str> = session
            .wrong_questions()
            .into_iter()
            .map(|q| q.id.as_str())
            .collect();
        assert_eq!(wrong, vec!["11", "12"]);

        session.reset_wrong();
        assert!(session.wrong_ids().is_empty());
    }

    #[test]
    fn test_grade() {
        let single = AnswerKey::from_letters([Letter::B]);
        let multi = AnswerKey::from_letters([Letter::C, Letter::A]);

        assert!(grade(Some(&single), &[Letter::B]));
        assert!(!grade(Some(&single), &[Letter::A]));
        assert!(!grade(Some(&single), &[Letter::B, Letter::C]));
        assert!(grade(Some(&multi), &[Letter::A, Letter::C]));
        assert!(!grade(Some(&multi), &[Letter::A]));
        assert!(!grade(None, &[Letter::A]));
        assert!(!grade(None, &[]));
        assert!(!grade(Some(&AnswerKey::default()), &[]));
    }

    #[test]
    fn test_find_question() {
        let questions = corpus();
        assert_eq!(find_question(&questions, "11").unwrap().question_en, "Q11");
        assert!(matches!(
            find_question(&questions, "99"),
            Err(CorpusError::QuestionNotFound { .. })
        ));
    }

    #[test]
    fn test_display() {
        let session = QuizSession::new(corpus()).unwrap();
        assert_eq!(session.to_string(), "[题目 1/3 ID#10]");
    }
}
