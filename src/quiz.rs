//! Knowledge-check quiz.
//!
//! A small sequential multiple-choice session over the concepts the studies
//! demonstrate. The host UI owns rendering; this module owns the question
//! bank, answer checking, scoring, and the final grade.

/// One multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// The question text.
    pub prompt: &'static str,
    /// Answer options, shown in order.
    pub options: [&'static str; 4],
    /// Index of the correct option.
    pub correct: usize,
    /// Shown after answering, right or wrong.
    pub explanation: &'static str,
}

/// The built-in five-question bank, one question per concept.
pub fn question_bank() -> &'static [Question] {
    &QUESTIONS
}

const QUESTIONS: [Question; 5] = [
    Question {
        prompt: "According to the empirical rule, what share of values falls within ±2σ of the mean?",
        options: ["68%", "95%", "99.7%", "50%"],
        correct: 1,
        explanation: "The empirical rule puts about 95% of normally distributed values within two standard deviations of the mean.",
    },
    Question {
        prompt: "What does the central limit theorem state?",
        options: [
            "All distributions are normal",
            "The mean of a large sample equals the population mean",
            "The distribution of sample means approaches a normal distribution",
            "Variance decreases as the sample grows",
        ],
        correct: 2,
        explanation: "The CLT states that the distribution of sample means approaches normality as the sample size grows, whatever the source distribution.",
    },
    Question {
        prompt: "What is regression to the mean?",
        options: [
            "A mathematical analysis method",
            "The tendency of extreme values to sit closer to the mean when re-measured",
            "A way of computing the average",
            "A kind of statistical distribution",
        ],
        correct: 1,
        explanation: "Extreme measurements are partly luck, so a repeat measurement tends to land closer to the population mean.",
    },
    Question {
        prompt: "The law of large numbers states that:",
        options: [
            "Large numbers are always more accurate than small ones",
            "As the sample grows, its mean converges to the true population mean",
            "Probability always equals 0.5",
            "Large samples are always normally distributed",
        ],
        correct: 1,
        explanation: "With more observations, the sample mean converges to the true population mean.",
    },
    Question {
        prompt: "What is the main problem with small samples?",
        options: [
            "They always give wrong results",
            "They have high variability and unreliable estimates",
            "They cannot be used in statistics",
            "They always follow a normal distribution",
        ],
        correct: 1,
        explanation: "Small samples produce highly variable estimates, which makes conclusions drawn from them unreliable.",
    },
];

/// Final grade, from the score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    /// 80% and up.
    Excellent,
    /// 60% to below 80%.
    Good,
    /// Below 60%.
    NeedsReview,
}

impl Grade {
    /// Maps a score percentage to a grade.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 80.0 {
            Grade::Excellent
        } else if percent >= 60.0 {
            Grade::Good
        } else {
            Grade::NeedsReview
        }
    }
}

/// Result of answering one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Whether the chosen option was correct.
    pub correct: bool,
    /// The question's explanation, shown either way.
    pub explanation: &'static str,
}

/// A sequential quiz session.
///
/// Questions are answered in order; the session is complete once the last
/// one is answered.
///
/// # Examples
/// ```
/// use probalab::quiz::Quiz;
///
/// let mut quiz = Quiz::new();
/// while let Some(question) = quiz.current_question() {
///     let choice = question.correct; // a perfect student
///     quiz.answer(choice).unwrap();
/// }
/// assert!(quiz.is_complete());
/// assert_eq!(quiz.score(), quiz.total());
/// ```
#[derive(Debug, Clone)]
pub struct Quiz {
    questions: &'static [Question],
    current: usize,
    score: usize,
}

impl Quiz {
    /// Starts a session over the built-in bank.
    pub fn new() -> Self {
        Self::with_questions(question_bank())
    }

    /// Starts a session over a custom question list.
    pub fn with_questions(questions: &'static [Question]) -> Self {
        Self {
            questions,
            current: 0,
            score: 0,
        }
    }

    /// The question awaiting an answer, or `None` once complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Answers the current question with the chosen option index.
    ///
    /// Returns `None` — without advancing — if the session is already
    /// complete or `choice` is out of range for the current question.
    pub fn answer(&mut self, choice: usize) -> Option<AnswerOutcome> {
        let questions = self.questions;
        let question = questions.get(self.current)?;
        if choice >= question.options.len() {
            return None;
        }
        let correct = choice == question.correct;
        if correct {
            self.score += 1;
        }
        self.current += 1;
        Some(AnswerOutcome {
            correct,
            explanation: question.explanation,
        })
    }

    /// Number of questions answered so far.
    pub fn answered(&self) -> usize {
        self.current
    }

    /// Total number of questions.
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Number of correct answers so far.
    pub fn score(&self) -> usize {
        self.score
    }

    /// True once every question has been answered.
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Fraction of questions answered, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            1.0
        } else {
            self.current as f64 / self.questions.len() as f64
        }
    }

    /// Score as a percentage of the total.
    pub fn score_percent(&self) -> f64 {
        if self.questions.is_empty() {
            0.0
        } else {
            self.score as f64 / self.questions.len() as f64 * 100.0
        }
    }

    /// The final grade, or `None` while questions remain.
    pub fn grade(&self) -> Option<Grade> {
        if self.is_complete() {
            Some(Grade::from_percent(self.score_percent()))
        } else {
            None
        }
    }

    /// Restarts the session from the first question.
    pub fn reset(&mut self) {
        self.current = 0;
        self.score = 0;
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_is_well_formed() {
        let bank = question_bank();
        assert_eq!(bank.len(), 5);
        for q in bank {
            assert!(q.correct < q.options.len());
            assert!(!q.prompt.is_empty());
            assert!(!q.explanation.is_empty());
        }
    }

    #[test]
    fn perfect_run_scores_full_marks() {
        let mut quiz = Quiz::new();
        assert!(!quiz.is_complete());
        assert_eq!(quiz.grade(), None);
        while let Some(q) = quiz.current_question() {
            let outcome = quiz.answer(q.correct).unwrap();
            assert!(outcome.correct);
        }
        assert!(quiz.is_complete());
        assert_eq!(quiz.score(), 5);
        assert_eq!(quiz.score_percent(), 100.0);
        assert_eq!(quiz.grade(), Some(Grade::Excellent));
        assert_eq!(quiz.progress(), 1.0);
    }

    #[test]
    fn wrong_answers_do_not_score() {
        let mut quiz = Quiz::new();
        while let Some(q) = quiz.current_question() {
            // Always pick a wrong option
            let wrong = (q.correct + 1) % q.options.len();
            let outcome = quiz.answer(wrong).unwrap();
            assert!(!outcome.correct);
            assert!(!outcome.explanation.is_empty());
        }
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.grade(), Some(Grade::NeedsReview));
    }

    #[test]
    fn out_of_range_choice_does_not_advance() {
        let mut quiz = Quiz::new();
        assert_eq!(quiz.answer(4), None);
        assert_eq!(quiz.answered(), 0);
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn answering_after_completion_is_rejected() {
        let mut quiz = Quiz::new();
        for _ in 0..5 {
            quiz.answer(0).unwrap();
        }
        assert!(quiz.is_complete());
        assert_eq!(quiz.answer(0), None);
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(Grade::from_percent(100.0), Grade::Excellent);
        assert_eq!(Grade::from_percent(80.0), Grade::Excellent);
        assert_eq!(Grade::from_percent(79.9), Grade::Good);
        assert_eq!(Grade::from_percent(60.0), Grade::Good);
        assert_eq!(Grade::from_percent(59.9), Grade::NeedsReview);
        assert_eq!(Grade::from_percent(0.0), Grade::NeedsReview);
    }

    #[test]
    fn four_of_five_is_excellent() {
        let mut quiz = Quiz::new();
        let mut first = true;
        while let Some(q) = quiz.current_question() {
            let choice = if first {
                (q.correct + 1) % q.options.len()
            } else {
                q.correct
            };
            first = false;
            quiz.answer(choice).unwrap();
        }
        assert_eq!(quiz.score(), 4);
        assert_eq!(quiz.grade(), Some(Grade::Excellent)); // 80%
    }

    #[test]
    fn three_of_five_is_good() {
        let mut quiz = Quiz::new();
        let mut misses = 0;
        while let Some(q) = quiz.current_question() {
            let choice = if misses < 2 {
                misses += 1;
                (q.correct + 1) % q.options.len()
            } else {
                q.correct
            };
            quiz.answer(choice).unwrap();
        }
        assert_eq!(quiz.score(), 3);
        assert_eq!(quiz.grade(), Some(Grade::Good)); // 60%
    }

    #[test]
    fn reset_restarts_the_session() {
        let mut quiz = Quiz::new();
        quiz.answer(1).unwrap();
        quiz.answer(1).unwrap();
        quiz.reset();
        assert_eq!(quiz.answered(), 0);
        assert_eq!(quiz.score(), 0);
        assert!(!quiz.is_complete());
        assert_eq!(quiz.current_question(), Some(&question_bank()[0]));
    }
}
