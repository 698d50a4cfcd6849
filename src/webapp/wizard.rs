use crate::webapp::data::PlaceSummary;

pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

pub const QUESTIONS: &[Question] = &[
    Question {
        prompt: "What size is your pet?",
        options: &["Small", "Medium", "Large"],
    },
    Question {
        prompt: "What is their temperament?",
        options: &["Lively", "Calm"],
    },
    Question {
        prompt: "Preferred activity?",
        options: &["Outdoor", "Indoor"],
    },
    Question {
        prompt: "How far would you travel?",
        options: &["Nearby", "Moderate", "Far"],
    },
];

pub const MAX_RECOMMENDATIONS: usize = 3;

/// The recommendation wizard is a step counter over [`QUESTIONS`].
/// Answers are not recorded; any choice advances to the next question.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Wizard {
    step: usize,
}

impl Wizard {
    pub fn new() -> Self {
        Wizard::default()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.step)
    }

    pub fn is_finished(&self) -> bool {
        self.step >= QUESTIONS.len()
    }

    /// Advances past the current question. The chosen option is ignored.
    pub fn select_option(&mut self, _choice: usize) {
        if !self.is_finished() {
            self.step += 1;
        }
    }

    /// The final view: the first few known places, whatever was answered.
    pub fn recommendations<'a>(&self, places: &'a [PlaceSummary]) -> &'a [PlaceSummary] {
        if !self.is_finished() {
            return &[];
        }
        &places[..places.len().min(MAX_RECOMMENDATIONS)]
    }

    pub fn restart(&mut self) {
        self.step = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn places(n: usize) -> Vec<PlaceSummary> {
        (0..n)
            .map(|i| PlaceSummary {
                id: i as i64 + 1,
                name: format!("Place {i}"),
                image: String::new(),
                description: String::new(),
                rating: 0.0,
                review_count: 0,
                category: None,
                lat: 0.0,
                lng: 0.0,
                address: String::new(),
                phone: String::new(),
                hours: String::new(),
                details: String::new(),
            })
            .collect()
    }

    #[test]
    fn any_answers_walk_through_every_question() {
        let mut wizard = Wizard::new();
        for (i, question) in QUESTIONS.iter().enumerate() {
            assert_eq!(wizard.step(), i);
            assert_eq!(
                wizard.current_question().unwrap().prompt,
                question.prompt
            );
            // Picking the last option advances just like picking the first.
            wizard.select_option(question.options.len() - 1);
        }
        assert_eq!(wizard.step(), QUESTIONS.len());
        assert!(wizard.is_finished());
        assert!(wizard.current_question().is_none());
    }

    #[test]
    fn selecting_past_the_end_does_not_advance() {
        let mut wizard = Wizard::new();
        for _ in 0..10 {
            wizard.select_option(0);
        }
        assert_eq!(wizard.step(), QUESTIONS.len());
    }

    #[test]
    fn recommendations_are_the_first_three_places() {
        let mut wizard = Wizard::new();
        let all = places(5);
        assert!(wizard.recommendations(&all).is_empty());

        for _ in QUESTIONS {
            wizard.select_option(0);
        }
        let picks = wizard.recommendations(&all);
        assert_eq!(picks.len(), MAX_RECOMMENDATIONS);
        assert_eq!(picks[0].id, 1);
        assert_eq!(picks[2].id, 3);
    }

    #[test]
    fn recommendations_shrink_with_a_short_place_list() {
        let mut wizard = Wizard::new();
        for _ in QUESTIONS {
            wizard.select_option(0);
        }
        assert_eq!(wizard.recommendations(&places(2)).len(), 2);
        assert!(wizard.recommendations(&places(0)).is_empty());
    }

    #[test]
    fn restart_goes_back_to_the_first_question() {
        let mut wizard = Wizard::new();
        wizard.select_option(0);
        wizard.select_option(1);
        wizard.restart();
        assert_eq!(wizard.step(), 0);
        assert!(!wizard.is_finished());
    }
}
