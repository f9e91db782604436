//! Dialogue state machine
//!
//! Six fixed steps traversed strictly forward, plus an absorbing follow-up
//! step. Handlers consume one line of input and yield utterances; they never
//! touch stdin/stdout, so the whole machine is testable without a terminal.

use mindwell_common::condition::Condition;
use mindwell_common::country::{get_country_data, get_global_averages};
use mindwell_common::resources::resources_for;

use crate::datasets::Datasets;
use crate::messages;

/// Dialogue cursor. Steps 0..=6 of the conversation, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Rating,
    Duration,
    Symptoms,
    Country,
    LearnMore,
    Resources,
    FollowUp,
}

/// Answers collected over the conversation, all optional until their step runs.
#[derive(Debug, Clone, Default)]
pub struct Answers {
    pub rating: Option<u8>,
    pub duration: Option<String>,
    pub symptoms: Option<String>,
    pub country: Option<String>,
}

/// One piece of rendered output. `Pause` is the fixed ~1 s delay before the
/// resources prompt; the test harness ignores it, the REPL sleeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Utterance {
    Say(String),
    Pause,
}

/// Everything produced for one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub utterances: Vec<Utterance>,
    pub done: bool,
}

impl Turn {
    fn say(messages: Vec<String>) -> Self {
        Self {
            utterances: messages.into_iter().map(Utterance::Say).collect(),
            done: false,
        }
    }

    fn exit(message: &str) -> Self {
        Self {
            utterances: vec![Utterance::Say(message.to_string())],
            done: true,
        }
    }

    /// Spoken lines only, for tests.
    pub fn spoken(&self) -> Vec<&str> {
        self.utterances
            .iter()
            .filter_map(|u| match u {
                Utterance::Say(text) => Some(text.as_str()),
                Utterance::Pause => None,
            })
            .collect()
    }
}

/// One conversation: the cursor, the collected answers, and the tables the
/// learn-more step consults.
pub struct Session<'a> {
    datasets: &'a Datasets,
    step: Step,
    answers: Answers,
}

impl<'a> Session<'a> {
    pub fn new(datasets: &'a Datasets) -> Self {
        Self {
            datasets,
            step: Step::Rating,
            answers: Answers::default(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Process one line of input. The literal `exit` (any case) ends the
    /// session from every step, bypassing the current handler.
    pub fn handle_line(&mut self, input: &str) -> Turn {
        if input.trim().eq_ignore_ascii_case("exit") {
            return Turn::exit(messages::EXIT_DISCLAIMER);
        }

        match self.step {
            Step::Rating => self.handle_rating(input),
            Step::Duration => self.handle_duration(input),
            Step::Symptoms => self.handle_symptoms(input),
            Step::Country => self.handle_country(input),
            Step::LearnMore => self.handle_learn_more(input),
            Step::Resources => self.handle_resources(input),
            Step::FollowUp => Turn::say(vec![messages::CONTINUATION.to_string()]),
        }
    }

    fn handle_rating(&mut self, input: &str) -> Turn {
        let rating: i64 = match input.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                return Turn::say(vec![messages::INVALID_RATING_NOT_A_NUMBER.to_string()]);
            }
        };
        if !(1..=10).contains(&rating) {
            return Turn::say(vec![messages::INVALID_RATING_OUT_OF_RANGE.to_string()]);
        }

        self.answers.rating = Some(rating as u8);
        let empathy = match rating {
            1..=3 => messages::EMPATHY_LOW,
            4..=6 => messages::EMPATHY_MID,
            _ => messages::EMPATHY_HIGH,
        };

        self.step = Step::Duration;
        Turn::say(vec![
            empathy.to_string(),
            messages::DURATION_PROMPT.to_string(),
        ])
    }

    fn handle_duration(&mut self, input: &str) -> Turn {
        self.answers.duration = Some(input.to_string());
        self.step = Step::Symptoms;
        Turn::say(vec![messages::SYMPTOMS_PROMPT.to_string()])
    }

    fn handle_symptoms(&mut self, input: &str) -> Turn {
        self.answers.symptoms = Some(input.to_string());
        self.step = Step::Country;
        Turn::say(vec![messages::COUNTRY_PROMPT.to_string()])
    }

    fn handle_country(&mut self, input: &str) -> Turn {
        self.answers.country = Some(input.trim().to_string());

        let prompt = match self.condition() {
            Condition::Depression => messages::LEARN_MORE_DEPRESSION,
            Condition::Anxiety => messages::LEARN_MORE_ANXIETY,
            Condition::SleepIssues | Condition::General => messages::LEARN_MORE_GENERAL,
        };

        self.step = Step::LearnMore;
        Turn::say(vec![prompt.to_string()])
    }

    fn handle_learn_more(&mut self, input: &str) -> Turn {
        if !is_affirmative(input) {
            // Stays at LearnMore on "no"; only `exit` leaves this step. The
            // resources step, in contrast, advances on "no".
            return Turn::say(vec![messages::LEARN_MORE_REDIRECT.to_string()]);
        }

        let country = self.country();
        let data = get_country_data(&self.datasets.prevalence, &self.datasets.coping, country);
        let averages = get_global_averages(&self.datasets.prevalence);

        let info = match self.condition() {
            Condition::Depression => messages::depression_info(country, &data, &averages),
            Condition::Anxiety => messages::anxiety_info(country, &data, &averages),
            Condition::SleepIssues | Condition::General => messages::general_info(),
        };

        self.step = Step::Resources;
        Turn {
            utterances: vec![
                Utterance::Say(info),
                Utterance::Pause,
                Utterance::Say(messages::RESOURCES_PROMPT.to_string()),
            ],
            done: false,
        }
    }

    fn handle_resources(&mut self, input: &str) -> Turn {
        self.step = Step::FollowUp;
        if !is_affirmative(input) {
            return Turn::say(vec![messages::RESOURCES_DECLINED.to_string()]);
        }

        let country = self.country().to_string();
        let resources = resources_for(&country);
        Turn::say(vec![messages::resources_block(&country, &resources)])
    }

    fn condition(&self) -> Condition {
        Condition::classify(self.answers.symptoms.as_deref().unwrap_or(""))
    }

    fn country(&self) -> &str {
        self.answers.country.as_deref().unwrap_or("")
    }
}

/// Affirmative = case-insensitive `yes` substring anywhere in the input.
fn is_affirmative(input: &str) -> bool {
    input.to_lowercase().contains("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_datasets() -> Datasets {
        Datasets::empty()
    }

    #[test]
    fn invalid_ratings_reprompt_without_advancing() {
        let datasets = empty_datasets();
        let mut session = Session::new(&datasets);

        for input in ["abc", "0", "11"] {
            let turn = session.handle_line(input);
            assert_eq!(session.step(), Step::Rating, "input {:?}", input);
            assert!(session.answers().rating.is_none());
            assert!(!turn.done);
        }

        let nan = session.handle_line("abc");
        assert_eq!(
            nan.spoken(),
            vec![messages::INVALID_RATING_NOT_A_NUMBER]
        );
        let range = session.handle_line("11");
        assert_eq!(range.spoken(), vec![messages::INVALID_RATING_OUT_OF_RANGE]);
    }

    #[test]
    fn valid_rating_stores_and_advances() {
        let datasets = empty_datasets();
        let mut session = Session::new(&datasets);

        let turn = session.handle_line("5");
        assert_eq!(session.step(), Step::Duration);
        assert_eq!(session.answers().rating, Some(5));
        assert_eq!(
            turn.spoken(),
            vec![messages::EMPATHY_MID, messages::DURATION_PROMPT]
        );
    }

    #[test]
    fn empathy_bands() {
        let datasets = empty_datasets();

        let mut low = Session::new(&datasets);
        assert_eq!(low.handle_line("3").spoken()[0], messages::EMPATHY_LOW);

        let mut mid = Session::new(&datasets);
        assert_eq!(mid.handle_line("4").spoken()[0], messages::EMPATHY_MID);

        let mut high = Session::new(&datasets);
        assert_eq!(high.handle_line("7").spoken()[0], messages::EMPATHY_HIGH);
    }

    #[test]
    fn free_text_steps_store_verbatim() {
        let datasets = empty_datasets();
        let mut session = Session::new(&datasets);
        session.handle_line("5");
        session.handle_line("a few weeks");
        session.handle_line("trouble sleeping");

        assert_eq!(session.answers().duration.as_deref(), Some("a few weeks"));
        assert_eq!(
            session.answers().symptoms.as_deref(),
            Some("trouble sleeping")
        );
        assert_eq!(session.step(), Step::Country);
    }

    #[test]
    fn panic_symptoms_select_the_anxiety_branch() {
        let datasets = empty_datasets();
        let mut session = Session::new(&datasets);
        session.handle_line("5");
        session.handle_line("weeks");
        session.handle_line("panic attacks");

        let turn = session.handle_line("Nowhereland");
        assert_eq!(turn.spoken(), vec![messages::LEARN_MORE_ANXIETY]);
        assert_eq!(session.step(), Step::LearnMore);

        let info = session.handle_line("yes");
        assert!(info.spoken()[0].starts_with("Information about Anxiety:"));
    }

    #[test]
    fn learn_more_no_stays_put() {
        let datasets = empty_datasets();
        let mut session = Session::new(&datasets);
        session.handle_line("5");
        session.handle_line("weeks");
        session.handle_line("irritability");
        session.handle_line("Canada");
        assert_eq!(session.step(), Step::LearnMore);

        let turn = session.handle_line("no thanks");
        assert_eq!(session.step(), Step::LearnMore);
        assert_eq!(turn.spoken(), vec![messages::LEARN_MORE_REDIRECT]);
    }

    #[test]
    fn learn_more_yes_pauses_before_resources_prompt() {
        let datasets = empty_datasets();
        let mut session = Session::new(&datasets);
        session.handle_line("5");
        session.handle_line("weeks");
        session.handle_line("low mood");
        session.handle_line("Nowhereland");

        let turn = session.handle_line("yes please");
        assert_eq!(session.step(), Step::Resources);
        assert_eq!(turn.utterances.len(), 3);
        assert_eq!(turn.utterances[1], Utterance::Pause);
        assert_eq!(
            turn.spoken().last().copied(),
            Some(messages::RESOURCES_PROMPT)
        );
        // Unknown country falls back to the default rates
        assert!(turn.spoken()[0].contains("approximately 3.3%"));
        assert!(turn.spoken()[0].contains("global average of 3.4%"));
    }

    #[test]
    fn resources_no_advances_with_closing_remark() {
        let datasets = empty_datasets();
        let mut session = to_resources_step(&datasets);

        let turn = session.handle_line("no");
        assert_eq!(session.step(), Step::FollowUp);
        assert_eq!(turn.spoken(), vec![messages::RESOURCES_DECLINED]);
    }

    #[test]
    fn resources_yes_renders_country_listing() {
        let datasets = empty_datasets();
        let mut session = Session::new(&datasets);
        session.handle_line("5");
        session.handle_line("weeks");
        session.handle_line("low mood");
        session.handle_line("India");
        session.handle_line("yes");

        let turn = session.handle_line("yes");
        assert_eq!(session.step(), Step::FollowUp);
        assert!(turn.spoken()[0].contains("Resources in India:"));
        assert!(turn.spoken()[0].contains("AASRA Suicide Prevention Helpline"));
    }

    #[test]
    fn follow_up_is_absorbing() {
        let datasets = empty_datasets();
        let mut session = to_resources_step(&datasets);
        session.handle_line("no");

        for _ in 0..3 {
            let turn = session.handle_line("anything else?");
            assert_eq!(session.step(), Step::FollowUp);
            assert_eq!(turn.spoken(), vec![messages::CONTINUATION]);
        }
    }

    #[test]
    fn exit_terminates_from_every_step() {
        let datasets = empty_datasets();
        let scripts: [&[&str]; 7] = [
            &[],
            &["5"],
            &["5", "weeks"],
            &["5", "weeks", "worry"],
            &["5", "weeks", "worry", "Canada"],
            &["5", "weeks", "worry", "Canada", "yes"],
            &["5", "weeks", "worry", "Canada", "yes", "no"],
        ];

        for script in scripts {
            let mut session = Session::new(&datasets);
            for line in script {
                session.handle_line(line);
            }
            let turn = session.handle_line("EXIT");
            assert!(turn.done, "after script {:?}", script);
            assert_eq!(turn.spoken(), vec![messages::EXIT_DISCLAIMER]);
        }
    }

    fn to_resources_step<'a>(datasets: &'a Datasets) -> Session<'a> {
        let mut session = Session::new(datasets);
        session.handle_line("5");
        session.handle_line("weeks");
        session.handle_line("low mood");
        session.handle_line("Canada");
        session.handle_line("yes");
        assert_eq!(session.step(), Step::Resources);
        session
    }
}
