//! Fixed chatbot texts and response templates
//!
//! Every string the assistant prints lives here, so the dialogue handlers stay
//! free of wording and the tests can quote messages verbatim.

use mindwell_common::country::{CountryData, GlobalAverages};
use mindwell_common::resources::Resources;

pub const GREETING: &str = "Hi! I'm your Mental Health Assistant, trained on global mental health data. \
     I'd like to understand how you're feeling. On a scale of 1-10, how would you rate \
     your mental wellbeing today? (1 being very poor, 10 being excellent) \
     [Please enter a number between 1-10]";

pub const INVALID_RATING_NOT_A_NUMBER: &str =
    "Please enter a valid number between 1 and 10 to rate your mental wellbeing.";

pub const INVALID_RATING_OUT_OF_RANGE: &str = "Please enter a valid number between 1 and 10.";

pub const EMPATHY_LOW: &str = "I'm sorry to hear you're not feeling well.";
pub const EMPATHY_MID: &str = "It sounds like you're having some challenges.";
pub const EMPATHY_HIGH: &str = "I'm glad to hear you're doing relatively well.";

pub const DURATION_PROMPT: &str =
    "How long have you been experiencing these feelings? (days, weeks, months?)";

pub const SYMPTOMS_PROMPT: &str = "Thank you for sharing. Could you describe the main symptoms or feelings you've \
     been experiencing? [For example: anxiety, low mood, trouble sleeping, \
     irritability, worry, panic attacks, etc.]";

pub const COUNTRY_PROMPT: &str = "Thank you for sharing those details. Which country do you live in? This will \
     help me provide statistics and coping strategies relevant to your region. \
     [Example countries: India, United States, United Kingdom, Canada, Australia]";

pub const LEARN_MORE_DEPRESSION: &str = "Based on what you've shared, some of your experiences might be associated with \
     depression. Would you like to learn more about depression and coping \
     strategies? [Please respond with: yes or no]";

pub const LEARN_MORE_ANXIETY: &str = "Based on what you've shared, some of your experiences might be associated with \
     anxiety. Would you like to learn more about anxiety and coping strategies? \
     [Please respond with: yes or no]";

pub const LEARN_MORE_GENERAL: &str = "Based on what you've shared, would you like to learn more about common mental \
     health challenges and coping strategies? [Please respond with: yes or no]";

pub const LEARN_MORE_REDIRECT: &str =
    "I understand. Is there something specific about mental health you'd like to know about instead?";

pub const RESOURCES_PROMPT: &str = "If you have any other questions about mental health resources or would like to \
     discuss something specific, feel free to ask. Would you like information about \
     professional help resources in your region? [Please respond with: yes or no]";

pub const RESOURCES_DECLINED: &str = "I understand. Feel free to ask any other questions about mental health, or \
     type 'exit' to end our conversation.";

pub const CONTINUATION: &str = "If you have any other questions about mental health, feel free to ask. You can \
     type 'exit' to end our conversation.";

pub const EXIT_DISCLAIMER: &str = "Thank you for using the Mental Health Assistant. Remember that this tool \
     provides information based on global mental health data, but is not a \
     substitute for professional care. If you're experiencing mental health \
     difficulties, please consider speaking with a healthcare professional.";

fn comparison(rate: f64, global: f64) -> &'static str {
    if rate < global {
        "lower"
    } else {
        "higher"
    }
}

/// Depression info block comparing the country rate to the global average.
pub fn depression_info(country: &str, data: &CountryData, averages: &GlobalAverages) -> String {
    let rate = data.prevalence.depression;
    format!(
        "Information about Depression:\n\
         \n\
         Depression (major depressive disorder) causes persistent feelings of sadness \
         and loss of interest. It affects how you feel, think, and behave and can lead \
         to various emotional and physical problems.\n\
         In {country}, approximately {rate:.1}% of the population experiences depression.\n\
         This is {cmp} than the global average of {global:.1}%.\n\
         \n\
         Evidence-based strategies for managing depression:\n\
         \n\
         1. Psychotherapy (especially CBT and Interpersonal Therapy)\n\
         2. Medication (antidepressants) when prescribed by a healthcare provider\n\
         3. Regular physical activity, which has been shown to reduce symptoms\n\
         4. Maintaining social connections and talking about your feelings\n\
         5. Establishing routines and setting achievable goals\n\
         \n\
         It's important to work with healthcare professionals for personalized treatment.",
        country = country,
        rate = rate,
        cmp = comparison(rate, averages.depression),
        global = averages.depression,
    )
}

/// Anxiety info block comparing the country rate to the global average.
pub fn anxiety_info(country: &str, data: &CountryData, averages: &GlobalAverages) -> String {
    let rate = data.prevalence.anxiety;
    format!(
        "Information about Anxiety:\n\
         \n\
         Anxiety disorders involve persistent, excessive worry or fear about everyday \
         situations. Anxiety can manifest as physical symptoms and interfere with daily \
         activities.\n\
         In {country}, approximately {rate:.1}% of the population experiences anxiety disorders.\n\
         This is {cmp} than the global average of {global:.1}%.\n\
         \n\
         Evidence-based strategies for managing anxiety:\n\
         \n\
         1. Cognitive-behavioral therapy (CBT)\n\
         2. Mindfulness and meditation practices\n\
         3. Regular physical exercise\n\
         4. Breathing techniques and progressive muscle relaxation\n\
         5. Limiting caffeine and alcohol consumption\n\
         6. Medication when prescribed by a healthcare provider\n\
         \n\
         It's important to work with healthcare professionals for personalized treatment.",
        country = country,
        rate = rate,
        cmp = comparison(rate, averages.anxiety),
        global = averages.anxiety,
    )
}

/// General mental health info block (no country statistics).
pub fn general_info() -> String {
    "Information about Mental Health:\n\
     \n\
     Mental health encompasses emotional, psychological, and social well-being, \
     affecting how we think, feel, act, handle stress, relate to others, and make \
     choices.\n\
     \n\
     Common evidence-based strategies for maintaining good mental health:\n\
     \n\
     1. Regular physical activity and a balanced diet\n\
     2. Adequate sleep and consistent sleep schedule\n\
     3. Social connection and supportive relationships\n\
     4. Stress management techniques like mindfulness and relaxation\n\
     5. Setting boundaries and practicing self-care\n\
     6. Seeking professional help when needed\n\
     \n\
     Remember that everyone's mental health needs are different, and what works for \
     one person may not work for another."
        .to_string()
}

/// Bulleted local + global resource listing for the user's country.
pub fn resources_block(country: &str, resources: &Resources) -> String {
    format!(
        "Mental Health Resources:\n\
         \n\
         Resources in {country}:\n\
         - {local}\n\
         \n\
         Global Resources:\n\
         - {global}\n\
         \n\
         Remember that in a serious emergency, you should call your local emergency services.",
        country = country,
        local = resources.local.join("\n- "),
        global = resources.global.join("\n- "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindwell_common::country::{CountryData, GlobalAverages, Prevalence};
    use mindwell_common::resources::resources_for;

    fn country_data(depression: f64, anxiety: f64) -> CountryData {
        CountryData {
            prevalence: Prevalence {
                depression,
                anxiety,
                ..Prevalence::default()
            },
            coping_strategies: None,
        }
    }

    #[test]
    fn depression_block_compares_against_global_average() {
        let averages = GlobalAverages {
            depression: 3.4,
            anxiety: 3.8,
        };
        let below = depression_info("India", &country_data(3.0, 3.8), &averages);
        assert!(below.contains("approximately 3.0% of the population experiences depression"));
        assert!(below.contains("This is lower than the global average of 3.4%."));

        let above = depression_info("India", &country_data(4.0, 3.8), &averages);
        assert!(above.contains("This is higher than the global average of 3.4%."));
    }

    #[test]
    fn equal_rate_reads_as_higher() {
        // Only a strictly lower rate reads as "lower".
        let averages = GlobalAverages {
            depression: 3.4,
            anxiety: 3.8,
        };
        let equal = anxiety_info("Canada", &country_data(3.3, 3.8), &averages);
        assert!(equal.contains("This is higher than the global average of 3.8%."));
    }

    #[test]
    fn resources_block_bullets_both_lists() {
        let block = resources_block("Australia", &resources_for("Australia"));
        assert!(block.contains("Resources in Australia:"));
        assert!(block.contains("- Lifeline Australia: 13 11 14"));
        assert!(block.contains("- WHO Mental Health Website: www.who.int/mental_health"));
        assert!(block.ends_with("call your local emergency services."));
    }
}
