use crate::core::Question;

const FREQUENCY: [(&str, i64); 5] = [
    ("Never", 0),
    ("Rarely", 1),
    ("Sometimes", 2),
    ("Often", 3),
    ("Always", 4),
];

const AGREEMENT_FROM_ZERO: [(&str, i64); 5] = [
    ("Totally disagree", 0),
    ("Rather disagree", 1),
    ("Neutral", 2),
    ("Rather agree", 3),
    ("Totally agree", 4),
];

const AGREEMENT_FROM_ONE: [(&str, i64); 5] = [
    ("Totally disagree", 1),
    ("Rather disagree", 2),
    ("Neutral", 3),
    ("Rather agree", 4),
    ("Totally agree", 5),
];

// The label carries a trailing space in published result files; keep it.
const AGREEMENT_FROM_ZERO_LEGACY: [(&str, i64); 5] = [
    ("Totally disagree ", 0),
    ("Rather disagree", 1),
    ("Neutral", 2),
    ("Rather agree", 3),
    ("Totally agree", 4),
];

#[rustfmt::skip]
const ITEMS: [(&str, &[(&str, i64); 5]); 20] = [
    ("I open social media even when I'm actively engaged in other things (studies, work).", &FREQUENCY),
    ("I spend significantly more time on social media than I originally planned.", &FREQUENCY),
    ("I use social media to fill in the 'empty' pauses during the day (in transport, in line).", &FREQUENCY),
    ("I feel like I have to be online so I don't miss important information or trends (FOMO).", &FREQUENCY),
    ("If my social media content doesn't get the expected reaction, I feel disappointed.", &AGREEMENT_FROM_ONE),
    ("Even when I'm bored on social media, I keep browsing them because I can't find an alternative.", &FREQUENCY),
    ("I tend to passively consume content on social media, almost never creating my own.", &AGREEMENT_FROM_ZERO),
    ("I've lost interest in my old hobbies or pursuits.", &AGREEMENT_FROM_ZERO),
    ("I don't care how events will develop in my life in the coming months/years.", &AGREEMENT_FROM_ONE),
    ("It is difficult for me to feel strong positive emotions (joy, delight) even in favorable situations.", &AGREEMENT_FROM_ONE),
    ("I often feel a lack of purpose or direction in my life.", &AGREEMENT_FROM_ZERO),
    ("I am indifferent to the praise or criticism from others.", &AGREEMENT_FROM_ONE),
    ("I stop following the progress of my friends in real life, preferring to monitor their online activity.", &AGREEMENT_FROM_ZERO),
    ("I became less sensitive to the need to help others or participate in social life.", &AGREEMENT_FROM_ZERO_LEGACY),
    ("The more time I spend on social media, the less energy I have for active actions in real life.", &AGREEMENT_FROM_ONE),
    ("Scrolling through the news feed often makes me feel like I don't need to put in effort, because nothing will change anyway.", &FREQUENCY),
    ("After using social media for a long time, I become passive and unable to switch to something productive.", &FREQUENCY),
    ("I use social media because I don't want to waste efforts on finding more challenging and meaningful activities.", &AGREEMENT_FROM_ZERO),
    ("My attitude towards personal achievements became more indifferent after spending a lot of time in social media.", &AGREEMENT_FROM_ONE),
    ("If I have to choose between active activity and passive viewing of social media content, I almost always choose viewing.", &FREQUENCY),
];

/// The embedded 20-item questionnaire
pub fn default_questions() -> Vec<Question> {
    ITEMS
        .iter()
        .map(|(prompt, scale)| Question::from_pairs(prompt, scale.as_slice()))
        .collect()
}
