//! Keyword-based occasion classifier.

/// Greeting context selected from the prompt.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Occasion {
    /// Diwali / Deepavali
    #[display("diwali")]
    Diwali,
    /// Christmas
    #[display("christmas")]
    Christmas,
    /// New Year
    #[display("newyear")]
    NewYear,
    /// Birthday
    #[display("birthday")]
    Birthday,
    /// No keyword matched
    #[display("message")]
    Message,
}

/// Keyword groups in priority order. The first group with a hit wins.
const KEYWORDS: &[(Occasion, &[&str])] = &[
    (Occasion::Diwali, &["diwali", "deepavali"]),
    (Occasion::Christmas, &["christmas"]),
    (Occasion::NewYear, &["new year", "newyear"]),
    (Occasion::Birthday, &["birthday"]),
];

impl Occasion {
    /// Static greeting template. `{name}` is left for the caller to fill in.
    pub fn template(self) -> &'static str {
        match self {
            Occasion::Diwali => {
                "Hello {name}, Diwali greetings! We wish you the best holiday. Namaste!"
            }
            Occasion::Christmas => {
                "Hello {name}, Merry Christmas! Wishing you joy and peace this season."
            }
            Occasion::NewYear => {
                "Hello {name}, Happy New Year! Wishing you a prosperous year ahead."
            }
            Occasion::Birthday => {
                "Hello {name}, Happy Birthday! Hope you have a wonderful day filled with joy."
            }
            Occasion::Message => "Hello {name}, Greetings! Here's a short message you can use.",
        }
    }
}

/// Maps a prompt to its occasion by case-insensitive substring match.
///
/// # Examples
///
/// ```
/// use greeter_core::{Occasion, classify};
///
/// assert_eq!(classify("Merry CHRISTMAS"), Occasion::Christmas);
/// assert_eq!(classify(""), Occasion::Message);
/// ```
pub fn classify(prompt: &str) -> Occasion {
    let lowered = prompt.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lowered.contains(w)))
        .map(|(occasion, _)| *occasion)
        .unwrap_or(Occasion::Message)
}

/// Rule-based fallback: the template for the prompt's occasion.
pub fn generate_rule_message(prompt: &str) -> &'static str {
    classify(prompt).template()
}
