//! Revival message decoration.
//!
//! A revival post is one of five fixed layouts with a random headline emoji
//! (drawn by category, then within it) and a random sparkle. The prompt text
//! is interpolated verbatim; Discord's renderer handles markdown.

use rand::{seq::IndexedRandom, Rng};

use crate::model::prompt::PromptSet;

/// Probability that a revival uses an icebreaker instead of a question.
pub const ICEBREAKER_CHANCE: f64 = 0.3;

/// Headline, body label and sign-off for each layout.
const MESSAGE_STYLES: [(&str, &str, &str); 5] = [
    (
        "CHAT REVIVER",
        "Question of the Hour",
        "Let's get this conversation flowing!",
    ),
    (
        "ATTENTION AWESOME PEOPLE",
        "Brain Teaser",
        "Share your thoughts below!",
    ),
    ("CONVERSATION STARTER", "Let's Discuss", "Jump in and chat!"),
    ("COMMUNITY CHECK-IN", "Quick Question", "What's on your mind?"),
    (
        "TIME TO CHAT!",
        "Discussion Topic",
        "Let's hear from everyone!",
    ),
];

const EMOJI_SETS: [&[&str]; 5] = [
    // fun
    &["🎉", "✨", "🌟", "💫", "🔥", "💥", "🎊", "🎈", "🥳", "😄"],
    // nature
    &["🌿", "🌸", "🍃", "🌺", "🌼", "💮", "🏵️", "🌻"],
    // food
    &["🍕", "🍔", "🌮", "🍣", "🍦", "🍩", "☕", "🎂"],
    // travel
    &["✈️", "🌎", "🗺️", "🧭", "🏝️", "🏔️", "🌋", "🏕️"],
    // creative
    &["🎨", "🎭", "🎪", "🎯", "🎮", "🎲", "🧩", "🎪"],
];

const SPARKLES: [&str; 5] = ["✨", "🌟", "💫", "⭐", "🔮"];

/// Builds a decorated revival message around `prompt`.
///
/// # Arguments
/// - `rng` - Random source for layout and emoji choice
/// - `prompt` - Prompt text, inserted as-is
///
/// # Returns
/// - `String` - Message content mentioning `@everyone`
pub fn format_revival_message<R: Rng + ?Sized>(rng: &mut R, prompt: &str) -> String {
    let (headline, label, sign_off) = MESSAGE_STYLES[rng.random_range(0..MESSAGE_STYLES.len())];
    let emoji_set = EMOJI_SETS[rng.random_range(0..EMOJI_SETS.len())];
    let emoji = emoji_set[rng.random_range(0..emoji_set.len())];
    let sparkle = SPARKLES[rng.random_range(0..SPARKLES.len())];

    format!(
        "**{emoji} {headline} {emoji}**\n\n@everyone\n\n**{label}:** {prompt}\n\n*{sign_off}* {sparkle}"
    )
}

/// Picks the prompt for a revival post.
///
/// Draws from the icebreakers with [`ICEBREAKER_CHANCE`], otherwise from the
/// questions, uniformly within the chosen pool.
pub fn pick_revival_prompt<'a, R: Rng + ?Sized>(rng: &mut R, prompts: &'a PromptSet) -> &'a str {
    let pool = if rng.random_bool(ICEBREAKER_CHANCE) {
        prompts.icebreakers()
    } else {
        prompts.questions()
    };

    // Pools are never empty; PromptSet substitutes a fallback.
    pool.choose(rng).map(String::as_str).unwrap_or_default()
}

/// Picks one prompt uniformly from both pools combined.
pub fn pick_any_prompt<'a, R: Rng + ?Sized>(rng: &mut R, prompts: &'a PromptSet) -> &'a str {
    prompts.all().choose(rng).copied().unwrap_or_default()
}
