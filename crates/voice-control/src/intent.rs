//! Keyword intent classification

/// Operator intents recognized from a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandIntent {
    /// Turn the alert system on
    EnableAlerts,

    /// Turn the alert system off
    DisableAlerts,

    /// Assistant features that are not wired up yet
    UnderDevelopment,

    /// No keyword matched; the transcript is echoed as-is
    Unrecognized,
}

// Ordered containment rules: the first matching keyword wins.
const KEYWORD_RULES: &[(&str, CommandIntent)] = &[
    ("enable", CommandIntent::EnableAlerts),
    ("disable", CommandIntent::DisableAlerts),
    ("sarthi", CommandIntent::UnderDevelopment),
    ("help", CommandIntent::UnderDevelopment),
    ("radio", CommandIntent::UnderDevelopment),
];

/// Map a transcript to an intent by substring containment, case-insensitive.
pub fn classify_command(transcript: &str) -> CommandIntent {
    let lowered = transcript.to_lowercase();
    for (keyword, intent) in KEYWORD_RULES {
        if lowered.contains(keyword) {
            return *intent;
        }
    }
    CommandIntent::Unrecognized
}
