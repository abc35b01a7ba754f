//! Fixed few-shot prompt templates.
//!
//! Two templates exist, both pure functions from their placeholder inputs to
//! an ordered message sequence:
//! * **Language probe** — asks the model whether a supplied string names a
//!   real language and, if so, to rewrite it in French. The reply shape is
//!   pinned by the few-shot examples to `{oui|non},{name-or-undefined}`.
//! * **Correction** — frames the assistant as a spelling corrector for the
//!   resolved language and pins the reply lead-in phrasing.
//!
//! The French wording (including its irregular spellings) is part of the
//! prompt contract the model was observed to follow; it is configuration
//! data and must not be re-translated or tidied up.

use super::client::{Message, Role};

// ---------------------------------------------------------------------------
// Resolver verdict tokens
// ---------------------------------------------------------------------------

/// Affirmative verdict token the probe examples teach the model to emit.
pub const YES: &str = "oui";
/// Negative verdict token.
pub const NO: &str = "non";

// ---------------------------------------------------------------------------
// Language probe template
// ---------------------------------------------------------------------------

const LANGUAGE_PROBE_SYSTEM: &str = "Tu dois dire si la langue fournie existe \
ou non, tu dois egalement reecrire la lanque en francais si tu la connais";

/// One negative and two positive exchanges, fixing the two-token reply shape.
const LANGUAGE_PROBE_EXAMPLES: &[(Role, &str)] = &[
    (Role::User, "lih"),
    (Role::Assistant, "non,undefined"),
    (Role::User, "french"),
    (Role::Assistant, "oui,francais"),
    (Role::User, "eng"),
    (Role::Assistant, "oui,anglais"),
];

/// Build the language-probe message sequence for `language`.
pub fn language_probe(language: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(LANGUAGE_PROBE_EXAMPLES.len() + 2);
    messages.push(Message::new(Role::System, LANGUAGE_PROBE_SYSTEM));
    for &(role, content) in LANGUAGE_PROBE_EXAMPLES {
        messages.push(Message::new(role, content));
    }
    messages.push(Message::new(Role::User, language));
    messages
}

// ---------------------------------------------------------------------------
// Correction template
// ---------------------------------------------------------------------------

const CORRECTION_SYSTEM: &str = "Tu es un assistant servant à me corriger les \
fautes d'orthographe en {language} dans des mots/textes.";

/// Cue prefixed to every live correction request, mirroring the examples.
const CORRECTION_CUE: &str = "la phrase a corriger est : ";

/// Misspelled word, misspelled sentence, and already-correct sentence —
/// all answered with the same lead-in phrasing the post-processor strips.
const CORRECTION_EXAMPLES: &[(Role, &str)] = &[
    (Role::User, "la phrase a corriger est : tomtae"),
    (Role::Assistant, "La phrase corrigée est : Tomate"),
    (Role::User, "la phrase a corriger est : bonojur commet allez vous"),
    (Role::Assistant, "La phrase corrigée est : Bonjour comment allez-vous ?"),
    (Role::User, "La phrase a corriger est : Je vais bien et toi ?"),
    (Role::Assistant, "La phrase corrigée est : Je vais bien et toi "),
];

/// Build the correction message sequence for `text` in `language`.
///
/// `language` must be a resolved display name (see
/// [`resolver`](super::resolver)), never the caller's raw identifier.
pub fn correction(language: &str, text: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(CORRECTION_EXAMPLES.len() + 2);
    messages.push(Message::new(
        Role::System,
        CORRECTION_SYSTEM.replace("{language}", language),
    ));
    for &(role, content) in CORRECTION_EXAMPLES {
        messages.push(Message::new(role, content));
    }
    messages.push(Message::new(
        Role::User,
        format!("{CORRECTION_CUE}{text}"),
    ));
    messages
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Language probe
    // -----------------------------------------------------------------------

    #[test]
    fn probe_starts_with_system_and_ends_with_live_input() {
        let messages = language_probe("eng");

        assert_eq!(messages.first().unwrap().role, Role::System);
        let last = messages.last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(last.content, "eng");
    }

    #[test]
    fn probe_examples_cover_negative_and_positive_cases() {
        let messages = language_probe("de");
        let replies: Vec<&str> = messages
            .iter()
            .filter(|m| m.role == Role::Assistant)
            .map(|m| m.content.as_str())
            .collect();

        assert_eq!(replies, ["non,undefined", "oui,francais", "oui,anglais"]);
    }

    #[test]
    fn probe_examples_use_the_verdict_tokens() {
        for (role, content) in LANGUAGE_PROBE_EXAMPLES {
            if *role == Role::Assistant {
                let verdict = content.split(',').next().unwrap();
                assert!(
                    verdict == YES || verdict == NO,
                    "example verdict {verdict:?} must be one of the tokens"
                );
            }
        }
    }

    #[test]
    fn probe_is_deterministic() {
        assert_eq!(language_probe("eng"), language_probe("eng"));
    }

    // -----------------------------------------------------------------------
    // Correction
    // -----------------------------------------------------------------------

    #[test]
    fn correction_system_message_names_the_language() {
        let messages = correction("anglais", "helo");
        let system = &messages[0];

        assert_eq!(system.role, Role::System);
        assert!(system.content.contains("anglais"));
        assert!(
            !system.content.contains("{language}"),
            "placeholder must be substituted"
        );
        assert!(system.content.contains("fautes d'orthographe"));
    }

    #[test]
    fn correction_live_message_carries_cue_and_text() {
        let messages = correction("francais", "tomtae rouje");
        let last = messages.last().unwrap();

        assert_eq!(last.role, Role::User);
        assert_eq!(last.content, "la phrase a corriger est : tomtae rouje");
    }

    #[test]
    fn correction_examples_demonstrate_all_three_shapes() {
        let messages = correction("francais", "x");
        let replies: Vec<&str> = messages
            .iter()
            .filter(|m| m.role == Role::Assistant)
            .map(|m| m.content.as_str())
            .collect();

        // word fix, sentence fix, already-correct sentence
        assert_eq!(replies.len(), 3);
        assert_eq!(replies[0], "La phrase corrigée est : Tomate");
        assert!(replies[1].starts_with("La phrase corrigée est : "));
        assert!(replies[2].starts_with("La phrase corrigée est : "));
    }

    #[test]
    fn correction_examples_alternate_user_then_assistant() {
        let messages = correction("anglais", "x");
        // system, then strictly alternating user/assistant, ending on user
        for (i, msg) in messages[1..].iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(msg.role, expected, "message {} out of order", i + 1);
        }
        assert_eq!(messages.last().unwrap().role, Role::User);
    }
}
