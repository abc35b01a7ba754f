//! Language resolution: one probe round trip plus reply parsing.
//!
//! The probe reply is untrusted generator output, so parsing is strict:
//! exactly one comma, a known verdict token, a non-empty name. Anything
//! else fails the construction cleanly instead of being guessed at.

use super::client::CompletionService;
use super::corrector::SpellCheckError;
use super::prompt::{self, YES};

/// Resolve `language` (a code or name, any casing) into its canonical
/// display name via one completion round trip.
pub(crate) async fn resolve_language(
    service: &dyn CompletionService,
    language: &str,
) -> Result<String, SpellCheckError> {
    let messages = prompt::language_probe(language);
    let reply = service.complete(&messages).await?;
    log::debug!("language probe for {language:?} replied {reply:?}");
    parse_reply(&reply, language)
}

/// Parse a probe reply of the shape `{oui|non},{name-or-undefined}`.
///
/// * affirmative verdict with a non-empty name  → the resolved display name.
/// * any other verdict (one comma present)      → `UnsupportedLanguage`,
///   carrying the caller's original input for diagnosis.
/// * zero or extra commas, or an affirmative verdict with an empty name
///   → `MalformedResolverReply`.
fn parse_reply(reply: &str, language: &str) -> Result<String, SpellCheckError> {
    let mut tokens = reply.splitn(3, ',');
    // splitn always yields a first token, so a comma-less reply shows up as
    // a missing second token.
    let (Some(verdict), Some(name), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(SpellCheckError::MalformedResolverReply {
            reply: reply.to_string(),
        });
    };

    if verdict.trim() != YES {
        return Err(SpellCheckError::UnsupportedLanguage {
            input: language.to_string(),
        });
    }
    let name = name.trim();
    if name.is_empty() {
        // An affirmative verdict must come with a name.
        return Err(SpellCheckError::MalformedResolverReply {
            reply: reply.to_string(),
        });
    }
    Ok(name.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmative_reply_yields_display_name() {
        let resolved = parse_reply("oui,anglais", "eng").unwrap();
        assert_eq!(resolved, "anglais");
    }

    #[test]
    fn whitespace_around_tokens_is_tolerated() {
        let resolved = parse_reply("oui, anglais", "eng").unwrap();
        assert_eq!(resolved, "anglais");
    }

    #[test]
    fn negative_reply_is_unsupported_and_names_the_input() {
        let err = parse_reply("non,undefined", "lih").unwrap_err();
        match err {
            SpellCheckError::UnsupportedLanguage { input } => assert_eq!(input, "lih"),
            other => panic!("expected UnsupportedLanguage, got {other:?}"),
        }
    }

    #[test]
    fn unknown_verdict_token_is_unsupported() {
        let err = parse_reply("peut-etre,anglais", "eng").unwrap_err();
        assert!(matches!(err, SpellCheckError::UnsupportedLanguage { .. }));
    }

    #[test]
    fn reply_without_comma_is_malformed() {
        let err = parse_reply("anglais", "eng").unwrap_err();
        match err {
            SpellCheckError::MalformedResolverReply { reply } => assert_eq!(reply, "anglais"),
            other => panic!("expected MalformedResolverReply, got {other:?}"),
        }
    }

    #[test]
    fn reply_with_extra_commas_is_malformed() {
        let err = parse_reply("oui,anglais,vraiment", "eng").unwrap_err();
        assert!(matches!(err, SpellCheckError::MalformedResolverReply { .. }));
    }

    #[test]
    fn affirmative_reply_with_empty_name_is_malformed() {
        let err = parse_reply("oui,", "eng").unwrap_err();
        assert!(matches!(err, SpellCheckError::MalformedResolverReply { .. }));
    }

    #[test]
    fn empty_reply_is_malformed() {
        let err = parse_reply("", "eng").unwrap_err();
        assert!(matches!(err, SpellCheckError::MalformedResolverReply { .. }));
    }
}
