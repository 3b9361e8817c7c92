//! Composition of the system instruction prepended to every provider call.
//!
//! The prompt is `header ⊕ [profile section ⊕ already-known rule] ⊕ policy`.
//! The profile section is present only when the profile is non-empty. The
//! behavioral policy is always included verbatim.

use crate::domain::{Profile, PromptLocale};

struct PromptTemplate {
    header: &'static str,
    profile_intro: &'static str,
    already_known: &'static str,
    policy: &'static str,
}

const EN: PromptTemplate = PromptTemplate {
    header: "\
You are a Gift Recommendation System as described in the project documentation.
Your role: Analyst. Your goal is to find the perfect gift for the recipient.",
    profile_intro: "You have access to the following information about the user:",
    already_known: "\
IMPORTANT: The user information above is already known. DO NOT ask about details \
that are already provided (such as interests, budget range, preferences, etc.). ",
    policy: "\
How you work:
1. Don't provide a list immediately. First ask 2-3 key questions about information NOT already provided (such as: For whom is the gift? What occasion? Any specific requirements?).
2. After receiving answers, analyze them along with the user profile and suggest 3 specific gifts with brief justification.
3. Be polite, concise, and professional.
4. Use the user's known preferences and interests to make personalized recommendations.",
};

const PL: PromptTemplate = PromptTemplate {
    header: "\
Jesteś Systemem Rekomendacji Prezentów opisanym w dokumentacji projektowej.
Twoja rola: Analityk. Twoim celem jest znalezienie idealnego prezentu dla Odbiorcy.",
    profile_intro: "Masz dostęp do następujących informacji o użytkowniku:",
    already_known: "\
WAŻNE: Powyższe informacje o użytkowniku są już znane. NIE pytaj o szczegóły, \
które zostały już podane (takie jak zainteresowania, budżet, preferencje itp.). ",
    policy: "\
Zasada działania:
1. Nie podawaj listy od razu. Najpierw zadaj 2-3 kluczowe pytania o informacje, których jeszcze nie podano (np. Dla kogo? Jaka okazja? Jakie szczególne wymagania?).
2. Po uzyskaniu odpowiedzi przeanalizuj je razem z profilem użytkownika i zaproponuj 3 konkretne prezenty z krótkim uzasadnieniem.
3. Bądź uprzejmy, zwięzły i profesjonalny.
4. Wykorzystuj znane preferencje i zainteresowania użytkownika, aby personalizować rekomendacje.",
};

fn template(locale: PromptLocale) -> &'static PromptTemplate {
    match locale {
        PromptLocale::En => &EN,
        PromptLocale::Pl => &PL,
    }
}

/// The fixed four-point behavioral policy for `locale`.
pub fn behavioral_policy(locale: PromptLocale) -> &'static str {
    template(locale).policy
}

/// Build the system prompt for `profile`. Pure and deterministic.
pub fn build_system_prompt(profile: &Profile, locale: PromptLocale) -> String {
    let t = template(locale);
    let mut prompt = String::from(t.header);

    if !profile.is_empty() {
        prompt.push_str("\n\n");
        prompt.push_str(t.profile_intro);
        prompt.push_str("\n\n");
        prompt.push_str(profile.as_str());
        prompt.push_str("\n\n");
        prompt.push_str(t.already_known);
    }

    prompt.push('\n');
    prompt.push_str(t.policy);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCALES: [PromptLocale; 2] = [PromptLocale::En, PromptLocale::Pl];

    #[test]
    fn policy_is_always_present_verbatim() {
        for locale in LOCALES {
            for profile in ["", "Likes hiking, budget $50", "multi\nline\nprofile"] {
                let prompt = build_system_prompt(&Profile::new(profile), locale);
                assert!(prompt.contains(behavioral_policy(locale)));
                assert!(prompt.ends_with(behavioral_policy(locale)));
            }
        }
    }

    #[test]
    fn empty_profile_omits_profile_section() {
        let prompt = build_system_prompt(&Profile::empty(), PromptLocale::En);
        assert!(prompt.starts_with("You are a Gift Recommendation System"));
        assert!(!prompt.contains(EN.profile_intro));
        assert!(!prompt.contains("IMPORTANT"));
        assert_eq!(prompt, format!("{}\n{}", EN.header, EN.policy));
    }

    #[test]
    fn profile_is_embedded_once_with_already_known_rule() {
        let profile = Profile::new("Likes hiking, budget $50");
        let prompt = build_system_prompt(&profile, PromptLocale::En);

        assert_eq!(prompt.matches("Likes hiking, budget $50").count(), 1);
        assert!(prompt.contains("DO NOT ask about details that are already provided"));

        let profile_at = prompt.find("Likes hiking").unwrap();
        let rule_at = prompt.find("IMPORTANT").unwrap();
        let policy_at = prompt.find("How you work:").unwrap();
        assert!(profile_at < rule_at && rule_at < policy_at);
    }

    #[test]
    fn polish_locale_uses_polish_template() {
        let prompt = build_system_prompt(&Profile::new("Lubi góry"), PromptLocale::Pl);
        assert!(prompt.starts_with("Jesteś Systemem Rekomendacji Prezentów"));
        assert!(prompt.contains("Lubi góry"));
        assert!(prompt.contains("WAŻNE"));
        assert!(!prompt.contains("How you work:"));
    }

    #[test]
    fn build_is_deterministic() {
        let profile = Profile::new("Budget: $30");
        assert_eq!(
            build_system_prompt(&profile, PromptLocale::En),
            build_system_prompt(&profile, PromptLocale::En)
        );
    }
}
