use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Language of the system prompt and of the fixed messages shown in the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PromptLocale {
    #[default]
    En,
    Pl,
}

impl PromptLocale {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptLocale::En => "en",
            PromptLocale::Pl => "pl",
        }
    }

    /// Substituted when the provider answers without any reply content.
    pub fn fallback_reply(&self) -> &'static str {
        match self {
            PromptLocale::En => "Sorry, I cannot respond right now.",
            PromptLocale::Pl => "Przepraszam, nie mogę teraz odpowiedzieć.",
        }
    }

    /// Shown as the assistant turn when a relay call fails.
    pub fn network_error(&self) -> &'static str {
        match self {
            PromptLocale::En => "Sorry, a network error occurred.",
            PromptLocale::Pl => "Przepraszam, wystąpił błąd sieci.",
        }
    }

    /// Shown as the first assistant turn when the opening exchange fails.
    pub fn init_error(&self) -> &'static str {
        match self {
            PromptLocale::En => "Sorry, a connection error occurred during initialization.",
            PromptLocale::Pl => "Przepraszam, wystąpił błąd połączenia podczas inicjalizacji.",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PromptLocale::En => "Gift Recommendations",
            PromptLocale::Pl => "System Rekomendacji",
        }
    }

    pub fn input_hint(&self) -> &'static str {
        match self {
            PromptLocale::En => "Describe who you're looking for a gift for...",
            PromptLocale::Pl => "Opisz dla kogo szukasz prezentu...",
        }
    }
}

impl FromStr for PromptLocale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(PromptLocale::En),
            "pl" | "polish" | "polski" => Ok(PromptLocale::Pl),
            other => Err(DomainError::invalid_input(format!(
                "unsupported locale '{other}' (expected 'en' or 'pl')"
            ))),
        }
    }
}

impl std::fmt::Display for PromptLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
