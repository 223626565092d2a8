//! Beneficiary contact extraction: representative name, phone, email.

use serde::{Deserialize, Serialize};

use super::patterns::{EMAIL, PHONE, REPRESENTED_BY};
use super::{extract_first, FieldExtractor};

/// Which whitespace token of a name comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameOrder {
    /// "DUPONT Jean Pierre" -> surname DUPONT, given name "Jean Pierre".
    SurnameFirst,
    /// "Jean Pierre DUPONT" -> given name Jean, surname "Pierre DUPONT".
    GivenNameFirst,
}

/// One way of splitting name tokens. A strategy that does not apply to the
/// tokens returns `None` and the next one is tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NameStrategy {
    /// Applies when exactly one token is written in capitals and there are
    /// at least two tokens; that token is the surname.
    UppercaseSurname,
    /// Always applies: the first token is one part, the rest the other.
    Positional { order: NameOrder },
}

impl NameStrategy {
    fn apply(&self, tokens: &[&str]) -> Option<PersonName> {
        match self {
            Self::UppercaseSurname => {
                if tokens.len() < 2 {
                    return None;
                }
                let mut upper = tokens.iter().enumerate().filter(|(_, t)| is_uppercase_word(t));
                let (idx, surname) = upper.next()?;
                if upper.next().is_some() {
                    return None;
                }
                let given: Vec<&str> = tokens
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != idx)
                    .map(|(_, t)| *t)
                    .collect();
                Some(PersonName {
                    surname: (*surname).to_string(),
                    given_name: given.join(" "),
                })
            }
            Self::Positional { order } => Some(positional(tokens, *order)),
        }
    }
}

fn positional(tokens: &[&str], order: NameOrder) -> PersonName {
    match tokens {
        [] => PersonName::default(),
        // A lone token is kept as the surname whatever the order.
        [only] => PersonName {
            surname: (*only).to_string(),
            given_name: String::new(),
        },
        [first, rest @ ..] => {
            let first = (*first).to_string();
            let rest = rest.join(" ");
            match order {
                NameOrder::SurnameFirst => PersonName {
                    surname: first,
                    given_name: rest,
                },
                NameOrder::GivenNameFirst => PersonName {
                    surname: rest,
                    given_name: first,
                },
            }
        }
    }
}

fn is_uppercase_word(token: &str) -> bool {
    token.chars().any(char::is_alphabetic)
        && token
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

/// Policy for splitting the "Représenté par" value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameSplitPolicy {
    /// Drop everything from the first comma (usually a job title).
    pub truncate_at_comma: bool,

    /// Strategies tried in order.
    pub strategies: Vec<NameStrategy>,
}

impl Default for NameSplitPolicy {
    fn default() -> Self {
        Self {
            truncate_at_comma: true,
            strategies: vec![NameStrategy::Positional {
                order: NameOrder::SurnameFirst,
            }],
        }
    }
}

impl NameSplitPolicy {
    /// Positional split with the given order.
    pub fn positional(order: NameOrder) -> Self {
        Self {
            strategies: vec![NameStrategy::Positional { order }],
            ..Self::default()
        }
    }
}

/// A person's name split into parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonName {
    pub surname: String,
    pub given_name: String,
}

/// Split a representative's name according to `policy`.
///
/// When no strategy applies the first token becomes the surname.
pub fn split_name(raw: &str, policy: &NameSplitPolicy) -> PersonName {
    let name = if policy.truncate_at_comma {
        raw.split(',').next().unwrap_or_default()
    } else {
        raw
    };
    let tokens: Vec<&str> = name.split_whitespace().collect();

    policy
        .strategies
        .iter()
        .find_map(|s| s.apply(&tokens))
        .unwrap_or_else(|| positional(&tokens, NameOrder::SurnameFirst))
}

/// Extractor for "Représenté par : <name>".
pub struct RepresentativeExtractor {
    policy: NameSplitPolicy,
}

impl RepresentativeExtractor {
    pub fn new(policy: NameSplitPolicy) -> Self {
        Self { policy }
    }
}

impl Default for RepresentativeExtractor {
    fn default() -> Self {
        Self::new(NameSplitPolicy::default())
    }
}

impl FieldExtractor for RepresentativeExtractor {
    type Output = PersonName;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        extract_first(&REPRESENTED_BY, text).map(|raw| split_name(raw, &self.policy))
    }
}

/// Extractor for "Mail : <address>", with "néant"-style values cleared.
pub struct EmailExtractor {
    none_tokens: Vec<String>,
}

impl EmailExtractor {
    pub fn new(none_tokens: Vec<String>) -> Self {
        Self { none_tokens }
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new(vec!["néant".to_string(), "none".to_string()])
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        extract_first(&EMAIL, text).map(|raw| normalize_email(raw, &self.none_tokens))
    }
}

/// Trim an email value; values starting with a "none" token become empty.
pub fn normalize_email(raw: &str, none_tokens: &[String]) -> String {
    let value = raw.trim();
    let lower = value.to_lowercase();
    if none_tokens
        .iter()
        .filter(|token| !token.is_empty())
        .any(|token| lower.starts_with(&token.to_lowercase()))
    {
        String::new()
    } else {
        value.to_string()
    }
}

/// Extract the "Tél : <number>" value.
pub fn extract_phone(text: &str) -> Option<&str> {
    extract_first(&PHONE, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn name(surname: &str, given_name: &str) -> PersonName {
        PersonName {
            surname: surname.to_string(),
            given_name: given_name.to_string(),
        }
    }

    #[test]
    fn test_split_surname_first() {
        let policy = NameSplitPolicy::default();
        assert_eq!(split_name("DUPONT Jean Pierre", &policy), name("DUPONT", "Jean Pierre"));
        assert_eq!(split_name("DUPONT Jean, Gérant", &policy), name("DUPONT", "Jean"));
        assert_eq!(split_name("DUPONT", &policy), name("DUPONT", ""));
        assert_eq!(split_name("  ", &policy), name("", ""));
    }

    #[test]
    fn test_split_given_name_first() {
        let policy = NameSplitPolicy::positional(NameOrder::GivenNameFirst);
        assert_eq!(split_name("Jean DUPONT", &policy), name("DUPONT", "Jean"));
        assert_eq!(split_name("Jean Pierre DUPONT", &policy), name("Pierre DUPONT", "Jean"));
    }

    #[test]
    fn test_split_without_comma_truncation() {
        let policy = NameSplitPolicy {
            truncate_at_comma: false,
            ..NameSplitPolicy::default()
        };
        assert_eq!(split_name("DUPONT Jean, Gérant", &policy), name("DUPONT", "Jean, Gérant"));
    }

    #[test]
    fn test_uppercase_surname_strategy() {
        let policy = NameSplitPolicy {
            truncate_at_comma: true,
            strategies: vec![
                NameStrategy::UppercaseSurname,
                NameStrategy::Positional {
                    order: NameOrder::GivenNameFirst,
                },
            ],
        };

        assert_eq!(split_name("Jean DUPONT", &policy), name("DUPONT", "Jean"));
        assert_eq!(split_name("DUPONT Jean", &policy), name("DUPONT", "Jean"));
        // Two capitalized tokens: falls through to the positional rule.
        assert_eq!(split_name("JEAN DUPONT", &policy), name("DUPONT", "JEAN"));
    }

    #[test]
    fn test_empty_strategy_list_falls_back() {
        let policy = NameSplitPolicy {
            truncate_at_comma: true,
            strategies: Vec::new(),
        };
        assert_eq!(split_name("DUPONT Jean", &policy), name("DUPONT", "Jean"));
    }

    #[test]
    fn test_policy_serde() {
        let json = r#"{"strategies":[{"kind":"uppercase_surname"},{"kind":"positional","order":"given_name_first"}]}"#;
        let policy: NameSplitPolicy = serde_json::from_str(json).unwrap();
        assert!(policy.truncate_at_comma);
        assert_eq!(policy.strategies.len(), 2);
        assert_eq!(
            policy.strategies[1],
            NameStrategy::Positional {
                order: NameOrder::GivenNameFirst
            }
        );
    }

    #[test]
    fn test_representative_extractor() {
        let text = "Représenté par : MARTIN Sophie, Directrice\nTél : 0262 00 00 00";
        let person = RepresentativeExtractor::default().extract(text).unwrap();
        assert_eq!(person, name("MARTIN", "Sophie"));
    }

    #[test]
    fn test_normalize_email() {
        let tokens = vec!["néant".to_string(), "none".to_string()];
        assert_eq!(normalize_email("Néant", &tokens), "");
        assert_eq!(normalize_email("NÉANT (pas de mail)", &tokens), "");
        assert_eq!(normalize_email("None", &tokens), "");
        assert_eq!(normalize_email("  contact@acme.fr ", &tokens), "contact@acme.fr");
    }

    #[test]
    fn test_empty_none_token_is_ignored() {
        let tokens = vec![String::new(), "néant".to_string()];
        assert_eq!(normalize_email("contact@acme.fr", &tokens), "contact@acme.fr");
        assert_eq!(normalize_email("néant", &tokens), "");
    }

    #[test]
    fn test_email_and_phone() {
        let text = "Tél : 0262 12 34 56\nMail : néant";
        assert_eq!(extract_phone(text), Some("0262 12 34 56"));
        assert_eq!(EmailExtractor::default().extract(text), Some(String::new()));
    }
}
