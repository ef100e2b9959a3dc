//! Login Identifier
//!
//! A single login field accepts either an email or a nickname. Nicknames
//! can never contain `@`, so its presence decides which one was meant.

/// Disambiguated login string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginIdentifier {
    Email(String),
    Nickname(String),
}

impl LoginIdentifier {
    pub fn parse(raw: &str) -> Self {
        if raw.contains('@') {
            LoginIdentifier::Email(raw.to_owned())
        } else {
            LoginIdentifier::Nickname(raw.to_owned())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LoginIdentifier::Email(value) | LoginIdentifier::Nickname(value) => value,
        }
    }

    /// Which column the identifier targets, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            LoginIdentifier::Email(_) => "email",
            LoginIdentifier::Nickname(_) => "nickname",
        }
    }
}
