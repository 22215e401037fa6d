//! The signed-in customer's profile.
//!
//! There is no backend: the application always shows the same demo record.

use serde::{Deserialize, Serialize};

/// Masked card number and expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    pub number: String,
    pub expiry: String,
}

/// An entry in the home screen's quick-transfer strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickContact {
    pub name: String,
    pub initial: String,
    /// Avatar background, as a style class name.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub account_id: String,
    pub iban: String,
    pub fiat_card: CardInfo,
    pub crypto_card: CardInfo,
    pub quick_contacts: Vec<QuickContact>,
}

impl UserProfile {
    pub fn demo() -> Self {
        let contact = |name: &str, initial: &str, color: &str| QuickContact {
            name: name.into(),
            initial: initial.into(),
            color: color.into(),
        };

        Self {
            name: "عمر أحمد".into(),
            account_id: "SHAM-USER-12345".into(),
            iban: "SY24 0987 0000 1234 5678 9012 34".into(),
            fiat_card: CardInfo {
                number: "**** **** **** 4829".into(),
                expiry: "12/28".into(),
            },
            crypto_card: CardInfo {
                number: "**** **** **** 9317".into(),
                expiry: "08/29".into(),
            },
            quick_contacts: vec![
                contact("أحمد", "أ", "bg-blue-500"),
                contact("سارة", "س", "bg-pink-500"),
                contact("محمد", "م", "bg-green-500"),
                contact("فاطمة", "ف", "bg-purple-500"),
                contact("يوسف", "ي", "bg-orange-500"),
            ],
        }
    }

    /// First word of the full name.
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or(&self.name)
    }

    /// Home screen greeting line.
    pub fn welcome_message(&self) -> String {
        format!("مرحباً بك، {}", self.first_name())
    }

    /// Name as embossed on the cards.
    pub fn card_holder_name(&self) -> String {
        self.name.to_uppercase()
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::demo()
    }
}
