//! Study cards shown on the student dashboard.

use serde::{Deserialize, Serialize};

/// One study resource on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCard {
    pub title: String,
    /// Premium cards are shown locked until the student upgrades.
    pub premium: bool,
}

impl ContentCard {
    pub fn free(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            premium: false,
        }
    }

    pub fn premium(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            premium: true,
        }
    }
}

/// The ordered set of cards the dashboard displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    cards: Vec<ContentCard>,
}

impl Catalog {
    pub fn new(cards: Vec<ContentCard>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[ContentCard] {
        &self.cards
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            ContentCard::free("Algebra Fundamentals"),
            ContentCard::free("Essay Writing Basics"),
            ContentCard::free("Introduction to Biology"),
            ContentCard::premium("Calculus Past Papers"),
            ContentCard::premium("Chemistry Lab Walkthroughs"),
            ContentCard::premium("Exam Strategy Masterclass"),
        ])
    }
}
