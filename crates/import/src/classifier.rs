use gastos_core::taxonomy::{
    CategoryGroup, FALLBACK_EXPENSE_CATEGORY, FALLBACK_INCOME_CATEGORY, INCOME_HINTS, TAXONOMY,
};
use gastos_core::TransactionType;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: &'static str,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// Keyword scorer over a fixed, ordered set of category groups.
pub struct Classifier {
    groups: &'static [CategoryGroup],
    income_hints: &'static [&'static str],
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(TAXONOMY, INCOME_HINTS)
    }
}

impl Classifier {
    pub fn new(groups: &'static [CategoryGroup], income_hints: &'static [&'static str]) -> Self {
        Self { groups, income_hints }
    }

    /// Labels a description. A keyword hit always decides; `amount` only
    /// matters when nothing in the taxonomy matches.
    pub fn classify(&self, description: &str, amount: Option<Decimal>) -> Classification {
        let text = description.to_lowercase();

        if let Some(group) = self.best_group(&text) {
            return Classification {
                category: group.category,
                kind: group.kind,
            };
        }

        let hinted_income = self.income_hints.iter().any(|hint| text.contains(hint));
        let positive = amount.is_some_and(|a| a > Decimal::ZERO);
        if hinted_income || positive {
            Classification {
                category: FALLBACK_INCOME_CATEGORY,
                kind: TransactionType::Income,
            }
        } else {
            Classification {
                category: FALLBACK_EXPENSE_CATEGORY,
                kind: TransactionType::Expense,
            }
        }
    }

    /// Longest matching term wins; ties go to whichever was seen first.
    fn best_group(&self, text: &str) -> Option<&'static CategoryGroup> {
        let mut best: Option<(&'static CategoryGroup, usize)> = None;
        for group in self.groups {
            for term in group.terms {
                if !text.contains(term) {
                    continue;
                }
                let score = term.chars().count();
                if best.map_or(true, |(_, top)| score > top) {
                    best = Some((group, score));
                }
            }
        }
        best.map(|(group, _)| group)
    }
}

pub fn classify(description: &str, amount: Option<Decimal>) -> Classification {
    Classifier::default().classify(description, amount)
}
