//! Business rules applied to a book submission before it is stored.
//!
//! Rules run on a [`BookDraft`] of raw primitive values. Every rule is
//! evaluated, and each failure produces one [`ValidationFinding`] in rule
//! declaration order. Only a draft with no findings turns into a
//! [`NewBook`].

use serde::Serialize;

use crate::domain::entities::NewBook;

/// Exact number of characters an ISBN must have.
pub const ISBN_LENGTH: usize = 13;

/// Identifies a single validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    AvailableCopies,
    PageCount,
    PublicationYear,
    Isbn,
}

impl ValidationRule {
    /// All rules in evaluation order.
    pub const ALL: [ValidationRule; 4] = [
        ValidationRule::AvailableCopies,
        ValidationRule::PageCount,
        ValidationRule::PublicationYear,
        ValidationRule::Isbn,
    ];

    /// User-facing message reported when the rule fails.
    pub fn message(self) -> &'static str {
        match self {
            ValidationRule::AvailableCopies => "copies must be a whole number greater than 0.",
            ValidationRule::PageCount => "page count must be a whole number greater than 0.",
            ValidationRule::PublicationYear => {
                "publication year must be a whole number and less than or equal to the current year."
            }
            ValidationRule::Isbn => "ISBN must have 13 digits.",
        }
    }

    fn is_violated_by(self, draft: &BookDraft, current_year: i32) -> bool {
        match self {
            ValidationRule::AvailableCopies => draft.available_copies <= 0,
            ValidationRule::PageCount => draft.page_count <= 0,
            ValidationRule::PublicationYear => draft.publication_year > current_year,
            // Length only: any 13-character string passes.
            ValidationRule::Isbn => draft.isbn.chars().count() != ISBN_LENGTH,
        }
    }
}

/// One failed rule with its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFinding {
    pub rule: ValidationRule,
    pub message: String,
}

impl From<ValidationRule> for ValidationFinding {
    fn from(rule: ValidationRule) -> Self {
        Self {
            rule,
            message: rule.message().to_string(),
        }
    }
}

/// Submitted book fields that have not been validated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub page_count: i32,
    pub available_copies: i32,
}

impl BookDraft {
    /// Evaluates every rule and returns the failures in rule order.
    pub fn findings(&self, current_year: i32) -> Vec<ValidationFinding> {
        ValidationRule::ALL
            .into_iter()
            .filter(|rule| rule.is_violated_by(self, current_year))
            .map(ValidationFinding::from)
            .collect()
    }

    /// Turns the draft into a [`NewBook`] if no rule fails.
    ///
    /// # Errors
    ///
    /// Returns all findings when at least one rule fails.
    pub fn validate(self, current_year: i32) -> Result<NewBook, Vec<ValidationFinding>> {
        let findings = self.findings(current_year);
        if !findings.is_empty() {
            return Err(findings);
        }

        Ok(NewBook {
            isbn: self.isbn,
            title: self.title,
            author: self.author,
            publication_year: self.publication_year,
            page_count: self.page_count,
            available_copies: self.available_copies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2024;

    fn valid_draft() -> BookDraft {
        BookDraft {
            isbn: "9781593278281".to_string(),
            title: "The Rust Programming Language".to_string(),
            author: "Steve Klabnik".to_string(),
            publication_year: 2018,
            page_count: 552,
            available_copies: 2,
        }
    }

    fn rules(findings: &[ValidationFinding]) -> Vec<ValidationRule> {
        findings.iter().map(|f| f.rule).collect()
    }

    #[test]
    fn test_valid_draft_has_no_findings() {
        assert!(valid_draft().findings(YEAR).is_empty());
        assert!(valid_draft().validate(YEAR).is_ok());
    }

    #[test]
    fn test_validate_keeps_fields() {
        let new_book = valid_draft().validate(YEAR).unwrap();
        assert_eq!(new_book.isbn, "9781593278281");
        assert_eq!(new_book.title, "The Rust Programming Language");
        assert_eq!(new_book.publication_year, 2018);
        assert_eq!(new_book.page_count, 552);
        assert_eq!(new_book.available_copies, 2);
    }

    #[test]
    fn test_each_rule_reported_alone() {
        let mut draft = valid_draft();
        draft.available_copies = 0;
        assert_eq!(
            rules(&draft.findings(YEAR)),
            vec![ValidationRule::AvailableCopies]
        );

        let mut draft = valid_draft();
        draft.page_count = -3;
        assert_eq!(rules(&draft.findings(YEAR)), vec![ValidationRule::PageCount]);

        let mut draft = valid_draft();
        draft.publication_year = YEAR + 1;
        assert_eq!(
            rules(&draft.findings(YEAR)),
            vec![ValidationRule::PublicationYear]
        );

        let mut draft = valid_draft();
        draft.isbn = "123".to_string();
        assert_eq!(rules(&draft.findings(YEAR)), vec![ValidationRule::Isbn]);
    }

    #[test]
    fn test_all_rules_reported_in_order() {
        let draft = BookDraft {
            isbn: "short".to_string(),
            title: String::new(),
            author: String::new(),
            publication_year: YEAR + 10,
            page_count: 0,
            available_copies: -1,
        };

        let findings = draft.clone().validate(YEAR).unwrap_err();
        assert_eq!(rules(&findings), ValidationRule::ALL.to_vec());
        assert_eq!(
            findings[0].message,
            "copies must be a whole number greater than 0."
        );
        assert_eq!(findings[3].message, "ISBN must have 13 digits.");
    }

    #[test]
    fn test_year_boundary() {
        let mut draft = valid_draft();
        draft.publication_year = YEAR;
        assert!(draft.findings(YEAR).is_empty());

        draft.publication_year = YEAR + 1;
        assert_eq!(draft.findings(YEAR).len(), 1);
    }

    #[test]
    fn test_count_boundaries() {
        let mut draft = valid_draft();
        draft.page_count = 1;
        draft.available_copies = 1;
        assert!(draft.findings(YEAR).is_empty());

        draft.page_count = 0;
        draft.available_copies = 0;
        assert_eq!(
            rules(&draft.findings(YEAR)),
            vec![ValidationRule::AvailableCopies, ValidationRule::PageCount]
        );
    }

    #[test]
    fn test_isbn_is_a_length_check_only() {
        let mut draft = valid_draft();

        draft.isbn = "123456789012".to_string();
        assert_eq!(rules(&draft.findings(YEAR)), vec![ValidationRule::Isbn]);

        draft.isbn = "12345678901234".to_string();
        assert_eq!(rules(&draft.findings(YEAR)), vec![ValidationRule::Isbn]);

        draft.isbn = "abcdefghijklm".to_string();
        assert!(draft.findings(YEAR).is_empty());

        draft.isbn = "978-3-16-1484".to_string();
        assert!(draft.findings(YEAR).is_empty());
    }

    #[test]
    fn test_isbn_counts_characters_not_bytes() {
        let mut draft = valid_draft();
        draft.isbn = "ñññññññññññññ".to_string();
        assert!(draft.findings(YEAR).is_empty());
    }

    #[test]
    fn test_finding_serializes_rule_as_snake_case() {
        let finding = ValidationFinding::from(ValidationRule::PublicationYear);
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["rule"], "publication_year");
    }
}
