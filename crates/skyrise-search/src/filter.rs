//! Applies a parsed query to a client collection.
//!
//! Blank queries are the identity. Queries with no recognized tokens
//! fall back to plain OR-substring search across the record's text
//! fields. Otherwise criteria combine with AND; absent criteria are
//! vacuously satisfied. Output preserves input order and is never
//! deduplicated (records are unique by id at the source).

use anyhow::Result;

use skyrise_core::traits::ClientSearch;
use skyrise_core::types::ClientRecord;

use crate::budget::BudgetParser;
use crate::lexicon;
use crate::parse::{ParsedQuery, QueryParser};

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Apply a range query's upper bound as a ceiling on the record's
    /// minimum budget. Off by default: the stock semantics use the
    /// lower bound as a floor and nothing else.
    pub strict_budget_range: bool,
}

pub struct SearchEngine {
    parser: QueryParser,
    budget: BudgetParser,
    options: SearchOptions,
}

impl SearchEngine {
    pub fn new() -> Result<Self> {
        Self::with_options(SearchOptions::default())
    }

    pub fn with_options(options: SearchOptions) -> Result<Self> {
        Ok(Self {
            parser: QueryParser::new()?,
            budget: BudgetParser::new()?,
            options,
        })
    }

    pub fn parser(&self) -> &QueryParser {
        &self.parser
    }

    pub fn filter(&self, records: &[ClientRecord], query: &str) -> Vec<ClientRecord> {
        if query.trim().is_empty() {
            return records.to_vec();
        }

        let parsed = self.parser.parse(query);

        if parsed.chips.is_empty() {
            tracing::debug!(query = %query, "no structured tokens, using text search");
            let q = query.to_lowercase();
            return records
                .iter()
                .filter(|record| matches_text(record, &q))
                .cloned()
                .collect();
        }

        records
            .iter()
            .filter(|record| self.matches_structured(record, &parsed))
            .cloned()
            .collect()
    }

    fn matches_structured(&self, record: &ClientRecord, parsed: &ParsedQuery) -> bool {
        if let Some(nationality) = &parsed.nationality {
            if record.nationality != *nationality {
                return false;
            }
        }
        if let Some(min_budget) = parsed.min_budget {
            // The record's budget CEILING must reach the query's floor:
            // a client whose range tops out above the floor can afford
            // the ask.
            if self.budget.max_value(&record.budget) < min_budget {
                return false;
            }
        }
        if self.options.strict_budget_range {
            if let Some(max_budget) = parsed.max_budget {
                if self.budget.single_value(&record.budget) > max_budget {
                    return false;
                }
            }
        }
        if let Some(status) = parsed.status {
            if record.status != status {
                return false;
            }
        }
        if let Some(qualification) = parsed.qualification {
            if record.qualification != qualification {
                return false;
            }
        }
        if !parsed.keywords.is_empty() {
            let pref_and_tags =
                format!("{} {}", record.preference, record.tags.join(" ")).to_lowercase();

            // Property type: the keyword or its display label must
            // appear in the preference or tags.
            for (key, label) in lexicon::PROPERTY_TYPES {
                if parsed.keywords.iter().any(|k| k == key)
                    && !pref_and_tags.contains(key)
                    && !pref_and_tags.contains(&label.to_lowercase())
                {
                    return false;
                }
            }

            // Buyer profile: some tag must contain the canonical label.
            for (key, label) in lexicon::BUYER_PROFILES {
                if parsed.keywords.iter().any(|k| k == key) {
                    let label_lower = label.to_lowercase();
                    if !record.tags.iter().any(|t| t.to_lowercase().contains(&label_lower)) {
                        return false;
                    }
                }
            }

            // Remaining keywords are locations: OR among themselves,
            // AND against everything above. The haystack adds matched
            // property names and addresses.
            let location_keywords: Vec<&str> = parsed
                .keywords
                .iter()
                .map(String::as_str)
                .filter(|k| !lexicon::is_property_type(k) && !lexicon::is_buyer_profile(k))
                .collect();
            if !location_keywords.is_empty() {
                let haystack = client_text(record);
                if !location_keywords.iter().any(|k| haystack.contains(k)) {
                    return false;
                }
            }
        }
        true
    }
}

impl ClientSearch for SearchEngine {
    fn search(&self, records: &[ClientRecord], query: &str) -> Vec<ClientRecord> {
        self.filter(records, query)
    }
}

/// OR-substring fallback across name, nationality, budget, preference,
/// and tags.
fn matches_text(record: &ClientRecord, q: &str) -> bool {
    record.name.to_lowercase().contains(q)
        || record.nationality.to_lowercase().contains(q)
        || record.budget.to_lowercase().contains(q)
        || record.preference.to_lowercase().contains(q)
        || record.tags.iter().any(|t| t.to_lowercase().contains(q))
}

/// Combined haystack for location keywords: preference, tags, and each
/// matched property's address and name.
fn client_text(record: &ClientRecord) -> String {
    let properties = record
        .properties
        .iter()
        .map(|p| format!("{} {}", p.address, p.name))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} {} {}", record.preference, record.tags.join(" "), properties).to_lowercase()
}
