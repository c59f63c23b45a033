//! Free-text query parsing.
//!
//! Turns an arbitrary search string into a structured filter
//! descriptor plus display chips echoing what was recognized. Matching
//! is case-insensitive substring containment against the lexicon
//! tables, first match wins per single-winner category. Parsing never
//! fails; unrecognized input simply yields an empty descriptor.

use anyhow::Result;
use regex::Regex;
use serde::Serialize;

use skyrise_core::types::{ClientStatus, Qualification};

use crate::lexicon;

/// One recognized query token, echoed back for UI display.
///
/// `color` is a palette token ("blue", "emerald", ...); the UI owns the
/// mapping to concrete styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub label: &'static str,
    pub value: String,
    pub color: &'static str,
}

/// Structured filter descriptor produced from one search string.
///
/// Chips appear in fixed category order (nationality, budget, status,
/// qualification, location(s), property type, buyer profile) no matter
/// where the tokens sat in the input. Consumers rely on that order for
/// display. An empty `chips` list is the signal that nothing was
/// recognized and plain text search should be used instead.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedQuery {
    pub nationality: Option<String>,
    /// Budget floor in absolute currency units. A range query collapses
    /// to its lower bound; see `max_budget`.
    pub min_budget: Option<f64>,
    /// Upper bound of a range query. Captured for the optional
    /// strict-range mode; the default filter ignores it.
    pub max_budget: Option<f64>,
    pub status: Option<ClientStatus>,
    pub qualification: Option<Qualification>,
    pub keywords: Vec<String>,
    pub chips: Vec<Chip>,
}

pub struct QueryParser {
    budget_above: Regex,
    budget_range: Regex,
    budget_k: Regex,
}

impl QueryParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            budget_above: Regex::new(
                r"(?i)(?:above|over|>|more than|min(?:imum)?)\s*\$?\s*(\d+(?:\.\d+)?)\s*m",
            )?,
            budget_range: Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*[-–to]+\s*(\d+(?:\.\d+)?)\s*m")?,
            budget_k: Regex::new(r"(?i)(?:above|over|>)\s*\$?\s*(\d+)\s*k")?,
        })
    }

    pub fn parse(&self, raw: &str) -> ParsedQuery {
        let lowered = raw.to_lowercase();
        let q = lowered.trim();
        let mut parsed = ParsedQuery::default();

        for (key, canonical) in lexicon::NATIONALITIES {
            if q.contains(key) {
                parsed.nationality = Some((*canonical).to_string());
                parsed.chips.push(Chip {
                    label: "Nationality",
                    value: (*canonical).to_string(),
                    color: "blue",
                });
                break;
            }
        }

        // Budget shapes in precedence order: "above N m", "N-M m" /
        // "N to M m", "above N k". Only the first matching shape is
        // used. A range sets the floor at its LOWER bound; the upper
        // bound is captured but not applied unless strict mode is on.
        if let Some(caps) = self.budget_above.captures(q) {
            let amount = &caps[1];
            parsed.min_budget = Some(float_of(amount) * 1_000_000.0);
            parsed.chips.push(Chip {
                label: "Budget",
                value: format!("> ${amount}M"),
                color: "emerald",
            });
        } else if let Some(caps) = self.budget_range.captures(q) {
            let (low, high) = (&caps[1], &caps[2]);
            parsed.min_budget = Some(float_of(low) * 1_000_000.0);
            parsed.max_budget = Some(float_of(high) * 1_000_000.0);
            parsed.chips.push(Chip {
                label: "Budget",
                value: format!("${low}-{high}M"),
                color: "emerald",
            });
        } else if let Some(caps) = self.budget_k.captures(q) {
            let amount = &caps[1];
            parsed.min_budget = Some(float_of(amount) * 1_000.0);
            parsed.chips.push(Chip {
                label: "Budget",
                value: format!("> ${amount}K"),
                color: "emerald",
            });
        }

        for (key, status) in lexicon::STATUSES {
            if q.contains(key) {
                parsed.status = Some(*status);
                parsed.chips.push(Chip {
                    label: "Status",
                    value: status.to_string(),
                    color: "amber",
                });
                break;
            }
        }

        for (key, qualification) in lexicon::QUALIFICATIONS {
            if q.contains(key) {
                parsed.qualification = Some(*qualification);
                parsed.chips.push(Chip {
                    label: "Qualification",
                    value: qualification.to_string(),
                    color: "purple",
                });
                break;
            }
        }

        // Locations accumulate: every table entry present in the query
        // adds a keyword and a chip.
        for location in lexicon::LOCATIONS {
            if q.contains(location) {
                parsed.keywords.push((*location).to_string());
                parsed.chips.push(Chip {
                    label: "Location",
                    value: capitalize(location),
                    color: "orange",
                });
            }
        }

        for (key, label) in lexicon::PROPERTY_TYPES {
            if q.contains(key) {
                parsed.keywords.push((*key).to_string());
                parsed.chips.push(Chip {
                    label: "Type",
                    value: (*label).to_string(),
                    color: "purple",
                });
                break;
            }
        }

        for (key, label) in lexicon::BUYER_PROFILES {
            if q.contains(key) {
                parsed.keywords.push((*key).to_string());
                parsed.chips.push(Chip {
                    label: "Profile",
                    value: (*label).to_string(),
                    color: "indigo",
                });
                break;
            }
        }

        tracing::debug!(query = %raw, chips = parsed.chips.len(), "query parsed");
        parsed
    }
}

/// The budget regexes only capture `\d+(\.\d+)?`, so this cannot fail
/// in practice; the fallback keeps the parser errorless regardless.
fn float_of(capture: &str) -> f64 {
    capture.parse().unwrap_or(0.0)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
