//! Fixed lookup tables for the query parser.
//!
//! Declaration order is match order: single-winner categories take the
//! first entry whose key is a substring of the query, so overlapping
//! keys ("us" before "usa") resolve by position, not longest match.

use skyrise_core::types::{ClientStatus, Qualification};

/// Demonym variants to canonical nationality.
pub const NATIONALITIES: &[(&str, &str)] = &[
    ("lebanese", "Lebanese"),
    ("saudi", "Saudi"),
    ("emirati", "Emirati"),
    ("uae", "Emirati"),
    ("kuwaiti", "Kuwaiti"),
    ("french", "French"),
    ("american", "American"),
    ("us", "American"),
    ("usa", "American"),
    ("british", "British"),
    ("uk", "British"),
];

/// Property type keyword to display label. Single winner per query.
pub const PROPERTY_TYPES: &[(&str, &str)] = &[
    ("villa", "Villa"),
    ("apartment", "Apartment"),
    ("penthouse", "Penthouse"),
    ("duplex", "Duplex"),
    ("land", "Land"),
    ("office", "Office"),
    ("studio", "Studio"),
];

/// Buyer profile phrase to canonical profile label. Single winner.
pub const BUYER_PROFILES: &[(&str, &str)] = &[
    ("gulf investor", "Investment"),
    ("investment buyer", "Investment"),
    ("expat family", "Family"),
    ("retiree", "Retirement"),
];

/// Neighborhood and area names. Unlike the tables above, every entry
/// found in the query accumulates.
pub const LOCATIONS: &[&str] = &[
    "achrafieh",
    "gemmayzeh",
    "verdun",
    "rabieh",
    "baabda",
    "jounieh",
    "dbayeh",
    "broummana",
    "beit mery",
    "downtown beirut",
    "saifi",
    "hamra",
    "kaslik",
    "seaside",
    "mountain",
    "corniche",
];

pub const STATUSES: &[(&str, ClientStatus)] = &[
    ("active", ClientStatus::Active),
    ("warm", ClientStatus::Warm),
    ("cold", ClientStatus::Cold),
];

/// Qualification phrases. Only the A+ tier is reachable by text query;
/// A/B/C have no keywords and can only be filtered programmatically.
pub const QUALIFICATIONS: &[(&str, Qualification)] = &[
    ("a+", Qualification::APlus),
    ("uhnw", Qualification::APlus),
    ("ultra high", Qualification::APlus),
];

pub fn is_property_type(keyword: &str) -> bool {
    PROPERTY_TYPES.iter().any(|(key, _)| *key == keyword)
}

pub fn is_buyer_profile(keyword: &str) -> bool {
    BUYER_PROFILES.iter().any(|(key, _)| *key == keyword)
}
