use skyrise_core::traits::ClientSearch;
use skyrise_core::types::{ClientRecord, ClientStatus, PropertySummary, Qualification};
use skyrise_search::{SearchEngine, SearchOptions};

fn client(
    id: &str,
    name: &str,
    nationality: &str,
    budget: &str,
    preference: &str,
    status: ClientStatus,
    qualification: Qualification,
    tags: &[&str],
    properties: &[(&str, &str)],
) -> ClientRecord {
    ClientRecord {
        id: id.to_string(),
        name: name.to_string(),
        nationality: nationality.to_string(),
        budget: budget.to_string(),
        preference: preference.to_string(),
        status,
        qualification,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        properties: properties
            .iter()
            .map(|(name, address)| PropertySummary {
                name: (*name).to_string(),
                address: (*address).to_string(),
            })
            .collect(),
        notes: Vec::new(),
        timeline: Vec::new(),
        engagement_score: 0,
        source: String::new(),
        referred_by: None,
    }
}

fn sample_clients() -> Vec<ClientRecord> {
    vec![
        client(
            "alkhoury",
            "Al-Khoury Family",
            "Lebanese",
            "$1-2M",
            "Penthouse in Achrafieh",
            ClientStatus::Active,
            Qualification::APlus,
            &["Local buyer", "Penthouse", "Achrafieh", "A+ qualified"],
            &[("Sky Tower Penthouse", "Achrafieh, Beirut")],
        ),
        client(
            "mansour",
            "Mansour Holdings",
            "Saudi",
            "$3-5M",
            "Luxury villa in Rabieh",
            ClientStatus::Warm,
            Qualification::A,
            &["Gulf investor", "Villa", "Rabieh", "Investment"],
            &[("Cedar Heights Villa", "Rabieh")],
        ),
        client(
            "haddad",
            "Haddad",
            "French",
            "$600K",
            "Studio in Hamra",
            ClientStatus::Cold,
            Qualification::B,
            &["French expat", "Studio", "Hamra"],
            &[],
        ),
        client(
            "bigfish",
            "Dubai Capital Group",
            "Emirati",
            "$8M",
            "Duplex in Downtown Beirut",
            ClientStatus::Active,
            Qualification::A,
            &["Multi-unit", "Investment"],
            &[("Marina Tower", "Corniche, Beirut")],
        ),
        client(
            "landbank",
            "Abou Nader",
            "Lebanese",
            "TBD",
            "Land in Baabda",
            ClientStatus::Active,
            Qualification::C,
            &["Landbank"],
            &[],
        ),
    ]
}

fn engine() -> SearchEngine {
    SearchEngine::new().expect("valid patterns")
}

fn ids(records: &[ClientRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn empty_query_is_the_identity() {
    let clients = sample_clients();
    let all = vec!["alkhoury", "mansour", "haddad", "bigfish", "landbank"];

    assert_eq!(ids(&engine().filter(&clients, "")), all);
    assert_eq!(ids(&engine().filter(&clients, "   ")), all);
}

#[test]
fn filtering_is_idempotent() {
    let clients = sample_clients();
    let e = engine();
    let first = e.filter(&clients, "lebanese active above 1m");
    let second = e.filter(&clients, "lebanese active above 1m");
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn unrecognized_query_falls_back_to_text_search() {
    let clients = sample_clients();
    let e = engine();

    // Nothing recognizable and nothing containing the text: empty.
    assert!(e.filter(&clients, "xyz123").is_empty());

    // Name substring.
    assert_eq!(ids(&e.filter(&clients, "khoury")), vec!["alkhoury"]);

    // Tag substring.
    assert_eq!(ids(&e.filter(&clients, "expat")), vec!["haddad"]);
}

#[test]
fn nationality_is_an_exact_match() {
    let clients = sample_clients();
    let e = engine();

    assert_eq!(ids(&e.filter(&clients, "lebanese buyer")), vec!["alkhoury", "landbank"]);
    assert_eq!(ids(&e.filter(&clients, "saudi buyer")), vec!["mansour"]);
}

#[test]
fn budget_floor_compares_against_record_ceiling() {
    let clients = sample_clients();
    let e = engine();

    // "$1-2M" tops out at 2,000,000 which reaches a 1.5M floor.
    let result = e.filter(&clients, "above 1.5m");
    assert_eq!(ids(&result), vec!["alkhoury", "mansour", "bigfish"]);

    // ...but not a 2.5M floor.
    let result = e.filter(&clients, "above 2.5m");
    assert_eq!(ids(&result), vec!["mansour", "bigfish"]);
}

#[test]
fn range_query_collapses_to_its_lower_bound() {
    let clients = sample_clients();
    let result = engine().filter(&clients, "2-5m");

    // An $8M client is NOT excluded for exceeding the range's upper
    // bound; only the 2M floor applies.
    assert!(ids(&result).contains(&"bigfish"));
    assert_eq!(ids(&result), vec!["alkhoury", "mansour", "bigfish"]);
}

#[test]
fn strict_range_mode_applies_the_ceiling() {
    let clients = sample_clients();
    let strict = SearchEngine::with_options(SearchOptions { strict_budget_range: true })
        .expect("valid patterns");

    let result = strict.filter(&clients, "2-5m");
    assert_eq!(ids(&result), vec!["alkhoury", "mansour"]);
}

#[test]
fn unparseable_record_budget_counts_as_zero() {
    let clients = sample_clients();
    let result = engine().filter(&clients, "above 100k");

    assert!(!ids(&result).contains(&"landbank"));
    assert!(ids(&result).contains(&"haddad"));
}

#[test]
fn multiple_locations_match_as_or() {
    let clients = sample_clients();
    let result = engine().filter(&clients, "achrafieh or rabieh listings");

    assert_eq!(ids(&result), vec!["alkhoury", "mansour"]);
}

#[test]
fn location_matches_through_matched_properties() {
    // "Corniche" only appears in an attached property address.
    let clients = sample_clients();
    let result = engine().filter(&clients, "corniche");

    assert_eq!(ids(&result), vec!["bigfish"]);
}

#[test]
fn property_type_matches_preference_or_tags() {
    let clients = sample_clients();
    let e = engine();

    assert_eq!(ids(&e.filter(&clients, "villa")), vec!["mansour"]);
    assert_eq!(ids(&e.filter(&clients, "studio")), vec!["haddad"]);
}

#[test]
fn penthouse_also_hits_the_us_demonym_entry() {
    // "penthouse" contains "us", so the query picks up an American
    // nationality criterion alongside the property type and nobody in
    // this data set satisfies both. Substring containment in table
    // order is contractual.
    let clients = sample_clients();
    let result = engine().filter(&clients, "penthouse");

    assert!(result.is_empty());
}

#[test]
fn buyer_profile_matches_canonical_label_in_tags() {
    let clients = sample_clients();
    let result = engine().filter(&clients, "gulf investor");

    // Any record tagged with the canonical "Investment" label
    // qualifies, whether or not the phrase itself appears.
    assert_eq!(ids(&result), vec!["mansour", "bigfish"]);
}

#[test]
fn structured_criteria_combine_with_and() {
    let clients = sample_clients();
    let result = engine().filter(&clients, "lebanese active above 1m");

    // landbank is Lebanese and Active but its budget ceiling is 0;
    // everyone else fails nationality.
    assert_eq!(ids(&result), vec!["alkhoury"]);
}

#[test]
fn engine_works_through_the_trait_seam() {
    let clients = sample_clients();
    let boxed: Box<dyn ClientSearch> = Box::new(engine());

    let result = boxed.search(&clients, "saudi buyer");
    assert_eq!(ids(&result), vec!["mansour"]);
}

#[test]
fn no_input_ever_causes_a_panic() {
    let clients = sample_clients();
    let e = engine();
    for query in [
        "",
        " ",
        "🦀 unicode 🦀",
        "above above above m",
        "1-2-3-4m",
        "$",
        "to to to",
        "\u{2013}5m",
    ] {
        let _ = e.filter(&clients, query);
    }
}
