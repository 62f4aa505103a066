//! Keyword dispatch from a prompt to a travel intent.
//!
//! Deliberately simple: a first-match keyword chain, checked in priority
//! order. Anything unrecognized falls through to [`Intent::Help`].

use crate::api::airport;

/// Member used when a prompt names none. The mock profile's number.
const DEFAULT_MEMBER: &str = "2175107";

/// Fallback flight endpoints when a prompt names none.
const DEFAULT_DEPARTURE: &str = "YEG";
const DEFAULT_ARRIVAL: &str = "CDG";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    MemberLookup {
        member_number: String,
    },
    RewardBalance {
        member_id: String,
    },
    AirportLookup {
        city: String,
    },
    FlightSearch {
        departure_id: String,
        arrival_id: String,
        /// ISO date (YYYY-MM-DD)
        date: String,
    },
    BookFlight,
    Help,
}

impl Intent {
    /// Short name used in trace entries.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::MemberLookup { .. } => "member-lookup",
            Intent::RewardBalance { .. } => "reward-balance",
            Intent::AirportLookup { .. } => "airport-lookup",
            Intent::FlightSearch { .. } => "flight-search",
            Intent::BookFlight => "book-flight",
            Intent::Help => "help",
        }
    }
}

/// Parse a prompt into an intent.
pub fn parse(prompt: &str) -> Intent {
    let lowered = prompt.to_lowercase();

    if lowered.contains("airport") {
        return Intent::AirportLookup {
            city: city_from(prompt).unwrap_or_else(|| "Edmonton".to_string()),
        };
    }
    if lowered.contains("balance") || lowered.contains("reward") {
        return Intent::RewardBalance {
            member_id: digits_in(prompt).unwrap_or_else(|| DEFAULT_MEMBER.to_string()),
        };
    }
    // "book a flight" must land here, not in flight search
    if lowered.contains("book") {
        return Intent::BookFlight;
    }
    if lowered.contains("flight") {
        let (departure_id, arrival_id) = endpoints_from(prompt);
        let date = date_in(prompt).unwrap_or_else(today);
        return Intent::FlightSearch {
            departure_id,
            arrival_id,
            date,
        };
    }
    if lowered.contains("member") || lowered.contains("profile") || lowered.contains("account") {
        return Intent::MemberLookup {
            member_number: digits_in(prompt).unwrap_or_else(|| DEFAULT_MEMBER.to_string()),
        };
    }

    Intent::Help
}

fn today() -> String {
    chrono::Local::now().date_naive().to_string()
}

fn trim_punct(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

/// First run of digits in the prompt, e.g. a member number.
fn digits_in(prompt: &str) -> Option<String> {
    prompt
        .split_whitespace()
        .map(trim_punct)
        .find(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
}

/// First token parseable as an ISO date.
fn date_in(prompt: &str) -> Option<String> {
    prompt
        .split_whitespace()
        .map(trim_punct)
        .find(|token| chrono::NaiveDate::parse_from_str(token, "%Y-%m-%d").is_ok())
        .map(str::to_string)
}

/// The city a prompt asks about: everything after the last "in"/"for"/"of",
/// otherwise whatever is left once filler words are dropped.
fn city_from(prompt: &str) -> Option<String> {
    let tokens: Vec<&str> = prompt.split_whitespace().collect();

    if let Some(marker) = tokens
        .iter()
        .rposition(|t| matches!(t.to_lowercase().as_str(), "in" | "for" | "of"))
    {
        let rest: Vec<&str> = tokens[marker + 1..]
            .iter()
            .map(|t| trim_punct(t))
            .filter(|t| !t.is_empty())
            .collect();
        if !rest.is_empty() {
            return Some(rest.join(" "));
        }
    }

    const FILLER: &[&str] = &[
        "what", "whats", "what's", "is", "the", "airport", "airports", "code", "codes", "find",
        "lookup", "look", "up", "get", "me", "please", "a", "an", "to",
    ];
    let rest: Vec<&str> = tokens
        .iter()
        .map(|t| trim_punct(t))
        .filter(|t| !t.is_empty() && !FILLER.contains(&t.to_lowercase().as_str()))
        .collect();
    if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    }
}

/// Resolve a token to an airport code: three letters pass through
/// uppercased, city names go through the lookup table.
fn to_airport_code(token: &str) -> String {
    let token = trim_punct(token);
    if token.len() == 3 && token.chars().all(|c| c.is_ascii_alphabetic()) {
        return token.to_uppercase();
    }
    airport::lookup(token)
        .map(|found| found.code)
        .unwrap_or_else(|| token.to_uppercase())
}

/// Departure/arrival codes from "from X to Y" phrasing.
fn endpoints_from(prompt: &str) -> (String, String) {
    let tokens: Vec<&str> = prompt.split_whitespace().collect();

    let after = |word: &str| -> Option<&str> {
        tokens
            .iter()
            .position(|t| t.to_lowercase() == word)
            .and_then(|i| tokens.get(i + 1))
            .copied()
    };

    let departure = after("from")
        .map(to_airport_code)
        .unwrap_or_else(|| DEFAULT_DEPARTURE.to_string());
    let arrival = after("to")
        .map(to_airport_code)
        .unwrap_or_else(|| DEFAULT_ARRIVAL.to_string());
    (departure, arrival)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airport_lookup_with_for() {
        assert_eq!(
            parse("What is the airport code for Edmonton?"),
            Intent::AirportLookup {
                city: "Edmonton".to_string()
            }
        );
    }

    #[test]
    fn airport_lookup_multi_word_city() {
        assert_eq!(
            parse("airport in new york"),
            Intent::AirportLookup {
                city: "new york".to_string()
            }
        );
    }

    #[test]
    fn balance_uses_default_member() {
        assert_eq!(
            parse("What's my rewards balance?"),
            Intent::RewardBalance {
                member_id: "2175107".to_string()
            }
        );
    }

    #[test]
    fn balance_with_explicit_member() {
        assert_eq!(
            parse("check the balance for member 555"),
            Intent::RewardBalance {
                member_id: "555".to_string()
            }
        );
    }

    #[test]
    fn booking_wins_over_flight_search() {
        assert_eq!(parse("Book a flight for me"), Intent::BookFlight);
    }

    #[test]
    fn flight_search_with_codes_and_date() {
        assert_eq!(
            parse("Find flights from YEG to CDG on 2024-03-31"),
            Intent::FlightSearch {
                departure_id: "YEG".to_string(),
                arrival_id: "CDG".to_string(),
                date: "2024-03-31".to_string(),
            }
        );
    }

    #[test]
    fn flight_search_resolves_city_names() {
        let intent = parse("flights from edmonton to paris");
        match intent {
            Intent::FlightSearch {
                departure_id,
                arrival_id,
                date,
            } => {
                assert_eq!(departure_id, "YEG");
                assert_eq!(arrival_id, "CDG");
                assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
            }
            other => panic!("expected flight search, got {other:?}"),
        }
    }

    #[test]
    fn member_profile() {
        assert_eq!(
            parse("Show my member profile"),
            Intent::MemberLookup {
                member_number: "2175107".to_string()
            }
        );
    }

    #[test]
    fn unknown_prompt_is_help() {
        assert_eq!(parse("hello there"), Intent::Help);
    }
}
