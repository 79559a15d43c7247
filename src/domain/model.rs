use serde::{Deserialize, Serialize};

/// Number of positional columns in one provider row.
pub const ROW_WIDTH: usize = 37;

/// One tabular record from the stats provider: positionally-ordered fields
/// for a single player-season, kept as raw text until the mapper coerces
/// them. Arity is checked by the mapper, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

/// Normalized season statistics for one player. Serialized field names
/// follow the provider's column labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub league: String,
    pub season: String,
    pub team: String,
    pub player: String,
    pub nation: String,
    pub pos: String,
    pub age: String,
    pub born: i32,
    pub playing_time: PlayingTime,
    pub performance: Performance,
    pub expected: Expected,
    pub progression: Progression,
    pub per_90_minutes: Per90Minutes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayingTime {
    #[serde(rename = "MP")]
    pub matches_played: u32,
    #[serde(rename = "Starts")]
    pub starts: u32,
    #[serde(rename = "Min")]
    pub minutes: u32,
    #[serde(rename = "90s")]
    pub nineties: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "Gls")]
    pub goals: u32,
    #[serde(rename = "Ast")]
    pub assists: u32,
    #[serde(rename = "G+A")]
    pub goals_and_assists: u32,
    #[serde(rename = "G-PK")]
    pub non_penalty_goals: u32,
    #[serde(rename = "PK")]
    pub penalties_scored: u32,
    #[serde(rename = "PKatt")]
    pub penalties_attempted: u32,
    #[serde(rename = "CrdY")]
    pub yellow_cards: u32,
    #[serde(rename = "CrdR")]
    pub red_cards: u32,
}

/// Expected-goal model outputs for the season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expected {
    #[serde(rename = "xG")]
    pub xg: f64,
    #[serde(rename = "npxG")]
    pub npxg: f64,
    #[serde(rename = "xAG")]
    pub xag: f64,
    #[serde(rename = "npxG+xAG")]
    pub npxg_plus_xag: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    #[serde(rename = "PrgC")]
    pub carries: u32,
    #[serde(rename = "PrgP")]
    pub passes: u32,
    #[serde(rename = "PrgR")]
    pub receptions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Per90Minutes {
    #[serde(rename = "Gls")]
    pub goals: f64,
    #[serde(rename = "Ast")]
    pub assists: f64,
    #[serde(rename = "G+A")]
    pub goals_and_assists: f64,
    #[serde(rename = "G-PK")]
    pub non_penalty_goals: f64,
    #[serde(rename = "G+A-PK")]
    pub non_penalty_goals_and_assists: f64,
    #[serde(rename = "xG")]
    pub xg: f64,
    #[serde(rename = "xAG")]
    pub xag: f64,
    #[serde(rename = "xG+xAG")]
    pub xg_plus_xag: f64,
    #[serde(rename = "npxG")]
    pub npxg: f64,
    #[serde(rename = "npxG+xAG")]
    pub npxg_plus_xag: f64,
}

/// A matched record paired with its generated summary. The record is always
/// present; a failed generation call leaves its description in `summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub player_stats: PlayerRecord,
    pub summary: String,
}

/// The two success shapes of a search: a capped plain listing for an empty
/// query, enriched results otherwise. Serializes as a bare JSON array either
/// way.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Unfiltered(Vec<PlayerRecord>),
    Enriched(Vec<SearchResult>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(player: &str) -> PlayerRecord {
        PlayerRecord {
            league: "ENG-Premier League".to_string(),
            season: "2024".to_string(),
            team: "Arsenal".to_string(),
            player: player.to_string(),
            nation: "eng ENG".to_string(),
            pos: "FW".to_string(),
            age: "25".to_string(),
            born: 1999,
            playing_time: PlayingTime {
                matches_played: 10,
                starts: 8,
                minutes: 720,
                nineties: 8.0,
            },
            performance: Performance {
                goals: 5,
                assists: 3,
                goals_and_assists: 8,
                non_penalty_goals: 4,
                penalties_scored: 1,
                penalties_attempted: 1,
                yellow_cards: 2,
                red_cards: 0,
            },
            expected: Expected {
                xg: 4.5,
                npxg: 3.7,
                xag: 2.1,
                npxg_plus_xag: 5.8,
            },
            progression: Progression {
                carries: 20,
                passes: 30,
                receptions: 40,
            },
            per_90_minutes: Per90Minutes {
                goals: 0.62,
                assists: 0.38,
                goals_and_assists: 1.0,
                non_penalty_goals: 0.5,
                non_penalty_goals_and_assists: 0.88,
                xg: 0.56,
                xag: 0.26,
                xg_plus_xag: 0.82,
                npxg: 0.46,
                npxg_plus_xag: 0.72,
            },
        }
    }

    #[test]
    fn test_record_serializes_with_provider_labels() {
        let record = sample_record("Bukayo Saka");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["player"], "Bukayo Saka");
        assert_eq!(json["playing_time"]["MP"], 10);
        assert_eq!(json["playing_time"]["90s"], 8.0);
        assert_eq!(json["performance"]["G+A"], 8);
        assert_eq!(json["performance"]["G-PK"], 4);
        assert_eq!(json["expected"]["npxG+xAG"], 5.8);
        assert_eq!(json["progression"]["PrgC"], 20);
        assert_eq!(json["per_90_minutes"]["G+A-PK"], 0.88);
    }

    #[test]
    fn test_search_response_serializes_as_bare_array() {
        let plain = SearchResponse::Unfiltered(vec![sample_record("A")]);
        let json = serde_json::to_value(&plain).unwrap();
        assert!(json.is_array());
        assert!(json[0].get("summary").is_none());

        let enriched = SearchResponse::Enriched(vec![SearchResult {
            player_stats: sample_record("B"),
            summary: "A fine season.".to_string(),
        }]);
        let json = serde_json::to_value(&enriched).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["summary"], "A fine season.");
        assert_eq!(json[0]["player_stats"]["player"], "B");
    }
}
