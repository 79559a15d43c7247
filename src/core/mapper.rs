use crate::domain::model::{
    Expected, Per90Minutes, Performance, PlayerRecord, PlayingTime, Progression, Row, ROW_WIDTH,
};
use crate::utils::error::{AppError, Result};

/// Decode one provider row into a PlayerRecord. All-or-nothing: a short row
/// or an uncoercible field fails the whole row. Columns beyond the schema
/// width are ignored.
pub fn map_row(row: &Row) -> Result<PlayerRecord> {
    if row.len() < ROW_WIDTH {
        return Err(AppError::MappingError {
            message: format!("expected {} columns, got {}", ROW_WIDTH, row.len()),
        });
    }

    Ok(PlayerRecord {
        league: text(row, 0),
        season: text(row, 1),
        team: text(row, 2),
        player: text(row, 3),
        nation: text(row, 4),
        pos: text(row, 5),
        age: text(row, 6),
        born: integer(row, 7, "born")? as i32,
        playing_time: PlayingTime {
            matches_played: unsigned(row, 8, "MP")?,
            starts: unsigned(row, 9, "Starts")?,
            minutes: unsigned(row, 10, "Min")?,
            nineties: float(row, 11, "90s")?,
        },
        performance: Performance {
            goals: unsigned(row, 12, "Gls")?,
            assists: unsigned(row, 13, "Ast")?,
            goals_and_assists: unsigned(row, 14, "G+A")?,
            non_penalty_goals: unsigned(row, 15, "G-PK")?,
            penalties_scored: unsigned(row, 16, "PK")?,
            penalties_attempted: unsigned(row, 17, "PKatt")?,
            yellow_cards: unsigned(row, 18, "CrdY")?,
            red_cards: unsigned(row, 19, "CrdR")?,
        },
        expected: Expected {
            xg: float(row, 20, "xG")?,
            npxg: float(row, 21, "npxG")?,
            xag: float(row, 22, "xAG")?,
            npxg_plus_xag: float(row, 23, "npxG+xAG")?,
        },
        progression: Progression {
            carries: unsigned(row, 24, "PrgC")?,
            passes: unsigned(row, 25, "PrgP")?,
            receptions: unsigned(row, 26, "PrgR")?,
        },
        per_90_minutes: Per90Minutes {
            goals: float(row, 27, "Gls/90")?,
            assists: float(row, 28, "Ast/90")?,
            goals_and_assists: float(row, 29, "G+A/90")?,
            non_penalty_goals: float(row, 30, "G-PK/90")?,
            non_penalty_goals_and_assists: float(row, 31, "G+A-PK/90")?,
            xg: float(row, 32, "xG/90")?,
            xag: float(row, 33, "xAG/90")?,
            xg_plus_xag: float(row, 34, "xG+xAG/90")?,
            npxg: float(row, 35, "npxG/90")?,
            npxg_plus_xag: float(row, 36, "npxG+xAG/90")?,
        },
    })
}

fn raw(row: &Row, index: usize) -> &str {
    row.get(index).unwrap_or("").trim()
}

fn text(row: &Row, index: usize) -> String {
    raw(row, index).to_string()
}

/// Integer columns tolerate float-formatted text ("2.0"): the provider emits
/// floats for count columns that passed through a nullable stage upstream.
fn integer(row: &Row, index: usize, column: &str) -> Result<i64> {
    let value = raw(row, index);
    if let Ok(n) = value.parse::<i64>() {
        return Ok(n);
    }
    match value.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(f as i64),
        _ => Err(AppError::MappingError {
            message: format!("column {} ({}): not an integer: '{}'", index, column, value),
        }),
    }
}

fn unsigned(row: &Row, index: usize, column: &str) -> Result<u32> {
    let n = integer(row, index, column)?;
    u32::try_from(n).map_err(|_| AppError::MappingError {
        message: format!("column {} ({}): out of range: '{}'", index, column, n),
    })
}

fn float(row: &Row, index: usize, column: &str) -> Result<f64> {
    let value = raw(row, index);
    value.parse::<f64>().map_err(|_| AppError::MappingError {
        message: format!("column {} ({}): not a number: '{}'", index, column, value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields(player: &str) -> Vec<String> {
        [
            "ENG-Premier League",
            "2024",
            "Arsenal",
            player,
            "eng ENG",
            "FW",
            "25",
            "1999",
            "10",
            "8",
            "720",
            "8.0",
            "5",
            "3",
            "8",
            "4",
            "1",
            "1",
            "2",
            "0",
            "4.5",
            "3.7",
            "2.1",
            "5.8",
            "20",
            "30",
            "40",
            "0.62",
            "0.38",
            "1.00",
            "0.50",
            "0.88",
            "0.56",
            "0.26",
            "0.82",
            "0.46",
            "0.72",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn test_map_full_row() {
        let row = Row::new(sample_fields("Bukayo Saka"));
        let record = map_row(&row).unwrap();

        assert_eq!(record.league, "ENG-Premier League");
        assert_eq!(record.player, "Bukayo Saka");
        assert_eq!(record.born, 1999);
        assert_eq!(record.playing_time.matches_played, 10);
        assert_eq!(record.playing_time.nineties, 8.0);
        assert_eq!(record.performance.goals, 5);
        assert_eq!(record.performance.goals_and_assists, 8);
        assert_eq!(record.expected.xg, 4.5);
        assert_eq!(record.expected.npxg_plus_xag, 5.8);
        assert_eq!(record.progression.receptions, 40);
        assert_eq!(record.per_90_minutes.non_penalty_goals_and_assists, 0.88);
        assert_eq!(record.per_90_minutes.npxg_plus_xag, 0.72);
    }

    #[test]
    fn test_short_row_is_rejected() {
        let mut fields = sample_fields("Bukayo Saka");
        fields.truncate(30);
        let err = map_row(&Row::new(fields)).unwrap_err();

        match err {
            AppError::MappingError { message } => {
                assert!(message.contains("expected 37 columns, got 30"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let mut fields = sample_fields("Bukayo Saka");
        fields.push("extra".to_string());
        let record = map_row(&Row::new(fields)).unwrap();
        assert_eq!(record.player, "Bukayo Saka");
    }

    #[test]
    fn test_non_numeric_integer_field_is_rejected() {
        let mut fields = sample_fields("Bukayo Saka");
        fields[12] = "many".to_string();
        let err = map_row(&Row::new(fields)).unwrap_err();

        match err {
            AppError::MappingError { message } => {
                assert!(message.contains("column 12 (Gls)"));
                assert!(message.contains("many"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_float_formatted_count_is_truncated() {
        let mut fields = sample_fields("Bukayo Saka");
        fields[12] = "5.0".to_string();
        let record = map_row(&Row::new(fields)).unwrap();
        assert_eq!(record.performance.goals, 5);
    }

    #[test]
    fn test_empty_numeric_field_is_rejected() {
        let mut fields = sample_fields("Bukayo Saka");
        fields[20] = "".to_string();
        assert!(map_row(&Row::new(fields)).is_err());
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let mut fields = sample_fields("Bukayo Saka");
        fields[12] = "-3".to_string();
        let err = map_row(&Row::new(fields)).unwrap_err();

        match err {
            AppError::MappingError { message } => {
                assert!(message.contains("out of range"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut fields = sample_fields("Bukayo Saka");
        fields[3] = "  Bukayo Saka  ".to_string();
        fields[7] = " 1999 ".to_string();
        let record = map_row(&Row::new(fields)).unwrap();
        assert_eq!(record.player, "Bukayo Saka");
        assert_eq!(record.born, 1999);
    }
}
