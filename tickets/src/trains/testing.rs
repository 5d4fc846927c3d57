//! Builders for raw records used across the crate's unit tests.

use std::collections::HashMap;

use crate::domain::Telecode;

use super::MIN_FIELDS;

/// Station lookup covering the telecodes the builders use.
pub fn stations() -> HashMap<Telecode, String> {
    [
        ("BJP", "北京"),
        ("VNP", "北京南"),
        ("SHH", "上海"),
        ("AOH", "上海虹桥"),
        ("NKH", "南京南"),
    ]
    .into_iter()
    .map(|(code, name)| (Telecode::parse(code).unwrap(), name.to_string()))
    .collect()
}

/// Builds a `|`-separated record with the 12306 field layout.
pub struct RecordBuilder {
    fields: Vec<String>,
}

impl RecordBuilder {
    /// A record for `train_code` from 北京 to 上海 with every seat class sold out.
    pub fn new(train_code: &str) -> Self {
        let mut fields = vec![String::new(); MIN_FIELDS + 2];
        fields[0] = "secretStr".to_string();
        fields[1] = "预订".to_string();
        fields[2] = format!("24000{train_code}0");
        fields[3] = train_code.to_string();
        fields[13] = "20240315".to_string();
        Self { fields }
            .stations("BJP", "SHH")
            .times("07:00", "12:00", "05:00")
            .seats(["无"; 7])
    }

    /// Origin and destination telecodes (fields 4-7).
    pub fn stations(mut self, from: &str, to: &str) -> Self {
        self.fields[4] = from.to_string();
        self.fields[5] = to.to_string();
        self.fields[6] = from.to_string();
        self.fields[7] = to.to_string();
        self
    }

    /// Departure, arrival, and duration (fields 8-10).
    pub fn times(mut self, departure: &str, arrival: &str, duration: &str) -> Self {
        self.fields[8] = departure.to_string();
        self.fields[9] = arrival.to_string();
        self.fields[10] = duration.to_string();
        self
    }

    /// Seat availability in column order: first class, second class,
    /// soft sleeper, hard sleeper, soft seat, hard seat, no seat.
    pub fn seats(mut self, values: [&str; 7]) -> Self {
        for (index, value) in [31, 30, 23, 28, 24, 29, 33].into_iter().zip(values) {
            self.fields[index] = value.to_string();
        }
        self
    }

    pub fn build(self) -> String {
        self.fields.join("|")
    }
}
