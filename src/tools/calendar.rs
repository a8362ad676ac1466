//! Month-by-month crop task calendar and reminders.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::{InvalidPayload, Payload, RecordLog, Storage, StreamConfig};

use super::Crop;

pub const STREAM: &str = "crop_reminders";
pub const CAPACITY: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Sowing,
    Irrigation,
    Fertilizer,
    Pest,
    Harvest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    pub kind: TaskKind,
    pub text: &'static str,
}

/// Scheduled tasks for a crop in a calendar month (1 = January). Months
/// outside the crop's season, unknown crops, and out-of-range months are
/// all empty.
pub fn tasks(crop: Crop, month: u32) -> &'static [Task] {
    use TaskKind::*;
    match (crop, month) {
        (Crop::Wheat, 10) => &[Task { kind: Sowing, text: "field preparation" }],
        (Crop::Wheat, 11) => &[
            Task { kind: Sowing, text: "sowing" },
            Task { kind: Irrigation, text: "first irrigation" },
        ],
        (Crop::Wheat, 12) => &[
            Task { kind: Irrigation, text: "second irrigation" },
            Task { kind: Fertilizer, text: "urea top dress" },
        ],
        (Crop::Wheat, 1) => &[
            Task { kind: Irrigation, text: "third irrigation" },
            Task { kind: Pest, text: "aphid watch" },
        ],
        (Crop::Wheat, 2) => &[
            Task { kind: Irrigation, text: "fourth irrigation" },
            Task { kind: Fertilizer, text: "final urea" },
        ],
        (Crop::Wheat, 3) => &[
            Task { kind: Irrigation, text: "fifth irrigation" },
            Task { kind: Pest, text: "rust watch" },
        ],
        (Crop::Wheat, 4) => &[Task { kind: Harvest, text: "harvest" }],

        (Crop::Rice, 5) => &[Task { kind: Sowing, text: "nursery" }],
        (Crop::Rice, 6) => &[Task { kind: Sowing, text: "transplanting" }],
        (Crop::Rice, 7) => &[
            Task { kind: Fertilizer, text: "first dose" },
            Task { kind: Irrigation, text: "maintain water" },
        ],
        (Crop::Rice, 8) => &[
            Task { kind: Fertilizer, text: "second dose" },
            Task { kind: Pest, text: "BPH watch" },
        ],
        (Crop::Rice, 9) => &[Task { kind: Pest, text: "blast watch" }],
        (Crop::Rice, 10) => &[Task { kind: Harvest, text: "harvest" }],

        (Crop::Sugarcane, 2) => &[Task { kind: Sowing, text: "spring planting" }],
        (Crop::Sugarcane, 3) => &[Task { kind: Irrigation, text: "regular irrigation" }],
        (Crop::Sugarcane, 4) => &[Task { kind: Fertilizer, text: "first earthing" }],
        (Crop::Sugarcane, 5) => &[Task { kind: Irrigation, text: "increase frequency" }],
        (Crop::Sugarcane, 6) => &[Task { kind: Fertilizer, text: "second earthing" }],
        (Crop::Sugarcane, 10) => &[Task { kind: Sowing, text: "autumn planting" }],
        (Crop::Sugarcane, 12) => &[Task { kind: Harvest, text: "harvest begins" }],

        (Crop::Potato, 10) => &[Task { kind: Sowing, text: "planting" }],
        (Crop::Potato, 11) => &[
            Task { kind: Irrigation, text: "first irrigation" },
            Task { kind: Fertilizer, text: "top dress" },
        ],
        (Crop::Potato, 12) => &[
            Task { kind: Irrigation, text: "regular irrigation" },
            Task { kind: Pest, text: "blight watch" },
        ],
        (Crop::Potato, 1) => &[Task { kind: Fertilizer, text: "earthing up" }],
        (Crop::Potato, 2) => &[Task { kind: Harvest, text: "harvest" }],

        (Crop::Mustard, 10) => &[Task { kind: Sowing, text: "sowing" }],
        (Crop::Mustard, 11) => &[
            Task { kind: Irrigation, text: "first irrigation" },
            Task { kind: Fertilizer, text: "top dress" },
        ],
        (Crop::Mustard, 12) => &[Task { kind: Pest, text: "aphid spray" }],
        (Crop::Mustard, 1) => &[Task { kind: Irrigation, text: "pre-flowering irrigation" }],
        (Crop::Mustard, 2) => &[Task { kind: Harvest, text: "harvest" }],

        (Crop::Maize, 6) => &[Task { kind: Sowing, text: "kharif sowing" }],
        (Crop::Maize, 7) => &[
            Task { kind: Fertilizer, text: "first top dress" },
            Task { kind: Irrigation, text: "regular irrigation" },
        ],
        (Crop::Maize, 8) => &[Task { kind: Fertilizer, text: "second top dress" }],
        (Crop::Maize, 9) => &[Task { kind: Harvest, text: "harvest" }],
        (Crop::Maize, 2) => &[Task { kind: Sowing, text: "rabi sowing" }],

        _ => &[],
    }
}

/// A user-set reminder tied to a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub text: String,
    pub date: NaiveDate,
}

impl Reminder {
    /// Builds a reminder from raw form input; the date must be a valid
    /// `YYYY-MM-DD` string.
    pub fn parse(text: impl Into<String>, date: &str) -> Result<Self, InvalidPayload> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| InvalidPayload::new("reminder date must be a valid YYYY-MM-DD date"))?;
        let reminder = Self {
            text: text.into(),
            date,
        };
        reminder.validate()?;
        Ok(reminder)
    }
}

impl Payload for Reminder {
    fn validate(&self) -> Result<(), InvalidPayload> {
        if self.text.trim().is_empty() {
            return Err(InvalidPayload::new("reminder text must not be empty"));
        }
        Ok(())
    }
    // No numeric field: a reminder stream has no aggregate statistics.
}

pub fn open_reminders(storage: Arc<dyn Storage>) -> RecordLog<Reminder> {
    RecordLog::open(StreamConfig::new(STREAM, CAPACITY), storage)
}
