use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result, MISSING_DESTINATION_MESSAGE};

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 21;
pub const DEFAULT_DAYS: u32 = 3;

/// Travel style offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TravelStyle {
    #[serde(rename = "Aventure")]
    Adventure,
    #[default]
    #[serde(rename = "Détente")]
    Relaxation,
    #[serde(rename = "Culturel")]
    Cultural,
    #[serde(rename = "Budget")]
    Budget,
    #[serde(rename = "Luxe")]
    Luxury,
    #[serde(rename = "Famille")]
    Family,
}

impl TravelStyle {
    pub const ALL: [TravelStyle; 6] = [
        TravelStyle::Adventure,
        TravelStyle::Relaxation,
        TravelStyle::Cultural,
        TravelStyle::Budget,
        TravelStyle::Luxury,
        TravelStyle::Family,
    ];

    /// Value embedded in the prompt and shown in the itinerary header.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelStyle::Adventure => "Aventure",
            TravelStyle::Relaxation => "Détente",
            TravelStyle::Cultural => "Culturel",
            TravelStyle::Budget => "Budget",
            TravelStyle::Luxury => "Luxe",
            TravelStyle::Family => "Famille",
        }
    }

    /// Label with its pictogram, as listed in the style picker.
    pub fn display_label(&self) -> &'static str {
        match self {
            TravelStyle::Adventure => "🧗 Aventure",
            TravelStyle::Relaxation => "🧘 Détente",
            TravelStyle::Cultural => "🏛️ Culturel",
            TravelStyle::Budget => "💸 Budget",
            TravelStyle::Luxury => "💎 Luxe",
            TravelStyle::Family => "👨‍👩‍👧‍👦 Famille",
        }
    }

    fn english_name(&self) -> &'static str {
        match self {
            TravelStyle::Adventure => "adventure",
            TravelStyle::Relaxation => "relaxation",
            TravelStyle::Cultural => "cultural",
            TravelStyle::Budget => "budget",
            TravelStyle::Luxury => "luxury",
            TravelStyle::Family => "family",
        }
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelStyle {
    type Err = PlannerError;

    fn from_str(value: &str) -> Result<Self> {
        let wanted = fold_accents(value.trim()).to_lowercase();
        TravelStyle::ALL
            .into_iter()
            .find(|style| {
                fold_accents(style.as_str()).to_lowercase() == wanted
                    || style.english_name() == wanted
            })
            .ok_or_else(|| {
                PlannerError::InvalidInput(format!("Style de voyage inconnu : {}", value.trim()))
            })
    }
}

fn fold_accents(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            other => other,
        })
        .collect()
}

/// Parameters for one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerRequest {
    pub destination: String,
    pub days: u32,
    #[serde(rename = "type")]
    pub style: TravelStyle,
}

impl PlannerRequest {
    pub fn new(destination: impl Into<String>, days: u32, style: TravelStyle) -> Self {
        Self {
            destination: destination.into(),
            days,
            style,
        }
    }

    /// Reject requests that must never reach the network.
    pub fn validate(&self) -> Result<()> {
        if self.destination.trim().is_empty() {
            return Err(PlannerError::InvalidInput(
                MISSING_DESTINATION_MESSAGE.to_string(),
            ));
        }

        if !(MIN_DAYS..=MAX_DAYS).contains(&self.days) {
            return Err(PlannerError::InvalidInput(format!(
                "La durée doit être comprise entre {} et {} jours.",
                MIN_DAYS, MAX_DAYS
            )));
        }

        Ok(())
    }
}
