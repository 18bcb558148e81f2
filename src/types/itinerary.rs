use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schemas::{CompletionSchema, SchemaHandle};

/// Complete travel guide for one destination.
///
/// Field names follow the camelCase contract of the generation service so the
/// same value can be validated, shared and restored without any mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    /// Short, evocative title for the trip
    pub trip_title: String,
    /// Inspiring summary of the whole trip
    pub summary: String,
    /// Destination echoed from the request
    pub destination: String,
    /// One entry per requested day, ordered by day number starting at 1
    pub daily_plans: Vec<DayPlan>,
    /// 5 to 7 items worth packing for this specific destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packing_list: Option<Vec<String>>,
    /// 3 or 4 cultural or practical tips (customs, traps to avoid)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_tips: Option<Vec<String>>,
    /// 9 hotels, 3 per category, grouped Luxe then Confort then Budget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_recommendations: Option<Vec<Hotel>>,
    /// 4 must-see historical or cultural sites
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_sites: Option<Vec<HistoricalSite>>,
    /// Budget, currency, weather and food essentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practical_info: Option<PracticalInfo>,
}

/// One calendar day of the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// 1-based day counter within the itinerary
    pub day: u32,
    /// Theme of the day
    pub theme: String,
    /// Activities in narrative order, including lunch and dinner suggestions
    pub activities: Vec<Activity>,
}

/// A single timed entry within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Free-text time label (e.g. "Matin", "12h30")
    pub time: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    /// Name of the hotel or neighbourhood
    pub name: String,
    /// Must be 'Luxe', 'Confort' or 'Budget'
    pub category: String,
    /// Why this place is worth choosing
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalSite {
    /// Name of the site
    pub name: String,
    /// Short historical or cultural description
    pub description: String,
    /// Approximate ticket price (e.g. "12€" or "Gratuit")
    pub ticket_price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PracticalInfo {
    /// Local currency (e.g. Yen, Euro)
    pub currency: String,
    /// Average daily budget per person, flights excluded
    pub budget_estimate: String,
    /// Short weather advice
    pub weather_tip: String,
    /// 3 to 5 typical dishes to try
    pub local_dishes: Vec<String>,
}

/// Hotel tabs offered to the user.
///
/// The service fills `Hotel::category` with free text, so a tab matches any
/// hotel whose category contains the tab label, ignoring case. A category such
/// as "Confort-Luxe" therefore shows up under two tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotelCategory {
    Luxe,
    Confort,
    Budget,
}

impl HotelCategory {
    pub const ALL: [HotelCategory; 3] = [
        HotelCategory::Luxe,
        HotelCategory::Confort,
        HotelCategory::Budget,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HotelCategory::Luxe => "Luxe",
            HotelCategory::Confort => "Confort",
            HotelCategory::Budget => "Budget",
        }
    }

    pub fn matches(&self, hotel: &Hotel) -> bool {
        hotel
            .category
            .to_lowercase()
            .contains(&self.label().to_lowercase())
    }

    /// Hotels under this tab, in the order the service returned them.
    pub fn filter<'a>(&self, hotels: &'a [Hotel]) -> Vec<&'a Hotel> {
        hotels.iter().filter(|hotel| self.matches(hotel)).collect()
    }
}

impl fmt::Display for HotelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Itinerary {
    /// Number of days covered, used to restore the form from a shared link.
    pub fn day_count(&self) -> usize {
        self.daily_plans.len()
    }

    // Presence checks shared by the renderer and the exporter: a section is
    // shown only when it exists and has at least one entry.

    pub fn packing_list(&self) -> Option<&[String]> {
        present(&self.packing_list)
    }

    pub fn local_tips(&self) -> Option<&[String]> {
        present(&self.local_tips)
    }

    pub fn hotel_recommendations(&self) -> Option<&[Hotel]> {
        present(&self.hotel_recommendations)
    }

    pub fn historical_sites(&self) -> Option<&[HistoricalSite]> {
        present(&self.historical_sites)
    }

    pub fn practical_info(&self) -> Option<&PracticalInfo> {
        self.practical_info.as_ref()
    }

    /// Check that there is exactly one plan per requested day, numbered
    /// uniquely within `1..=days`.
    pub fn check_day_sequence(&self, days: u32) -> std::result::Result<(), String> {
        if self.daily_plans.len() != days as usize {
            return Err(format!(
                "expected {} daily plans, got {}",
                days,
                self.daily_plans.len()
            ));
        }

        let mut seen = HashSet::new();
        for plan in &self.daily_plans {
            if plan.day == 0 || plan.day > days {
                return Err(format!("day {} is outside 1..={}", plan.day, days));
            }
            if !seen.insert(plan.day) {
                return Err(format!("day {} appears more than once", plan.day));
            }
        }

        Ok(())
    }
}

impl CompletionSchema for Itinerary {
    fn schema() -> &'static SchemaHandle {
        static HANDLE: OnceLock<SchemaHandle> = OnceLock::new();
        HANDLE.get_or_init(|| SchemaHandle::for_type::<Itinerary>("Itinerary"))
    }
}

fn present<T>(field: &Option<Vec<T>>) -> Option<&[T]> {
    field.as_deref().filter(|items| !items.is_empty())
}
