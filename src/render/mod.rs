//! Plain-text rendering of an itinerary, one tab at a time.

use std::str::FromStr;

use crate::{
    error::PlannerError,
    types::{HotelCategory, Itinerary, PlannerRequest},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItineraryTab {
    #[default]
    Itinerary,
    Hotels,
    Sites,
    Practical,
    Essentials,
}

impl ItineraryTab {
    pub const ALL: [ItineraryTab; 5] = [
        ItineraryTab::Itinerary,
        ItineraryTab::Hotels,
        ItineraryTab::Sites,
        ItineraryTab::Practical,
        ItineraryTab::Essentials,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ItineraryTab::Itinerary => "itinerary",
            ItineraryTab::Hotels => "hotels",
            ItineraryTab::Sites => "sites",
            ItineraryTab::Practical => "practical",
            ItineraryTab::Essentials => "essentials",
        }
    }
}

impl FromStr for ItineraryTab {
    type Err = PlannerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_lowercase();
        ItineraryTab::ALL
            .into_iter()
            .find(|tab| tab.name() == wanted)
            .ok_or_else(|| PlannerError::InvalidInput(format!("unknown tab: {}", value.trim())))
    }
}

/// Header card shown above every tab.
pub fn render_header(itinerary: &Itinerary, request: &PlannerRequest) -> String {
    let lines = vec![
        "DESTINATION CONFIRMÉE".to_string(),
        itinerary.trip_title.clone(),
        format!("  {}", itinerary.summary),
        format!("Durée : {} Jours | Style : {}", request.days, request.style),
    ];
    lines.join("\n")
}

pub fn render_tab(itinerary: &Itinerary, tab: ItineraryTab) -> String {
    let mut lines = Vec::new();
    match tab {
        ItineraryTab::Itinerary => render_days(&mut lines, itinerary),
        ItineraryTab::Hotels => render_hotels(&mut lines, itinerary),
        ItineraryTab::Sites => render_sites(&mut lines, itinerary),
        ItineraryTab::Practical => render_practical(&mut lines, itinerary),
        ItineraryTab::Essentials => render_essentials(&mut lines, itinerary),
    }
    lines.join("\n")
}

fn render_days(lines: &mut Vec<String>, itinerary: &Itinerary) {
    for plan in &itinerary.daily_plans {
        lines.push(String::new());
        lines.push(format!("Jour {} · {}", plan.day, plan.theme));
        for activity in &plan.activities {
            lines.push(format!("  {:<10} {}", activity.time, activity.description));
        }
    }
}

fn render_hotels(lines: &mut Vec<String>, itinerary: &Itinerary) {
    let Some(hotels) = itinerary.hotel_recommendations() else {
        lines.push(String::new());
        lines.push("Aucune recommandation d'hébergement.".to_string());
        return;
    };

    for category in HotelCategory::ALL {
        let matching = category.filter(hotels);
        if matching.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(format!("[{}]", category));
        for hotel in matching {
            lines.push(format!("  {} : {}", hotel.name, hotel.description));
        }
    }
}

fn render_sites(lines: &mut Vec<String>, itinerary: &Itinerary) {
    let Some(sites) = itinerary.historical_sites() else {
        lines.push(String::new());
        lines.push("Aucun site historique proposé.".to_string());
        return;
    };

    for site in sites {
        lines.push(String::new());
        lines.push(format!("{} ({})", site.name, site.ticket_price));
        lines.push(format!("  {}", site.description));
    }
}

fn render_practical(lines: &mut Vec<String>, itinerary: &Itinerary) {
    let Some(info) = itinerary.practical_info() else {
        lines.push(String::new());
        lines.push("Aucune information pratique.".to_string());
        return;
    };

    lines.push(String::new());
    lines.push(format!("Budget estimé : {}", info.budget_estimate));
    lines.push(format!("Devise : {}", info.currency));
    lines.push(format!("Météo : {}", info.weather_tip));
    if !info.local_dishes.is_empty() {
        lines.push(format!("Spécialités : {}", info.local_dishes.join(", ")));
    }
}

fn render_essentials(lines: &mut Vec<String>, itinerary: &Itinerary) {
    if let Some(items) = itinerary.packing_list() {
        lines.push(String::new());
        lines.push("Dans la valise".to_string());
        lines.extend(items.iter().map(|item| format!("  • {item}")));
    }
    if let Some(tips) = itinerary.local_tips() {
        lines.push(String::new());
        lines.push("Conseils locaux".to_string());
        lines.extend(tips.iter().map(|tip| format!("  • {tip}")));
    }
}
