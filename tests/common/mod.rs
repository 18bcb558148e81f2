#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use evasion_planner::{
    Activity, DayPlan, HistoricalSite, Hotel, Itinerary, PlannerError, PracticalInfo,
    SchemaHandle, TextGenerator,
};

pub fn activity(time: &str, description: &str) -> Activity {
    Activity {
        time: time.to_string(),
        description: description.to_string(),
    }
}

/// A plain itinerary with `days` numbered plans and no optional sections.
pub fn itinerary(destination: &str, days: u32) -> Itinerary {
    Itinerary {
        trip_title: format!("{destination} en douceur"),
        summary: format!("Quelques jours paisibles à {destination}."),
        destination: destination.to_string(),
        daily_plans: (1..=days)
            .map(|day| DayPlan {
                day,
                theme: format!("Journée {day}"),
                activities: vec![
                    activity("Matin", "Balade dans le vieux quartier"),
                    activity("12h30", "Déjeuner au marché couvert"),
                    activity("Soir", "Dîner sur une terrasse"),
                ],
            })
            .collect(),
        packing_list: None,
        local_tips: None,
        hotel_recommendations: None,
        historical_sites: None,
        practical_info: None,
    }
}

/// The Kyoto guide used across scenarios, with every optional section filled.
pub fn kyoto() -> Itinerary {
    let mut itinerary = itinerary("Kyoto", 3);
    itinerary.trip_title = "Kyoto, l'art de la lenteur".to_string();
    itinerary.packing_list = Some(vec![
        "Chaussures sans lacets".to_string(),
        "Parapluie pliable".to_string(),
    ]);
    itinerary.local_tips = Some(vec!["On ne laisse pas de pourboire.".to_string()]);
    itinerary.hotel_recommendations = Some(vec![
        Hotel {
            name: "Ritz-Carlton Kyoto".to_string(),
            category: "Luxe".to_string(),
            description: "Au bord de la rivière Kamo.".to_string(),
        },
        Hotel {
            name: "Ryokan Yachiyo".to_string(),
            category: "Confort".to_string(),
            description: "Près du Nanzen-ji.".to_string(),
        },
        Hotel {
            name: "Piece Hostel".to_string(),
            category: "Budget".to_string(),
            description: "À deux pas de la gare.".to_string(),
        },
    ]);
    itinerary.historical_sites = Some(vec![HistoricalSite {
        name: "Kinkaku-ji".to_string(),
        description: "Le pavillon d'or.".to_string(),
        ticket_price: "500 ¥".to_string(),
    }]);
    itinerary.practical_info = Some(PracticalInfo {
        currency: "Yen".to_string(),
        budget_estimate: "120 € par jour".to_string(),
        weather_tip: "Printemps doux, prévoir une petite veste.".to_string(),
        local_dishes: vec!["Yudofu".to_string(), "Matcha".to_string()],
    });
    itinerary
}

/// Chat-completions body whose first choice carries `content`.
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

/// Generator returning a canned answer and counting calls.
#[derive(Clone)]
pub struct StubGenerator {
    answer: Result<String, String>,
    calls: Arc<AtomicUsize>,
}

impl StubGenerator {
    pub fn answering(itinerary: &Itinerary) -> Self {
        Self {
            answer: Ok(serde_json::to_string(itinerary).unwrap()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn raw(content: &str) -> Self {
        Self {
            answer: Ok(content.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            answer: Err(message.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate_structured(
        &self,
        _prompt: &str,
        _schema: &SchemaHandle,
    ) -> evasion_planner::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone().map_err(PlannerError::Http)
    }
}
