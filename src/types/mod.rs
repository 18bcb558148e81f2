pub mod itinerary;
pub mod request;
pub mod response;

pub use itinerary::{Activity, DayPlan, HistoricalSite, Hotel, HotelCategory, Itinerary, PracticalInfo};
pub use request::{PlannerRequest, TravelStyle, DEFAULT_DAYS, MAX_DAYS, MIN_DAYS};
pub use response::{deserialize_structured_response, parse_structured_content};
