use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    config::PlannerConfig,
    error::{PlannerError, Result},
    schemas::CompletionSchema,
    services::{generate_itinerary_prompt, OpenAIClient, TextGenerator},
    types::{deserialize_structured_response, parse_structured_content, Itinerary, PlannerRequest},
};

/// Turns a planner request into a validated itinerary.
#[derive(Clone)]
pub struct Planner {
    generator: Arc<dyn TextGenerator>,
}

impl std::fmt::Debug for Planner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Planner").finish_non_exhaustive()
    }
}

impl Planner {
    pub fn new(config: PlannerConfig) -> Result<Self> {
        let client = OpenAIClient::from_config(&config)?;
        info!(target: "evasion::generation", model = client.model(), "planner ready");
        Ok(Self::with_generator(client))
    }

    pub fn from_env() -> Result<Self> {
        Self::new(PlannerConfig::from_env())
    }

    /// Use any text generator, e.g. a local model or a test double.
    pub fn with_generator(generator: impl TextGenerator + 'static) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }

    /// Generate an itinerary.
    ///
    /// Invalid input fails before any request is sent. Every other failure,
    /// whatever its cause, is reported as a single `Generation` error.
    pub async fn generate(&self, request: &PlannerRequest) -> Result<Itinerary> {
        request.validate()?;

        info!(
            target: "evasion::generation",
            destination = %request.destination,
            days = request.days,
            style = %request.style,
            "generating itinerary"
        );

        match self.request_itinerary(request).await {
            Ok(itinerary) => {
                info!(
                    target: "evasion::generation",
                    title = %itinerary.trip_title,
                    days = itinerary.day_count(),
                    "itinerary generated"
                );
                Ok(itinerary)
            }
            Err(err) => {
                error!(target: "evasion::generation", error = %err, "generation failed");
                Err(PlannerError::Generation(err.to_string()))
            }
        }
    }

    async fn request_itinerary(&self, request: &PlannerRequest) -> Result<Itinerary> {
        let prompt = generate_itinerary_prompt(request);
        let schema = Itinerary::schema();

        let content = self.generator.generate_structured(&prompt, schema).await?;
        let payload = parse_structured_content(&content)?;
        let itinerary: Itinerary = deserialize_structured_response(&payload, schema)?;

        itinerary
            .check_day_sequence(request.days)
            .map_err(PlannerError::Validation)?;

        if !itinerary
            .destination
            .to_lowercase()
            .contains(&request.destination.trim().to_lowercase())
        {
            warn!(
                target: "evasion::generation",
                requested = %request.destination,
                returned = %itinerary.destination,
                "service renamed the destination"
            );
        }

        Ok(itinerary)
    }
}
