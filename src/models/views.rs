//! View-models handed to whatever renders the result grids.

use serde::{Deserialize, Serialize};

use crate::models::domain::{choice_text, Country, Destination, Persona, University};
use crate::models::responses::RemoteRecommendation;

/// A labelled fact shown on a card, e.g. `Tuition: $38,000/year`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFact {
    pub label: String,
    pub value: String,
}

impl CardFact {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// One ranked result ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultCard {
    pub kind: Persona,
    pub title: String,
    pub subtitle: String,
    /// Match percentage, 0-100
    pub match_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub facts: Vec<CardFact>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Longer list shown in the detail view (itinerary, openings)
    #[serde(default)]
    pub details: Vec<String>,
}

/// `52000` -> `"52,000"`
fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl From<&University> for ResultCard {
    fn from(uni: &University) -> Self {
        Self {
            kind: Persona::Student,
            title: uni.name.clone(),
            subtitle: uni.country.clone(),
            match_score: uni.match_score,
            image: uni.image.clone(),
            facts: vec![
                CardFact::new("Ranking", format!("#{}", uni.ranking)),
                CardFact::new("Tuition", format!("${}/year", with_thousands(u64::from(uni.tuition)))),
                CardFact::new("Acceptance rate", format!("{:.1}%", uni.acceptance_rate)),
                CardFact::new("Scholarships", choice_text(&uni.scholarship_availability)),
                CardFact::new("Class size", uni.class_size.clone()),
            ],
            tags: uni.programs.clone(),
            highlights: Vec::new(),
            details: Vec::new(),
        }
    }
}

impl From<&Country> for ResultCard {
    fn from(country: &Country) -> Self {
        Self {
            kind: Persona::Professional,
            title: country.name.clone(),
            subtitle: country.job_market.clone(),
            match_score: country.match_score,
            image: None,
            facts: vec![
                CardFact::new("Salary range", country.salary_range.clone()),
                CardFact::new("Cost of living", choice_text(&country.cost_of_living)),
                CardFact::new("Visa difficulty", choice_text(&country.visa_difficulty)),
                CardFact::new("Processing time", country.processing_time.clone()),
                CardFact::new("Work-life balance", choice_text(&country.work_life_balance)),
                CardFact::new("Healthcare", country.healthcare.clone()),
                CardFact::new("PR path", country.pr_path.clone()),
            ],
            tags: country.visa_options.clone(),
            highlights: country.highlights.clone(),
            details: country.job_openings.clone(),
        }
    }
}

impl From<&Destination> for ResultCard {
    fn from(dest: &Destination) -> Self {
        Self {
            kind: Persona::Tourist,
            title: dest.name.clone(),
            subtitle: dest.description.clone(),
            match_score: dest.match_score,
            image: dest.image.clone(),
            facts: vec![
                CardFact::new("Estimated cost", dest.estimated_cost.clone()),
                CardFact::new("Best seasons", dest.best_seasons.join(", ")),
                CardFact::new("Language", dest.language.clone()),
                CardFact::new("Safety", dest.safety.clone()),
                CardFact::new("Visa", dest.visa.clone()),
            ],
            tags: dest.trip_types.iter().map(choice_text).collect(),
            highlights: dest.highlights.clone(),
            details: dest.itinerary.clone(),
        }
    }
}

impl From<&RemoteRecommendation> for ResultCard {
    fn from(rec: &RemoteRecommendation) -> Self {
        let mut facts = Vec::with_capacity(4);
        if rec.ranking > 0 {
            facts.push(CardFact::new("Ranking", format!("#{}", rec.ranking)));
        }
        if rec.tuition_fee > 0.0 {
            facts.push(CardFact::new(
                "Tuition",
                format!("${}/year", with_thousands(rec.tuition_fee.round() as u64)),
            ));
        }
        if rec.acceptance_rate > 0.0 {
            facts.push(CardFact::new("Acceptance rate", format!("{:.1}%", rec.acceptance_rate)));
        }
        if !rec.scholarship_availability.is_empty() {
            facts.push(CardFact::new("Scholarships", rec.scholarship_availability.clone()));
        }

        Self {
            kind: Persona::Student,
            title: rec.name.clone(),
            subtitle: rec.country.clone(),
            match_score: rec.match_score.round().clamp(0.0, 100.0) as u8,
            image: rec.image.clone(),
            facts,
            tags: rec.programs.iter().map(|p| p.trim().to_string()).collect(),
            highlights: Vec::new(),
            details: Vec::new(),
        }
    }
}
