use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parse a form choice (e.g. `"north-america"`) into its enum, ignoring case
/// and surrounding whitespace.
pub fn parse_choice<T: DeserializeOwned>(text: &str) -> Option<T> {
    let lowered = text.trim().to_lowercase();
    let de: StrDeserializer<'_, ValueError> = lowered.as_str().into_deserializer();
    T::deserialize(de).ok()
}

/// Wire text of a choice enum, the inverse of [`parse_choice`].
pub fn choice_text<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(text)) => text,
        _ => String::new(),
    }
}

/// Dashboard the user is filling in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Student,
    Professional,
    Tourist,
}

impl Persona {
    /// Plural noun for the kind of candidate this persona is shown
    pub fn candidate_noun(&self) -> &'static str {
        match self {
            Persona::Student => "universities",
            Persona::Professional => "countries",
            Persona::Tourist => "destinations",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    NorthAmerica,
    Europe,
    Australia,
    Asia,
    LatinAmerica,
}

impl Region {
    /// Countries that count as being inside the region
    pub fn countries(&self) -> &'static [&'static str] {
        match self {
            Region::NorthAmerica => &["United States", "Canada"],
            Region::Europe => &["United Kingdom", "Germany"],
            Region::Australia => &["Australia"],
            Region::Asia => &["Japan", "Singapore"],
            Region::LatinAmerica => &["Brazil", "Mexico"],
        }
    }

    pub fn contains(&self, country: &str) -> bool {
        self.countries().contains(&country)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    Tropical,
    Temperate,
    Warm,
    Cold,
    Snow,
    Beach,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    #[default]
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageProficiency {
    #[default]
    None,
    German,
    French,
    Spanish,
    Japanese,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardizedTest {
    #[default]
    None,
    Gre,
    Gmat,
    Sat,
}

impl StandardizedTest {
    /// Accepted score range, `None` when no test was taken
    pub fn score_range(&self) -> Option<(f32, f32)> {
        match self {
            StandardizedTest::None => None,
            StandardizedTest::Gre => Some((260.0, 340.0)),
            StandardizedTest::Gmat => Some((200.0, 800.0)),
            StandardizedTest::Sat => Some((400.0, 1600.0)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnglishTest {
    #[default]
    None,
    Toefl,
    Ielts,
}

impl EnglishTest {
    pub fn score_range(&self) -> Option<(f32, f32)> {
        match self {
            EnglishTest::None => None,
            EnglishTest::Toefl => Some((0.0, 120.0)),
            EnglishTest::Ielts => Some((0.0, 9.0)),
        }
    }
}

/// A test taken by the student together with the reported score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestScore<T> {
    pub test: T,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Tech,
    Healthcare,
    Finance,
    Engineering,
    Manufacturing,
    Education,
    Consulting,
    Agriculture,
    Creative,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisaGoal {
    Pr,
    Work,
    Flexible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkLifePriority {
    Critical,
    Important,
    Flexible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Adventure,
    Cultural,
    Nature,
    Honeymoon,
    Budget,
    Luxury,
    Family,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodPreference {
    Vegetarian,
    Local,
    International,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguagePreference {
    English,
    Immersion,
}

/// Qualitative level used by catalog facts (demand, cost, balance)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisaDifficulty {
    Easy,
    #[serde(rename = "Easy-Medium")]
    EasyMedium,
    Medium,
    #[serde(rename = "Medium-Hard")]
    MediumHard,
    Hard,
}

/// Student dashboard preferences after normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPreferences {
    pub degree_level: String,
    pub field_of_study: String,
    pub gpa: f32,
    pub budget: BudgetTier,
    pub program_type: String,
    pub destination: Option<Region>,
    pub climate: Option<Climate>,
    pub scholarship_interest: bool,
    pub work_importance: Importance,
    pub visa_importance: Importance,
    pub language_proficiency: LanguageProficiency,
    pub test_score: Option<TestScore<StandardizedTest>>,
    pub english_score: Option<TestScore<EnglishTest>>,
}

/// Professional dashboard preferences after normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalPreferences {
    pub industry: Industry,
    pub job_role: String,
    pub experience: String,
    pub skills: String,
    pub expected_salary: u32,
    pub cost_tolerance: BudgetTier,
    pub visa_goal: VisaGoal,
    pub work_life_balance: WorkLifePriority,
    pub cultural_adaptation: Option<String>,
    pub career_growth: Option<String>,
}

/// Tourist dashboard preferences after normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouristPreferences {
    pub trip_type: Option<TripType>,
    pub trip_duration: String,
    pub budget: Option<BudgetTier>,
    pub climate: Option<Climate>,
    pub food_preference: Option<FoodPreference>,
    pub language_preference: Option<LanguagePreference>,
    pub travel_season: Option<String>,
    pub travel_style: Option<String>,
}

/// Canonical preference record produced per form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "persona", rename_all = "lowercase")]
pub enum PreferenceRecord {
    Student(StudentPreferences),
    Professional(ProfessionalPreferences),
    Tourist(TouristPreferences),
}

impl PreferenceRecord {
    pub fn persona(&self) -> Persona {
        match self {
            PreferenceRecord::Student(_) => Persona::Student,
            PreferenceRecord::Professional(_) => Persona::Professional,
            PreferenceRecord::Tourist(_) => Persona::Tourist,
        }
    }
}

/// Something the pipeline can score and rank
pub trait Candidate: Clone {
    fn name(&self) -> &str;
    fn match_score(&self) -> u8;
    fn set_match_score(&mut self, score: u8);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub name: String,
    pub country: String,
    pub ranking: u16,
    pub tuition: u32,
    pub programs: Vec<String>,
    pub acceptance_rate: f32,
    pub climate: Climate,
    pub scholarship_availability: Level,
    pub class_size: String,
    pub work_opportunities: bool,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub match_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: String,
    pub industry_demand: BTreeMap<Industry, Level>,
    pub salary_range: String,
    pub average_salary: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    pub cost_of_living: Level,
    pub visa_difficulty: VisaDifficulty,
    pub visa_options: Vec<String>,
    pub processing_time: String,
    pub healthcare: String,
    pub work_life_balance: Level,
    pub job_market: String,
    pub cultural_adaptation: String,
    pub pr_path: String,
    pub highlights: Vec<String>,
    pub job_openings: Vec<String>,
    pub benefits: Vec<String>,
    pub challenges: Vec<String>,
    #[serde(default)]
    pub match_score: u8,
}

impl Country {
    pub fn demand_for(&self, industry: Industry) -> Option<Level> {
        self.industry_demand.get(&industry).copied()
    }

    pub fn has_straightforward_pr_path(&self) -> bool {
        self.pr_path.contains("Straightforward")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub name: String,
    pub country: String,
    pub trip_types: Vec<TripType>,
    pub climate: Climate,
    pub budget: BudgetTier,
    pub best_seasons: Vec<String>,
    pub description: String,
    pub highlights: Vec<String>,
    pub food: Vec<String>,
    pub language: String,
    pub safety: String,
    pub visa: String,
    pub itinerary: Vec<String>,
    pub estimated_cost: String,
    pub accommodation: Vec<String>,
    pub activities: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub match_score: u8,
}

macro_rules! impl_candidate {
    ($($ty:ty),*) => {
        $(
            impl Candidate for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn match_score(&self) -> u8 {
                    self.match_score
                }

                fn set_match_score(&mut self, score: u8) {
                    self.match_score = score;
                }
            }
        )*
    };
}

impl_candidate!(University, Country, Destination);
