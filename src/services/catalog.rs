use crate::models::domain::{
    BudgetTier, Climate, Country, Destination, Industry, Level, TripType, University,
    VisaDifficulty,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog has no {0}")]
    Empty(&'static str),
}

/// Fixed set of candidates the local pipeline ranks
///
/// Built once at startup and shared read-only; ranking works on clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub universities: Vec<University>,
    pub countries: Vec<Country>,
    pub destinations: Vec<Destination>,
}

impl Catalog {
    /// Load the catalog from `path`, or fall back to the built-in data
    pub fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => {
                let catalog = Self::from_json_file(path)?;
                tracing::info!(
                    "Loaded catalog from {} ({} universities, {} countries, {} destinations)",
                    path,
                    catalog.universities.len(),
                    catalog.countries.len(),
                    catalog.destinations.len()
                );
                Ok(catalog)
            }
            None => Ok(Self::builtin()),
        }
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.check()?;
        Ok(catalog)
    }

    fn check(&self) -> Result<(), CatalogError> {
        if self.universities.is_empty() {
            return Err(CatalogError::Empty("universities"));
        }
        if self.countries.is_empty() {
            return Err(CatalogError::Empty("countries"));
        }
        if self.destinations.is_empty() {
            return Err(CatalogError::Empty("destinations"));
        }
        Ok(())
    }

    /// The sample catalog shipped with the dashboards
    pub fn builtin() -> Self {
        Self {
            universities: builtin_universities(),
            countries: builtin_countries(),
            destinations: builtin_destinations(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn university(
    name: &str,
    country: &str,
    ranking: u16,
    tuition: u32,
    programs: &[&str],
    acceptance_rate: f32,
    climate: Climate,
    scholarship_availability: Level,
    class_size: &str,
    image: Option<&str>,
) -> University {
    University {
        name: name.to_string(),
        country: country.to_string(),
        ranking,
        tuition,
        programs: strings(programs),
        acceptance_rate,
        climate,
        scholarship_availability,
        class_size: class_size.to_string(),
        work_opportunities: true,
        image: image.map(str::to_string),
        match_score: 0,
    }
}

fn builtin_universities() -> Vec<University> {
    vec![
        university(
            "Stanford University",
            "United States",
            3,
            52_000,
            &["Computer Science", "Data Science", "Engineering"],
            4.3,
            Climate::Temperate,
            Level::High,
            "medium",
            Some("https://images.unsplash.com/photo-1541339907198-e08756dedf3f?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80"),
        ),
        university(
            "University of Toronto",
            "Canada",
            18,
            42_000,
            &["Business Administration", "Economics", "Computer Science"],
            43.0,
            Climate::Cold,
            Level::Medium,
            "large",
            Some("https://images.unsplash.com/photo-1528901166007-3784c7dd3653?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80"),
        ),
        university(
            "Imperial College London",
            "United Kingdom",
            10,
            38_000,
            &["Engineering", "Computer Science", "Data Science"],
            14.3,
            Climate::Temperate,
            Level::Medium,
            "medium",
            Some("https://images.unsplash.com/photo-1519494026892-80bbd2d6fd0d?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80"),
        ),
        university(
            "University of Melbourne",
            "Australia",
            33,
            35_000,
            &["Business Administration", "Economics", "Computer Science"],
            70.0,
            Climate::Tropical,
            Level::High,
            "large",
            Some("https://images.unsplash.com/photo-1523050854058-8df90110c9f1?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80"),
        ),
        university(
            "Technical University of Munich",
            "Germany",
            55,
            18_000,
            &["Engineering", "Computer Science"],
            8.0,
            Climate::Temperate,
            Level::High,
            "small",
            Some("https://images.unsplash.com/photo-1596726895343-5b2f2b1b5ee5?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80"),
        ),
        university(
            "Harvard University",
            "United States",
            1,
            55_000,
            &["Computer Science", "Medicine", "Law"],
            4.7,
            Climate::Temperate,
            Level::High,
            "medium",
            None,
        ),
        university(
            "MIT",
            "United States",
            2,
            53_000,
            &["Engineering", "Computer Science", "Physics"],
            6.7,
            Climate::Temperate,
            Level::High,
            "medium",
            None,
        ),
        university(
            "University of Cambridge",
            "United Kingdom",
            5,
            39_000,
            &["Engineering", "Computer Science", "Economics"],
            21.0,
            Climate::Temperate,
            Level::Medium,
            "medium",
            None,
        ),
        university(
            "National University of Singapore",
            "Singapore",
            11,
            32_000,
            &["Computer Science", "Business", "Engineering"],
            5.0,
            Climate::Tropical,
            Level::Medium,
            "large",
            None,
        ),
        university(
            "University of Tokyo",
            "Japan",
            25,
            15_000,
            &["Engineering", "Computer Science", "Robotics"],
            34.0,
            Climate::Temperate,
            Level::Medium,
            "large",
            None,
        ),
    ]
}

fn demand(entries: &[(Industry, Level)]) -> BTreeMap<Industry, Level> {
    entries.iter().copied().collect()
}

fn builtin_countries() -> Vec<Country> {
    vec![
        Country {
            name: "United States".to_string(),
            industry_demand: demand(&[
                (Industry::Tech, Level::VeryHigh),
                (Industry::Healthcare, Level::High),
                (Industry::Finance, Level::VeryHigh),
                (Industry::Engineering, Level::High),
            ]),
            salary_range: "$80,000 - $180,000".to_string(),
            average_salary: 120_000,
            skills: strings(&["JavaScript", "Python", "Machine Learning", "Project management", "Data Analysis"]),
            cost_of_living: Level::High,
            visa_difficulty: VisaDifficulty::Hard,
            visa_options: strings(&["H-1B", "L-1", "O-1", "EB-2/EB-3"]),
            processing_time: "6-18 months".to_string(),
            healthcare: "Private (Employer-sponsored)".to_string(),
            work_life_balance: Level::Medium,
            job_market: "Very Competitive".to_string(),
            cultural_adaptation: "Moderate".to_string(),
            pr_path: "5+ years (Complex)".to_string(),
            highlights: strings(&["Highest salaries", "Tech innovation hub", "Diverse opportunities"]),
            job_openings: strings(&[
                "Senior Software Engineer - Silicon Valley",
                "Data Scientist - New York",
                "Product Manager - Seattle",
            ]),
            benefits: strings(&["High earning potential", "Career growth", "Innovation ecosystem"]),
            challenges: strings(&["Visa competition", "High cost of living", "Work culture intensity"]),
            match_score: 0,
        },
        Country {
            name: "Germany".to_string(),
            industry_demand: demand(&[
                (Industry::Tech, Level::High),
                (Industry::Engineering, Level::VeryHigh),
                (Industry::Manufacturing, Level::VeryHigh),
                (Industry::Healthcare, Level::High),
            ]),
            salary_range: "€45,000 - €85,000".to_string(),
            average_salary: 65_000,
            skills: strings(&["JavaScript", "Python", "Machine Learning", "Project management", "Data Analysis"]),
            cost_of_living: Level::Medium,
            visa_difficulty: VisaDifficulty::Medium,
            visa_options: strings(&["Blue Card", "Job Seeker Visa", "Work Visa"]),
            processing_time: "3-6 months".to_string(),
            healthcare: "Public (Excellent)".to_string(),
            work_life_balance: Level::High,
            job_market: "Stable".to_string(),
            cultural_adaptation: "Moderate".to_string(),
            pr_path: "21-33 months (Straightforward)".to_string(),
            highlights: strings(&["Strong engineering sector", "Excellent work-life balance", "Social benefits"]),
            job_openings: strings(&[
                "Automotive Engineer - Munich",
                "Software Developer - Berlin",
                "Mechanical Engineer - Stuttgart",
            ]),
            benefits: strings(&["Work-life balance", "Social security", "PR pathway"]),
            challenges: strings(&["Language barrier", "Bureaucracy", "Tax rates"]),
            match_score: 0,
        },
        Country {
            name: "Canada".to_string(),
            industry_demand: demand(&[
                (Industry::Tech, Level::VeryHigh),
                (Industry::Healthcare, Level::High),
                (Industry::Finance, Level::High),
                (Industry::Education, Level::Medium),
            ]),
            salary_range: "CAD$60,000 - CAD$120,000".to_string(),
            average_salary: 85_000,
            skills: strings(&["JavaScript", "Python", "Project Management", "Data Analysis"]),
            cost_of_living: Level::MediumHigh,
            visa_difficulty: VisaDifficulty::EasyMedium,
            visa_options: strings(&["Express Entry", "PNP", "Startup Visa", "Work Permit"]),
            processing_time: "6-12 months".to_string(),
            healthcare: "Public (Excellent)".to_string(),
            work_life_balance: Level::High,
            job_market: "Growing".to_string(),
            cultural_adaptation: "Easy".to_string(),
            pr_path: "6-18 months (Straightforward)".to_string(),
            highlights: strings(&["Immigrant-friendly", "High quality of life", "Tech growth"]),
            job_openings: strings(&[
                "AI Researcher - Toronto",
                "Healthcare Professional - Vancouver",
                "FinTech Analyst - Montreal",
            ]),
            benefits: strings(&["PR pathway", "Multicultural society", "Work-life balance"]),
            challenges: strings(&["Cold winters", "High housing costs", "Competitive job market"]),
            match_score: 0,
        },
        Country {
            name: "Singapore".to_string(),
            industry_demand: demand(&[
                (Industry::Finance, Level::VeryHigh),
                (Industry::Tech, Level::High),
                (Industry::Consulting, Level::High),
                (Industry::Manufacturing, Level::Medium),
            ]),
            salary_range: "SGD$70,000 - SGD$150,000".to_string(),
            average_salary: 100_000,
            skills: Vec::new(),
            cost_of_living: Level::VeryHigh,
            visa_difficulty: VisaDifficulty::MediumHard,
            visa_options: strings(&["Employment Pass", "S Pass", "EntrePass"]),
            processing_time: "2-4 months".to_string(),
            healthcare: "Private (Excellent but expensive)".to_string(),
            work_life_balance: Level::Medium,
            job_market: "Competitive".to_string(),
            cultural_adaptation: "Easy".to_string(),
            pr_path: "2-3 years (Selective)".to_string(),
            highlights: strings(&["Financial hub", "Strategic location", "Low taxes"]),
            job_openings: strings(&[
                "Investment Banker - CBD",
                "Tech Lead - Marina Bay",
                "Supply Chain Manager - Jurong",
            ]),
            benefits: strings(&["Low taxes", "Safety", "Business ecosystem"]),
            challenges: strings(&["High cost of living", "Work pressure", "Small country"]),
            match_score: 0,
        },
        Country {
            name: "Australia".to_string(),
            industry_demand: demand(&[
                (Industry::Healthcare, Level::VeryHigh),
                (Industry::Tech, Level::High),
                (Industry::Engineering, Level::High),
                (Industry::Education, Level::High),
            ]),
            salary_range: "AUD$70,000 - AUD$140,000".to_string(),
            average_salary: 95_000,
            skills: Vec::new(),
            cost_of_living: Level::High,
            visa_difficulty: VisaDifficulty::Medium,
            visa_options: strings(&["Skilled Independent Visa", "Employer Sponsorship", "Global Talent"]),
            processing_time: "6-12 months".to_string(),
            healthcare: "Public (Excellent)".to_string(),
            work_life_balance: Level::High,
            job_market: "Stable".to_string(),
            cultural_adaptation: "Easy".to_string(),
            pr_path: "2-4 years (Straightforward)".to_string(),
            highlights: strings(&["Quality of life", "Skilled migration program", "Beautiful environment"]),
            job_openings: strings(&[
                "Medical Specialist - Sydney",
                "Mining Engineer - Perth",
                "IT Consultant - Melbourne",
            ]),
            benefits: strings(&["Lifestyle", "Healthcare", "Outdoor activities"]),
            challenges: strings(&["Distance from other countries", "High living costs", "Visa points system"]),
            match_score: 0,
        },
        Country {
            name: "Netherlands".to_string(),
            industry_demand: demand(&[
                (Industry::Tech, Level::VeryHigh),
                (Industry::Engineering, Level::High),
                (Industry::Agriculture, Level::High),
                (Industry::Creative, Level::High),
            ]),
            salary_range: "€50,000 - €90,000".to_string(),
            average_salary: 70_000,
            skills: Vec::new(),
            cost_of_living: Level::MediumHigh,
            visa_difficulty: VisaDifficulty::Medium,
            visa_options: strings(&["Highly Skilled Migrant", "Blue Card", "Startup Visa"]),
            processing_time: "2-4 months".to_string(),
            healthcare: "Private (Mandatory insurance)".to_string(),
            work_life_balance: Level::VeryHigh,
            job_market: "Innovative".to_string(),
            cultural_adaptation: "Easy".to_string(),
            pr_path: "5 years (Straightforward)".to_string(),
            highlights: strings(&["Work-life balance", "English proficiency", "Innovation"]),
            job_openings: strings(&[
                "AI Engineer - Amsterdam",
                "AgriTech Specialist - Rotterdam",
                "UX Designer - Utrecht",
            ]),
            benefits: strings(&["Work culture", "Cycling infrastructure", "International community"]),
            challenges: strings(&["Weather", "Housing shortage", "Taxes"]),
            match_score: 0,
        },
    ]
}

fn builtin_destinations() -> Vec<Destination> {
    vec![
        Destination {
            name: "Bali, Indonesia".to_string(),
            country: "Indonesia".to_string(),
            trip_types: vec![TripType::Adventure, TripType::Cultural, TripType::Nature, TripType::Honeymoon, TripType::Budget],
            climate: Climate::Tropical,
            budget: BudgetTier::Medium,
            best_seasons: strings(&["April", "May", "June", "September", "October"]),
            description: "The Island of Gods offers stunning beaches, ancient temples, and vibrant culture perfect for adventure and relaxation.".to_string(),
            highlights: strings(&["Uluwatu Temple", "Rice Terraces", "Beach Clubs", "Waterfalls"]),
            food: strings(&["Local cuisine", "Vegetarian options", "International"]),
            language: "Multilingual".to_string(),
            safety: "Moderate".to_string(),
            visa: "Visa on arrival for most nationalities (30 days)".to_string(),
            itinerary: strings(&[
                "Day 1: Arrival in Denpasar, transfer to hotel, beach relaxation",
                "Day 2: Uluwatu Temple visit and Kecak dance performance",
                "Day 3: Ubud rice terraces and traditional Balinese cooking class",
                "Day 4: Waterfall exploration and spa treatment",
                "Day 5: Beach activities and local market shopping",
                "Day 6: Optional day trip to Nusa Penida island",
                "Day 7: Departure preparation and last-minute shopping",
            ]),
            estimated_cost: "$1,200 - $2,500".to_string(),
            accommodation: strings(&["Luxury resorts", "Villas", "Budget hotels"]),
            activities: strings(&["Surfing", "Yoga", "Temple visits", "Spa treatments"]),
            image: Some("https://images.unsplash.com/photo-1518548419970-58e3b4079ab2?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80".to_string()),
            match_score: 0,
        },
        Destination {
            name: "Swiss Alps".to_string(),
            country: "Switzerland".to_string(),
            trip_types: vec![TripType::Adventure, TripType::Nature, TripType::Luxury, TripType::Honeymoon],
            climate: Climate::Snow,
            budget: BudgetTier::High,
            best_seasons: strings(&["December", "January", "February", "June", "July"]),
            description: "Breathtaking mountain landscapes perfect for winter sports and luxury mountain retreats.".to_string(),
            highlights: strings(&["Jungfraujoch", "Matterhorn", "Lake Geneva", "Cable car rides"]),
            food: strings(&["Swiss cuisine", "International", "Vegetarian options"]),
            language: "Multilingual".to_string(),
            safety: "High".to_string(),
            visa: "Schengen visa required".to_string(),
            itinerary: strings(&[
                "Day 1: Arrival in Zurich, train to Interlaken",
                "Day 2: Jungfraujoch - Top of Europe excursion",
                "Day 3: Skiing or snowboarding in Grindelwald",
                "Day 4: Lake Geneva cruise and chocolate factory tour",
                "Day 5: Mountain hiking and photography",
                "Day 6: Relaxation at spa and local cuisine experience",
                "Day 7: Departure from Zurich",
            ]),
            estimated_cost: "$3,000 - $6,000".to_string(),
            accommodation: strings(&["Luxury hotels", "Mountain lodges", "Ski resorts"]),
            activities: strings(&["Skiing", "Hiking", "Mountain railways", "Chocolate tours"]),
            image: Some("https://images.unsplash.com/photo-1506905925000-5f4f3255cee6?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80".to_string()),
            match_score: 0,
        },
        Destination {
            name: "Kyoto, Japan".to_string(),
            country: "Japan".to_string(),
            trip_types: vec![TripType::Cultural, TripType::Nature, TripType::Family, TripType::Budget],
            climate: Climate::Temperate,
            budget: BudgetTier::Medium,
            best_seasons: strings(&["March", "April", "October", "November"]),
            description: "Ancient capital with stunning temples, traditional gardens, and rich cultural heritage.".to_string(),
            highlights: strings(&["Fushimi Inari Shrine", "Arashiyama Bamboo Grove", "Kinkaku-ji", "Gion District"]),
            food: strings(&["Local cuisine", "Vegetarian options", "Traditional Japanese"]),
            language: "Language Immersion".to_string(),
            safety: "Very High".to_string(),
            visa: "Visa requirements vary by nationality".to_string(),
            itinerary: strings(&[
                "Day 1: Arrival in Kyoto, settle in traditional ryokan",
                "Day 2: Fushimi Inari Shrine and downtown Kyoto exploration",
                "Day 3: Arashiyama Bamboo Grove and monkey park",
                "Day 4: Kinkaku-ji (Golden Pavilion) and Ryoan-ji temple",
                "Day 5: Gion district cultural experience and tea ceremony",
                "Day 6: Day trip to Nara or Osaka",
                "Day 7: Last-minute souvenir shopping and departure",
            ]),
            estimated_cost: "$1,500 - $3,000".to_string(),
            accommodation: strings(&["Traditional ryokans", "Business hotels", "Guesthouses"]),
            activities: strings(&["Temple visits", "Tea ceremonies", "Garden tours", "Cultural workshops"]),
            image: Some("https://images.unsplash.com/photo-1493976040374-85c8e12f0c0e?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80".to_string()),
            match_score: 0,
        },
        Destination {
            name: "Santorini, Greece".to_string(),
            country: "Greece".to_string(),
            trip_types: vec![TripType::Luxury, TripType::Honeymoon, TripType::Cultural, TripType::Nature],
            climate: Climate::Beach,
            budget: BudgetTier::High,
            best_seasons: strings(&["May", "June", "September", "October"]),
            description: "Stunning volcanic island with whitewashed buildings, crystal-clear waters, and spectacular sunsets.".to_string(),
            highlights: strings(&["Oia Sunset", "Red Beach", "Ancient Thera", "Wine Tours"]),
            food: strings(&["Mediterranean", "Seafood", "Local Greek cuisine"]),
            language: "Multilingual".to_string(),
            safety: "High".to_string(),
            visa: "Schengen visa required".to_string(),
            itinerary: strings(&[
                "Day 1: Arrival and check into cliffside hotel",
                "Day 2: Oia village exploration and famous sunset viewing",
                "Day 3: Boat tour to volcanic islands and hot springs",
                "Day 4: Beach hopping (Red Beach, Perissa Beach)",
                "Day 5: Ancient Thera ruins and wine tasting tour",
                "Day 6: Relaxation and local cuisine experience",
                "Day 7: Last-minute shopping and departure",
            ]),
            estimated_cost: "$2,500 - $5,000".to_string(),
            accommodation: strings(&["Luxury hotels", "Cave houses", "Boutique hotels"]),
            activities: strings(&["Boat tours", "Wine tasting", "Beach activities", "Sunset viewing"]),
            image: Some("https://images.unsplash.com/photo-1570077188670-e3a8d69ac5ff?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80".to_string()),
            match_score: 0,
        },
        Destination {
            name: "Costa Rica".to_string(),
            country: "Costa Rica".to_string(),
            trip_types: vec![TripType::Adventure, TripType::Nature, TripType::Family, TripType::Budget],
            climate: Climate::Tropical,
            budget: BudgetTier::Medium,
            best_seasons: strings(&["December", "January", "February", "March"]),
            description: "Adventure paradise with rainforests, volcanoes, and abundant wildlife for eco-tourism enthusiasts.".to_string(),
            highlights: strings(&["Arenal Volcano", "Monteverde Cloud Forest", "Manuel Antonio Park", "Zip-lining"]),
            food: strings(&["Local cuisine", "Vegetarian options", "International"]),
            language: "Spanish/English".to_string(),
            safety: "Moderate".to_string(),
            visa: "Visa-free for most nationalities (90 days)".to_string(),
            itinerary: strings(&[
                "Day 1: Arrival in San Jose, transfer to La Fortuna",
                "Day 2: Arenal Volcano hike and hot springs",
                "Day 3: Zip-lining and hanging bridges in rainforest",
                "Day 4: Transfer to Monteverde Cloud Forest",
                "Day 5: Wildlife spotting and night forest tour",
                "Day 6: Beach day at Manuel Antonio National Park",
                "Day 7: Departure from San Jose",
            ]),
            estimated_cost: "$1,000 - $2,500".to_string(),
            accommodation: strings(&["Eco-lodges", "Beach resorts", "Jungle hotels"]),
            activities: strings(&["Zip-lining", "Wildlife watching", "Volcano hikes", "Beach activities"]),
            image: Some("https://images.unsplash.com/photo-1536700503339-1b3b0b1b0b1b?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80".to_string()),
            match_score: 0,
        },
    ]
}
