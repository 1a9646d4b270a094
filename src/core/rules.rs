//! Per-persona rule tables.
//!
//! Each dashboard is described by a [`Ruleset`]: the hard filters that remove
//! candidates outright, the bonus rules that add fixed points when their
//! predicate holds, and the base/cap bounds of the resulting score.

use crate::models::domain::{
    BudgetTier, Candidate, Climate, Country, Destination, FoodPreference, Industry,
    LanguagePreference, LanguageProficiency, Level, Persona, ProfessionalPreferences,
    StudentPreferences, TouristPreferences, University, VisaDifficulty, VisaGoal,
    WorkLifePriority,
};

/// Width of the random jitter range: draws fall in `0..JITTER_SPAN`
pub const JITTER_SPAN: u8 = 20;

pub type Predicate<P, C> = fn(&P, &C) -> bool;

/// Excludes candidates for which `keep` is false
pub struct HardFilter<P, C> {
    pub name: &'static str,
    pub keep: Predicate<P, C>,
}

/// Adds `points` when `applies` holds; rules are independent and stack
pub struct BonusRule<P, C> {
    pub name: &'static str,
    pub points: u8,
    pub applies: Predicate<P, C>,
}

pub struct Ruleset<P, C> {
    pub persona: Persona,
    pub base: u8,
    pub cap: u8,
    /// Add a `0..JITTER_SPAN` draw on top of the base
    pub jitter: bool,
    pub filters: Vec<HardFilter<P, C>>,
    pub bonuses: Vec<BonusRule<P, C>>,
}

impl<P, C> Ruleset<P, C> {
    /// True when every hard filter keeps the candidate
    pub fn admits(&self, prefs: &P, candidate: &C) -> bool {
        self.filters.iter().all(|filter| (filter.keep)(prefs, candidate))
    }
}

/// Preference records that know which candidates they rank and how
pub trait RankingProfile: Sized {
    type Candidate: Candidate;

    fn ruleset(&self) -> Ruleset<Self, Self::Candidate>;
}

// Student

fn in_preferred_region(prefs: &StudentPreferences, uni: &University) -> bool {
    prefs
        .destination
        .map_or(true, |region| region.contains(&uni.country))
}

fn region_match(prefs: &StudentPreferences, uni: &University) -> bool {
    prefs
        .destination
        .map_or(false, |region| region.contains(&uni.country))
}

fn low_budget_germany(prefs: &StudentPreferences, uni: &University) -> bool {
    prefs.budget == BudgetTier::Low && uni.country == "Germany"
}

fn high_budget_us_uk(prefs: &StudentPreferences, uni: &University) -> bool {
    prefs.budget == BudgetTier::High
        && (uni.country == "United States" || uni.country == "United Kingdom")
}

fn speaks_german(prefs: &StudentPreferences, uni: &University) -> bool {
    prefs.language_proficiency == LanguageProficiency::German && uni.country == "Germany"
}

fn speaks_french(prefs: &StudentPreferences, uni: &University) -> bool {
    prefs.language_proficiency == LanguageProficiency::French && uni.country == "Canada"
}

pub fn student_rules() -> Ruleset<StudentPreferences, University> {
    Ruleset {
        persona: Persona::Student,
        base: 75,
        cap: 98,
        jitter: false,
        filters: vec![HardFilter {
            name: "destination region",
            keep: in_preferred_region,
        }],
        bonuses: vec![
            BonusRule { name: "region match", points: 15, applies: region_match },
            BonusRule { name: "affordable tuition", points: 10, applies: low_budget_germany },
            BonusRule { name: "premium destination", points: 10, applies: high_budget_us_uk },
            BonusRule { name: "german speaker", points: 10, applies: speaks_german },
            BonusRule { name: "french speaker", points: 5, applies: speaks_french },
        ],
    }
}

impl RankingProfile for StudentPreferences {
    type Candidate = University;

    fn ruleset(&self) -> Ruleset<Self, University> {
        student_rules()
    }
}

// Professional

fn industry_in_demand(prefs: &ProfessionalPreferences, country: &Country) -> bool {
    if prefs.industry == Industry::Other {
        return true;
    }
    matches!(
        country.demand_for(prefs.industry),
        Some(Level::High) | Some(Level::VeryHigh)
    )
}

fn modest_salary_well_paid(prefs: &ProfessionalPreferences, country: &Country) -> bool {
    prefs.expected_salary <= 50_000 && country.average_salary >= 60_000
}

fn high_salary_high_paying(prefs: &ProfessionalPreferences, country: &Country) -> bool {
    prefs.expected_salary >= 90_000 && country.average_salary >= 100_000
}

fn low_cost_medium_living(prefs: &ProfessionalPreferences, country: &Country) -> bool {
    prefs.cost_tolerance == BudgetTier::Low && country.cost_of_living == Level::Medium
}

fn high_cost_high_paying(prefs: &ProfessionalPreferences, country: &Country) -> bool {
    prefs.cost_tolerance == BudgetTier::High && country.average_salary >= 100_000
}

fn pr_pathway(prefs: &ProfessionalPreferences, country: &Country) -> bool {
    prefs.visa_goal == VisaGoal::Pr && country.has_straightforward_pr_path()
}

fn accessible_work_visa(prefs: &ProfessionalPreferences, country: &Country) -> bool {
    prefs.visa_goal == VisaGoal::Work && country.visa_difficulty == VisaDifficulty::EasyMedium
}

fn balance_high(prefs: &ProfessionalPreferences, country: &Country) -> bool {
    prefs.work_life_balance == WorkLifePriority::Critical
        && country.work_life_balance == Level::High
}

fn balance_very_high(prefs: &ProfessionalPreferences, country: &Country) -> bool {
    prefs.work_life_balance == WorkLifePriority::Critical
        && country.work_life_balance == Level::VeryHigh
}

/// Rules used once the industry filter has narrowed the countries
pub fn professional_rules() -> Ruleset<ProfessionalPreferences, Country> {
    Ruleset {
        persona: Persona::Professional,
        base: 80,
        cap: 99,
        jitter: false,
        filters: vec![HardFilter {
            name: "industry demand",
            keep: industry_in_demand,
        }],
        bonuses: vec![
            BonusRule { name: "salary headroom", points: 10, applies: modest_salary_well_paid },
            BonusRule { name: "top salaries", points: 10, applies: high_salary_high_paying },
            BonusRule { name: "moderate living costs", points: 8, applies: low_cost_medium_living },
            BonusRule { name: "high earning market", points: 8, applies: high_cost_high_paying },
            BonusRule { name: "residency pathway", points: 12, applies: pr_pathway },
            BonusRule { name: "work visa access", points: 8, applies: accessible_work_visa },
            BonusRule { name: "work-life balance", points: 10, applies: balance_high },
            BonusRule { name: "excellent work-life balance", points: 15, applies: balance_very_high },
        ],
    }
}

/// Rules for an open industry search: jittered baseline, no bonuses
pub fn professional_baseline_rules() -> Ruleset<ProfessionalPreferences, Country> {
    Ruleset {
        persona: Persona::Professional,
        base: 75,
        cap: 98,
        jitter: true,
        filters: Vec::new(),
        bonuses: Vec::new(),
    }
}

impl RankingProfile for ProfessionalPreferences {
    type Candidate = Country;

    fn ruleset(&self) -> Ruleset<Self, Country> {
        if self.industry == Industry::Other {
            professional_baseline_rules()
        } else {
            professional_rules()
        }
    }
}

// Tourist

fn offers_trip_type(prefs: &TouristPreferences, dest: &Destination) -> bool {
    prefs
        .trip_type
        .map_or(true, |trip| dest.trip_types.contains(&trip))
}

fn climate_matches(prefs: &TouristPreferences, dest: &Destination) -> bool {
    prefs
        .climate
        .map_or(true, |climate: Climate| dest.climate == climate)
}

fn budget_matches(prefs: &TouristPreferences, dest: &Destination) -> bool {
    prefs.budget.map_or(true, |budget| dest.budget == budget)
}

fn english_friendly(prefs: &TouristPreferences, dest: &Destination) -> bool {
    prefs.language_preference == Some(LanguagePreference::English)
        && dest.language.contains("English")
}

fn language_immersion(prefs: &TouristPreferences, dest: &Destination) -> bool {
    prefs.language_preference == Some(LanguagePreference::Immersion)
        && dest.language == "Language Immersion"
}

fn vegetarian_friendly(prefs: &TouristPreferences, dest: &Destination) -> bool {
    prefs.food_preference == Some(FoodPreference::Vegetarian)
        && dest.food.iter().any(|food| food == "Vegetarian options")
}

pub fn tourist_rules() -> Ruleset<TouristPreferences, Destination> {
    Ruleset {
        persona: Persona::Tourist,
        base: 75,
        cap: 98,
        jitter: true,
        filters: vec![
            HardFilter { name: "trip type", keep: offers_trip_type },
            HardFilter { name: "climate", keep: climate_matches },
            HardFilter { name: "budget", keep: budget_matches },
        ],
        bonuses: vec![
            BonusRule { name: "english spoken", points: 5, applies: english_friendly },
            BonusRule { name: "language immersion", points: 5, applies: language_immersion },
            BonusRule { name: "vegetarian options", points: 3, applies: vegetarian_friendly },
        ],
    }
}

impl RankingProfile for TouristPreferences {
    type Candidate = Destination;

    fn ruleset(&self) -> Ruleset<Self, Destination> {
        tourist_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps_never_reach_hundred() {
        assert!(student_rules().cap < 100);
        assert!(professional_rules().cap < 100);
        assert!(professional_baseline_rules().cap < 100);
        assert!(tourist_rules().cap < 100);
    }

    #[test]
    fn test_base_within_cap() {
        for (base, cap) in [
            (student_rules().base, student_rules().cap),
            (professional_rules().base, professional_rules().cap),
            (tourist_rules().base, tourist_rules().cap),
        ] {
            assert!(base <= cap);
        }
    }

    #[test]
    fn test_only_baseline_paths_jitter() {
        assert!(!student_rules().jitter);
        assert!(!professional_rules().jitter);
        assert!(professional_baseline_rules().jitter);
        assert!(tourist_rules().jitter);
    }
}
