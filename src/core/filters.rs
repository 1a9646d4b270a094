use crate::core::rules::Ruleset;
use crate::models::domain::Candidate;

/// Check whether a candidate survives every hard filter of the ruleset
///
/// This is Stage 1 of the ranking pipeline. A preference left at "any"
/// makes its filter keep everything.
#[inline]
pub fn passes_hard_filters<P, C>(prefs: &P, candidate: &C, rules: &Ruleset<P, C>) -> bool {
    rules.admits(prefs, candidate)
}

/// Name of the first filter that rejects the candidate, if any
pub fn rejected_by<P, C>(prefs: &P, candidate: &C, rules: &Ruleset<P, C>) -> Option<&'static str> {
    rules
        .filters
        .iter()
        .find(|filter| !(filter.keep)(prefs, candidate))
        .map(|filter| filter.name)
}

/// Clone the candidates that pass the hard filters, keeping catalog order
pub fn filter_candidates<P, C: Candidate>(
    prefs: &P,
    candidates: &[C],
    rules: &Ruleset<P, C>,
) -> Vec<C> {
    candidates
        .iter()
        .filter(|candidate| {
            match rejected_by(prefs, *candidate, rules) {
                Some(filter) => {
                    tracing::trace!("{} excluded by {} filter", candidate.name(), filter);
                    false
                }
                None => true,
            }
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::{student_rules, tourist_rules};
    use crate::models::domain::{
        BudgetTier, Climate, Destination, Importance, LanguageProficiency, Region,
        StudentPreferences, TouristPreferences, TripType, University, Level,
    };

    fn university(name: &str, country: &str) -> University {
        University {
            name: name.to_string(),
            country: country.to_string(),
            ranking: 10,
            tuition: 30_000,
            programs: vec!["Engineering".to_string()],
            acceptance_rate: 20.0,
            climate: Climate::Temperate,
            scholarship_availability: Level::High,
            class_size: "medium".to_string(),
            work_opportunities: true,
            image: None,
            match_score: 0,
        }
    }

    fn student(destination: Option<Region>) -> StudentPreferences {
        StudentPreferences {
            degree_level: "masters".to_string(),
            field_of_study: "Engineering".to_string(),
            gpa: 3.5,
            budget: BudgetTier::Medium,
            program_type: "any".to_string(),
            destination,
            climate: None,
            scholarship_interest: false,
            work_importance: Importance::Moderate,
            visa_importance: Importance::Moderate,
            language_proficiency: LanguageProficiency::None,
            test_score: None,
            english_score: None,
        }
    }

    fn destination(name: &str, climate: Climate, budget: BudgetTier) -> Destination {
        Destination {
            name: name.to_string(),
            country: name.to_string(),
            trip_types: vec![TripType::Adventure],
            climate,
            budget,
            best_seasons: vec![],
            description: String::new(),
            highlights: vec![],
            food: vec![],
            language: "Multilingual".to_string(),
            safety: "High".to_string(),
            visa: String::new(),
            itinerary: vec![],
            estimated_cost: String::new(),
            accommodation: vec![],
            activities: vec![],
            image: None,
            match_score: 0,
        }
    }

    #[test]
    fn test_region_filter() {
        let rules = student_rules();
        let prefs = student(Some(Region::Europe));

        assert!(passes_hard_filters(&prefs, &university("TUM", "Germany"), &rules));
        assert!(!passes_hard_filters(&prefs, &university("U of T", "Canada"), &rules));
        assert_eq!(
            rejected_by(&prefs, &university("U of T", "Canada"), &rules),
            Some("destination region")
        );
    }

    #[test]
    fn test_any_region_keeps_everything() {
        let rules = student_rules();
        let prefs = student(None);
        let candidates = vec![university("A", "Canada"), university("B", "Japan")];

        assert_eq!(filter_candidates(&prefs, &candidates, &rules).len(), 2);
    }

    #[test]
    fn test_tourist_filters_combine() {
        let rules = tourist_rules();
        let prefs = TouristPreferences {
            trip_type: Some(TripType::Adventure),
            trip_duration: "7".to_string(),
            budget: Some(BudgetTier::Medium),
            climate: Some(Climate::Tropical),
            food_preference: None,
            language_preference: None,
            travel_season: None,
            travel_style: None,
        };
        let candidates = vec![
            destination("Jungle", Climate::Tropical, BudgetTier::Medium),
            destination("Glacier", Climate::Snow, BudgetTier::Medium),
            destination("Resort", Climate::Tropical, BudgetTier::High),
        ];

        let kept = filter_candidates(&prefs, &candidates, &rules);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Jungle");
        assert_eq!(rejected_by(&prefs, &candidates[1], &rules), Some("climate"));
        assert_eq!(rejected_by(&prefs, &candidates[2], &rules), Some("budget"));
    }
}
