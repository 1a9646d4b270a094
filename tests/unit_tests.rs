// Unit tests for Wayfarer Match

use wayfarer_match::core::{
    normalize, normalize_student, rank,
    rules::{professional_rules, student_rules, tourist_rules},
    scoring::{applied_bonuses, calculate_match_score},
    FixedJitter, Ranker, SeededJitter,
};
use wayfarer_match::models::domain::{Region, University};
use wayfarer_match::models::requests::{
    PreferenceForm, ProfessionalForm, StudentForm, TouristForm,
};
use wayfarer_match::models::{PreferenceRecord, ProfessionalPreferences, StudentPreferences, TouristPreferences};
use wayfarer_match::services::Catalog;

fn student_form(destination: &str, budget: &str) -> StudentForm {
    StudentForm {
        degree_level: "masters".to_string(),
        field_of_study: "Engineering".to_string(),
        gpa: "3.5".to_string(),
        budget: budget.to_string(),
        destination_preference: destination.to_string(),
        ..Default::default()
    }
}

fn professional_form(industry: &str) -> ProfessionalForm {
    ProfessionalForm {
        industry: industry.to_string(),
        job_role: "Software Engineer".to_string(),
        experience: "5-10".to_string(),
        skills: "Rust, Python".to_string(),
        expected_salary: "95000".to_string(),
        cost_tolerance: "high".to_string(),
        visa_preference: "pr".to_string(),
        work_life_balance: "critical".to_string(),
        ..Default::default()
    }
}

fn tourist_form(trip_type: &str, climate: &str, budget: &str) -> TouristForm {
    TouristForm {
        trip_type: trip_type.to_string(),
        trip_duration: "7".to_string(),
        trip_budget: budget.to_string(),
        trip_climate: climate.to_string(),
        ..Default::default()
    }
}

fn student(destination: &str, budget: &str) -> StudentPreferences {
    normalize_student(&student_form(destination, budget))
}

fn professional(industry: &str) -> ProfessionalPreferences {
    match normalize(&PreferenceForm::Professional(professional_form(industry))) {
        PreferenceRecord::Professional(prefs) => prefs,
        other => panic!("unexpected record {:?}", other),
    }
}

fn tourist(trip_type: &str, climate: &str, budget: &str) -> TouristPreferences {
    match normalize(&PreferenceForm::Tourist(tourist_form(trip_type, climate, budget))) {
        PreferenceRecord::Tourist(prefs) => prefs,
        other => panic!("unexpected record {:?}", other),
    }
}

#[test]
fn test_europe_low_budget_keeps_uk_and_germany() {
    let catalog = Catalog::builtin();
    let ranked = Ranker::deterministic().rank(&student("europe", "low"), &catalog.universities);

    let names: Vec<_> = ranked.results.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Technical University of Munich",
            "Imperial College London",
            "University of Cambridge",
        ]
    );
    assert!(ranked
        .results
        .iter()
        .all(|u| u.country == "United Kingdom" || u.country == "Germany"));
    assert_eq!(ranked.total_candidates, catalog.universities.len());
}

#[test]
fn test_german_universities_get_budget_bonus() {
    let catalog = Catalog::builtin();
    let prefs = student("europe", "low");
    let rules = student_rules();

    let tum = catalog.universities.iter().find(|u| u.country == "Germany").unwrap();
    let imperial = catalog.universities.iter().find(|u| u.name == "Imperial College London").unwrap();

    assert!(applied_bonuses(&prefs, tum, &rules).contains(&"affordable tuition"));
    assert!(!applied_bonuses(&prefs, imperial, &rules).contains(&"affordable tuition"));
    assert_eq!(calculate_match_score(&prefs, imperial, &rules, &mut FixedJitter(0)), 90);
    // 75 + 15 + 10 is capped
    assert_eq!(calculate_match_score(&prefs, tum, &rules, &mut FixedJitter(0)), 98);
}

#[test]
fn test_high_budget_favours_us_and_uk() {
    let catalog = Catalog::builtin();
    let ranked = Ranker::deterministic().rank(&student("any", "high"), &catalog.universities);

    assert_eq!(ranked.len(), catalog.universities.len());
    for uni in &ranked.results {
        let expected = if uni.country == "United States" || uni.country == "United Kingdom" {
            85
        } else {
            75
        };
        assert_eq!(uni.match_score, expected, "{}", uni.name);
    }
}

#[test]
fn test_language_bonuses() {
    let catalog = Catalog::builtin();
    let mut form = student_form("any", "medium");
    form.language_proficiency = "french".to_string();
    let prefs = normalize_student(&form);

    let ranked = Ranker::deterministic().rank(&prefs, &catalog.universities);
    assert_eq!(ranked.results[0].name, "University of Toronto");
    assert_eq!(ranked.results[0].match_score, 80);
}

#[test]
fn test_region_with_no_universities_is_empty() {
    let catalog = Catalog::builtin();
    let ranked = Ranker::deterministic().rank(&student("latin-america", "medium"), &catalog.universities);
    assert!(ranked.is_empty());
}

#[test]
fn test_adventure_tropical_medium_destinations() {
    let catalog = Catalog::builtin();
    let ranked = Ranker::deterministic().rank(&tourist("adventure", "tropical", "medium"), &catalog.destinations);

    let mut names: Vec<_> = ranked.results.iter().map(|d| d.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Bali, Indonesia", "Costa Rica"]);
}

#[test]
fn test_tourist_cap_applies_after_bonuses() {
    let catalog = Catalog::builtin();
    let mut form = tourist_form("adventure", "tropical", "medium");
    form.food_preference = "vegetarian".to_string();
    form.language_preference = "english".to_string();
    let prefs = match normalize(&PreferenceForm::Tourist(form)) {
        PreferenceRecord::Tourist(prefs) => prefs,
        other => panic!("unexpected record {:?}", other),
    };

    let costa_rica = catalog.destinations.iter().find(|d| d.name == "Costa Rica").unwrap();
    let rules = tourist_rules();

    // 75 + 19 + 5 + 3 = 102
    assert_eq!(calculate_match_score(&prefs, costa_rica, &rules, &mut FixedJitter(19)), 98);
    assert_eq!(calculate_match_score(&prefs, costa_rica, &rules, &mut FixedJitter(0)), 83);
}

#[test]
fn test_professional_ties_keep_catalog_order() {
    let catalog = Catalog::builtin();
    let ranked = Ranker::deterministic().rank(&professional("tech"), &catalog.countries);

    let ranking: Vec<_> = ranked
        .results
        .iter()
        .map(|c| (c.name.as_str(), c.match_score))
        .collect();
    assert_eq!(
        ranking,
        vec![
            ("Germany", 99),
            ("Canada", 99),
            ("Australia", 99),
            ("Netherlands", 99),
            ("United States", 98),
            ("Singapore", 98),
        ]
    );
}

#[test]
fn test_professional_industry_filter() {
    let catalog = Catalog::builtin();
    let ranked = Ranker::deterministic().rank(&professional("manufacturing"), &catalog.countries);

    // Singapore lists manufacturing at Medium
    let names: Vec<_> = ranked.results.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Germany"]);
}

#[test]
fn test_professional_other_industry_uses_baseline() {
    let catalog = Catalog::builtin();
    let ranked = Ranker::default().rank(&professional("other"), &catalog.countries);

    assert_eq!(ranked.len(), catalog.countries.len());
    assert!(ranked.results.iter().all(|c| (75..=94).contains(&c.match_score)));
}

#[test]
fn test_scores_stay_within_bounds() {
    let catalog = Catalog::builtin();

    for seed in 0..25 {
        for destination in ["any", "europe", "north-america", "asia", "australia"] {
            for budget in ["low", "medium", "high"] {
                let prefs = student(destination, budget);
                let ranked = rank(&prefs, &catalog.universities, &student_rules(), &mut SeededJitter::new(seed));
                assert!(ranked.results.iter().all(|u| (75..=98).contains(&u.match_score)));
            }
        }

        for industry in ["tech", "finance", "healthcare", "engineering"] {
            let ranked = rank(
                &professional(industry),
                &catalog.countries,
                &professional_rules(),
                &mut SeededJitter::new(seed),
            );
            assert!(ranked.results.iter().all(|c| (80..=99).contains(&c.match_score)));
        }

        let ranked = rank(
            &tourist("any", "any", "any"),
            &catalog.destinations,
            &tourist_rules(),
            &mut SeededJitter::new(seed),
        );
        assert_eq!(ranked.len(), catalog.destinations.len());
        assert!(ranked.results.iter().all(|d| (75..=98).contains(&d.match_score)));
    }
}

#[test]
fn test_output_sorted_descending() {
    let catalog = Catalog::builtin();
    for seed in 0..25 {
        let ranker = Ranker::new(wayfarer_match::core::JitterStrategy::Seeded, seed);
        let ranked = ranker.rank(&tourist("any", "any", "any"), &catalog.destinations);
        assert!(ranked
            .results
            .windows(2)
            .all(|pair| pair[0].match_score >= pair[1].match_score));
    }
}

#[test]
fn test_seeded_ranking_is_reproducible() {
    let catalog = Catalog::builtin();
    let ranker = Ranker::new(wayfarer_match::core::JitterStrategy::Seeded, 1234);
    let prefs = tourist("any", "any", "any");

    assert_eq!(
        ranker.rank(&prefs, &catalog.destinations),
        ranker.rank(&prefs, &catalog.destinations)
    );
}

#[test]
fn test_adding_non_matching_candidate_changes_nothing() {
    let catalog = Catalog::builtin();
    let prefs = student("europe", "medium");
    let before = Ranker::deterministic().rank(&prefs, &catalog.universities);

    let mut extended = catalog.universities.clone();
    let mut outsider: University = extended[0].clone();
    outsider.name = "Universidade de São Paulo".to_string();
    outsider.country = "Brazil".to_string();
    extended.insert(1, outsider);

    let after = Ranker::deterministic().rank(&prefs, &extended);
    assert_eq!(after.results, before.results);
    assert_eq!(after.total_candidates, before.total_candidates + 1);
}

#[test]
fn test_limit_truncates_after_sort() {
    let catalog = Catalog::builtin();
    let ranked = Ranker::deterministic()
        .with_limit(2)
        .rank(&professional("tech"), &catalog.countries);

    let names: Vec<_> = ranked.results.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Germany", "Canada"]);
    assert_eq!(ranked.total_candidates, 6);
}

#[test]
fn test_catalog_left_untouched_by_ranking() {
    let catalog = Catalog::builtin();
    let snapshot = catalog.clone();
    Ranker::default().rank(&student("any", "high"), &catalog.universities);
    assert_eq!(catalog, snapshot);
}

#[test]
fn test_normalization_idempotent() {
    let forms = vec![
        PreferenceForm::Student(student_form("Europe", "LOW")),
        PreferenceForm::Student(StudentForm {
            climate_preference: "tropical".to_string(),
            scholarship_interest: Some(true),
            language_proficiency: "german".to_string(),
            test_type: "gre".to_string(),
            test_score: "320".to_string(),
            ..student_form("asia", "high")
        }),
        PreferenceForm::Professional(professional_form("other")),
        PreferenceForm::Tourist(tourist_form("cultural", "any", "high")),
    ];

    for form in forms {
        let record = normalize(&form);
        let again = normalize(&PreferenceForm::from(&record));
        assert_eq!(again, record);
    }
}

#[test]
fn test_student_defaults() {
    let prefs = student("", "medium");
    assert_eq!(prefs.program_type, "any");
    assert_eq!(prefs.destination, None);
    assert_eq!(prefs.climate, None);
    assert!(!prefs.scholarship_interest);

    let europe = student(" EUROPE ", "medium");
    assert_eq!(europe.destination, Some(Region::Europe));
}

#[test]
fn test_local_service_outcome_for_professional() {
    use std::sync::Arc;
    use wayfarer_match::models::ResultSource;
    use wayfarer_match::services::RecommendationService;

    let service = RecommendationService::new(Arc::new(Catalog::builtin()), Ranker::deterministic());
    let outcome = tokio_test::block_on(
        service.recommend(&PreferenceForm::Professional(professional_form("tech"))),
    )
    .unwrap();

    assert_eq!(outcome.source(), ResultSource::Local);
    assert_eq!(outcome.count(), 6);
    assert_eq!(outcome.cards()[0].title, "Germany");
    assert_eq!(outcome.cards()[0].match_score, 99);
}
