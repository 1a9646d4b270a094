use crate::models::domain::{
    choice_text, parse_choice, BudgetTier, EnglishTest, Importance, Industry,
    LanguageProficiency, PreferenceRecord, ProfessionalPreferences, StandardizedTest,
    StudentPreferences, TestScore, TouristPreferences, VisaGoal, WorkLifePriority,
};
use crate::models::requests::{parse_number, PreferenceForm, ProfessionalForm, StudentForm, TouristForm};

/// Sentinel written for "no preference" choices
pub const ANY: &str = "any";

/// Optional text: blank or missing means absent
fn optional_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Optional choice: blank, "any" or unknown text means no preference
fn optional_choice<T: serde::de::DeserializeOwned>(text: &str) -> Option<T> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ANY) {
        return None;
    }
    parse_choice(trimmed)
}

fn any_or(text: Option<String>) -> String {
    text.unwrap_or_else(|| ANY.to_string())
}

fn test_score<T>(test: T, range: Option<(f32, f32)>, score: &str) -> Option<TestScore<T>> {
    range.map(|_| TestScore {
        test,
        score: parse_number(score),
    })
}

/// Normalize any dashboard form into its canonical preference record.
///
/// The form must already have passed validation; ranges are not re-checked.
pub fn normalize(form: &PreferenceForm) -> PreferenceRecord {
    match form {
        PreferenceForm::Student(form) => PreferenceRecord::Student(normalize_student(form)),
        PreferenceForm::Professional(form) => {
            PreferenceRecord::Professional(normalize_professional(form))
        }
        PreferenceForm::Tourist(form) => PreferenceRecord::Tourist(normalize_tourist(form)),
    }
}

pub fn normalize_student(form: &StudentForm) -> StudentPreferences {
    let test: StandardizedTest = parse_choice(&form.test_type).unwrap_or_default();
    let english: EnglishTest = parse_choice(&form.english_test_type).unwrap_or_default();

    StudentPreferences {
        degree_level: form.degree_level.trim().to_string(),
        field_of_study: form.field_of_study.trim().to_string(),
        gpa: parse_number(&form.gpa),
        // Required upstream; medium is only reached by unvalidated input
        budget: parse_choice(&form.budget).unwrap_or(BudgetTier::Medium),
        program_type: any_or(optional_text(&form.program_type)),
        destination: optional_choice(&form.destination_preference),
        climate: optional_choice(&form.climate_preference),
        scholarship_interest: form.scholarship_interest.unwrap_or(false),
        work_importance: parse_choice(&form.work_importance).unwrap_or(Importance::Moderate),
        visa_importance: parse_choice(&form.visa_importance).unwrap_or(Importance::Moderate),
        language_proficiency: parse_choice(&form.language_proficiency)
            .unwrap_or(LanguageProficiency::None),
        test_score: test_score(test, test.score_range(), &form.test_score),
        english_score: test_score(english, english.score_range(), &form.english_test_score),
    }
}

pub fn normalize_professional(form: &ProfessionalForm) -> ProfessionalPreferences {
    let salary = parse_number(&form.expected_salary);

    ProfessionalPreferences {
        industry: parse_choice(&form.industry).unwrap_or(Industry::Other),
        job_role: form.job_role.trim().to_string(),
        experience: form.experience.trim().to_string(),
        skills: form.skills.trim().to_string(),
        expected_salary: if salary.is_finite() && salary > 0.0 { salary as u32 } else { 0 },
        cost_tolerance: parse_choice(&form.cost_tolerance).unwrap_or(BudgetTier::Medium),
        visa_goal: parse_choice(&form.visa_preference).unwrap_or(VisaGoal::Flexible),
        work_life_balance: parse_choice(&form.work_life_balance)
            .unwrap_or(WorkLifePriority::Flexible),
        cultural_adaptation: optional_text(&form.cultural_adaptation),
        career_growth: optional_text(&form.career_growth),
    }
}

pub fn normalize_tourist(form: &TouristForm) -> TouristPreferences {
    TouristPreferences {
        trip_type: optional_choice(&form.trip_type),
        trip_duration: form.trip_duration.trim().to_string(),
        budget: optional_choice(&form.trip_budget),
        climate: optional_choice(&form.trip_climate),
        food_preference: optional_choice(&form.food_preference),
        language_preference: optional_choice(&form.language_preference),
        travel_season: optional_text(&form.travel_season),
        travel_style: optional_text(&form.travel_style),
    }
}

fn choice_or_any<T: serde::Serialize>(value: &Option<T>) -> String {
    value.as_ref().map(choice_text).unwrap_or_else(|| ANY.to_string())
}

impl From<&StudentPreferences> for StudentForm {
    fn from(prefs: &StudentPreferences) -> Self {
        StudentForm {
            degree_level: prefs.degree_level.clone(),
            field_of_study: prefs.field_of_study.clone(),
            gpa: prefs.gpa.to_string(),
            budget: choice_text(&prefs.budget),
            program_type: prefs.program_type.clone(),
            destination_preference: choice_or_any(&prefs.destination),
            climate_preference: choice_or_any(&prefs.climate),
            scholarship_interest: Some(prefs.scholarship_interest),
            work_importance: choice_text(&prefs.work_importance),
            visa_importance: choice_text(&prefs.visa_importance),
            language_proficiency: choice_text(&prefs.language_proficiency),
            test_type: prefs
                .test_score
                .map(|s| choice_text(&s.test))
                .unwrap_or_default(),
            test_score: prefs.test_score.map(|s| s.score.to_string()).unwrap_or_default(),
            english_test_type: prefs
                .english_score
                .map(|s| choice_text(&s.test))
                .unwrap_or_default(),
            english_test_score: prefs
                .english_score
                .map(|s| s.score.to_string())
                .unwrap_or_default(),
        }
    }
}

impl From<&ProfessionalPreferences> for ProfessionalForm {
    fn from(prefs: &ProfessionalPreferences) -> Self {
        ProfessionalForm {
            industry: choice_text(&prefs.industry),
            job_role: prefs.job_role.clone(),
            experience: prefs.experience.clone(),
            skills: prefs.skills.clone(),
            expected_salary: prefs.expected_salary.to_string(),
            cost_tolerance: choice_text(&prefs.cost_tolerance),
            visa_preference: choice_text(&prefs.visa_goal),
            work_life_balance: choice_text(&prefs.work_life_balance),
            cultural_adaptation: prefs.cultural_adaptation.clone().unwrap_or_default(),
            career_growth: prefs.career_growth.clone().unwrap_or_default(),
        }
    }
}

impl From<&TouristPreferences> for TouristForm {
    fn from(prefs: &TouristPreferences) -> Self {
        TouristForm {
            trip_type: choice_or_any(&prefs.trip_type),
            trip_duration: prefs.trip_duration.clone(),
            trip_budget: choice_or_any(&prefs.budget),
            trip_climate: choice_or_any(&prefs.climate),
            food_preference: choice_or_any(&prefs.food_preference),
            language_preference: choice_or_any(&prefs.language_preference),
            travel_season: prefs.travel_season.clone().unwrap_or_default(),
            travel_style: prefs.travel_style.clone().unwrap_or_default(),
        }
    }
}

impl From<&PreferenceRecord> for PreferenceForm {
    fn from(record: &PreferenceRecord) -> Self {
        match record {
            PreferenceRecord::Student(prefs) => PreferenceForm::Student(prefs.into()),
            PreferenceRecord::Professional(prefs) => PreferenceForm::Professional(prefs.into()),
            PreferenceRecord::Tourist(prefs) => PreferenceForm::Tourist(prefs.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{Climate, Region, TripType};

    fn minimal_student_form() -> StudentForm {
        StudentForm {
            degree_level: "masters".to_string(),
            field_of_study: "Computer Science".to_string(),
            gpa: "3.7".to_string(),
            budget: "low".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_student_defaults_applied() {
        let prefs = normalize_student(&minimal_student_form());

        assert_eq!(prefs.program_type, "any");
        assert_eq!(prefs.destination, None);
        assert_eq!(prefs.climate, None);
        assert!(!prefs.scholarship_interest);
        assert_eq!(prefs.work_importance, Importance::Moderate);
        assert_eq!(prefs.visa_importance, Importance::Moderate);
        assert_eq!(prefs.language_proficiency, LanguageProficiency::None);
        assert!(prefs.test_score.is_none());
        assert!((prefs.gpa - 3.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_student_choices_parsed() {
        let mut form = minimal_student_form();
        form.destination_preference = "Europe".to_string();
        form.climate_preference = "any".to_string();
        form.language_proficiency = "german".to_string();
        form.test_type = "gre".to_string();
        form.test_score = "325".to_string();

        let prefs = normalize_student(&form);
        assert_eq!(prefs.destination, Some(Region::Europe));
        assert_eq!(prefs.climate, None);
        assert_eq!(prefs.language_proficiency, LanguageProficiency::German);
        assert_eq!(
            prefs.test_score,
            Some(TestScore { test: StandardizedTest::Gre, score: 325.0 })
        );
    }

    #[test]
    fn test_student_normalization_idempotent() {
        let mut form = minimal_student_form();
        form.destination_preference = "asia".to_string();
        form.scholarship_interest = Some(true);
        form.english_test_type = "toefl".to_string();
        form.english_test_score = "104".to_string();

        let once = normalize_student(&form);
        let twice = normalize_student(&StudentForm::from(&once));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_tourist_any_means_no_filter() {
        let form = TouristForm {
            trip_type: "adventure".to_string(),
            trip_duration: "7".to_string(),
            trip_budget: "medium".to_string(),
            trip_climate: "any".to_string(),
            ..Default::default()
        };
        let prefs = normalize_tourist(&form);
        assert_eq!(prefs.trip_type, Some(TripType::Adventure));
        assert_eq!(prefs.climate, None);
        assert_eq!(prefs.food_preference, None);

        let again = normalize_tourist(&TouristForm::from(&prefs));
        assert_eq!(prefs, again);
    }

    #[test]
    fn test_professional_round_trip() {
        let form = ProfessionalForm {
            industry: "tech".to_string(),
            job_role: "Engineer".to_string(),
            experience: "5".to_string(),
            skills: "Rust, Go".to_string(),
            expected_salary: "95000".to_string(),
            cost_tolerance: "high".to_string(),
            visa_preference: "pr".to_string(),
            work_life_balance: "critical".to_string(),
            cultural_adaptation: String::new(),
            career_growth: "fast".to_string(),
        };
        let record = normalize(&PreferenceForm::Professional(form));
        let again = normalize(&PreferenceForm::from(&record));
        assert_eq!(record, again);

        match record {
            PreferenceRecord::Professional(prefs) => {
                assert_eq!(prefs.expected_salary, 95_000);
                assert_eq!(prefs.industry, Industry::Tech);
                assert_eq!(prefs.cultural_adaptation, None);
            }
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn test_climate_choice_shared_by_personas() {
        let form = TouristForm {
            trip_climate: "Snow".to_string(),
            ..Default::default()
        };
        assert_eq!(normalize_tourist(&form).climate, Some(Climate::Snow));
    }
}
