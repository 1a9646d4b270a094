use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::domain::{
    parse_choice, BudgetTier, Climate, EnglishTest, FoodPreference, Importance, Industry,
    LanguagePreference, LanguageProficiency, Persona, Region, StandardizedTest, TripType,
    VisaGoal, WorkLifePriority,
};

/// Accept a form value sent either as JSON text, number or bool and keep it
/// as the text the user typed. `null` and missing values become "".
fn form_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}

/// Checkbox values arrive as bools, or as "true"/"on" text from plain forms
fn form_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(flag)) => Some(flag),
        Some(Value::String(text)) => match text.trim().to_lowercase().as_str() {
            "" => None,
            "true" | "on" | "yes" | "1" => Some(true),
            _ => Some(false),
        },
        Some(Value::Number(n)) => Some(n.as_f64().unwrap_or(0.0) != 0.0),
        _ => None,
    })
}

/// Parse numeric form text the way a browser would; unparseable text is NaN
pub fn parse_number(text: &str) -> f32 {
    text.trim().parse::<f32>().unwrap_or(f32::NAN)
}

fn invalid(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn check_choice<T: serde::de::DeserializeOwned>(value: &str, what: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("any") || parse_choice::<T>(value).is_some() {
        Ok(())
    } else {
        Err(invalid("choice", format!("unknown {}: {}", what, value)))
    }
}

fn check_range(value: &str, min: f32, max: f32) -> Result<(), ValidationError> {
    let number = parse_number(value);
    if number.is_nan() || number < min || number > max {
        return Err(invalid(
            "range",
            format!("must be a number between {} and {}", min, max),
        ));
    }
    Ok(())
}

fn validate_gpa(value: &str) -> Result<(), ValidationError> {
    check_range(value, 0.0, 4.0)
}

fn validate_salary(value: &str) -> Result<(), ValidationError> {
    check_range(value, 0.0, u32::MAX as f32)
}

fn validate_budget(value: &str) -> Result<(), ValidationError> {
    check_choice::<BudgetTier>(value, "budget")
}

fn validate_region(value: &str) -> Result<(), ValidationError> {
    check_choice::<Region>(value, "destination")
}

fn validate_climate(value: &str) -> Result<(), ValidationError> {
    check_choice::<Climate>(value, "climate")
}

fn validate_importance(value: &str) -> Result<(), ValidationError> {
    check_choice::<Importance>(value, "importance")
}

fn validate_language_proficiency(value: &str) -> Result<(), ValidationError> {
    check_choice::<LanguageProficiency>(value, "language")
}

fn validate_industry(value: &str) -> Result<(), ValidationError> {
    check_choice::<Industry>(value, "industry")
}

fn validate_visa_goal(value: &str) -> Result<(), ValidationError> {
    check_choice::<VisaGoal>(value, "visa preference")
}

fn validate_work_life(value: &str) -> Result<(), ValidationError> {
    check_choice::<WorkLifePriority>(value, "work-life balance")
}

fn validate_trip_type(value: &str) -> Result<(), ValidationError> {
    check_choice::<TripType>(value, "trip type")
}

fn validate_food(value: &str) -> Result<(), ValidationError> {
    check_choice::<FoodPreference>(value, "food preference")
}

fn validate_language_preference(value: &str) -> Result<(), ValidationError> {
    check_choice::<LanguagePreference>(value, "language preference")
}

fn validate_student_tests(form: &StudentForm) -> Result<(), ValidationError> {
    check_choice::<StandardizedTest>(&form.test_type, "test")?;
    check_choice::<EnglishTest>(&form.english_test_type, "english test")?;

    let test = parse_choice::<StandardizedTest>(&form.test_type).unwrap_or_default();
    if let Some((min, max)) = test.score_range() {
        check_range(&form.test_score, min, max)?;
    }

    let english = parse_choice::<EnglishTest>(&form.english_test_type).unwrap_or_default();
    if let Some((min, max)) = english.score_range() {
        check_range(&form.english_test_score, min, max)?;
    }

    Ok(())
}

/// Student dashboard form as submitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_student_tests"))]
pub struct StudentForm {
    #[validate(length(min = 1, message = "degree level is required"))]
    #[serde(default, deserialize_with = "form_text")]
    pub degree_level: String,
    #[validate(length(min = 1, message = "field of study is required"))]
    #[serde(default, deserialize_with = "form_text")]
    pub field_of_study: String,
    #[validate(custom(function = "validate_gpa"))]
    #[serde(default, deserialize_with = "form_text")]
    pub gpa: String,
    #[validate(length(min = 1, message = "budget is required"), custom(function = "validate_budget"))]
    #[serde(default, deserialize_with = "form_text")]
    pub budget: String,
    #[serde(default, deserialize_with = "form_text")]
    pub program_type: String,
    #[validate(custom(function = "validate_region"))]
    #[serde(default, deserialize_with = "form_text")]
    pub destination_preference: String,
    #[validate(custom(function = "validate_climate"))]
    #[serde(default, deserialize_with = "form_text")]
    pub climate_preference: String,
    #[serde(default, deserialize_with = "form_flag")]
    pub scholarship_interest: Option<bool>,
    #[validate(custom(function = "validate_importance"))]
    #[serde(default, deserialize_with = "form_text")]
    pub work_importance: String,
    #[validate(custom(function = "validate_importance"))]
    #[serde(default, deserialize_with = "form_text")]
    pub visa_importance: String,
    #[validate(custom(function = "validate_language_proficiency"))]
    #[serde(default, deserialize_with = "form_text")]
    pub language_proficiency: String,
    #[serde(default, deserialize_with = "form_text")]
    pub test_type: String,
    #[serde(default, deserialize_with = "form_text")]
    pub test_score: String,
    #[serde(default, deserialize_with = "form_text")]
    pub english_test_type: String,
    #[serde(default, deserialize_with = "form_text")]
    pub english_test_score: String,
}

/// Professional dashboard form as submitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalForm {
    #[validate(length(min = 1, message = "industry is required"), custom(function = "validate_industry"))]
    #[serde(default, deserialize_with = "form_text")]
    pub industry: String,
    #[validate(length(min = 1, message = "job role is required"))]
    #[serde(default, deserialize_with = "form_text")]
    pub job_role: String,
    #[validate(length(min = 1, message = "experience is required"))]
    #[serde(default, deserialize_with = "form_text")]
    pub experience: String,
    #[validate(length(min = 1, message = "skills are required"))]
    #[serde(default, deserialize_with = "form_text")]
    pub skills: String,
    #[validate(custom(function = "validate_salary"))]
    #[serde(default, deserialize_with = "form_text")]
    pub expected_salary: String,
    #[validate(length(min = 1, message = "cost tolerance is required"), custom(function = "validate_budget"))]
    #[serde(default, deserialize_with = "form_text")]
    pub cost_tolerance: String,
    #[validate(length(min = 1, message = "visa preference is required"), custom(function = "validate_visa_goal"))]
    #[serde(default, deserialize_with = "form_text")]
    pub visa_preference: String,
    #[validate(length(min = 1, message = "work-life balance is required"), custom(function = "validate_work_life"))]
    #[serde(default, deserialize_with = "form_text")]
    pub work_life_balance: String,
    #[serde(default, deserialize_with = "form_text")]
    pub cultural_adaptation: String,
    #[serde(default, deserialize_with = "form_text")]
    pub career_growth: String,
}

/// Tourist dashboard form as submitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TouristForm {
    #[validate(length(min = 1, message = "trip type is required"), custom(function = "validate_trip_type"))]
    #[serde(default, deserialize_with = "form_text")]
    pub trip_type: String,
    #[validate(length(min = 1, message = "trip duration is required"))]
    #[serde(default, deserialize_with = "form_text")]
    pub trip_duration: String,
    #[validate(length(min = 1, message = "budget is required"), custom(function = "validate_budget"))]
    #[serde(default, deserialize_with = "form_text")]
    pub trip_budget: String,
    #[validate(length(min = 1, message = "climate is required"), custom(function = "validate_climate"))]
    #[serde(default, deserialize_with = "form_text")]
    pub trip_climate: String,
    #[validate(custom(function = "validate_food"))]
    #[serde(default, deserialize_with = "form_text")]
    pub food_preference: String,
    #[validate(custom(function = "validate_language_preference"))]
    #[serde(default, deserialize_with = "form_text")]
    pub language_preference: String,
    #[serde(default, deserialize_with = "form_text")]
    pub travel_season: String,
    #[serde(default, deserialize_with = "form_text")]
    pub travel_style: String,
}

/// A submitted dashboard form of any persona
#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceForm {
    Student(StudentForm),
    Professional(ProfessionalForm),
    Tourist(TouristForm),
}

impl PreferenceForm {
    pub fn persona(&self) -> Persona {
        match self {
            PreferenceForm::Student(_) => Persona::Student,
            PreferenceForm::Professional(_) => Persona::Professional,
            PreferenceForm::Tourist(_) => Persona::Tourist,
        }
    }

    /// Required-field and range checks; must pass before normalization
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            PreferenceForm::Student(form) => form.validate(),
            PreferenceForm::Professional(form) => form.validate(),
            PreferenceForm::Tourist(form) => form.validate(),
        }
    }
}

/// Names of the fields that failed validation, sorted for stable output
pub fn invalid_fields(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_form() -> StudentForm {
        StudentForm {
            degree_level: "masters".to_string(),
            field_of_study: "Computer Science".to_string(),
            gpa: "3.6".to_string(),
            budget: "low".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_student_form() {
        assert!(student_form().validate().is_ok());
    }

    #[test]
    fn test_gpa_out_of_range_rejected() {
        let mut form = student_form();
        form.gpa = "4.5".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(invalid_fields(&errors), vec!["gpa"]);
    }

    #[test]
    fn test_unparseable_gpa_rejected() {
        let mut form = student_form();
        form.gpa = "three".to_string();
        assert!(form.validate().is_err());
        assert!(parse_number("three").is_nan());
    }

    #[test]
    fn test_missing_required_fields_reported() {
        let errors = StudentForm::default().validate().unwrap_err();
        let fields = invalid_fields(&errors);
        assert!(fields.contains(&"degree_level".to_string()));
        assert!(fields.contains(&"field_of_study".to_string()));
        assert!(fields.contains(&"gpa".to_string()));
        assert!(fields.contains(&"budget".to_string()));
    }

    #[test]
    fn test_test_score_checked_against_test_range() {
        let mut form = student_form();
        form.test_type = "gre".to_string();
        form.test_score = "200".to_string();
        assert!(form.validate().is_err());

        form.test_score = "320".to_string();
        assert!(form.validate().is_ok());

        form.english_test_type = "ielts".to_string();
        form.english_test_score = "9.5".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_numbers_accepted_as_json_numbers() {
        let form: StudentForm = serde_json::from_str(
            r#"{"degreeLevel":"masters","fieldOfStudy":"CS","gpa":3.5,"budget":"low","scholarshipInterest":true}"#,
        )
        .unwrap();
        assert_eq!(form.gpa, "3.5");
        assert_eq!(form.scholarship_interest, Some(true));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_unknown_choice_rejected() {
        let form = TouristForm {
            trip_type: "spelunking".to_string(),
            trip_duration: "7".to_string(),
            trip_budget: "medium".to_string(),
            trip_climate: "tropical".to_string(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(invalid_fields(&errors), vec!["trip_type"]);
    }

    #[test]
    fn test_professional_requires_salary() {
        let form = ProfessionalForm {
            industry: "tech".to_string(),
            job_role: "Engineer".to_string(),
            experience: "5".to_string(),
            skills: "Rust".to_string(),
            expected_salary: String::new(),
            cost_tolerance: "low".to_string(),
            visa_preference: "pr".to_string(),
            work_life_balance: "critical".to_string(),
            ..Default::default()
        };
        let errors = PreferenceForm::Professional(form).validate().unwrap_err();
        assert_eq!(invalid_fields(&errors), vec!["expected_salary"]);
    }
}
