use crate::config::SettingsState;
use crate::error::Result;
use crate::logs::LoggerState;
use crate::validation::{self, CharacterCount, FieldDescriptor, FormReport, ValidationVerdict};

/// Validate one field (fired on blur).
#[tauri::command]
pub async fn validate_field(
    field: FieldDescriptor,
    logger: tauri::State<'_, LoggerState>,
) -> Result<ValidationVerdict> {
    let verdict = validation::validate(&field);
    if !verdict.valid {
        logger
            .log("validation", &format!("{}: {}", field.id, verdict.message))
            .await;
    }
    Ok(verdict)
}

/// Validate every required field of a form (fired on submit).
#[tauri::command]
pub async fn validate_form(
    fields: Vec<FieldDescriptor>,
    logger: tauri::State<'_, LoggerState>,
) -> Result<FormReport> {
    let report = validation::validate_form_report(&fields);
    for failure in report.failures() {
        logger
            .log(
                "validation",
                &format!("{}: {}", failure.id, failure.verdict.message),
            )
            .await;
    }
    Ok(report)
}

/// Message counter for the enquiry textarea, using the configured thresholds.
#[tauri::command]
pub async fn character_count(
    text: String,
    settings: tauri::State<'_, SettingsState>,
) -> Result<CharacterCount> {
    let thresholds = settings.counter().await;
    Ok(validation::character_count(&text, &thresholds))
}

#[tauri::command]
pub async fn service_details_visible(enquiry_type: String) -> bool {
    validation::requires_service_details(&enquiry_type)
}
