//! Command handlers for the analyze and diagnose operations.

use std::path::PathBuf;
use vermeer::{
    AnalyzeRequest, DiagnoseRequest, DiagnosisService, OpenAiCompatClient, VermeerConfig,
};

fn build_service() -> Result<DiagnosisService<OpenAiCompatClient>, Box<dyn std::error::Error>> {
    let config = VermeerConfig::load()?;
    let driver = OpenAiCompatClient::from_env(config.engine())?;
    Ok(DiagnosisService::new(driver, config)?)
}

/// Run the interaction-analysis operation and print the response as JSON.
pub async fn run_analyze(
    logs: Vec<PathBuf>,
    session_id: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let service = build_service()?;
    let response = service
        .analyze_interaction(AnalyzeRequest {
            log_files: Some(logs),
            templates_path: None,
            session_id,
        })
        .await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    if !response.success {
        std::process::exit(1);
    }
    Ok(())
}

/// Run the diagnosis operation and print the response as JSON.
pub async fn run_diagnose(
    logs: Vec<PathBuf>,
    templates: Option<PathBuf>,
    session_id: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let service = build_service()?;
    let response = service
        .diagnose(DiagnoseRequest {
            log_files: Some(logs),
            templates_path: templates,
            session_id,
        })
        .await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    if !response.success {
        std::process::exit(1);
    }
    Ok(())
}
