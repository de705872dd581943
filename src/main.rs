use std::process::ExitCode;
use std::sync::Arc;

use investor_crm::api::http::HttpBackend;
use investor_crm::domain::types::ContactId;
use investor_crm::models::config::AppConfig;
use investor_crm::render;
use investor_crm::services::detail::drive_detail_view;
use investor_crm::view::{ContactDetailView, FetchState};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    let Some(raw_id) = std::env::args().nth(1) else {
        eprintln!("usage: investor-crm <contact-id>");
        return ExitCode::FAILURE;
    };
    let contact_id = match ContactId::new(raw_id) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("invalid contact id: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = match AppConfig::load("config") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    let api = match HttpBackend::new(&config) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("failed to initialize backend client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut view = ContactDetailView::new();
    drive_detail_view(Arc::new(api), &mut view, contact_id).await;

    for line in render::render_detail(&view) {
        println!("{line}");
    }

    if matches!(view.contact_state(), FetchState::Error(_)) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
