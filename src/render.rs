//! Plain-text rendering of the detail view sections.
//!
//! Data selection goes through the render policy; everything here is a
//! deterministic function from section state to lines of text, which is
//! what the CLI prints and what the tests assert against.

use crate::domain::calculation::Calculation;
use crate::domain::contact::Contact;
use crate::domain::questionnaire::Questionnaire;
use crate::domain::video_feedback::VideoFeedback;
use crate::format;
use crate::view::{ContactDetailView, Section};

const LOADING: &str = "Loading...";
const NO_CALCULATIONS: &str = "No investment calculations available for this contact.";
const NO_QUESTIONNAIRE: &str = "No investor questionnaire available for this contact.";
const NO_VIDEO_FEEDBACK: &str = "No video feedback available for this contact.";
const CONTACT_NOT_FOUND: &str = "Contact not found";

/// Renders the whole view, one titled section after another.
pub fn render_detail(view: &ContactDetailView) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("== Contact Details ==".to_string());
    lines.extend(render_contact(view.contact_section()));
    lines.push(String::new());
    lines.push("== Investment Calculations ==".to_string());
    lines.extend(render_calculations(view.calculations_section()));
    lines.push(String::new());
    lines.push("== Investor Questionnaire ==".to_string());
    lines.extend(render_questionnaire(view.questionnaire_section()));
    lines.push(String::new());
    lines.push("== Video Feedback ==".to_string());
    lines.extend(render_video_feedback(view.video_feedback_section()));
    lines
}

pub fn render_contact(section: Section<'_, Contact>) -> Vec<String> {
    let contact = match section {
        Section::Loading => return vec![LOADING.to_string()],
        Section::Error(message) => return vec![message.to_string()],
        Section::Empty => return vec![CONTACT_NOT_FOUND.to_string()],
        Section::Ready(contact) => contact,
    };

    let mut lines = Vec::new();
    lines.push(contact.name.clone().unwrap_or_else(|| "Contact".to_string()));
    if let Some(status) = contact.status {
        lines.push(status.to_string());
    }
    if let Some(tags) = &contact.tags
        && !tags.is_empty()
    {
        lines.push(format!("Tags: {}", tags.iter().collect::<Vec<_>>().join(", ")));
    }
    if let Some(phone) = &contact.phone_number
        && !phone.is_empty()
    {
        lines.push(format!("Phone Number: {phone}"));
    }
    if let Some(email) = &contact.email
        && !email.is_empty()
    {
        lines.push(format!("Email: {email}"));
    }
    if let Some(address) = &contact.address
        && !address.is_empty()
    {
        lines.push(format!("Address: {address}"));
    }

    lines.push("Recent Jobs:".to_string());
    if contact.jobs.is_empty() {
        lines.push("No recent jobs found.".to_string());
    } else {
        for job in &contact.jobs {
            let amount = job
                .amount
                .map(format::format_currency)
                .unwrap_or_else(|| "N/A".to_string());
            lines.push(format!(
                "{} - Status: {} - Amount: ${amount}",
                job.name, job.status
            ));
        }
    }

    lines.push("Communication History:".to_string());
    if contact.communications.is_empty() {
        lines.push("No communication history found.".to_string());
    } else {
        for comm in &contact.communications {
            lines.push(format!("{} ({}): {}", comm.kind, comm.date, comm.description));
        }
    }
    lines
}

pub fn render_calculations(section: Section<'_, [Calculation]>) -> Vec<String> {
    let items = match section {
        Section::Loading => return vec![LOADING.to_string()],
        Section::Error(message) => return vec![message.to_string()],
        Section::Empty => return vec![NO_CALCULATIONS.to_string()],
        Section::Ready(items) => items,
    };

    let mut lines = Vec::new();
    for calc in items {
        lines.push(format!("{} - {}", calc.property_type, calc.market_area));
        lines.push(format!("Created on {}", format::format_date(&calc.created_at)));
        lines.push(format!(
            "Investment Amount: ${}",
            format::format_currency(calc.investment_amount)
        ));
        lines.push(format!(
            "Hold Period: {}",
            format::format_hold_period(calc.hold_period)
        ));
        lines.push(format!(
            "Return Rate: {}",
            format::format_percent(calc.annual_return_rate)
        ));
        lines.push(format!("ROI: {}", format::format_percent(calc.roi)));
        lines.push(format!(
            "Monthly Cash Flow: ${}",
            format::format_cash_flow(calc.monthly_cash_flow)
        ));
        lines.push(format!(
            "Annual Cash Flow: ${}",
            format::format_cash_flow(calc.annual_cash_flow)
        ));
        lines.push(format!(
            "Total Return: ${}",
            format::format_currency(calc.total_return)
        ));
        lines.push(format!(
            "Management: {}",
            format::format_percent(calc.property_management_fee)
        ));
        lines.push(format!(
            "Vacancy: {}",
            format::format_percent(calc.vacancy_rate)
        ));
        if let Some(notes) = &calc.notes {
            lines.push(format!("Notes: {notes}"));
        }
    }
    lines
}

pub fn render_questionnaire(section: Section<'_, Questionnaire>) -> Vec<String> {
    let data = match section {
        Section::Loading => return vec![LOADING.to_string()],
        Section::Error(message) => return vec![message.to_string()],
        Section::Empty => return vec![NO_QUESTIONNAIRE.to_string()],
        Section::Ready(data) => data,
    };

    let yes_no = |flag: bool| if flag { "Yes" } else { "No" };
    let mut lines = vec![
        format!("Accredited Investor: {}", yes_no(data.is_accredited_investor)),
        format!(
            "Prior Investment Experience: {}",
            yes_no(data.has_invested_before)
        ),
        format!("Looking Timeframe: {}", data.looking_timeframe),
        format!("Primary Goal: {}", data.primary_investment_goal),
        format!("Investment Timeline: {}", data.investment_timeline),
        format!("Next Investment Timeframe: {}", data.investment_timeframe),
        format!(
            "Capital to Invest (Next 12 Months): {}",
            data.capital_to_invest
        ),
        format!("Financing Plans: {}", data.use_financing),
        format!("Markets Interested: {}", data.markets_interested.join(", ")),
        format!(
            "Property Types: {}",
            data.property_types_interested.join(", ")
        ),
    ];
    if let Some(notes) = &data.notes {
        lines.push(format!("Additional Notes: {notes}"));
    }
    lines
}

pub fn render_video_feedback(section: Section<'_, [VideoFeedback]>) -> Vec<String> {
    let items = match section {
        Section::Loading => return vec![LOADING.to_string()],
        Section::Error(message) => return vec![message.to_string()],
        Section::Empty => return vec![NO_VIDEO_FEEDBACK.to_string()],
        Section::Ready(items) => items,
    };

    let mut lines = Vec::new();
    for feedback in items {
        match &feedback.video {
            Some(video) => {
                lines.push(video.title.clone());
                match format::youtube_video_id(&video.video_url) {
                    Some(id) => lines.push(format!("Video: https://youtu.be/{id}")),
                    None => lines.push(format!("Video: {}", video.video_url)),
                }
            }
            None => lines.push("Video Title Not Available".to_string()),
        }
        lines.push(format!(
            "Feedback provided on {}",
            format::format_date_time(&feedback.created_at)
        ));
        for response in feedback.responses.values() {
            lines.push(format!("{}: {}", response.question, response.answer));
            if let Some(rating) = response.rating {
                lines.push(format!("({rating}/5)"));
            }
        }
    }
    lines
}
