mod complete_medication;
mod create_medication;
mod get_medication;
mod get_medication_reminders;
mod get_medications;
mod update_medication;

use actix_web::web;
use complete_medication::complete_medication_controller;
use create_medication::create_medication_controller;
use get_medication::get_medication_controller;
use get_medication_reminders::get_medication_reminders_controller;
use get_medications::{get_current_medications_controller, get_medication_history_controller};
use medtrack_domain::{Medication, Reminder};
use update_medication::update_medication_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/medication", web::post().to(create_medication_controller));
    // Registered before `/medication/{medication_id}` so they are not taken for ids
    cfg.route(
        "/medication/current",
        web::get().to(get_current_medications_controller),
    );
    cfg.route(
        "/medication/history",
        web::get().to(get_medication_history_controller),
    );
    cfg.route(
        "/medication/{medication_id}",
        web::get().to(get_medication_controller),
    );
    cfg.route(
        "/medication/{medication_id}",
        web::patch().to(update_medication_controller),
    );
    cfg.route(
        "/medication/{medication_id}/complete",
        web::patch().to(complete_medication_controller),
    );
    cfg.route(
        "/medication/{medication_id}/reminders",
        web::get().to(get_medication_reminders_controller),
    );
}

/// One `Reminder` for every dose of the course after `from`
fn reminders_after(
    medication: &Medication,
    patient_mobile_number: &str,
    from: i64,
) -> Vec<Reminder> {
    medication
        .dose_times_after(from)
        .into_iter()
        .map(|remind_at| Reminder::for_dose(medication, patient_mobile_number, remind_at))
        .collect()
}
