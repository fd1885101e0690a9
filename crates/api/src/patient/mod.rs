mod get_current_doctor;
mod get_me;
mod get_patients;
mod update_patient;

use actix_web::web;
use get_current_doctor::get_current_doctor_controller;
use get_me::get_me_controller;
use get_patients::get_patients_controller;
use update_patient::update_patient_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/patient", web::get().to(get_me_controller));
    cfg.route("/patient", web::patch().to(update_patient_controller));
    cfg.route(
        "/patient/doctor",
        web::get().to(get_current_doctor_controller),
    );
    cfg.route("/patients", web::get().to(get_patients_controller));
}
