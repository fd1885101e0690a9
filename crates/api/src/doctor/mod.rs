mod get_doctor;
mod get_doctor_patients;
mod get_doctors;
mod update_doctor;

use actix_web::web;
use get_doctor::get_doctor_controller;
use get_doctor_patients::get_doctor_patients_controller;
use get_doctors::get_doctors_controller;
use update_doctor::update_doctor_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/doctors", web::get().to(get_doctors_controller));
    cfg.route("/doctors/{doctor_id}", web::get().to(get_doctor_controller));
    cfg.route(
        "/doctors/{doctor_id}",
        web::patch().to(update_doctor_controller),
    );
    cfg.route(
        "/doctors/{doctor_id}/patients",
        web::get().to(get_doctor_patients_controller),
    );
}
