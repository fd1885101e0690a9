mod create_reminder;
mod delete_reminder;
mod dispatch_reminders;
mod get_reminder;
mod mark_reminder_taken;
mod update_reminder;

use crate::shared::{access::can_manage_reminders_of, auth::AuthenticatedUser};
use actix_web::web;
use create_reminder::create_reminder_controller;
use delete_reminder::delete_reminder_controller;
pub use dispatch_reminders::DispatchRemindersUseCase;
use get_reminder::get_reminder_controller;
use mark_reminder_taken::mark_reminder_taken_controller;
use medtrack_domain::{Reminder, ID};
use medtrack_infra::MedtrackContext;
use update_reminder::update_reminder_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminder", web::post().to(create_reminder_controller));
    cfg.route(
        "/reminder/{reminder_id}",
        web::get().to(get_reminder_controller),
    );
    cfg.route(
        "/reminder/{reminder_id}",
        web::patch().to(update_reminder_controller),
    );
    cfg.route(
        "/reminder/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
    cfg.route(
        "/reminder/{reminder_id}/taken",
        web::patch().to(mark_reminder_taken_controller),
    );
}

#[derive(Debug, PartialEq)]
pub enum ReminderAccessError {
    NotFound(ID),
    NotAllowed(ID),
}

/// Finds the `Reminder` if it exists and the user is allowed to manage it
async fn find_managed_reminder(
    user: &AuthenticatedUser,
    reminder_id: &ID,
    ctx: &MedtrackContext,
) -> Result<Reminder, ReminderAccessError> {
    let reminder = ctx
        .repos
        .reminders
        .find(reminder_id)
        .await
        .ok_or_else(|| ReminderAccessError::NotFound(reminder_id.clone()))?;
    if !can_manage_reminders_of(user, &reminder.patient_id, ctx).await {
        return Err(ReminderAccessError::NotAllowed(reminder_id.clone()));
    }
    Ok(reminder)
}
