mod create_schedule;
mod delete_schedule;
mod get_schedules;
mod update_schedule;

use actix_web::web;
use create_schedule::create_schedule_controller;
use delete_schedule::delete_schedule_controller;
use get_schedules::get_schedules_controller;
use update_schedule::update_schedule_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/schedule", web::post().to(create_schedule_controller));
    cfg.route("/schedule", web::get().to(get_schedules_controller));
    cfg.route(
        "/schedule/{schedule_id}",
        web::put().to(update_schedule_controller),
    );
    cfg.route(
        "/schedule/{schedule_id}",
        web::delete().to(delete_schedule_controller),
    );
}
