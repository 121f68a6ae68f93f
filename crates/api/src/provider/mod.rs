mod get_available_slots;
mod get_provider;

use actix_web::web;
use get_available_slots::get_available_slots_controller;
use get_provider::get_provider_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/provider/{provider}", web::get().to(get_provider_controller));
    cfg.route(
        "/provider/{provider}/available-slots",
        web::get().to(get_available_slots_controller),
    );
}
