mod telemetry;

use agendo_api::Application;
use agendo_infra::{run_migration, setup_context};
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("agendo_server".into(), "info".into());
    init_subscriber(subscriber);

    run_migration()
        .await
        .expect("Database migrations should not fail");

    let context = setup_context().await;

    let app = Application::new(context).await?;
    app.start().await
}
