//! Operational probe: fetches the first page of users and tasks through the
//! configured API and logs a summary, exercising the same controllers the
//! console views use.

use dotenvy::dotenv;

use admin_console::api::http::HttpApi;
use admin_console::config::ApiConfig;
use admin_console::controller::ListController;
use admin_console::domain::task::Task;
use admin_console::domain::user::User;

fn report<T: Clone, S>(label: &str, list: &ListController<T, S>)
where
    S: admin_console::api::ListSource<T>,
{
    match list.result() {
        Some(page) => log::info!(
            "{label}: page {}/{} ({} of {} records)",
            page.page,
            page.pages,
            page.items.len(),
            page.total,
        ),
        None => match list.error() {
            Some(err) => log::error!("{label}: fetch failed: {err}"),
            None => log::error!("{label}: no result"),
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "admin-console".to_string());
    let config = ApiConfig::load(&config_path)?;
    let api = HttpApi::from_config(&config)?;

    let users: ListController<User, _> = ListController::new(api.clone());
    users.refresh().await;
    report("users", &users);

    let tasks: ListController<Task, _> = ListController::new(api);
    tasks.refresh().await;
    report("tasks", &tasks);

    Ok(())
}
