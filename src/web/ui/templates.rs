use askama::Template;
use askama_web::WebTemplate;

pub const AWAITING_TELEMETRY: &str = "⏳ Awaiting telemetry…";

#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub theme: String,
    pub toggle_label: String,
    pub mars_markup: String,
    pub deep_space_markup: String,
    pub mars_interval_ms: u128,
    pub deep_space_interval_ms: u128,
}
