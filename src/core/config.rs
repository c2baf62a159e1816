use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db_path: String,
    pub web_ui_path: String,
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let host = "127.0.0.1";
        let port = "5000";
        let storage_path = env::var("AGENDA_STORAGE_PATH").unwrap_or("./".to_string());
        let db_path = format!("{}/db", storage_path);
        let web_ui_path =
            env::var("AGENDA_WEB_UI_PATH").unwrap_or_else(|_| "./web-ui/src".to_string());
        let api_base_url =
            env::var("AGENDA_API_URL").unwrap_or(format!("http://{}:{}", host, port));

        Self {
            db_path,
            web_ui_path,
            api_base_url,
        }
    }
}
