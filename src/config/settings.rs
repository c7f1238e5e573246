#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub default_port: u16,
    pub database_path: &'static str,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            default_port: 3000,
            database_path: "riichi_league.db",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchSettings {
    /// Required sum of the four raw point results.
    pub table_point_pool: i32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            table_point_pool: 100000,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub match_rules: MatchSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
