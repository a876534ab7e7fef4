use dotenv::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// URL del database SQLite; se assente si usa il backend in memoria
    pub database_url: Option<String>,
    pub server_host: String,
    pub server_port: u16,
    /// Carica i quattro caffè di default all'avvio
    pub seed_data: bool,
    pub app_env: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        // DATABASE_URL è opzionale: senza, lo store vive solo in memoria
        let database_url = env::var("DATABASE_URL").ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let seed_data = env::var("SEED_DATA")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .map_err(|_| "Invalid SEED_DATA: must be true or false".to_string())?;

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            database_url,
            server_host,
            server_port,
            seed_data,
            app_env,
        })
    }

    /// Stampa la configurazione all'avvio
    pub fn print_info(&self) {
        println!("   Server Configuration:");
        println!("   Environment: {}", self.app_env);
        println!(
            "   Server Address: {}:{}",
            self.server_host, self.server_port
        );
        println!(
            "   Backend: {}",
            match &self.database_url {
                Some(url) => format!("sqlite ({url})"),
                None => "in-memory".to_string(),
            }
        );
        println!("   Seed Data: {}", self.seed_data);
    }
}
