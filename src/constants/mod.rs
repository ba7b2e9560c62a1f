pub struct Env {
    pub jwt_secret: String,
    pub database_url: String,
    pub scheduler_host: String,
    pub scheduler_port: u16,
    pub outbox_flush_secs: u64,
    pub frontend_url: String,
    pub ip: String,
    pub port: u16,
}

impl Env {
    fn new() -> Self {
        let jwt_secret = std::env::var("SECRET_KEY")
            .expect("SECRET_KEY must be set in .env file or environment variable");

        let database_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set in .env file or environment variable");

        let scheduler_host =
            std::env::var("SCHEDULER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let scheduler_port = std::env::var("SCHEDULER_PORT")
            .unwrap_or_else(|_| "24693".to_string())
            .parse::<u16>()
            .expect("SCHEDULER_PORT must be a valid u16 integer");
        let outbox_flush_secs = std::env::var("OUTBOX_FLUSH_SECS")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<u64>()
            .expect("OUTBOX_FLUSH_SECS must be a valid u64 integer");

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());
        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");
        Env {
            jwt_secret,
            database_url,
            scheduler_host,
            scheduler_port,
            outbox_flush_secs,
            frontend_url,
            ip,
            port,
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
