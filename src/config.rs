use std::env;
use std::path::PathBuf;

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use password_hash::rand_core::OsRng;

/// Transactional-email provider settings. The service/template/key triple
/// mirrors values the provider issues per account; the compiled-in defaults
/// stand in for what the original deployment hard-codes and should be
/// overridden per environment.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub base_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub from_name: String,
    pub reply_to: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub admin_username: String,
    pub admin_password_hash: String,
    pub whatsapp_phone: String,
    pub email: EmailConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let data_dir = env::var("DATA_DIR")
            .unwrap_or_else(|_| "data".to_string())
            .into();

        let admin_username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        // Either a precomputed PHC hash, or a plaintext secret hashed once at
        // startup. One of the two must be configured.
        let admin_password_hash = match env::var("ADMIN_PASSWORD_HASH") {
            Ok(hash) => hash,
            Err(_) => hash_password(&env::var("ADMIN_PASSWORD")?)?,
        };

        let whatsapp_phone =
            env::var("WHATSAPP_PHONE").unwrap_or_else(|_| "218910000000".to_string());

        let email = EmailConfig {
            base_url: env::var("EMAILJS_BASE_URL")
                .unwrap_or_else(|_| "https://api.emailjs.com".to_string()),
            service_id: env::var("EMAILJS_SERVICE_ID")
                .unwrap_or_else(|_| "service_k8m2x1p".to_string()),
            template_id: env::var("EMAILJS_TEMPLATE_ID")
                .unwrap_or_else(|_| "template_9qj3d2k".to_string()),
            public_key: env::var("EMAILJS_PUBLIC_KEY")
                .unwrap_or_else(|_| "Zp4XnQeTRWLuY0bvA".to_string()),
            from_name: env::var("STORE_FROM_NAME")
                .unwrap_or_else(|_| "Souk Storefront".to_string()),
            reply_to: env::var("STORE_REPLY_TO")
                .unwrap_or_else(|_| "support@souk-storefront.example".to_string()),
        };

        Ok(Self {
            host,
            port,
            data_dir,
            admin_username,
            admin_password_hash,
            whatsapp_phone,
            email,
        })
    }
}

pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(hash.to_string())
}
