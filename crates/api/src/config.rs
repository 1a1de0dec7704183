use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub cors_origin: String,
    pub neo4j: Neo4jConfig,
    pub groq: GroqConfig,
}

#[derive(Debug, Clone)]
pub struct Neo4jConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub base_url: String,
    pub api_key: String,
    pub extract_model: String,
    pub story_model: String,
}

impl AppConfig {
    /// Load from environment variables. Credentials have no defaults and
    /// fail loudly when missing; everything else falls back to local-dev
    /// values.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:8000"),
            cors_origin: env_or("CORS_ORIGIN", "http://localhost:5173"),
            neo4j: Neo4jConfig {
                uri: env_or("NEO4J_URI", "bolt://localhost:7687"),
                user: env_or("NEO4J_USER", "neo4j"),
                password: env::var("NEO4J_PASSWORD").context("NEO4J_PASSWORD is not set")?,
            },
            groq: GroqConfig {
                base_url: env_or("GROQ_BASE_URL", "https://api.groq.com"),
                api_key: env::var("GROQ_API_KEY").context("GROQ_API_KEY is not set")?,
                extract_model: env_or("GROQ_EXTRACT_MODEL", "llama-3.3-70b-versatile"),
                story_model: env_or("GROQ_STORY_MODEL", "deepseek-r1-distill-qwen-32b"),
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
