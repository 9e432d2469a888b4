#[cfg(test)]
mod tests {
    use std::path::Path;

    use roast_std::env::InMemoryEnv;

    use crate::config::*;

    fn base_env() -> InMemoryEnv {
        let env = InMemoryEnv::new();
        env.set("BOT_TOKEN", "123:abc");
        env.set("RENDER_EXTERNAL_URL", "https://roast.example.com");
        env.set("HF_API_TOKEN", "hf_abc");
        env
    }

    #[test]
    fn test_defaults() {
        let config = BotConfig::from_env(&base_env()).unwrap();

        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.roast_file, Path::new("comments.txt"));
        assert_eq!(config.port, 10000);
        assert_eq!(config.health_port, None);
        assert_eq!(config.llm.api_token, "hf_abc");
        assert_eq!(config.llm.model, llm_huggingface::config::DEFAULT_MODEL);
    }

    #[test]
    fn test_overrides() {
        let env = base_env();
        env.set("ROAST_FILE", "/data/roasts.txt");
        env.set("PORT", "8443");
        env.set("HEALTH_CHECK_PORT", "3000");
        env.set("HF_MODEL", "some/model");

        let config = BotConfig::from_env(&env).unwrap();

        assert_eq!(config.roast_file, Path::new("/data/roasts.txt"));
        assert_eq!(config.port, 8443);
        assert_eq!(config.health_port, Some(3000));
        assert_eq!(config.llm.model, "some/model");
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let env = base_env();
        env.set("PORT", "not-a-port");
        env.set("HEALTH_CHECK_PORT", "99999");

        let config = BotConfig::from_env(&env).unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.health_port, None);
    }

    #[test]
    fn test_required_vars() {
        for key in ["BOT_TOKEN", "RENDER_EXTERNAL_URL", "HF_API_TOKEN"] {
            let env = base_env();
            env.remove(key);

            let err = BotConfig::from_env(&env).unwrap_err();

            assert_eq!(err.to_string(), format!("{key} is not set"));
        }
    }

    #[test]
    fn test_blank_required_var_is_missing() {
        let env = base_env();
        env.set("BOT_TOKEN", "  ");

        assert!(matches!(
            BotConfig::from_env(&env),
            Err(ConfigError::Missing("BOT_TOKEN"))
        ));
    }

    #[test]
    fn test_webhook_url() {
        let env = base_env();
        let config = BotConfig::from_env(&env).unwrap();
        assert_eq!(
            config.webhook_url().unwrap().as_str(),
            "https://roast.example.com/webhook"
        );

        env.set("RENDER_EXTERNAL_URL", "https://roast.example.com/");
        let config = BotConfig::from_env(&env).unwrap();
        assert_eq!(
            config.webhook_url().unwrap().as_str(),
            "https://roast.example.com/webhook"
        );
    }

    #[test]
    fn test_webhook_url_rejects_garbage() {
        let env = base_env();
        env.set("RENDER_EXTERNAL_URL", "not a url");

        let config = BotConfig::from_env(&env).unwrap();

        assert!(matches!(
            config.webhook_url(),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }
}
