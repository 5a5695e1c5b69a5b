use figment::Jail;
use sentinel_config::SentinelConfig;

#[test]
fn env_overrides_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("SENTINEL_OLLAMA__BASE_URL", "http://10.0.0.5:11434");
        jail.set_env("SENTINEL_SSH__DELAY_FACTOR", "4");

        let config = SentinelConfig::load().expect("config loads");
        assert_eq!(config.ollama.base_url, "http://10.0.0.5:11434");
        assert_eq!(config.ssh.delay_factor, 4);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".netsentinel")?;
        jail.create_file(".netsentinel/config.toml", "[inspection]\nworkers = 3\n")?;
        jail.set_env("SENTINEL_INSPECTION__WORKERS", "9");

        let config = SentinelConfig::load().expect("config loads");
        assert_eq!(config.inspection.workers, 9);
        Ok(())
    });
}
