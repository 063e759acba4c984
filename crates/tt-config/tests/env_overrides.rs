use figment::Jail;
use tt_config::TrackConfig;

#[test]
fn env_vars_override_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("TECHTRACK_CATALOG__BASE_URL", "http://localhost:9000");
        jail.set_env("TECHTRACK_STORAGE__WORKING_KEY", "scratch");

        let config = TrackConfig::load().expect("config loads");
        assert_eq!(config.catalog.base_url, "http://localhost:9000");
        assert_eq!(config.storage.working_key, "scratch");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".techtrack")?;
        jail.create_file(
            ".techtrack/config.toml",
            r#"
            [search]
            debounce_ms = 900
            "#,
        )?;
        jail.set_env("TECHTRACK_SEARCH__DEBOUNCE_MS", "100");

        let config = TrackConfig::load().expect("config loads");
        assert_eq!(config.search.debounce_ms, 100);
        Ok(())
    });
}
