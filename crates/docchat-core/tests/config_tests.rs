use figment::Jail;

use std::path::PathBuf;

use docchat_core::config::{expand_path, Config, RetrievalSettings, Settings};
use docchat_core::Error;

#[test]
fn defaults_apply_without_config_files() {
    Jail::expect_with(|_jail| {
        let config = Config::load_for_env("dev").map_err(|e| e.to_string())?;
        let settings = config.settings().map_err(|e| e.to_string())?;
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.retrieval.max_indexes, 5);
        assert_eq!(settings.retrieval.top_k, 3);
        assert!((settings.retrieval.min_score - 0.01).abs() < f64::EPSILON);
        assert_eq!(settings.retrieval.snippet_chars, 500);
        assert_eq!(settings.ingest.max_file_bytes, 100 * 1024 * 1024);
        Ok(())
    });
}

#[test]
fn env_file_and_variables_override_in_order() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[retrieval]\ntop_k = 4\nmax_indexes = 8\n")?;
        jail.create_file("config.prod.toml", "[retrieval]\nmax_indexes = 2\n")?;
        jail.set_env("DOCCHAT_RETRIEVAL__MIN_SCORE", "0.2");

        let config = Config::load_for_env("prod").map_err(|e| e.to_string())?;
        let retrieval = config.settings().map_err(|e| e.to_string())?.retrieval;
        assert_eq!(retrieval.top_k, 4);
        assert_eq!(retrieval.max_indexes, 2);
        assert!((retrieval.min_score - 0.2).abs() < 1e-12);
        assert_eq!(retrieval.snippet_chars, 500);
        Ok(())
    });
}

#[test]
fn zero_capacity_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[retrieval]\nmax_indexes = 0\n")?;
        match Config::load_for_env("dev") {
            Err(Error::InvalidConfig(msg)) => assert!(msg.contains("max_indexes")),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("zero capacity must not load"),
        }
        Ok(())
    });
}

#[test]
fn validate_rejects_bad_thresholds() {
    let negative = RetrievalSettings { min_score: -0.5, ..RetrievalSettings::default() };
    assert!(matches!(negative.validate(), Err(Error::InvalidConfig(_))));

    let nan = RetrievalSettings { min_score: f64::NAN, ..RetrievalSettings::default() };
    assert!(nan.validate().is_err());

    let no_results = RetrievalSettings { top_k: 0, ..RetrievalSettings::default() };
    assert!(no_results.validate().is_err());

    assert!(RetrievalSettings::default().validate().is_ok());
}

#[test]
fn cli_paths_expand_variables() {
    Jail::expect_with(|jail| {
        jail.set_env("DOCS_ROOT", "/srv/docs");
        assert_eq!(expand_path("$DOCS_ROOT/manual.txt"), PathBuf::from("/srv/docs/manual.txt"));
        assert_eq!(expand_path("${DOCS_ROOT}/a.txt"), PathBuf::from("/srv/docs/a.txt"));
        assert_eq!(expand_path("plain/relative.txt"), PathBuf::from("plain/relative.txt"));
        assert_eq!(expand_path("$DOCS_ROOT_UNSET/a.txt"), PathBuf::from("$DOCS_ROOT_UNSET/a.txt"));
        Ok(())
    });
}
