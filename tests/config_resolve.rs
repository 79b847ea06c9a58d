// tests/config_resolve.rs
use article_readability::config::app::{ENV_ARTICLES_DIR, ENV_BIND, ENV_CONFIG_PATH};
use article_readability::config::AppConfig;
use article_readability::ingest::config::load_articles_from;
use std::path::PathBuf;
use std::{env, fs};

#[serial_test::serial]
#[test]
fn resolve_uses_env_then_fallbacks() {
    // Isolate CWD so the real repo config/ is not picked up
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    env::remove_var(ENV_CONFIG_PATH);
    env::remove_var(ENV_BIND);
    env::remove_var(ENV_ARTICLES_DIR);

    // 1) Nothing on disk → defaults
    let d = AppConfig::resolve(None).unwrap();
    assert_eq!(d.output, PathBuf::from("output.csv"));

    // 2) config/readability.toml fallback
    fs::create_dir_all("config").unwrap();
    fs::write("config/readability.toml", r#"output = "from_default.json""#).unwrap();
    let c = AppConfig::resolve(None).unwrap();
    assert_eq!(c.output, PathBuf::from("from_default.json"));

    // 3) env path wins over the fallback
    let p_env = tmp.path().join("other.toml");
    fs::write(&p_env, r#"output = "from_env.csv""#).unwrap();
    env::set_var(ENV_CONFIG_PATH, p_env.display().to_string());
    let e = AppConfig::resolve(None).unwrap();
    assert_eq!(e.output, PathBuf::from("from_env.csv"));

    // 4) explicit path wins over env
    let p_cli = tmp.path().join("cli.toml");
    fs::write(&p_cli, r#"output = "from_cli.csv""#).unwrap();
    let x = AppConfig::resolve(Some(&p_cli)).unwrap();
    assert_eq!(x.output, PathBuf::from("from_cli.csv"));

    // 5) value overrides
    env::set_var(ENV_BIND, "0.0.0.0:9000");
    env::set_var(ENV_ARTICLES_DIR, "/data/articles");
    let o = AppConfig::resolve(None).unwrap();
    assert_eq!(o.server.bind, "0.0.0.0:9000");
    assert_eq!(o.articles_dir, PathBuf::from("/data/articles"));

    // 6) dangling env path is an error
    env::set_var(ENV_CONFIG_PATH, tmp.path().join("missing.toml").display().to_string());
    assert!(AppConfig::resolve(None).is_err());

    env::remove_var(ENV_CONFIG_PATH);
    env::remove_var(ENV_BIND);
    env::remove_var(ENV_ARTICLES_DIR);
    env::set_current_dir(&old).unwrap();
}

#[test]
fn article_list_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("Input.json");
    fs::write(
        &p,
        r#"[{"URL_ID":"blackassign0001","URL":"https://x/1"},{"URL_ID":"blackassign0002","URL":"https://x/2"}]"#,
    )
    .unwrap();
    let v = load_articles_from(&p).unwrap();
    assert_eq!(v.len(), 2);
    assert_eq!(v[1].id, "blackassign0002");
}
