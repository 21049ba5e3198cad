use fileserv::config::Config;

// Environment mutations are process-global, so defaults and overrides
// are exercised in a single sequential test.
#[test]
fn test_config_defaults_and_env_overrides() {
    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("WEB_ROOT");
    }
    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.web_root, "./public");

    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:3000");
        std::env::set_var("WEB_ROOT", "/srv/www");
    }
    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.web_root, "/srv/www");

    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("WEB_ROOT");
    }
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::load();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
    assert_eq!(cfg1.web_root, cfg2.web_root);
}
