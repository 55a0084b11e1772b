//! Library integration tests.

use std::collections::HashMap;
use std::env::VarError;
use std::fs;
use std::path::PathBuf;

use multidomain::config::{ApplicationPaths, DomainConfig};
use multidomain::domain::{sanitize, ContextStore, DomainResolver, StaticRequest};
use multidomain::MultidomainError;
use tempfile::TempDir;

fn no_env(_: &str) -> Result<String, VarError> {
    Err(VarError::NotPresent)
}

fn setup_app(env_files: &[&str], storage_dirs: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for file in env_files {
        fs::write(temp.path().join(file), "APP_NAME=test").unwrap();
    }
    for dir in storage_dirs {
        fs::create_dir_all(temp.path().join("storage").join(dir)).unwrap();
    }
    temp
}

fn resolver(temp: &TempDir, host: &str) -> DomainResolver {
    DomainResolver::new(ApplicationPaths::new(temp.path()))
        .with_request(StaticRequest::new(host))
        .with_env_lookup(no_env)
}

#[test]
fn error_types_are_public() {
    let err = MultidomainError::ConfigNotFound {
        path: PathBuf::from("/srv/app/config/domain.yml"),
    };
    assert!(err.to_string().contains("domain.yml"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> multidomain::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use multidomain::cli::{Cli, Commands};

    let cli = Cli::parse_from(["multidomain", "list", "--json"]);
    if let Some(Commands::List(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected List command");
    }
}

#[test]
fn parent_domain_env_file_is_used() {
    let temp = setup_app(&[".env", ".env.example.com"], &[]);
    let resolver = resolver(&temp, "shop.example.com");
    assert_eq!(resolver.environment_file_domain(None), ".env.example.com");
}

#[test]
fn default_env_file_without_matches() {
    let temp = setup_app(&[".env"], &[]);
    let resolver = resolver(&temp, "a.b.c");
    assert_eq!(resolver.environment_file(), ".env");
    assert_eq!(resolver.environment_file_path(), temp.path().join(".env"));
}

#[test]
fn parent_domain_storage_is_used() {
    let temp = setup_app(&[], &["example_com"]);
    let resolver = resolver(&temp, "eu.example.com");
    assert!(resolver.domain_storage_path(None).ends_with("storage/example_com"));
}

#[test]
fn exact_storage_path_need_not_exist() {
    let temp = setup_app(&[], &[]);
    let resolver = resolver(&temp, "shop.example.com");
    let path = resolver.exact_domain_storage_path(Some("new.tenant"));
    assert_eq!(path, temp.path().join("storage/new_tenant"));
    assert!(!path.exists());
}

#[test]
fn cache_suffix_follows_env_file() {
    let temp = setup_app(&[".env.shop.example.com"], &[]);
    let resolver = resolver(&temp, "shop.example.com");
    assert_eq!(resolver.domain_cached_file_suffix(), "-shop_example_com.php");
    assert_eq!(
        resolver.cached_config_path(),
        temp.path().join("bootstrap/cache/config-shop_example_com.php")
    );
}

#[test]
fn cache_override_from_environment() {
    let temp = setup_app(&[], &[]);
    let resolver = DomainResolver::new(ApplicationPaths::new(temp.path()))
        .with_request(StaticRequest::new("a.com"))
        .with_env_lookup(|key| match key {
            "APP_ROUTES_CACHE" => Ok("/tmp/routes.php".to_string()),
            _ => Err(VarError::NotPresent),
        });
    assert_eq!(resolver.cached_routes_path(), PathBuf::from("/tmp/routes.php"));
    assert_eq!(
        resolver.cached_config_path(),
        temp.path().join("bootstrap/cache/config.php")
    );
}

#[test]
fn detected_values_are_published_to_context() {
    let resolver = DomainResolver::with_context(
        ApplicationPaths::new("/srv/app"),
        HashMap::<String, String>::new(),
    )
    .with_request(StaticRequest::new("shop.example.com:8080").with_scheme("https"));

    let context = resolver.context();
    let context: &dyn ContextStore = &*context;
    assert_eq!(context.get("domain"), Some("shop.example.com"));
    assert_eq!(context.get("full_domain"), Some("https://shop.example.com:8080"));
    assert_eq!(context.get("domain_scheme"), Some("https"));
    assert_eq!(context.get("domain_port"), Some("8080"));
}

#[test]
fn console_arguments_take_precedence_over_request() {
    let resolver = DomainResolver::new(ApplicationPaths::new("/srv/app"))
        .with_args(["artisan", "migrate", "--domain", "eu.example.com"])
        .with_request(StaticRequest::new("shop.example.com"));
    assert_eq!(resolver.domain(), "eu.example.com");
    assert!(resolver.domain_is(["eu.example.com"]));
    assert!(!resolver.domain_is(["shop.example.com"]));
}

#[test]
fn domains_list_from_config_file() {
    let temp = setup_app(&[".env.eu.example.com"], &["example_com"]);
    let paths = ApplicationPaths::new(temp.path());
    fs::create_dir_all(paths.config_dir()).unwrap();
    fs::write(
        DomainConfig::path_for(&paths),
        "domains:\n  - eu.example.com\n  - other.org\n",
    )
    .unwrap();

    let config = DomainConfig::load(&DomainConfig::path_for(&paths)).unwrap();
    let resolver = DomainResolver::new(config.apply_paths(paths)).with_config(&config);
    let list = resolver.domains_list();

    assert_eq!(list.len(), 2);
    assert_eq!(list["eu.example.com"].env, ".env.eu.example.com");
    assert_eq!(list["eu.example.com"].storage_path, temp.path().join("storage/example_com"));
    assert_eq!(list["other.org"].env, ".env");
    assert_eq!(list["other.org"].storage_path, temp.path().join("storage"));
}

#[test]
fn sanitize_is_public() {
    assert_eq!(sanitize("shop.example.com"), "shop_example_com");
}
