//! Tests for db::factory and db::repo_config - repository creation and configuration.

mod support;

use std::io::Write;
use std::str::FromStr;

use contacts_api::api::ContactFields;
use contacts_api::config::ServerConfig;
use contacts_api::db::factory::{RepositoryFactory, RepositoryType};
use contacts_api::db::RepositoryConfig;

#[test]
fn test_repository_type_from_str_postgres() {
    assert_eq!(
        RepositoryType::from_str("postgres").unwrap(),
        RepositoryType::Postgres
    );
    assert_eq!(
        RepositoryType::from_str("POSTGRES").unwrap(),
        RepositoryType::Postgres
    );
    assert_eq!(
        RepositoryType::from_str("pg").unwrap(),
        RepositoryType::Postgres
    );
}

#[test]
fn test_repository_type_from_str_local() {
    assert_eq!(
        RepositoryType::from_str("local").unwrap(),
        RepositoryType::Local
    );
    assert_eq!(
        RepositoryType::from_str("LOCAL").unwrap(),
        RepositoryType::Local
    );
}

#[test]
fn test_repository_type_from_str_invalid() {
    let result = RepositoryType::from_str("sqlite");
    assert!(result.unwrap_err().contains("Unknown repository type"));
}

#[test]
fn test_repository_type_from_env_default() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", None),
            ("DATABASE_URL", None),
            ("PG_DATABASE_URL", None),
        ],
        || {
            assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
        },
    );
}

#[test]
fn test_repository_type_from_env_with_database_url() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", None),
            ("DATABASE_URL", Some("postgres://localhost/contacts")),
        ],
        || {
            assert_eq!(RepositoryType::from_env(), RepositoryType::Postgres);
        },
    );
}

#[test]
fn test_repository_type_from_env_with_pg_database_url() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", None),
            ("DATABASE_URL", None),
            ("PG_DATABASE_URL", Some("postgres://localhost/contacts")),
        ],
        || {
            assert_eq!(RepositoryType::from_env(), RepositoryType::Postgres);
        },
    );
}

#[test]
fn test_repository_type_from_env_explicit_overrides_url() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", Some("local")),
            ("DATABASE_URL", Some("postgres://localhost/contacts")),
        ],
        || {
            assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
        },
    );
}

#[test]
fn test_repository_type_from_env_invalid_defaults_to_local() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", Some("invalid")),
            ("DATABASE_URL", None),
            ("PG_DATABASE_URL", None),
        ],
        || {
            assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
        },
    );
}

#[test]
fn test_repository_type_from_env_misspelled_ignores_database_url() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", Some("postgress")),
            ("DATABASE_URL", Some("postgres://localhost/contacts")),
        ],
        || {
            assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
        },
    );
}

#[tokio::test]
async fn test_create_local_via_factory_is_usable() {
    let repo = RepositoryFactory::create(RepositoryType::Local, None)
        .await
        .unwrap();

    assert!(repo.health_check().await.unwrap());
    let created = repo
        .create_contact(&ContactFields::new("Ada", "Lovelace", "5551234"))
        .await
        .unwrap();
    assert_eq!(created.id.value(), 1);
    assert_eq!(repo.list_contacts().await.unwrap(), vec![created]);
}

#[tokio::test]
async fn test_factory_instances_do_not_share_state() {
    let first = RepositoryFactory::create_local();
    let second = RepositoryFactory::create_local();

    first
        .create_contact(&ContactFields::new("Ada", "Lovelace", "5551234"))
        .await
        .unwrap();

    assert_eq!(first.list_contacts().await.unwrap().len(), 1);
    assert!(second.list_contacts().await.unwrap().is_empty());
}

#[cfg(feature = "postgres-repo")]
#[tokio::test]
async fn test_create_postgres_without_config_fails() {
    let err = RepositoryFactory::create(RepositoryType::Postgres, None)
        .await
        .err()
        .unwrap();
    assert!(err.to_string().contains("requires PostgresConfig"));
}

#[cfg(not(feature = "postgres-repo"))]
#[tokio::test]
async fn test_create_postgres_without_feature_fails() {
    let err = RepositoryFactory::create(RepositoryType::Postgres, None)
        .await
        .err()
        .unwrap();
    assert!(err.to_string().contains("feature not enabled"));
}

#[tokio::test]
async fn test_from_config_file_local() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[repository]\ntype = \"local\"").unwrap();

    let repo = RepositoryFactory::from_config_file(file.path())
        .await
        .unwrap();
    assert!(repo.list_contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_from_config_file_invalid_type() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[repository]\ntype = \"mongo\"").unwrap();

    let err = RepositoryFactory::from_config_file(file.path())
        .await
        .err()
        .unwrap();
    assert!(err.to_string().contains("Invalid repository type"));
}

#[tokio::test]
async fn test_from_config_file_missing() {
    let result = RepositoryFactory::from_config_file("/nonexistent/repository.toml").await;
    assert!(result.is_err());
}

#[test]
fn test_repository_config_defaults_postgres_section() {
    let config = RepositoryConfig::from_toml_str("[repository]\ntype = \"local\"\n").unwrap();
    assert_eq!(config.postgres.max_connections, 10);
    assert_eq!(config.postgres.max_retries, 3);
    assert!(config.postgres.database_url.is_empty());
}

#[test]
fn test_server_config_from_env_defaults() {
    support::with_scoped_env(
        &[
            ("HOST", None),
            ("PORT", None),
            ("STATIC_DIR", None),
            ("API_DOCS", None),
            ("PUBLIC_URL", None),
        ],
        || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config, ServerConfig::default());
        },
    );
}

#[test]
fn test_server_config_from_env_overrides() {
    support::with_scoped_env(
        &[
            ("HOST", Some("127.0.0.1")),
            ("PORT", Some("8081")),
            ("STATIC_DIR", Some("")),
            ("API_DOCS", Some("false")),
            ("PUBLIC_URL", Some("https://contacts.example.com/")),
        ],
        || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.host, "127.0.0.1");
            assert_eq!(config.port, 8081);
            assert!(config.static_dir.is_none());
            assert!(!config.docs_enabled);
            assert_eq!(
                config.public_url.as_deref(),
                Some("https://contacts.example.com")
            );
        },
    );
}

#[test]
fn test_server_config_rejects_bad_port() {
    support::with_scoped_env(&[("PORT", Some("not-a-port"))], || {
        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.contains("PORT"));
    });
}

#[test]
fn test_server_config_rejects_bad_docs_flag() {
    support::with_scoped_env(&[("PORT", None), ("API_DOCS", Some("sometimes"))], || {
        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.contains("API_DOCS"));
    });
}
