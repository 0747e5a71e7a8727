//! Common test utilities for envbind integration tests
//!
//! Provides shared sample records, fixed environments, and helpers.

#![allow(dead_code)]

use envbind::{BindTarget, Binder, EnvField, Field, MapEnv};

/// A representative settings record covering every supported field kind.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClusterSettings {
    pub hosts: Vec<String>,
    pub password: String,
    pub keyspace: String,
    pub port: i64,
    pub tracing: bool,
    pub datacenter: String,
    /// No binding tag; must never be touched.
    pub internal_note: String,
}

impl BindTarget for ClusterSettings {
    fn fields(&mut self) -> Option<Vec<Field<'_>>> {
        Some(vec![
            Field::text_list(
                "hosts",
                "env:HOSTS,sep:',',transform:hosts_no_ports",
                &mut self.hosts,
            ),
            Field::text(
                "password",
                "env:PASS,transform:url_escape",
                &mut self.password,
            ),
            Field::text(
                "keyspace",
                "env:KEYSPACE,default:system,desc:target keyspace",
                &mut self.keyspace,
            ),
            Field::int("port", "env:PORT,default:9042", &mut self.port),
            Field::flag("tracing", "env:TRACING", &mut self.tracing),
            Field::text("datacenter", "env:DATACENTER,required", &mut self.datacenter),
            Field::text("internal_note", "", &mut self.internal_note),
        ])
    }
}

/// A record that also declares an environment-name field.
#[derive(Debug, Default)]
pub struct EnvAwareSettings {
    pub name: String,
    pub env: String,
}

impl BindTarget for EnvAwareSettings {
    fn fields(&mut self) -> Option<Vec<Field<'_>>> {
        Some(vec![Field::text(
            "name",
            "env:SERVICE_NAME,default:svc",
            &mut self.name,
        )])
    }

    fn environment_field(&mut self) -> Option<EnvField<'_>> {
        Some(EnvField::Name(&mut self.env))
    }
}

/// Initialize test logging once; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A staging environment with the given extra variables.
///
/// Staging skips the `.env` bootstrap, keeping binding tests hermetic.
pub fn staging_env(vars: &[(&str, &str)]) -> MapEnv {
    let mut env = MapEnv::new().with("NODE_ENV", "staging");
    for (key, value) in vars {
        env = env.with(*key, *value);
    }
    env
}

/// A binder over a staging environment with the given variables.
pub fn staging_binder(vars: &[(&str, &str)]) -> Binder {
    init_logging();
    Binder::with_source(staging_env(vars))
}
