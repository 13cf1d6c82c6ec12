//! Connection pool built from [`DbConfig`].

use crate::client::GenericClient;
use crate::config::DbConfig;
use crate::error::{DataError, DataResult};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use std::time::Duration;
use tokio_postgres::NoTls;

/// Create a pool whose connections start with `search_path = <schema>, public`.
///
/// Connections are opened lazily, so this does not touch the database; call
/// [`check_connection`] to fail fast at start-up.
pub fn create_pool(config: &DbConfig) -> DataResult<Pool> {
    config.validate()?;
    let pg_config = pg_config(config)?;
    let manager = Manager::from_config(
        pg_config,
        NoTls,
        ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        },
    );

    let pool = Pool::builder(manager)
        .max_size(config.pool_max)
        .runtime(Runtime::Tokio1)
        .wait_timeout(Some(config.connect_timeout()))
        .create_timeout(Some(config.connect_timeout()))
        .recycle_timeout(Some(config.connect_timeout()))
        .build()
        .map_err(|e| DataError::Pool(e.to_string()))?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        schema = %config.schema,
        pool_max = config.pool_max,
        "database pool created"
    );
    Ok(pool)
}

/// Run `SELECT 1` on a pooled connection.
pub async fn check_connection(pool: &Pool) -> DataResult<()> {
    let client = pool.get().await?;
    GenericClient::query(&client, "SELECT 1", &[]).await?;
    tracing::info!("database connection established");
    Ok(())
}

/// Drop pooled connections that have sat unused for longer than `max_idle`.
pub fn prune_idle(pool: &Pool, max_idle: Duration) {
    let _ = pool.retain(|_, metrics| metrics.last_used() < max_idle);
}

/// Prune idle connections every `config.idle_timeout()` until the pool is closed.
///
/// Fails with [`DataError::Config`] for a zero idle timeout.
pub fn spawn_idle_reaper(
    pool: Pool,
    config: &DbConfig,
) -> DataResult<tokio::task::JoinHandle<()>> {
    let max_idle = config.idle_timeout();
    if max_idle.is_zero() {
        return Err(DataError::config("idle timeout must be greater than zero"));
    }
    Ok(tokio::spawn(async move {
        let mut tick = tokio::time::interval(max_idle);
        tick.tick().await;
        while !pool.is_closed() {
            tick.tick().await;
            prune_idle(&pool, max_idle);
        }
    }))
}

fn pg_config(config: &DbConfig) -> DataResult<tokio_postgres::Config> {
    let mut pg = tokio_postgres::Config::new();
    pg.host(&config.host)
        .port(config.port)
        .dbname(&config.database)
        .user(&config.user)
        .password(&config.password)
        .connect_timeout(config.connect_timeout())
        .options(&config.search_path_option()?)
        .application_name("mes-data");
    Ok(pg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_options_carry_search_path() {
        let config = DbConfig {
            schema: "mes_stage".to_string(),
            ..DbConfig::default()
        };
        let pg = pg_config(&config).unwrap();
        assert_eq!(pg.get_options(), Some("-c search_path=mes_stage,public"));
        assert_eq!(pg.get_dbname(), Some("mes"));
        assert_eq!(pg.get_ports(), &[5432]);
    }

    #[tokio::test]
    async fn pool_is_sized_from_config() {
        let config = DbConfig {
            pool_max: 3,
            ..DbConfig::default()
        };
        let pool = create_pool(&config).unwrap();
        assert_eq!(pool.status().max_size, 3);
    }

    #[test]
    fn invalid_config_builds_no_pool() {
        let config = DbConfig {
            pool_max: 0,
            idle_timeout_ms: 0,
            ..DbConfig::default()
        };
        assert!(matches!(create_pool(&config), Err(DataError::Config(_))));
    }

    #[tokio::test]
    async fn reaper_rejects_zero_idle_timeout() {
        let pool = create_pool(&DbConfig::default()).unwrap();
        let config = DbConfig {
            idle_timeout_ms: 0,
            ..DbConfig::default()
        };
        let err = spawn_idle_reaper(pool.clone(), &config).unwrap_err();
        assert!(matches!(err, DataError::Config(_)));

        let reaper = spawn_idle_reaper(pool.clone(), &DbConfig::default()).unwrap();
        pool.close();
        reaper.abort();
    }
}
