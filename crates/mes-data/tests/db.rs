//! Database-backed tests. Skipped unless `DATABASE_URL` is set.
//!
//! Each test works on session-local TEMP tables, so nothing persists and the
//! real MES schema is never touched.

use mes_data::input::{
    AssetTypePatch, NewAssetType, NewPerformanceTarget, PerformanceTargetPatch,
};
use mes_data::model::{AssetType, PerformanceTarget};
use mes_data::note::{self, NewNote, NotePatch};
use mes_data::{
    DataError, DataResult, GenericClient, InstrumentedClient, MonitorConfig, NoteKind, repo,
};
use mes_query::{Filter, Page, Value};
use tokio_postgres::NoTls;
use tokio_postgres::types::ToSql;

async fn try_connect(test: &str) -> DataResult<Option<InstrumentedClient<tokio_postgres::Client>>> {
    let _ = dotenvy::dotenv();
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(v) => v,
        Err(_) => {
            eprintln!("DATABASE_URL is not set; skipping {test}");
            return Ok(None);
        }
    };

    let (client, connection) = tokio_postgres::connect(&database_url, NoTls)
        .await
        .map_err(|e| DataError::Connection(e.to_string()))?;
    tokio::spawn(async move {
        let _ = connection.await;
    });

    Ok(Some(
        InstrumentedClient::new(client).with_config(MonitorConfig::new().no_truncate()),
    ))
}

const AUDIT_COLUMNS: &str = "created_by text, created_at timestamptz DEFAULT now(), \
    updated_by text, updated_at timestamptz, removed boolean NOT NULL DEFAULT false";

async fn create_temp_tables(client: &impl GenericClient) -> DataResult<()> {
    client
        .execute(
            &format!(
                "CREATE TEMP TABLE asset_type (asset_type_id serial PRIMARY KEY, \
                 asset_type_name text NOT NULL, asset_type_description text, {AUDIT_COLUMNS})"
            ),
            &[],
        )
        .await?;
    client
        .execute(
            &format!(
                "CREATE TEMP TABLE performance_target (asset_id int4 NOT NULL, \
                 product_id int4 NOT NULL, target_value float8 NOT NULL, target_unit text, \
                 {AUDIT_COLUMNS}, PRIMARY KEY (asset_id, product_id))"
            ),
            &[],
        )
        .await?;
    client
        .execute(
            "CREATE TEMP TABLE state_log_note (note_id serial PRIMARY KEY, \
             state_log_id int4 NOT NULL, note text NOT NULL, created_by text, \
             created_at timestamptz NOT NULL DEFAULT now(), updated_by text, \
             updated_at timestamptz, removed boolean NOT NULL DEFAULT false)",
            &[],
        )
        .await?;
    Ok(())
}

#[tokio::test]
async fn values_bind_to_matching_types() -> DataResult<()> {
    let Some(client) = try_connect("values_bind_to_matching_types").await? else {
        return Ok(());
    };

    let params = [
        Value::Int(7),
        Value::Text("press".into()),
        Value::Bool(false),
        Value::Null,
        Value::Float(0.5),
    ];
    let refs: Vec<&(dyn ToSql + Sync)> = params.iter().map(|v| v as &(dyn ToSql + Sync)).collect();
    let row = client
        .query_opt(
            "SELECT $1::int4 AS i, $2::text AS t, $3::bool AS b, $4::text IS NULL AS n, $5::float8 AS f",
            &refs,
        )
        .await?
        .expect("one row");

    assert_eq!(row.get::<_, i32>("i"), 7);
    assert_eq!(row.get::<_, String>("t"), "press");
    assert!(!row.get::<_, bool>("b"));
    assert!(row.get::<_, bool>("n"));
    assert_eq!(row.get::<_, f64>("f"), 0.5);
    Ok(())
}

#[tokio::test]
async fn lookup_crud_cycle() -> DataResult<()> {
    let Some(client) = try_connect("lookup_crud_cycle").await? else {
        return Ok(());
    };
    create_temp_tables(&client).await?;

    let line = repo::create(
        &client,
        NewAssetType {
            asset_type_name: "Line".into(),
            asset_type_description: Some("Production line".into()),
        },
    )
    .await?;
    repo::create(
        &client,
        NewAssetType {
            asset_type_name: "Cell".into(),
            asset_type_description: None,
        },
    )
    .await?;

    let all: Vec<AssetType> = repo::list(&client, Filter::new(), Page::all()).await?;
    let names: Vec<&str> = all.iter().map(|a| a.asset_type_name.as_str()).collect();
    assert_eq!(names, ["Cell", "Line"]);

    let cleared = repo::update(
        &client,
        &line.asset_type_id,
        AssetTypePatch {
            asset_type_description: Some(None),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(cleared.asset_type_name, "Line");
    assert_eq!(cleared.asset_type_description, None);

    let empty = repo::update(&client, &line.asset_type_id, AssetTypePatch::default()).await;
    assert!(empty.unwrap_err().is_no_fields_to_update());

    let deleted: AssetType = repo::soft_delete(&client, &line.asset_type_id).await?;
    assert!(deleted.removed);
    assert!(repo::get::<AssetType>(&client, &line.asset_type_id).await?.is_none());

    let again = repo::soft_delete::<AssetType>(&client, &line.asset_type_id)
        .await
        .unwrap_err();
    assert_eq!(again.to_string(), "Asset type not found or already deleted");

    let missing = repo::update(
        &client,
        &line.asset_type_id,
        AssetTypePatch {
            asset_type_name: Some("Gone".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(missing.to_string(), "Asset type not found");
    Ok(())
}

#[tokio::test]
async fn composite_key_update() -> DataResult<()> {
    let Some(client) = try_connect("composite_key_update").await? else {
        return Ok(());
    };
    create_temp_tables(&client).await?;

    repo::create(
        &client,
        NewPerformanceTarget {
            product_id: 8,
            asset_id: 3,
            target_value: 40.0,
            target_unit: None,
        },
    )
    .await?;

    let updated = repo::update(
        &client,
        &(3, 8),
        PerformanceTargetPatch {
            target_value: Some(42.5),
            target_unit: Some(Some("pcs/h".into())),
        },
    )
    .await?;
    assert_eq!(updated.target_value, 42.5);
    assert_eq!(updated.target_unit.as_deref(), Some("pcs/h"));

    let other = repo::get::<PerformanceTarget>(&client, &(8, 3)).await?;
    assert!(other.is_none());

    let duplicate = repo::create(
        &client,
        NewPerformanceTarget {
            product_id: 8,
            asset_id: 3,
            target_value: 1.0,
            target_unit: None,
        },
    )
    .await
    .unwrap_err();
    assert!(duplicate.is_unique_violation());
    Ok(())
}

#[tokio::test]
async fn note_lifecycle() -> DataResult<()> {
    let Some(client) = try_connect("note_lifecycle").await? else {
        return Ok(());
    };
    create_temp_tables(&client).await?;

    let created = note::create(
        &client,
        NoteKind::StateLog,
        NewNote {
            parent_id: Some(5),
            note: "die change".into(),
        },
    )
    .await?;
    assert_eq!(created.parent_id, Some(5));

    let rejected = note::update(&client, NoteKind::StateLog, created.note_id, NotePatch::default())
        .await
        .unwrap_err();
    assert!(matches!(rejected, DataError::Validation(_)));

    let edited = note::update(
        &client,
        NoteKind::StateLog,
        created.note_id,
        NotePatch {
            note: Some("die change, 20 min".into()),
        },
    )
    .await?;
    assert_eq!(edited.note, "die change, 20 min");

    assert_eq!(note::list_for_log(&client, NoteKind::StateLog, 5).await?.len(), 1);
    note::delete(&client, NoteKind::StateLog, created.note_id).await?;
    assert!(note::list_for_log(&client, NoteKind::StateLog, 5).await?.is_empty());

    let err = note::delete(&client, NoteKind::StateLog, created.note_id)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Note not found or already deleted");
    Ok(())
}
