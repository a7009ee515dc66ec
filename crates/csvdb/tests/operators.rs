use csvdb::{Error, ErrorClass, prelude::*};
use std::fs;
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn index_db() -> (TempDir, Db) {
    init_tracing();

    let dir = TempDir::new().unwrap();
    let db = Db::open(dir.path());
    db.define_table(
        "index",
        &[
            ColumnDef::int("id"),
            ColumnDef::text("title"),
            ColumnDef::text("content"),
        ],
    )
    .unwrap();

    let seed = [
        ("1", "one", "один"),
        ("2", "two", "два"),
        ("3", "three", "три"),
        ("4", "four", "четыре"),
        ("5", "five", "пять"),
    ];
    db.insert("index")
        .values_many(seed.iter().map(|(id, title, content)| {
            ValueRecord::new()
                .with("id", *id)
                .with("title", *title)
                .with("content", *content)
        }))
        .execute()
        .unwrap();

    (dir, db)
}

fn data_file(db: &Db, table: &str) -> String {
    fs::read_to_string(db.store(table).unwrap().data_path()).unwrap()
}

#[test]
fn define_insert_select_round_trip() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let db = Db::open(dir.path());

    db.define_table("t", &[ColumnDef::int("id"), ColumnDef::text("name")])
        .unwrap();
    db.insert("t")
        .values(ValueRecord::new().with("id", "1").with("name", "a"))
        .execute()
        .unwrap();

    let result = db.select(["id", "name"]).from("t").execute().unwrap();

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        serde_json::json!([{ "id": "1", "name": "a" }])
    );
}

#[test]
fn ordinals_follow_definition_order() {
    let (_dir, db) = index_db();
    let schema = db.load_schema("index").unwrap();

    assert_eq!(schema.get("id").unwrap().ordinal, 0);
    assert_eq!(schema.get("title").unwrap().ordinal, 1);
    assert_eq!(schema.get("content").unwrap().ordinal, 2);
}

#[test]
fn limit_zero_and_unset_are_unbounded() {
    let (_dir, db) = index_db();

    let unset = db.select(["id"]).from("index").execute().unwrap();
    let zero = db.select(["id"]).from("index").limit(0).execute().unwrap();
    let three = db.select(["id"]).from("index").limit(3).execute().unwrap();

    assert_eq!(unset, zero);
    assert_eq!(unset.len(), 5);
    assert_eq!(three.len(), 3);
}

#[test]
fn integer_and_text_comparisons_differ() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let db = Db::open(dir.path());
    db.define_table("n", &[ColumnDef::int("num"), ColumnDef::text("label")])
        .unwrap();
    db.insert("n")
        .values(ValueRecord::new().with("num", "3").with("label", "3"))
        .execute()
        .unwrap();

    let numeric = db.select(["num"]).from("n").filter(lt("num", "10")).execute();
    let textual = db.select(["label"]).from("n").filter(lt("label", "10")).execute();
    let malformed = db.select(["num"]).from("n").filter(eq("num", "abc")).execute();

    assert_eq!(numeric.unwrap().len(), 1);
    assert!(textual.unwrap().is_empty());
    assert!(malformed.unwrap().is_empty());
}

#[test]
fn update_leaves_other_rows_byte_identical() {
    let (_dir, db) = index_db();
    let before = data_file(&db, "index");

    let updated = db
        .update("index")
        .set(ValueRecord::new().with("title", "five"))
        .filter(eq("id", "5"))
        .execute()
        .unwrap();
    assert_eq!(updated, 1);

    let after = data_file(&db, "index");
    let before_lines: Vec<_> = before.lines().collect();
    let after_lines: Vec<_> = after.lines().collect();
    assert_eq!(before_lines[..4], after_lines[..4]);
    assert_eq!(after_lines[4], "5,five,пять");
}

#[test]
fn missing_predicate_selects_all_but_deletes_nothing() {
    let (_dir, db) = index_db();
    let before = data_file(&db, "index");

    assert_eq!(db.select(["id"]).from("index").execute().unwrap().len(), 5);
    assert_eq!(db.delete("index").execute().unwrap(), 0);
    assert_eq!(data_file(&db, "index"), before);
}

#[test]
fn delete_twice_matches_delete_once() {
    let (_dir, db) = index_db();
    let pred = gt("id", "2") & lt("id", "5");

    assert_eq!(db.delete("index").filter(pred.clone()).execute().unwrap(), 2);
    let once = data_file(&db, "index");
    assert_eq!(db.delete("index").filter(pred).execute().unwrap(), 0);

    assert_eq!(data_file(&db, "index"), once);
    assert_eq!(once, "1,one,один\n2,two,два\n5,five,пять\n");
}

#[test]
fn quoted_content_round_trips() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let db = Db::open(dir.path());
    db.define_table("q", &[ColumnDef::text("body")]).unwrap();

    let body = "comma, \"quote\"\nnewline и юникод";
    db.insert("q")
        .values(ValueRecord::new().with("body", body))
        .execute()
        .unwrap();

    let result = db.select(["body"]).from("q").execute().unwrap();
    assert_eq!(result.records()[0].get("body"), Some(body));
}

#[test]
fn unknown_column_in_predicate_is_an_error() {
    let (_dir, db) = index_db();

    let err: Error = db
        .update("index")
        .set(ValueRecord::new().with("title", "x"))
        .filter(eq("author", "me"))
        .execute()
        .unwrap_err()
        .into();

    assert!(matches!(err, Error::Query(QueryError::UnknownColumn(_))));
    assert_eq!(err.class(), ErrorClass::Unsupported);
}

#[test]
fn half_created_table_is_reported_and_unusable() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let db = Db::open(dir.path());
    // a directory where the backing store should go makes its creation fail
    fs::create_dir(db.store("broken").unwrap().data_path()).unwrap();

    let err = db
        .define_table("broken", &[ColumnDef::int("id")])
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::Internal);
    assert!(db.store("broken").unwrap().schema_path().exists());

    let err = db.select(["id"]).from("broken").execute().unwrap_err();
    assert!(matches!(err, QueryError::Store(_)));
}

#[test]
fn failed_rewrite_keeps_the_previous_rows() {
    let (_dir, db) = index_db();
    let before = data_file(&db, "index");

    let store = db.store("index").unwrap();
    let mut tmp = store.data_path().as_os_str().to_owned();
    tmp.push(".tmp");
    fs::create_dir(&tmp).unwrap();

    let err = db
        .insert("index")
        .values(ValueRecord::new().with("id", "6"))
        .execute()
        .unwrap_err();

    assert!(matches!(err, QueryError::Store(_)));
    assert_eq!(data_file(&db, "index"), before);
}

#[test]
fn config_from_json_drives_artifact_names() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let json = serde_json::json!({
        "data_dir": dir.path(),
        "data_extension": "tsv",
        "delimiter": b'\t',
        "sync_writes": false,
    });
    let config = StoreConfig::from_json_str(&json.to_string()).unwrap();
    let db = Db::new(config).unwrap();

    db.define_table("tabbed", &[ColumnDef::int("a"), ColumnDef::text("b")])
        .unwrap();
    db.insert("tabbed")
        .values(ValueRecord::new().with("a", "1").with("b", "x"))
        .execute()
        .unwrap();

    let contents = fs::read_to_string(dir.path().join("tabbed.tsv")).unwrap();
    assert_eq!(contents, "1\tx\n");
    assert!(dir.path().join("tabbed.schema").exists());
}
