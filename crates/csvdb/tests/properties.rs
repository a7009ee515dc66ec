use csvdb::prelude::*;
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

fn seeded_db(ids: &[i64]) -> (TempDir, Db) {
    let dir = TempDir::new().unwrap();
    let db = Db::open(dir.path());
    db.define_table("t", &[ColumnDef::int("id"), ColumnDef::text("tag")])
        .unwrap();
    db.insert("t")
        .values_many(ids.iter().map(|id| {
            ValueRecord::new()
                .with("id", id.to_string())
                .with("tag", format!("row-{id}"))
        }))
        .execute()
        .unwrap();

    (dir, db)
}

fn data_file(db: &Db) -> String {
    fs::read_to_string(db.store("t").unwrap().data_path()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn stored_delete_is_idempotent(
        ids in prop::collection::vec(-20i64..20, 0..12),
        bound in -20i64..20,
    ) {
        let (_dir, db) = seeded_db(&ids);
        let pred = ge("id", bound.to_string());

        let first = db.delete("t").filter(pred.clone()).execute().unwrap();
        let once = data_file(&db);
        let second = db.delete("t").filter(pred).execute().unwrap();

        prop_assert_eq!(first, ids.iter().filter(|id| **id >= bound).count());
        prop_assert_eq!(second, 0);
        prop_assert_eq!(data_file(&db), once);
    }

    #[test]
    fn select_without_filter_sees_every_inserted_row(
        ids in prop::collection::vec(0i64..100, 0..12),
        limit in 0usize..15,
    ) {
        let (_dir, db) = seeded_db(&ids);

        let result = db.select(["id"]).from("t").limit(limit).execute().unwrap();
        let expected = if limit == 0 { ids.len() } else { ids.len().min(limit) };

        prop_assert_eq!(result.len(), expected);
        for (record, id) in result.iter().zip(&ids) {
            let want = id.to_string();
            prop_assert_eq!(record.get("id"), Some(want.as_str()));
        }
    }
}
