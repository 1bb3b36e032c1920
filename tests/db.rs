use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::thread;

use gqlcrud::db;
use gqlcrud::models::NewPlace;
use gqlcrud::places;

/// Two writers on separate pooled connections, interleaving freely. Every
/// insert must hand back the row it wrote, never a row committed by the
/// other connection between the write and the re-read.
#[test]
fn concurrent_inserts_echo_their_own_rows() {
    let path = std::env::temp_dir().join(format!(
        "gqlcrud-concurrent-inserts-{}.sqlite",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let manager = ConnectionManager::<SqliteConnection>::new(path.to_str().unwrap());
    let pool = Pool::builder().max_size(2).build(manager).unwrap();
    db::run_migrations(&pool.get().unwrap()).unwrap();

    let mut handles = Vec::new();
    for (name, country) in [("Rome", "Italy"), ("Lagos", "Nigeria")] {
        let pool = pool.clone();
        handles.push(thread::spawn(move || {
            let conn = pool.get().unwrap();
            // let writers wait for each other instead of failing busy
            conn.batch_execute("PRAGMA busy_timeout = 5000;").unwrap();
            for _ in 0..50 {
                let created = places::db::insert_place(
                    &conn,
                    &NewPlace {
                        name,
                        description: "A city",
                        country,
                    },
                )
                .unwrap();
                assert_eq!(created.name, name);
                assert_eq!(created.country, country);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let conn = pool.get().unwrap();
    let all = places::db::list_places(&conn).unwrap();
    assert_eq!(all.len(), 100);

    let _ = std::fs::remove_file(&path);
}
