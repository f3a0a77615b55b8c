//! Behavioral tests for the in-memory database: sorting, pagination,
//! id lookup and the users sample. These build the database from raw
//! records directly, without touching the bundled dataset.

use citydb_core::{sample_users, CityDb, CityRaw, DbError, PAGE_SIZE};

fn raw(id: u32, name: &str, population: f64) -> CityRaw {
    CityRaw {
        id,
        city: name.to_owned(),
        city_ascii: name.to_owned(),
        lat: 0.0,
        lng: 0.0,
        country: "Testland".to_owned(),
        iso2: "TL".to_owned(),
        iso3: "TLD".to_owned(),
        admin_name: None,
        capital: None,
        population,
    }
}

fn db_of(pops: &[(u32, f64)]) -> CityDb {
    let raws = pops
        .iter()
        .map(|&(id, p)| raw(id, &format!("City {id}"), p))
        .collect();
    CityDb::from_raw(raws).expect("valid test data")
}

#[test]
fn sorted_by_population_descending() {
    let db = db_of(&[(1, 10.0), (2, 500.0), (3, 250.0), (4, 0.0)]);
    let pops: Vec<f64> = db.cities().iter().map(|c| c.population).collect();
    assert_eq!(pops, vec![500.0, 250.0, 10.0, 0.0]);

    for pair in db.cities().windows(2) {
        assert!(pair[0].population >= pair[1].population);
    }
}

#[test]
fn equal_populations_keep_source_order() {
    let db = db_of(&[(10, 7.0), (11, 7.0), (12, 9.0), (13, 7.0)]);
    let ids: Vec<u32> = db.cities().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![12, 10, 11, 13]);
}

#[test]
fn page_slices_match_window_formula() {
    // 120 rows with populations 120.0 down to 1.0
    let rows: Vec<(u32, f64)> = (1..=120).map(|i| (i, f64::from(121 - i))).collect();
    let db = db_of(&rows);

    let all = db.cities();
    for p in 1..=4 {
        let page = db.page(p).unwrap();
        let start = (p - 1) * PAGE_SIZE;
        let end = (p * PAGE_SIZE).min(120);
        assert_eq!(page.rows.len(), end.saturating_sub(start));
        assert_eq!(page.total, 120);
        assert_eq!(page.page, p);
        for (i, row) in page.rows.iter().enumerate() {
            assert_eq!(row.id, all[start + i].id);
        }
    }

    assert_eq!(db.page(1).unwrap().rows.len(), 50);
    assert_eq!(db.page(3).unwrap().rows.len(), 20);
    assert_eq!(db.page(1).unwrap().page_count(), 3);
}

#[test]
fn page_past_the_end_is_empty_not_an_error() {
    let db = db_of(&[(1, 1.0), (2, 2.0)]);
    let page = db.page(7).unwrap();
    assert!(page.rows.is_empty());
    assert_eq!(page.total, 2);
}

#[test]
fn page_zero_is_rejected() {
    let db = db_of(&[(1, 1.0)]);
    match db.page(0) {
        Err(DbError::InvalidPage(0)) => {}
        other => panic!("expected InvalidPage, got {other:?}"),
    }
}

#[test]
fn custom_page_size() {
    let rows: Vec<(u32, f64)> = (1..=10).map(|i| (i, f64::from(i))).collect();
    let db = db_of(&rows);
    let page = db.page_with_size(2, 4).unwrap();
    assert_eq!(page.rows.len(), 4);
    assert_eq!(page.page_size, 4);
    assert_eq!(page.page_count(), 3);
    assert!(db.page_with_size(1, 0).is_err());
}

#[test]
fn lookup_by_id() {
    let db = db_of(&[(5, 1.0), (6, 2.0), (7, 3.0)]);
    assert_eq!(db.city(6).unwrap().id, 6);
    assert_eq!(db.city(6).unwrap().name, "City 6");

    match db.city(999) {
        Err(DbError::NotFound(msg)) => assert!(msg.contains("999")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn duplicate_ids_refuse_to_load() {
    let raws = vec![raw(1, "A", 1.0), raw(2, "B", 2.0), raw(1, "C", 3.0)];
    match CityDb::from_raw(raws) {
        Err(DbError::InvalidRecord(msg)) => assert!(msg.contains("duplicate")),
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn bad_populations_refuse_to_load() {
    assert!(CityDb::from_raw(vec![raw(1, "A", -5.0)]).is_err());
    assert!(CityDb::from_raw(vec![raw(1, "A", f64::NAN)]).is_err());
    assert!(CityDb::from_raw(vec![raw(1, "A", f64::INFINITY)]).is_err());
}

#[test]
fn name_search_folds_accents() {
    let mut rows = vec![raw(1, "Springfield", 10.0)];
    rows.push(CityRaw {
        city: "São Paulo".to_owned(),
        city_ascii: "Sao Paulo".to_owned(),
        ..raw(2, "placeholder", 20.0)
    });
    let db = CityDb::from_raw(rows).unwrap();

    assert_eq!(db.find_by_name("SAO PAULO").unwrap().id, 2);
    assert_eq!(db.find_by_name("são paulo").unwrap().id, 2);
    assert!(db.find_by_name("Gotham").is_none());
    assert!(db.find_by_name("").is_none());

    let hits = db.find_by_substring("paulo");
    assert_eq!(hits.len(), 1);
    assert!(db.find_by_substring("").is_empty());
}

#[test]
fn stats_counts_rows_countries_and_pages() {
    let mut rows: Vec<CityRaw> = (1..=60).map(|i| raw(i, &format!("C{i}"), 1.0)).collect();
    rows[0].iso2 = "XX".to_owned();
    let db = CityDb::from_raw(rows).unwrap();

    let stats = db.stats();
    assert_eq!(stats.cities, 60);
    assert_eq!(stats.countries, 2);
    assert_eq!(stats.pages, 2);
}

#[test]
fn users_sample_is_fixed() {
    let users = sample_users();
    assert_eq!(users.len(), 3);

    let ids: Vec<u32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["John", "Jane", "Jack"]);

    assert_eq!(users[0].enabled, Some(true));
    assert_eq!(users[1].enabled, Some(false));
    // Jack's flag is absent, which is not the same thing as false.
    assert_eq!(users[2].enabled, None);

    // Fresh values on every call.
    assert_eq!(sample_users(), users);
}

#[test]
fn absent_enabled_flag_is_omitted_from_json() {
    let users = sample_users();
    let jane = serde_json::to_string(&users[1]).unwrap();
    let jack = serde_json::to_string(&users[2]).unwrap();

    assert!(jane.contains("\"enabled\":false"));
    assert!(!jack.contains("enabled"));
    assert!(jack.contains("\"dob\":\"1992-01-01\""));
}
