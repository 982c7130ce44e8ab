// File: tests/startup.rs
// Bootstrapping: calendar data is mandatory, config paths are honoured.
use chrono::NaiveDate;
use serial_test::serial;
use std::fs;
use utsav::cli::write_next;
use utsav::config::Config;
use utsav::context::{AppContext, StandardContext, TestContext};
use utsav::controller::FestivalController;
use utsav::logging;

const SAMPLE_TABLE: &str = include_str!("../demos/bs_calendar.json");

#[test]
fn test_missing_calendar_data_is_fatal() {
    let ctx = TestContext::new();
    let err = FestivalController::bootstrap(&ctx, &Config::default())
        .err()
        .expect("bootstrap must fail without calendar data");

    let msg = format!("{:#}", err);
    assert!(msg.contains("calendar data is required"), "{}", msg);
    assert!(msg.contains("bs_calendar.json"), "{}", msg);
}

#[test]
fn test_invalid_calendar_data_is_fatal() {
    let ctx = TestContext::new();
    fs::write(ctx.get_calendar_data_path().unwrap(), "{\"first_year\": 2080}").unwrap();
    assert!(FestivalController::bootstrap(&ctx, &Config::default()).is_err());
}

#[test]
fn test_bootstrap_with_default_locations() {
    let ctx = TestContext::new();
    fs::write(ctx.get_calendar_data_path().unwrap(), SAMPLE_TABLE).unwrap();
    fs::write(
        ctx.get_festival_path().unwrap(),
        r#"[{"name": "Nepali New Year", "month": 1, "day": 1}]"#,
    )
    .unwrap();

    let mut controller = FestivalController::bootstrap(&ctx, &Config::default()).unwrap();
    assert_eq!(controller.store.len(), 1);

    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let occ = controller.resolve(0, today).unwrap().unwrap();
    assert_eq!(occ.headline(), "Nepali New Year — on 2025-04-14 (AD)");
    assert!(controller.resolve(1, today).is_none());

    let idx = controller.add_from_input("", "2", "9").unwrap();
    assert_eq!(controller.store.get(idx).unwrap().name, "Unnamed");
    assert!(controller.add_from_input("Bad", "2", "nine").is_err());
    assert_eq!(controller.store.len(), 2);
}

#[test]
fn test_config_paths_override_data_dir() {
    let ctx = TestContext::new();
    let elsewhere = ctx.root.join("shared");
    fs::create_dir_all(&elsewhere).unwrap();
    let table = elsewhere.join("calendar.json");
    let list = elsewhere.join("my_festivals.json");
    fs::write(&table, SAMPLE_TABLE).unwrap();

    let config = Config {
        calendar_data: Some(table.clone()),
        festival_file: Some(list.clone()),
        ..Config::default()
    };
    fs::write(
        ctx.get_config_file_path().unwrap(),
        toml::to_string(&config).unwrap(),
    )
    .unwrap();
    let config = Config::load(&ctx).unwrap();

    let mut controller = FestivalController::bootstrap(&ctx, &config).unwrap();
    assert_eq!(controller.calendar_path, table);
    controller.add_from_input("Holi", "11", "15").unwrap();
    assert!(list.exists());
    assert!(!ctx.get_festival_path().unwrap().exists());
}

#[test]
fn test_next_lists_every_festival() {
    let ctx = TestContext::new();
    fs::write(ctx.get_calendar_data_path().unwrap(), SAMPLE_TABLE).unwrap();
    let mut controller = FestivalController::bootstrap(&ctx, &Config::default()).unwrap();
    controller.add_from_input("New Year", "1", "1").unwrap();
    controller.add_from_input("Broken", "9", "31").unwrap();

    let now = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let mut out = Vec::new();
    write_next(&controller, now, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("New Year — on 2025-04-14 (AD)  316d 12h 00m 00s"), "{}", out);
    assert!(out.contains("Broken — Error: invalid BS date"), "{}", out);
}

#[test]
fn test_standard_context_honours_root() {
    let ctx = TestContext::new();
    let standard = StandardContext::new(Some(ctx.root.clone()));
    assert_eq!(
        standard.get_festival_path().unwrap(),
        ctx.root.join("data").join("festivals.json")
    );
    assert_eq!(
        standard.get_config_file_path().unwrap(),
        ctx.root.join("config").join("config.toml")
    );
}

// The global logger can only be installed once per process.
#[test]
#[serial]
fn test_logging_writes_to_data_dir() {
    let ctx = TestContext::new();
    let path = logging::init(&ctx, log::LevelFilter::Info).unwrap();
    log::warn!("calendar smoke test");

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("calendar smoke test"));
    assert!(logging::init(&ctx, log::LevelFilter::Info).is_err());
}
