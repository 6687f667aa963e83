use fitness_tracker::error::PackageError;
use fitness_tracker::package::{RawPackage, load_packages, read_package, sample_packages};
use fitness_tracker::report::report_packages;
use fitness_tracker::training::Workout;
use serde_json::{Value, json};
use std::io::Write;

fn render(packages: &[RawPackage], json: bool) -> anyhow::Result<String> {
    let mut out = Vec::new();
    report_packages(packages, json, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 report"))
}

#[test]
fn sample_report_lines() {
    let text = render(&sample_packages(), false).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805.",
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
             Ср. скорость: 5.850 км/ч; Потрачено ккал: 349.252.",
        ]
    );
}

#[test]
fn json_report_lines() {
    let text = render(&sample_packages()[1..2], true).unwrap();
    let v: Value = serde_json::from_str(text.trim()).unwrap();
    assert_eq!(
        v,
        json!({
            "training_type": "Running",
            "duration": 1.0,
            "distance": 9.75,
            "speed": 9.75,
            "calories": 797.805,
        })
    );
}

#[test]
fn first_bad_package_aborts() {
    let packages = vec![
        RawPackage("RUN".into(), vec![json!(15000), json!(1), json!(75)]),
        RawPackage("XYZ".into(), vec![json!(1)]),
        RawPackage("WLK".into(), vec![json!(9000), json!(1), json!(75), json!(180)]),
    ];
    let err = render(&packages, false).unwrap_err();
    assert!(err.to_string().contains("package #2"));
    assert_eq!(
        err.downcast_ref::<PackageError>(),
        Some(&PackageError::UnknownKind("XYZ".into()))
    );
}

#[test]
fn loads_packages_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[["WLK", [9000, 1, 75, 180]], ["SWM", [720, 1, 80, 25, 40]]]"#
    )
    .unwrap();

    let packages = load_packages(file.path()).unwrap();
    assert_eq!(packages.len(), 2);
    assert_eq!(packages[0].0, "WLK");
    assert_eq!(render(&packages, false).unwrap().lines().count(), 2);
}

#[test]
fn strings_in_file_are_type_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[["RUN", [1, "a", 3]]]"#).unwrap();

    let packages = load_packages(file.path()).unwrap();
    let RawPackage(kind, data) = &packages[0];
    assert!(matches!(
        read_package(kind, data),
        Err(PackageError::InvalidValueType { index: 1, .. })
    ));
}

#[test]
fn malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"RUN": [1, 2, 3]}}"#).unwrap();
    assert!(load_packages(file.path()).is_err());
    assert!(load_packages(std::path::Path::new("/nonexistent/packages.json")).is_err());
}

#[test]
fn report_is_idempotent() {
    let RawPackage(kind, data) = &sample_packages()[0];
    let swim = read_package(kind, data).unwrap();
    assert_eq!(
        swim.show_training_info().get_message(),
        swim.show_training_info().get_message()
    );
}
