use crate::*;
use predicates::prelude::*;

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(trials!(
        test_missing_folder_is_fatal,
        test_collision_fails_fast,
        test_closed_input_is_fatal,
        test_non_interactive_requires_flags,
        test_invalid_settings_file_is_fatal,
    ));
}

fn test_missing_folder_is_fatal() -> TestResult {
    let fixture = Fixture::with_files(&[]);
    let missing = fixture.folder().join("missing");

    fixture
        .cmd()
        .write_stdin(format!("{}\nfile\ntxt\ny\n", missing.display()))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to list directory"))
        .stderr(predicate::str::contains("missing"));
    Ok(())
}

fn test_collision_fails_fast() -> TestResult {
    let fixture = Fixture::with_files(&["a.txt", "file0.txt"]);

    fixture
        .cmd()
        .arg("--sort")
        .write_stdin(fixture.answers("file", "txt", "y"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("destination already exists"))
        .stderr(predicate::str::contains("a.txt"));

    assert_eq!(fixture.names(), vec!["a.txt", "file0.txt"]);
    assert_eq!(fixture.read("file0.txt"), "file0.txt");
    Ok(())
}

fn test_closed_input_is_fatal() -> TestResult {
    let fixture = Fixture::with_files(&["a.txt"]);

    fixture
        .cmd()
        .write_stdin(format!("{}\n", fixture.folder_str()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input closed"));

    assert_eq!(fixture.names(), vec!["a.txt"]);
    Ok(())
}

fn test_non_interactive_requires_flags() -> TestResult {
    let fixture = Fixture::with_files(&["a.txt"]);

    fixture
        .cmd()
        .arg("--non-interactive")
        .arg(fixture.folder())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--base"));

    assert_eq!(fixture.names(), vec!["a.txt"]);
    Ok(())
}

fn test_invalid_settings_file_is_fatal() -> TestResult {
    let fixture = Fixture::with_files(&["a.txt"]);
    std::fs::write(fixture.settings_path(), "start_index = \"later\"\n")
        .map_err(|e| Failed::from(e.to_string()))?;

    fixture
        .cmd()
        .write_stdin(fixture.answers("file", "txt", "y"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings"));

    assert_eq!(fixture.names(), vec!["a.txt"]);
    Ok(())
}
