use crate::*;
use predicates::prelude::*;

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(trials!(
        test_cancel_at_folder_prompt,
        test_cancel_at_base_prompt,
        test_cancel_at_extension_prompt,
        test_decline_confirmation,
    ));
}

fn test_cancel_at_folder_prompt() -> TestResult {
    let fixture = Fixture::with_files(&["a.txt"]);

    fixture
        .cmd()
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("(enter q to cancel at any time)\n"))
        .stdout(predicate::str::ends_with("cancelled\n"))
        .stdout(predicate::str::contains("file rename base").not());

    assert_eq!(fixture.names(), vec!["a.txt"]);
    Ok(())
}

fn test_cancel_at_base_prompt() -> TestResult {
    let fixture = Fixture::with_files(&["a.txt"]);

    fixture
        .cmd()
        .write_stdin(format!("{}\nQ\n", fixture.folder_str()))
        .assert()
        .success()
        .stdout(predicate::str::ends_with("cancelled\n"));

    assert_eq!(fixture.names(), vec!["a.txt"]);
    Ok(())
}

fn test_cancel_at_extension_prompt() -> TestResult {
    let fixture = Fixture::with_files(&["a.txt"]);

    fixture
        .cmd()
        .write_stdin(format!("{}\nfile\nq\n", fixture.folder_str()))
        .assert()
        .success()
        .stdout(predicate::str::contains("continue?").not())
        .stdout(predicate::str::ends_with("cancelled\n"));

    assert_eq!(fixture.names(), vec!["a.txt"]);
    Ok(())
}

fn test_decline_confirmation() -> TestResult {
    let fixture = Fixture::with_files(&["a.txt", "b.txt"]);

    fixture
        .cmd()
        .write_stdin(fixture.answers("file", "txt", "n"))
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "folder: {}\n",
            fixture.folder_str()
        )))
        .stdout(predicate::str::contains("new name scheme: file0.txt\n"))
        .stdout(predicate::str::ends_with("cancelled\n"));

    assert_eq!(fixture.names(), vec!["a.txt", "b.txt"]);
    Ok(())
}
