use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn patientbook(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("patientbook").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("PATIENTBOOK_LOG")
        .arg("--config-dir")
        .arg(config_dir.path());
    cmd
}

#[test]
fn test_starts_with_sample_patients() {
    let temp_dir = tempfile::tempdir().unwrap();

    patientbook(&temp_dir)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Alex Yeoh"))
        .stdout(predicate::str::contains("Exiting Patient Book as requested ..."));
}

#[test]
fn test_add_then_last_visit() {
    let temp_dir = tempfile::tempdir().unwrap();

    let session = "add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2\n\
                   lastvisit 1 lv/2024-03-15\n\
                   lastvisit 1 lv/\n\
                   exit\n";

    patientbook(&temp_dir)
        .arg("--empty")
        .write_stdin(session)
        .assert()
        .success()
        .stdout(predicate::str::contains("No persons to show."))
        .stdout(predicate::str::contains(
            "New person added: John Doe; Phone: 98765432",
        ))
        .stdout(predicate::str::contains(
            "Added last visit to Person: John Doe; Phone: 98765432",
        ))
        .stdout(predicate::str::contains("Last visit: 2024-03-15 ("))
        .stdout(predicate::str::contains(
            "Removed last visit from Person: John Doe; Phone: 98765432",
        ));
}

#[test]
fn test_errors_keep_the_session_alive() {
    let temp_dir = tempfile::tempdir().unwrap();

    let session = "\n\
                   frobnicate\n\
                   lastvisit 7 lv/today\n\
                   lastvisit x\n\
                   list\n";

    patientbook(&temp_dir)
        .arg("--empty")
        .write_stdin(session)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command"))
        .stdout(predicate::str::contains("The person index provided is invalid"))
        .stdout(predicate::str::contains("Invalid command format!"))
        .stdout(predicate::str::contains("lastvisit: "))
        .stdout(predicate::str::contains("Listed all persons"));
}

#[test]
fn test_non_utf8_input_keeps_the_session_alive() {
    let temp_dir = tempfile::tempdir().unwrap();

    let session: &[u8] = b"\xff\nlastvisit 1 lv/\xff\xfe\nlist\n";

    patientbook(&temp_dir)
        .write_stdin(session)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command"))
        .stdout(predicate::str::contains(
            "Added last visit to Person: Alex Yeoh",
        ))
        .stdout(predicate::str::contains("Listed all persons"));
}

#[test]
fn test_huge_delete_range_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    patientbook(&temp_dir)
        .write_stdin("delete 1-18446744073709551615\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The person index provided is invalid"))
        .stdout(predicate::str::contains("Listed all persons"));
}

#[test]
fn test_find_narrows_indexes() {
    let temp_dir = tempfile::tempdir().unwrap();

    let session = "find Roy\n\
                   remark 1 r/Prefers morning slots\n";

    patientbook(&temp_dir)
        .write_stdin(session)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 persons listed!"))
        .stdout(predicate::str::contains(
            "Added remark to Person: Roy Balakrishnan",
        ));
}

#[test]
fn test_help_lists_usages() {
    let temp_dir = tempfile::tempdir().unwrap();

    patientbook(&temp_dir)
        .arg("--empty")
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing help."))
        .stdout(predicate::str::contains("Example: lastvisit 1 lv/2024-03-15"));
}

#[test]
fn test_config_can_disable_sample_data() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{"load_sample_data": false}"#,
    )
    .unwrap();

    patientbook(&temp_dir)
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alex Yeoh").not())
        .stdout(predicate::str::contains("No persons to show."));
}

#[test]
fn test_broken_config_fails_startup() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("config.json"), "{ nope").unwrap();

    patientbook(&temp_dir)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}
