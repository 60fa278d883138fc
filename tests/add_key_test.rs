use anyhow::Result;
use ikey::{run_add_key, run_lookup, AddKeyQuery, AddStatus, LookupQuery};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_project(dir: &Path) {
    fs::create_dir(dir.join("locales")).unwrap();
    fs::write(
        dir.join("locales/en.json"),
        "{\n  \"common\": {\n    \"save\": \"Save\"\n  }\n}\n",
    )
    .unwrap();
    fs::write(
        dir.join("locales/nl.json"),
        "{\n  \"common\": {\n    \"save\": \"Opslaan\"\n  }\n}\n",
    )
    .unwrap();
}

#[test]
fn test_add_key_to_all_languages() -> Result<()> {
    let dir = tempdir()?;
    write_project(dir.path());

    let query = AddKeyQuery::new(
        "common.cancel".to_string(),
        vec![
            ("en".to_string(), "Cancel".to_string()),
            ("nl".to_string(), "Annuleren".to_string()),
        ],
    )
    .with_base_dir(dir.path().to_path_buf());

    let report = run_add_key(query)?;
    assert_eq!(report.outcomes.len(), 2);
    assert!(report
        .outcomes
        .iter()
        .all(|o| o.status == AddStatus::Added));

    // The written files parse back with the new key in place
    let lookup = LookupQuery::new("common.cancel".to_string())
        .with_base_dir(dir.path().to_path_buf());
    let result = run_lookup(lookup)?;
    assert_eq!(result.values.len(), 2);
    let nl = result.values.iter().find(|v| v.language == "nl").unwrap();
    assert_eq!(nl.value, "Annuleren");
    Ok(())
}

#[test]
fn test_add_key_writes_two_space_indent_and_keeps_order() -> Result<()> {
    let dir = tempdir()?;
    write_project(dir.path());

    let query = AddKeyQuery::new(
        "common.cancel".to_string(),
        vec![("en".to_string(), "Cancel".to_string())],
    )
    .with_base_dir(dir.path().to_path_buf());
    run_add_key(query)?;

    let written = fs::read_to_string(dir.path().join("locales/en.json"))?;
    assert!(written.contains("    \"save\": \"Save\""));
    assert!(written.contains("    \"cancel\": \"Cancel\""));
    assert!(written.ends_with('\n'));
    // Existing key first, new key appended after it
    assert!(written.find("save").unwrap() < written.find("cancel").unwrap());
    Ok(())
}

#[test]
fn test_add_key_existing_path_not_modified() -> Result<()> {
    let dir = tempdir()?;
    write_project(dir.path());
    let before = fs::read_to_string(dir.path().join("locales/en.json"))?;

    let query = AddKeyQuery::new(
        "common.save".to_string(),
        vec![("en".to_string(), "Store".to_string())],
    )
    .with_base_dir(dir.path().to_path_buf());

    let report = run_add_key(query)?;
    assert_eq!(report.outcomes[0].status, AddStatus::AlreadyExists);

    let after = fs::read_to_string(dir.path().join("locales/en.json"))?;
    assert_eq!(before, after);
    Ok(())
}

#[test]
fn test_add_key_languages_attempted_independently() -> Result<()> {
    let dir = tempdir()?;
    write_project(dir.path());

    // "fr" has no dictionary; "en" must still get the key
    let query = AddKeyQuery::new(
        "common.close".to_string(),
        vec![
            ("fr".to_string(), "Fermer".to_string()),
            ("en".to_string(), "Close".to_string()),
        ],
    )
    .with_base_dir(dir.path().to_path_buf());

    let report = run_add_key(query)?;
    assert_eq!(report.outcomes[0].status, AddStatus::UnknownLanguage);
    assert_eq!(report.outcomes[0].file, None);
    assert_eq!(report.outcomes[1].status, AddStatus::Added);

    let written = fs::read_to_string(dir.path().join("locales/en.json"))?;
    assert!(written.contains("\"close\": \"Close\""));
    Ok(())
}

#[test]
fn test_add_key_creates_intermediate_sections() -> Result<()> {
    let dir = tempdir()?;
    write_project(dir.path());

    let query = AddKeyQuery::new(
        "forms.labels.email".to_string(),
        vec![("en".to_string(), "Email address".to_string())],
    )
    .with_base_dir(dir.path().to_path_buf());
    run_add_key(query)?;

    let lookup = LookupQuery::new("forms.labels.email".to_string())
        .with_base_dir(dir.path().to_path_buf());
    let result = run_lookup(lookup)?;
    assert_eq!(result.values.len(), 1);
    assert_eq!(result.values[0].value, "Email address");
    Ok(())
}
