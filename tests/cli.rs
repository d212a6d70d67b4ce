use assert_cmd::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;

const OUTPUT: &str = "output/mass_metallicity_relation.png";

fn plot_cmd(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_galaxy-mzr"));
    cmd.current_dir(root)
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY");
    cmd
}

fn write_snapshot(root: &Path, text: &str) {
    fs::create_dir_all(root.join("data")).expect("data dir");
    fs::write(root.join("data/galaxy_snapshot.csv"), text).expect("write csv");
}

#[test]
fn renders_example_snapshot() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_snapshot(
        tmp.path(),
        "stellar_mass,gas_metallicity,star_formation_rate\n\
         1e9,0.3,1.2\n\
         5e10,0.6,15.0\n\
         2e8,0.1,0.05\n",
    );

    let assert = plot_cmd(tmp.path()).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(stdout.contains(OUTPUT), "stdout: {stdout}");

    let bytes = fs::read(tmp.path().join(OUTPUT)).expect("read png");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "output is not a PNG"
    );

    let img = image::load_from_memory(&bytes).expect("decode png");
    // 9x6 in at 300 DPI, tight-cropped.
    assert!(img.width() <= 2700 && img.height() <= 1800);
    assert!(img.width() > 1000 && img.height() > 700);
}

#[test]
fn renders_without_sfr_column() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_snapshot(
        tmp.path(),
        "stellar_mass,gas_metallicity\n1e9,0.3\n5e10,0.6\n",
    );

    plot_cmd(tmp.path()).assert().success();
    assert!(tmp.path().join(OUTPUT).is_file());
}

#[test]
fn second_run_reuses_output_directory() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_snapshot(
        tmp.path(),
        "stellar_mass,gas_metallicity,star_formation_rate\n1e9,0.3,1.2\n2e8,0.1,0.05\n",
    );

    plot_cmd(tmp.path()).assert().success();
    let first = fs::metadata(tmp.path().join(OUTPUT)).expect("first").len();
    plot_cmd(tmp.path()).assert().success();
    let second = fs::metadata(tmp.path().join(OUTPUT)).expect("second").len();

    assert!(first > 0 && second > 0);
    let entries = fs::read_dir(tmp.path().join("output")).expect("read dir").count();
    assert_eq!(entries, 1);
}

#[test]
fn missing_input_fails_without_output() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let assert = plot_cmd(tmp.path()).assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("galaxy_snapshot.csv"), "stderr: {stderr}");
    assert!(!tmp.path().join(OUTPUT).exists());
}

#[test]
fn missing_column_fails_without_output() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_snapshot(
        tmp.path(),
        "stellar_mass,star_formation_rate\n1e9,1.2\n",
    );

    let assert = plot_cmd(tmp.path()).assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("gas_metallicity"), "stderr: {stderr}");
    assert!(!tmp.path().join("output").exists());
}

#[test]
fn generated_sample_renders() {
    let tmp = tempfile::tempdir().expect("tempdir");

    Command::new(env!("CARGO_BIN_EXE_generate_sample"))
        .current_dir(tmp.path())
        .assert()
        .success();
    let csv = fs::read_to_string(tmp.path().join("data/galaxy_snapshot.csv")).expect("csv");
    assert!(csv.starts_with("stellar_mass,gas_metallicity,star_formation_rate"));
    assert_eq!(csv.lines().count(), 201);

    plot_cmd(tmp.path()).assert().success();
    assert!(tmp.path().join(OUTPUT).is_file());
}
