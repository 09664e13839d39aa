// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const GOLDEN: &str = include_str!("data/mandelbrot_200x100.txt");

fn asciibrot() -> Command {
    Command::cargo_bin("asciibrot").unwrap()
}

#[test]
fn default_run_prints_standard_grid() {
    asciibrot()
        .assert()
        .success()
        .stdout(predicate::eq(GOLDEN).from_utf8());
}

#[test]
fn size_option_shapes_the_grid() {
    asciibrot()
        .args(&["--size", "30x12", "--iterations", "50"])
        .assert()
        .success()
        .stdout(
            predicate::function(|s: &str| {
                s.lines().count() == 12 && s.lines().all(|l| l.len() == 30)
            })
            .from_utf8(),
        );
}

#[test]
fn checksum_flag_prints_one_number() {
    asciibrot()
        .arg("--checksum")
        .assert()
        .success()
        .stdout(predicate::eq("747861\n").from_utf8());
}

#[test]
fn quiet_prints_nothing() {
    asciibrot()
        .args(&["-q", "-s", "20x10"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().from_utf8());
}

#[test]
fn window_corners_accept_negative_values() {
    asciibrot()
        .args(&["--leftlower=-2.0,-1.0", "--rightupper=1.0,1.0"])
        .args(&["-s", "6x3", "-i", "100", "-m", "2"])
        .assert()
        .success()
        .stdout(predicate::eq("  !\"  \n \")  $\n \")  $\n").from_utf8());
}

#[test]
fn empty_grid_is_rejected() {
    asciibrot()
        .args(&["--size", "0x10"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Grid size must be between").from_utf8());
}

#[test]
fn oversized_grid_is_rejected() {
    for size in &["1x18446744073709551615", "65536x1", "65535x65535"] {
        asciibrot()
            .args(&["-q", "--size", size])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Grid size").from_utf8());
    }
}

#[test]
fn zero_iterations_are_rejected() {
    asciibrot().args(&["--iterations", "0"]).assert().failure();
}

#[test]
fn huge_iteration_counts_are_out_of_range() {
    asciibrot()
        .args(&["--iterations", "3000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be between 1 and 1000000").from_utf8());
}

#[test]
fn image_option_writes_a_pgm() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mandel.pgm");
    asciibrot()
        .args(&["-q", "-s", "40x20", "-o"])
        .arg(&path)
        .assert()
        .success();
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"P5\n40 20\n255\n"));
    assert_eq!(bytes.len(), b"P5\n40 20\n255\n".len() + 40 * 20);
}

#[test]
fn image_gray_levels_follow_the_characters() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("small.pgm");
    asciibrot()
        .args(&["--leftlower=-2.0,-1.0", "--rightupper=1.0,1.0"])
        .args(&["-q", "-s", "6x3", "-i", "100", "-m", "2", "-o"])
        .arg(&path)
        .assert()
        .success();
    // Rows "  !\"  ", " \")  $", " \")  $" at (code - 32) * 255 / 93.
    let mut expected = b"P5\n6 3\n255\n".to_vec();
    expected.extend_from_slice(&[
        0, 0, 2, 5, 0, 0, //
        0, 5, 24, 0, 0, 10, //
        0, 5, 24, 0, 0, 10,
    ]);
    assert_eq!(fs::read(&path).unwrap(), expected);
}

#[test]
fn loop_subcommand_prints_the_accumulator() {
    asciibrot()
        .args(&["loop", "--outer", "2", "--inner", "3"])
        .assert()
        .success()
        .stdout(predicate::eq("36\n").from_utf8());
}

#[test]
fn loop_subcommand_defaults_to_standard_counts() {
    asciibrot()
        .arg("loop")
        .assert()
        .success()
        .stdout(predicate::eq("-1001\n").from_utf8());
}
