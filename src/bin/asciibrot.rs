// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate asciibrot;
extern crate clap;
extern crate env_logger;
extern crate failure;
extern crate image;
extern crate num;

use asciibrot::planes::{MAX_CELLS, MAX_STEPS};
use asciibrot::{arithmetic_loop, escape_char, AsciiRenderer, GridParams};
use clap::{App, Arg, ArgMatches, SubCommand};
use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use log::info;
use num::Complex;
use std::convert::TryFrom;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_size(s: &str) -> Result<(), String> {
    match parse_pair::<usize>(s, 'x') {
        None => Err("Could not parse grid size".to_string()),
        Some((w, h)) => {
            let in_range = |n: usize| n >= 1 && n <= MAX_STEPS;
            if !in_range(w) || !in_range(h) {
                Err(format!(
                    "Grid size must be between 1x1 and {}x{}",
                    MAX_STEPS, MAX_STEPS
                ))
            } else if w * h > MAX_CELLS {
                Err(format!("Grid size must be at most {} cells", MAX_CELLS))
            } else {
                Ok(())
            }
        }
    }
}

const SIZE: &str = "size";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const ITERATIONS: &str = "iterations";
const THRESHOLD: &str = "threshold";
const IMAGE: &str = "image";
const CHECKSUM: &str = "checksum";
const QUIET: &str = "quiet";
const LOOP: &str = "loop";
const OUTER: &str = "outer";
const INNER: &str = "inner";

fn args<'a>() -> ArgMatches<'a> {
    App::new("asciibrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Mandelbrot escape-time benchmark, rendered as ASCII")
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("1000")
                .validator(|s| {
                    validate_range::<usize>(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Maximum number of iterations per point"),
        )
        .arg(
            Arg::with_name(THRESHOLD)
                .required(false)
                .long(THRESHOLD)
                .short("m")
                .takes_value(true)
                .default_value("1000")
                .validator(|s| {
                    validate_range(
                        &s,
                        std::f64::MIN_POSITIVE,
                        std::f64::MAX,
                        "Could not parse escape threshold",
                        "Escape threshold must be a positive number",
                    )
                })
                .help("Magnitude beyond which a point has escaped"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.1,-1.2")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner (xmin,ymin) of the complex window"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1.0,1.2")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner (xmax,ymax) of the complex window"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("200x100")
                .validator(|s| validate_size(&s))
                .help("Columns and rows of the character grid"),
        )
        .arg(
            Arg::with_name(IMAGE)
                .required(false)
                .long(IMAGE)
                .short("o")
                .takes_value(true)
                .help("Also write the grid as a PGM image"),
        )
        .arg(
            Arg::with_name(CHECKSUM)
                .long(CHECKSUM)
                .short("c")
                .conflicts_with(QUIET)
                .help("Print the sum of the character codes instead of the grid"),
        )
        .arg(
            Arg::with_name(QUIET)
                .long(QUIET)
                .short("q")
                .help("Render, but print nothing"),
        )
        .subcommand(
            SubCommand::with_name(LOOP)
                .about("Run the integer arithmetic loop benchmark")
                .arg(
                    Arg::with_name(OUTER)
                        .long(OUTER)
                        .short("n")
                        .takes_value(true)
                        .default_value("10000")
                        .validator(|s| {
                            validate_range(
                                &s,
                                0,
                                std::u32::MAX,
                                "Could not parse outer loop count",
                                "Outer loop count out of range",
                            )
                        })
                        .help("Outer loop count"),
                )
                .arg(
                    Arg::with_name(INNER)
                        .long(INNER)
                        .short("k")
                        .takes_value(true)
                        .default_value("1000")
                        .validator(|s| {
                            validate_range(
                                &s,
                                0,
                                std::u32::MAX,
                                "Could not parse inner loop count",
                                "Inner loop count out of range",
                            )
                        })
                        .help("Inner loop count"),
                ),
        )
        .get_matches()
}

fn write_image(
    outfile: &str,
    pixels: &[u8],
    bounds: (usize, usize),
) -> Result<(), failure::Error> {
    let (width, height) = (u32::try_from(bounds.0)?, u32::try_from(bounds.1)?);
    let path = Path::new(outfile);
    let output = File::create(&path)?;
    let mut encoder =
        PNMEncoder::new(output).with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary));
    encoder.encode(pixels, width, height, ColorType::Gray(8))?;
    Ok(())
}

// Spreads the 94 characters over the full gray range; blanks are black.
fn grayscale(renderer: &AsciiRenderer) -> Vec<u8> {
    renderer
        .escape_grid()
        .iter()
        .map(|r| ((u32::from(escape_char(r) as u8) - 32) * 255 / 93) as u8)
        .collect()
}

fn grid_params(matches: &ArgMatches) -> Result<GridParams, failure::Error> {
    let value = |name: &str| {
        matches
            .value_of(name)
            .ok_or_else(|| failure::format_err!("Missing value for {}", name))
    };
    let size = parse_pair::<usize>(value(SIZE)?, 'x')
        .ok_or_else(|| failure::format_err!("Error parsing grid size"))?;
    let leftlower = parse_complex(value(LEFTLOWER)?)
        .ok_or_else(|| failure::format_err!("Error parsing left lower point"))?;
    let rightupper = parse_complex(value(RIGHTUPPER)?)
        .ok_or_else(|| failure::format_err!("Error parsing right upper point"))?;
    Ok(GridParams {
        iterations: usize::from_str(value(ITERATIONS)?)?,
        threshold: f64::from_str(value(THRESHOLD)?)?,
        leftlower,
        rightupper,
        stepsx: size.0,
        stepsy: size.1,
    })
}

fn run_loop(matches: &ArgMatches) -> Result<(), failure::Error> {
    let outer = u32::from_str(matches.value_of(OUTER).unwrap_or("10000"))?;
    let inner = u32::from_str(matches.value_of(INNER).unwrap_or("1000"))?;
    info!("Arithmetic loop: outer {}, inner {}", outer, inner);

    let start = Instant::now();
    let z = arithmetic_loop(outer, inner);
    let elapsed = start.elapsed();

    println!("{}", z);
    info!("Benchmark: {:.5}s", elapsed.as_secs_f64());
    Ok(())
}

fn run_mandelbrot(matches: &ArgMatches) -> Result<(), failure::Error> {
    let params = grid_params(matches)?;
    info!("--- Parameters ---");
    info!("iter  : {}", params.iterations);
    info!("maxval: {}", params.threshold);
    info!("stepsx: {}", params.stepsx);
    info!("stepsy: {}", params.stepsy);
    info!("x-axis: {} - {}", params.leftlower.re, params.rightupper.re);
    info!("y-axis: {} - {}", params.leftlower.im, params.rightupper.im);

    let renderer = AsciiRenderer::new(&params)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let start = Instant::now();
    if matches.is_present(CHECKSUM) {
        let sum = renderer.checksum();
        writeln!(out, "{}", sum)?;
    } else {
        let lines = renderer.lines();
        if !matches.is_present(QUIET) {
            for line in &lines {
                writeln!(out, "{}", line)?;
            }
        }
    }
    out.flush()?;
    let elapsed = start.elapsed();

    if let Some(outfile) = matches.value_of(IMAGE) {
        write_image(outfile, &grayscale(&renderer), renderer.dimensions())?;
        info!("Wrote {}", outfile);
    }

    info!("Benchmark: {:.5}s", elapsed.as_secs_f64());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = args();
    let result = match matches.subcommand_matches(LOOP) {
        Some(sub) => run_loop(sub),
        None => run_mandelbrot(&matches),
    };

    if let Err(e) = result {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
