use std::{
    fmt,
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{anyhow, Context, Result};
use clap::{App, Arg, ArgMatches};
use enumflags2::BitFlags;
use env_logger::Builder;
use log::{info, LevelFilter};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;

use spaceboggle::{
    board::{
        hexagonal::HexDimensions,
        rectangular::{RectDimensions, Wrapping},
        Board, Dimensions, RowLayout,
    },
    solver::{self, Solver},
    trie::Trie,
};

fn main() -> Result<()> {
    let matches = App::new("Boggle")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Finds every dictionary word on a rectangular or hexagonal Boggle board.")
        .arg(
            Arg::with_name("board")
                .value_name("BOARD")
                .help("file with one row of letters per line, or one ring per line with --hex")
                .required_unless("random")
                .index(1),
        )
        .arg(
            Arg::with_name("dict")
                .short("d")
                .long("dict")
                .value_name("FILE")
                .help("word list with one word per line")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("hex")
                .long("hex")
                .help("read the board as concentric hexagonal rings around a center cell"),
        )
        .arg(
            Arg::with_name("wrap")
                .long("wrap")
                .value_name("AXES")
                .help("let words wrap around the edges of a rectangular board")
                .takes_value(true)
                .possible_values(&["horizontal", "vertical", "both"])
                .case_insensitive(true)
                .conflicts_with("hex"),
        )
        .arg(
            Arg::with_name("random")
                .short("r")
                .long("random")
                .value_name("SHAPE")
                .help("generate a random board: WxH, or a ring count with --hex")
                .takes_value(true)
                .conflicts_with("board"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for the random board")
                .takes_value(true)
                .requires("random"),
        )
        .arg(
            Arg::with_name("min_length")
                .short("m")
                .long("min-length")
                .value_name("LEN")
                .help("only report words with at least this many letters")
                .takes_value(true)
                .default_value("1"),
        )
        .arg(
            Arg::with_name("paths")
                .long("paths")
                .help("print the cells used to spell each word"),
        )
        .arg(
            Arg::with_name("parallel")
                .short("p")
                .long("parallel")
                .help("search from every starting cell in parallel"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("increase log verbosity, may be repeated"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let dict = matches.value_of("dict").unwrap();
    let words = read_lines(dict).with_context(|| format!("failed to read dictionary {}", dict))?;
    let trie = Trie::build(&words);
    info!("loaded {} words from {}", trie.len(), dict);

    let min_length: usize = matches
        .value_of("min_length")
        .unwrap()
        .parse()
        .context("min-length must be a non-negative integer")?;

    if matches.is_present("hex") {
        let board = hex_board(&matches)?;
        report(&matches, &board, &trie, min_length)
    } else {
        let board = rect_board(&matches)?;
        report(&matches, &board, &trie, min_length)
    }
}

/// Set up the logger. Warnings are always shown, each `-v` adds a level.
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

/// Build the rectangular board, either from the board file or randomly.
fn rect_board(matches: &ArgMatches) -> Result<Board<RectDimensions>> {
    /// Shape of a random rectangular board.
    static SHAPE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?P<w>[0-9]+)\s*[xX]\s*(?P<h>[0-9]+)$").unwrap());

    let wrapping = match matches.value_of("wrap").map(str::to_ascii_lowercase) {
        None => BitFlags::empty(),
        Some(axes) => match axes.as_str() {
            "horizontal" => BitFlags::from(Wrapping::Horizontal),
            "vertical" => BitFlags::from(Wrapping::Vertical),
            "both" => Wrapping::Horizontal | Wrapping::Vertical,
            _ => unreachable!(),
        },
    };

    if let Some(shape) = matches.value_of("random") {
        let captures = SHAPE
            .captures(shape.trim())
            .ok_or_else(|| anyhow!("invalid board shape \"{}\", expected WxH", shape))?;
        let width: usize = captures["w"].parse().context("invalid board width")?;
        let height: usize = captures["h"].parse().context("invalid board height")?;
        let dim = RectDimensions::try_new_wrapping(width, height, wrapping)?;
        random_board(matches, dim)
    } else {
        let rows = read_board_rows(matches)?;
        let lengths: Vec<usize> = rows.iter().map(|row| row.chars().count()).collect();
        let dim = RectDimensions::from_row_lengths(&lengths)?.with_wrapping(wrapping);
        Ok(Board::new(dim, rows.iter().flat_map(|row| row.chars()))?)
    }
}

/// Build the hexagonal board, either from the board file or randomly.
fn hex_board(matches: &ArgMatches) -> Result<Board<HexDimensions>> {
    /// Shape of a random hexagonal board: the number of rings.
    static SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?P<layers>[0-9]+)$").unwrap());

    if let Some(shape) = matches.value_of("random") {
        let captures = SHAPE
            .captures(shape.trim())
            .ok_or_else(|| anyhow!("invalid ring count \"{}\"", shape))?;
        let layers: usize = captures["layers"].parse().context("invalid ring count")?;
        random_board(matches, HexDimensions::try_new(layers)?)
    } else {
        Ok(Board::from_rows(&read_board_rows(matches)?)?)
    }
}

/// Generate a random board with the given dimensions and show it on stderr.
fn random_board<D: RowLayout>(matches: &ArgMatches, dim: D) -> Result<Board<D>> {
    let mut rng = match matches.value_of("seed") {
        Some(seed) => {
            let seed = seed.parse::<u64>().context("seed must be an integer")?;
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let board = Board::random(dim, &mut rng);
    eprintln!("{}", board);
    eprintln!();
    Ok(board)
}

/// Read the rows of the board file. Whitespace within a row is ignored so letters may
/// be spaced out.
fn read_board_rows(matches: &ArgMatches) -> Result<Vec<String>> {
    let path = matches
        .value_of("board")
        .ok_or_else(|| anyhow!("no board file given"))?;
    let rows = read_lines(path).with_context(|| format!("failed to read board {}", path))?;
    Ok(rows
        .iter()
        .map(|row| row.split_whitespace().collect())
        .collect())
}

/// Read the non-blank lines of a file, trimmed.
fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

/// Solve the board and print the found words in sorted order.
fn report<D>(
    matches: &ArgMatches,
    board: &Board<D>,
    trie: &Trie,
    min_length: usize,
) -> Result<()>
where
    D: Dimensions + Sync,
    D::Coordinate: fmt::Display,
{
    let solver = Solver::new(board, trie).min_length(min_length);
    let found = if matches.is_present("parallel") {
        solver.solve_parallel()
    } else {
        solver.solve()
    };
    let mut found: Vec<String> = found.into_iter().collect();
    found.sort();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for word in &found {
        if matches.is_present("paths") {
            // Every found word can be traced.
            let path = solver::find_path(board, word)
                .ok_or_else(|| anyhow!("no path for found word {}", word))?;
            write!(out, "{:<16}", word)?;
            for coord in path {
                write!(out, " {}", coord)?;
            }
            writeln!(out)?;
        } else {
            writeln!(out, "{}", word)?;
        }
    }
    info!("{} words found", found.len());
    Ok(())
}
