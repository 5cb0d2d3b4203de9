use std::time::Duration;

use const_format::concatcp;
use criterion::{measurement::Measurement, BenchmarkGroup, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use dicewords::{
	board::{Grid, Position, PositionedTile, Tile},
	dice::{shake_grid, Variant},
	placement::Placement,
	search::find_path
};

/// The rows of the benchmark board. STRAINED snakes across the top two
/// rows, and no Q appears anywhere.
const ROWS: [&str; 4] = ["STRA", "DENI", "GOLC", "PUMB"];

/// A word the benchmark board spells.
const WORD_HIT: &str = "STRAINED";

/// A word the benchmark board cannot spell: the search follows the whole
/// snake before discovering that the final letter is missing, from every
/// starting cell.
const WORD_MISS: &str = concatcp!(WORD_HIT, "Q");

/// Build the benchmark grid.
fn fixture_grid() -> Grid
{
	let mut tiles = Vec::new();
	for (row, labels) in ROWS.iter().enumerate()
	{
		for (col, label) in labels.chars().enumerate()
		{
			tiles.push(PositionedTile::new(
				Tile::new(tiles.len(), &label.to_string()),
				Position::new(col as i32, row as i32)
			));
		}
	}
	Grid::new(4, 4, tiles).unwrap()
}

/// Build the benchmark placement: a small interlocking crossword of nine
/// tiles, with words across the top and down both flanks.
fn fixture_placement() -> Placement
{
	let spots = [
		("C", 0, 0), ("A", 1, 0), ("B", 2, 0), ("I", 3, 0), ("N", 4, 0),
		("O", 0, 1), ("T", 0, 2),
		("E", 4, 1), ("T", 4, 2)
	];
	spots.iter()
		.enumerate()
		.map(|(id, &(label, col, row))| {
			PositionedTile::new(Tile::new(id, label), Position::new(col, row))
		})
		.collect()
}

/// Benchmark tracing a word that snakes across the whole board.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_find_path_hit<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	let grid = fixture_grid();
	g.bench_function("find_path_hit", |b| {
		b.iter(|| find_path(&grid, WORD_HIT));
	});
}

/// Benchmark refusing a word, which costs the search a full backtrack from
/// every starting cell.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_find_path_miss<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	let grid = fixture_grid();
	g.bench_function("find_path_miss", |b| {
		b.iter(|| find_path(&grid, WORD_MISS));
	});
}

/// Benchmark tracing through a shaken 6x6 board, digraph and blank faces
/// included. The seed is fixed so that every run searches the same board;
/// whether the word is formable on it does not matter for the measurement.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_find_path_shaken<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	let mut rng = StdRng::seed_from_u64(2012);
	let grid = shake_grid(Variant::SuperBig2012, &mut rng);
	g.bench_function("find_path_shaken", |b| {
		b.iter(|| find_path(&grid, WORD_HIT));
	});
}

/// Benchmark reading the word runs out of a placement.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_extract_runs<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	let placement = fixture_placement();
	g.bench_function("extract_runs", |b| {
		b.iter(|| placement.extract_runs());
	});
}

/// Benchmark flood-filling the islands of a placement.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_connected_components<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	let placement = fixture_placement();
	g.bench_function("connected_components", |b| {
		b.iter(|| placement.connected_components());
	});
}

/// Run all benchmarks.
///
/// The engines answer in microseconds on game-sized boards; the main purpose
/// of the benchmarking is to catch regressions in the search's backtracking.
fn main()
{
	let mut criterion = Criterion::default().configure_from_args();
	let mut group = criterion.benchmark_group("benchmarks");
	group.measurement_time(Duration::from_secs(10));
	bench_find_path_hit(&mut group);
	bench_find_path_miss(&mut group);
	bench_find_path_shaken(&mut group);
	bench_extract_runs(&mut group);
	bench_connected_components(&mut group);
	group.finish();

	// Generate the final summary.
	criterion.final_summary();
}
