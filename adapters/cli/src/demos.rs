//! One deterministic demo per engine.

use anyhow::{ensure, Result};
use glam::Vec2;
use pixel_arcade_core::{GridPos, ThemeId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Fixed 60 Hz cadence, clamped per the engine contract so a hitch in the
// host loop can never tunnel the player through tiles.
const FRAME_DT: f32 = 1.0 / 60.0;
const MAX_DT: f32 = 0.05;

/// Drives the platformer with a seeded input stream and prints the outcome.
pub(crate) fn run_platformer(theme: ThemeId, level: usize, ticks: u32, seed: u64) -> Result<()> {
    use pixel_arcade_game_platformer::{content, InputState, PlatformerState};

    let bundle = content(theme);
    let mut state = PlatformerState::new(bundle, level);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut input = InputState::NONE;

    let dt = FRAME_DT.min(MAX_DT);
    for tick in 0..ticks {
        if tick % 20 == 0 {
            input = roll_input(&mut rng);
        }
        state.update(input, dt);
    }

    println!("platformer [{theme}] after {ticks} ticks (seed {seed})");
    println!("  level: {}", state.level_index());
    println!("  score: {}", state.score());
    println!("  lives: {}", state.lives());
    println!("  status: {:?}", state.status());
    println!("  clock: {:.2}s", state.time());
    Ok(())
}

fn roll_input(rng: &mut ChaCha8Rng) -> pixel_arcade_game_platformer::InputState {
    // Bias rightward so the run tends to make forward progress.
    let style = rng.gen_range(0..6);
    pixel_arcade_game_platformer::InputState::new(
        style == 0,
        matches!(style, 1..=3),
        rng.gen_bool(0.3),
    )
}

/// Routes every circuit level with the reference solver.
pub(crate) fn run_circuit(theme: ThemeId) -> Result<()> {
    use pixel_arcade_game_circuit::{content, is_level_complete, solve_level};

    let bundle = content(theme);
    println!("circuit [{theme}] \"{}\"", bundle.title());

    for (index, level) in bundle.levels().iter().enumerate() {
        let paths = solve_level(level);
        let Some(paths) = paths else {
            anyhow::bail!("level {index} is unsolvable by the reference solver");
        };
        ensure!(
            is_level_complete(level, &paths),
            "level {index}: solver output failed completion",
        );
        let cells: usize = paths.values().map(Vec::len).sum();
        println!(
            "  level {index}: solved, {} paths over {cells} cells{}",
            paths.len(),
            if level.requires_full_coverage() {
                " (full coverage)"
            } else {
                ""
            },
        );
    }
    Ok(())
}

/// Walks a winning path through the story, printing the transcript.
pub(crate) fn run_fiction(theme: ThemeId) -> Result<()> {
    use pixel_arcade_game_fiction::{
        content, create_initial_state, current_scene, make_choice,
    };

    let bundle = content(theme);
    println!("fiction [{theme}] \"{}\"", bundle.title());
    println!("  {}", bundle.intro());

    let path = win_path(&bundle)?;
    let mut state = create_initial_state(&bundle);
    for index in path {
        let scene = current_scene(&bundle, &state)?;
        let choice = &scene.choices()[index];
        println!("  [{}] -> {}", scene.id(), choice.label());
        state = make_choice(&bundle, &state, index)?;
        if let Some(event) = state.last_event() {
            println!("    ({event})");
        }
    }

    let finale = current_scene(&bundle, &state)?;
    println!("  [{}] {}", finale.id(), finale.text());
    println!("  status: {:?}, {} scenes visited", state.status(), state.history().len());
    Ok(())
}

// Breadth-first search over (scene, inventory) states through the engine
// itself; returns the choice indices of a shortest winning line.
fn win_path(content: &pixel_arcade_game_fiction::FictionContent) -> Result<Vec<usize>> {
    use pixel_arcade_game_fiction::{
        create_initial_state, current_scene, make_choice, Ending, FictionState,
    };
    use std::collections::{HashSet, VecDeque};

    let mut seen: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<(FictionState, Vec<usize>)> = VecDeque::new();
    queue.push_back((create_initial_state(content), Vec::new()));

    while let Some((state, path)) = queue.pop_front() {
        let inventory: Vec<_> = state.inventory().iter().cloned().collect();
        let key = format!("{}::{}", state.current_scene(), inventory.join("|"));
        if !seen.insert(key) {
            continue;
        }

        let scene = current_scene(content, &state)?;
        if scene.ending() == Some(Ending::Win) {
            return Ok(path);
        }

        for (index, choice) in scene.choices().iter().enumerate() {
            if let Some(required) = choice.required_item() {
                if !state.inventory().contains(required) {
                    continue;
                }
            }
            let next = make_choice(content, &state, index)?;
            let mut next_path = path.clone();
            next_path.push(index);
            queue.push_back((next, next_path));
        }
    }

    anyhow::bail!("story has no winning path")
}

/// Replays a scripted build pairing each rule's items, then prints the score.
pub(crate) fn run_builder(theme: ThemeId) -> Result<()> {
    use pixel_arcade_game_builder::{
        calculate_score, content, items_by_id, place_item, BuilderGrid, GRID_SIZE,
        STARTING_BUDGET,
    };

    let bundle = content(theme);
    let items = items_by_id(bundle.items());
    let mut grid = BuilderGrid::empty(GRID_SIZE);
    let mut budget = STARTING_BUDGET;

    println!("builder [{theme}] \"{}\"", bundle.title());
    for (index, rule) in bundle.rules().iter().enumerate() {
        let row = 2 * index as u32;
        for (column, id) in [(0, rule.item.as_str()), (1, rule.neighbor.as_str())] {
            let outcome = place_item(&mut grid, GridPos::new(row, column), id, &items, budget);
            ensure!(outcome.changed, "scripted placement of {id} failed");
            budget = outcome.budget;
        }
    }

    let score = calculate_score(&grid, &items, bundle.rules());
    println!("  budget left: {budget}");
    println!("  base: {}, bonus: {}", score.base, score.bonus);
    for entry in &score.rules {
        println!(
            "    {} beside {}: {} x {} = {}",
            entry.rule.item, entry.rule.neighbor, entry.count, entry.rule.bonus, entry.total,
        );
    }
    println!("  {}: {}", bundle.score_label(), score.total);
    Ok(())
}

/// Scores a fixed sweep of guesses over the theme's locations.
pub(crate) fn run_geography(theme: ThemeId) -> Result<()> {
    use pixel_arcade_game_geography::{content, rating, score_guess};

    // One offset per round, cycling across the location list.
    const OFFSETS: [f32; 5] = [0.0, 0.02, 0.08, 0.18, 0.5];

    let bundle = content(theme);
    println!("geography [{theme}] \"{}\"", bundle.name());

    let mut total = 0;
    for (index, location) in bundle.locations().iter().enumerate() {
        let offset = OFFSETS[index % OFFSETS.len()];
        let guess = location.position() + Vec2::new(offset, 0.0);
        let result = score_guess(guess, location.position());
        total += result.points;
        println!(
            "  {}: {} points ({}, d={:.3})",
            location.name,
            result.points,
            result.band.as_str(),
            result.distance,
        );
    }

    println!("  total: {total}, rating: {}", rating(total).as_str());
    Ok(())
}
