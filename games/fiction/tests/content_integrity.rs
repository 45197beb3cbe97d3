//! Content invariants, enforced here rather than at runtime: every scene is
//! reachable under some gating-satisfying traversal, every story can be won,
//! and scene shapes are sound.

use std::collections::{BTreeSet, HashSet, VecDeque};

use pixel_arcade_core::ThemeId;
use pixel_arcade_game_fiction::{
    content, create_initial_state, current_scene, make_choice, Ending, FictionContent,
    FictionState, FictionStatus,
};

fn inventory_key(inventory: &BTreeSet<String>) -> String {
    inventory.iter().cloned().collect::<Vec<_>>().join("|")
}

// Breadth-first search over (scene, inventory) states, respecting gates and
// accumulating granted items, mirroring how a player could actually traverse.
fn reachable_scenes(content: &FictionContent) -> HashSet<String> {
    let mut reachable = HashSet::new();
    let mut seen_states = HashSet::new();
    let mut queue: VecDeque<(String, BTreeSet<String>)> = VecDeque::new();
    queue.push_back((content.start_scene().to_owned(), BTreeSet::new()));

    while let Some((scene_id, inventory)) = queue.pop_front() {
        let state_key = format!("{scene_id}::{}", inventory_key(&inventory));
        if !seen_states.insert(state_key) {
            continue;
        }

        let Some(scene) = content.find_scene(&scene_id) else {
            continue;
        };
        let _ = reachable.insert(scene.id().to_owned());

        for choice in scene.choices() {
            if let Some(required) = choice.required_item() {
                if !inventory.contains(required) {
                    continue;
                }
            }
            let mut next_inventory = inventory.clone();
            if let Some(gained) = choice.item_gained() {
                let _ = next_inventory.insert(gained.to_owned());
            }
            queue.push_back((choice.next_scene().to_owned(), next_inventory));
        }
    }

    reachable
}

// Shortest sequence of choice indices from the start to a win scene, found by
// replaying the engine itself through a breadth-first search.
fn shortest_win_path(content: &FictionContent) -> Option<Vec<usize>> {
    let mut seen = HashSet::new();
    let mut queue: VecDeque<(FictionState, Vec<usize>)> = VecDeque::new();
    queue.push_back((create_initial_state(content), Vec::new()));

    while let Some((state, path)) = queue.pop_front() {
        let key = format!("{}::{}", state.current_scene(), inventory_key(state.inventory()));
        if !seen.insert(key) {
            continue;
        }

        let scene = current_scene(content, &state).expect("content resolves every scene");
        if scene.ending() == Some(Ending::Win) {
            return Some(path);
        }

        for (index, choice) in scene.choices().iter().enumerate() {
            if let Some(required) = choice.required_item() {
                if !state.inventory().contains(required) {
                    continue;
                }
            }
            let next = make_choice(content, &state, index).expect("content resolves every scene");
            let mut next_path = path.clone();
            next_path.push(index);
            queue.push_back((next, next_path));
        }
    }

    None
}

#[test]
fn every_scene_is_reachable_in_every_theme() {
    for theme in ThemeId::ALL {
        let bundle = content(theme);
        let reachable = reachable_scenes(&bundle);
        for scene in bundle.scenes() {
            assert!(
                reachable.contains(scene.id()),
                "{theme}: scene `{}` is unreachable from the start",
                scene.id(),
            );
        }
    }
}

#[test]
fn every_theme_can_be_won_through_the_engine() {
    for theme in ThemeId::ALL {
        let bundle = content(theme);
        let path = shortest_win_path(&bundle)
            .unwrap_or_else(|| panic!("{theme}: no win path exists"));

        let mut state = create_initial_state(&bundle);
        for index in path {
            state = make_choice(&bundle, &state, index).expect("content resolves every scene");
        }

        assert_eq!(state.status(), FictionStatus::Win, "{theme}: replayed path must win");
    }
}

#[test]
fn terminal_scenes_have_no_choices_and_others_have_some() {
    for theme in ThemeId::ALL {
        for scene in content(theme).scenes() {
            if scene.ending().is_some() {
                assert!(
                    scene.choices().is_empty(),
                    "{theme}: terminal scene `{}` must not offer choices",
                    scene.id(),
                );
            } else {
                assert!(
                    !scene.choices().is_empty(),
                    "{theme}: scene `{}` is a dead end without an ending",
                    scene.id(),
                );
            }
        }
    }
}

#[test]
fn every_transition_targets_a_declared_scene() {
    for theme in ThemeId::ALL {
        let bundle = content(theme);
        for scene in bundle.scenes() {
            for choice in scene.choices() {
                assert!(
                    bundle.find_scene(choice.next_scene()).is_some(),
                    "{theme}: `{}` links to undeclared scene `{}`",
                    scene.id(),
                    choice.next_scene(),
                );
            }
        }
    }
}

#[test]
fn gated_choices_reject_without_their_item_in_shipped_content() {
    for theme in ThemeId::ALL {
        let bundle = content(theme);
        let gated = bundle
            .scenes()
            .iter()
            .find(|scene| scene.choices().iter().any(|choice| choice.required_item().is_some()))
            .expect("every theme gates at least one choice");
        let index = gated
            .choices()
            .iter()
            .position(|choice| choice.required_item().is_some())
            .expect("gated choice exists");

        // Drive a fresh run to the gated scene id directly via the graph: the
        // start scene always reaches it, but an empty inventory is enough for
        // the rejection check, so synthesize the state through the engine by
        // walking ungated edges only.
        let mut state = create_initial_state(&bundle);
        let mut hops = 0;
        while state.current_scene() != gated.id() && hops < 32 {
            let scene = current_scene(&bundle, &state).expect("content resolves");
            let step = scene
                .choices()
                .iter()
                .position(|choice| choice.required_item().is_none() && choice.item_gained().is_none());
            let Some(step) = step else { break };
            state = make_choice(&bundle, &state, step).expect("content resolves");
            hops += 1;
        }

        if state.current_scene() == gated.id() {
            let before = state.current_scene().to_owned();
            let blocked = make_choice(&bundle, &state, index).expect("content resolves");
            assert_eq!(blocked.current_scene(), before, "{theme}: gate must hold");
            assert!(
                blocked.last_event().unwrap_or_default().starts_with("Requires"),
                "{theme}: rejection must record a Requires message",
            );
        }
    }
}
