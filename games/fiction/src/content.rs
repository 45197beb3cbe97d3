//! Theme-scoped stories.
//!
//! All three stories share a topology: a starting chamber with an optional
//! key cache, a hub with a lit side room and a pit, a locked vault holding a
//! weapon, a dark passage gated on the light source, and a guardian standing
//! before the ending. Scene names, items, and prose differ per theme.

use pixel_arcade_core::ThemeId;

use crate::types::{Choice, Ending, FictionContent, Scene};

/// Returns the fiction content bundle for the provided theme.
#[must_use]
pub fn content(theme: ThemeId) -> FictionContent {
    match theme {
        ThemeId::Retro => retro(),
        ThemeId::Futuristic => futuristic(),
        ThemeId::Organic => organic(),
    }
}

fn retro() -> FictionContent {
    FictionContent::new(
        ThemeId::Retro,
        "Vault of the Pixel King",
        "Somewhere below the boot screen, the Pixel King's vault still renders. Find the throne before the sectors corrupt.",
        "boot_screen",
        vec![
            Scene::new(
                "boot_screen",
                "You blink awake on a flickering title card. A corridor scrolls into the dark below.",
                vec![
                    Choice::new("Walk down the corridor", "corridor"),
                    Choice::new("Pry at the loose brick", "loose_brick").grants("Rusty Key"),
                ],
            ),
            Scene::new(
                "loose_brick",
                "Behind the brick sits a Rusty Key, still warm from some forgotten cartridge.",
                vec![Choice::new("Take the corridor", "corridor")],
            ),
            Scene::new(
                "corridor",
                "Sprites of old heroes line the walls. Doors lead everywhere; one of them is locked.",
                vec![
                    Choice::new("Step into the torch alcove", "torch_alcove").grants("Torch"),
                    Choice::new("Drop into the slime pit", "slime_pit"),
                    Choice::new("Unlock the armory door", "armory").requires("Rusty Key"),
                ],
            ),
            Scene::new(
                "torch_alcove",
                "A pixel flame hops into your hand and settles there, eight frames a second.",
                vec![
                    Choice::new("Return to the corridor", "corridor"),
                    Choice::new("Squeeze into the service duct", "service_duct"),
                ],
            ),
            Scene::new(
                "slime_pit",
                "Green slime cycles through its idle animation. Something glints under the surface.",
                vec![
                    Choice::new("Climb back up", "corridor"),
                    Choice::new("Fish through the slime", "glow_nook").grants("Pixel Charm"),
                ],
            ),
            Scene::new(
                "glow_nook",
                "A nook behind the pit holds a Pixel Charm, one luminous dot on a string.",
                vec![Choice::new("Climb out of the pit", "slime_pit")],
            ),
            Scene::new(
                "armory",
                "Racks of deresolved weapons line the armory. One sword still holds its edge.",
                vec![
                    Choice::new("Claim the Pixel Sword", "armory_hall").grants("Pixel Sword"),
                    Choice::new("Leave it and slip out", "corridor"),
                ],
            ),
            Scene::new(
                "armory_hall",
                "The sword hums. A stairwell behind the racks lights up block by block.",
                vec![
                    Choice::new("Descend toward the guardian", "guardian_sprite"),
                    Choice::new("Cut through the service duct", "service_duct"),
                ],
            ),
            Scene::new(
                "service_duct",
                "The duct forks: one branch swallows light entirely, the other crumbles into static.",
                vec![
                    Choice::new("Carry the flame into the dark branch", "crypt").requires("Torch"),
                    Choice::new("Crawl blind into the static", "corrupted_sector"),
                ],
            ),
            Scene::new(
                "crypt",
                "Torchlight wakes a buried render of the old palace. The guardian's door stands ahead.",
                vec![
                    Choice::new("Approach the guardian", "guardian_sprite"),
                    Choice::new("Back out of the crypt", "service_duct"),
                ],
            ),
            Scene::new(
                "guardian_sprite",
                "A guardian sprite bars the throne. \"One answer, one token, or one mistake,\" it says.",
                vec![
                    Choice::new("Answer its riddle", "throne_room"),
                    Choice::new("Present the Pixel Sword", "throne_room").requires("Pixel Sword"),
                    Choice::new("Rush past it", "corrupted_sector"),
                ],
            ),
            Scene::terminal(
                "throne_room",
                "The throne room resolves at full resolution. The Pixel King's crown settles over you, and the dungeon saves.",
                Ending::Win,
            ),
            Scene::terminal(
                "corrupted_sector",
                "The floor de-renders mid-step. Your run scatters into dead pixels.",
                Ending::Lose,
            ),
        ],
    )
}

fn futuristic() -> FictionContent {
    FictionContent::new(
        ThemeId::Futuristic,
        "Derelict of the Silent Fleet",
        "The flagship drifts dark and crewless. Reach the bridge before the warden seals it forever.",
        "airlock",
        vec![
            Scene::new(
                "airlock",
                "Your boots ring on the airlock plating. Emergency strips pulse toward the atrium.",
                vec![
                    Choice::new("Follow the strips to the atrium", "atrium"),
                    Choice::new("Crack open the supply pod", "supply_pod").grants("Access Card"),
                ],
            ),
            Scene::new(
                "supply_pod",
                "Among vacuum-sealed rations you find an officer's Access Card, still chipped.",
                vec![Choice::new("Head for the atrium", "atrium")],
            ),
            Scene::new(
                "atrium",
                "The atrium rises three decks, balconies dark. A secure lab door blinks red.",
                vec![
                    Choice::new("Visit the solar gallery", "solar_gallery").grants("Signal Beacon"),
                    Choice::new("Descend into the coolant sump", "coolant_sump"),
                    Choice::new("Badge into the secure lab", "secure_lab").requires("Access Card"),
                ],
            ),
            Scene::new(
                "solar_gallery",
                "Starlight pours through the gallery glass. A Signal Beacon rests in a charging cradle.",
                vec![
                    Choice::new("Return to the atrium", "atrium"),
                    Choice::new("Take the maintenance shaft", "service_shaft"),
                ],
            ),
            Scene::new(
                "coolant_sump",
                "Coolant laps at the walkway. Something metallic rests on the grating below.",
                vec![
                    Choice::new("Climb back to the atrium", "atrium"),
                    Choice::new("Reach into the coolant", "salvage_cache").grants("Spare Cell"),
                ],
            ),
            Scene::new(
                "salvage_cache",
                "A Spare Cell, miraculously dry. The sump gurgles its approval.",
                vec![Choice::new("Climb out of the sump", "coolant_sump")],
            ),
            Scene::new(
                "secure_lab",
                "The lab's lockers stand open but one: inside waits an Ion Cutter on standby.",
                vec![
                    Choice::new("Take the Ion Cutter", "lab_annex").grants("Ion Cutter"),
                    Choice::new("Leave it sealed", "atrium"),
                ],
            ),
            Scene::new(
                "lab_annex",
                "The cutter thrums in your grip. An annex hatch opens onto the lower decks.",
                vec![
                    Choice::new("Descend toward the warden", "warden_core"),
                    Choice::new("Duck into the maintenance shaft", "service_shaft"),
                ],
            ),
            Scene::new(
                "service_shaft",
                "The shaft splits: the reactor crawlway is pitch black, the hull gap breathes vacuum.",
                vec![
                    Choice::new("Light the crawlway with the beacon", "reactor_deck")
                        .requires("Signal Beacon"),
                    Choice::new("Chance the hull gap", "void_breach"),
                ],
            ),
            Scene::new(
                "reactor_deck",
                "Beacon light sweeps the sleeping reactor. The warden's chamber hums one deck up.",
                vec![
                    Choice::new("Approach the warden", "warden_core"),
                    Choice::new("Withdraw to the shaft", "service_shaft"),
                ],
            ),
            Scene::new(
                "warden_core",
                "The warden AI coalesces above its core. \"State your clearance, or impress me.\"",
                vec![
                    Choice::new("Recite the fleet override", "bridge"),
                    Choice::new("Show it the Ion Cutter", "bridge").requires("Ion Cutter"),
                    Choice::new("Lunge for the core", "void_breach"),
                ],
            ),
            Scene::terminal(
                "bridge",
                "The bridge wakes screen by screen. The fleet answers your hail; the ship is yours.",
                Ending::Win,
            ),
            Scene::terminal(
                "void_breach",
                "A bulkhead sighs open onto nothing. The stars take the rest.",
                Ending::Lose,
            ),
        ],
    )
}

fn organic() -> FictionContent {
    FictionContent::new(
        ThemeId::Organic,
        "Heart of the Verdant Maze",
        "The hedge maze has grown over its own paths. Somewhere inside, the heartwood still beats.",
        "forest_gate",
        vec![
            Scene::new(
                "forest_gate",
                "Ivy curls back from an arch of living oak. The maze exhales warm green air.",
                vec![
                    Choice::new("Enter the glade", "glade"),
                    Choice::new("Dig under the hollow stump", "hollow_stump").grants("Bone Key"),
                ],
            ),
            Scene::new(
                "hollow_stump",
                "Wrapped in roots lies a Bone Key, smooth as river glass.",
                vec![Choice::new("Walk on to the glade", "glade")],
            ),
            Scene::new(
                "glade",
                "Paths braid away from the glade. A gate of woven thorns stays stubbornly shut.",
                vec![
                    Choice::new("Follow the fireflies", "firefly_grove").grants("Firefly Jar"),
                    Choice::new("Climb down the sinkhole", "sinkhole"),
                    Choice::new("Fit the key to the thorn gate", "sealed_arbor").requires("Bone Key"),
                ],
            ),
            Scene::new(
                "firefly_grove",
                "Fireflies pour into your jar until it glows like a green lantern.",
                vec![
                    Choice::new("Drift back to the glade", "glade"),
                    Choice::new("Slip into the root burrow", "root_burrow"),
                ],
            ),
            Scene::new(
                "sinkhole",
                "The sinkhole breathes cold mist. Pale stones gleam in the silt.",
                vec![
                    Choice::new("Climb back to the glade", "glade"),
                    Choice::new("Sift the silt", "river_cache").grants("River Stone"),
                ],
            ),
            Scene::new(
                "river_cache",
                "A River Stone, worn round by water that left long ago.",
                vec![Choice::new("Climb out of the sinkhole", "sinkhole")],
            ),
            Scene::new(
                "sealed_arbor",
                "Inside the arbor a Thorn Blade grows straight from the trellis, waiting to be cut free.",
                vec![
                    Choice::new("Cut the Thorn Blade free", "arbor_path").grants("Thorn Blade"),
                    Choice::new("Leave the arbor in peace", "glade"),
                ],
            ),
            Scene::new(
                "arbor_path",
                "The blade weeps green sap. A path behind the trellis bends toward the maze's heart.",
                vec![
                    Choice::new("Walk toward the elder treant", "elder_treant"),
                    Choice::new("Slip into the root burrow", "root_burrow"),
                ],
            ),
            Scene::new(
                "root_burrow",
                "The burrow forks: one tunnel is black as loam, the other ends in a groan of settling earth.",
                vec![
                    Choice::new("Light the dark tunnel with the jar", "deep_grotto")
                        .requires("Firefly Jar"),
                    Choice::new("Crawl into the groaning earth", "endless_dark"),
                ],
            ),
            Scene::new(
                "deep_grotto",
                "Firefly light catches a cathedral of roots. The treant's clearing opens ahead.",
                vec![
                    Choice::new("Approach the elder treant", "elder_treant"),
                    Choice::new("Retreat to the burrow", "root_burrow"),
                ],
            ),
            Scene::new(
                "elder_treant",
                "The elder treant lowers a face of bark and moss. \"A word, a token, or your hurry.\"",
                vec![
                    Choice::new("Speak the maze's old name", "heartwood"),
                    Choice::new("Offer the Thorn Blade", "heartwood").requires("Thorn Blade"),
                    Choice::new("Push past its roots", "endless_dark"),
                ],
            ),
            Scene::terminal(
                "heartwood",
                "The heartwood parts its canopy. Light pools where you stand, and the maze remembers its paths.",
                Ending::Win,
            ),
            Scene::terminal(
                "endless_dark",
                "The earth closes overhead without malice or echo. The maze grows on.",
                Ending::Lose,
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::content;
    use pixel_arcade_core::ThemeId;

    #[test]
    fn bundles_round_trip_through_bincode() {
        for theme in ThemeId::ALL {
            let bundle = content(theme);
            let bytes = bincode::serialize(&bundle).expect("serialize");
            let restored: crate::types::FictionContent =
                bincode::deserialize(&bytes).expect("deserialize");
            assert_eq!(restored, bundle);
        }
    }

    #[test]
    fn every_theme_ships_a_story() {
        for theme in ThemeId::ALL {
            let bundle = content(theme);
            assert_eq!(bundle.theme(), theme);
            assert!(bundle.scenes().len() >= 12, "{theme} story is too small");
            assert!(bundle.find_scene(bundle.start_scene()).is_some());
            assert!(!bundle.title().is_empty());
            assert!(!bundle.intro().is_empty());
        }
    }
}
