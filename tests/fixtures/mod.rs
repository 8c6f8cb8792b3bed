//! Shared test fixtures for keymap generation tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use prk_keymap_generator::config::Config;
use prk_keymap_generator::models::Row;
use prk_keymap_generator::services::LayerInput;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builds a row from string slices.
pub fn row(tokens: &[&str]) -> Row {
    tokens.iter().map(|t| (*t).to_string()).collect()
}

/// A two-layer 3x5 Corne-style half: full alpha rows plus a short thumb row.
pub fn corne_half_layers() -> Vec<LayerInput> {
    vec![
        LayerInput::new(
            "default",
            vec![
                row(&["KC_Q", "KC_W", "KC_E", "KC_R", "KC_T"]),
                row(&["KC_A", "KC_S", "KC_D", "KC_F", "KC_G"]),
                row(&["KC_Z", "KC_X", "KC_C", "KC_V", "KC_B"]),
                row(&["KC_LGUI", "LOWER", "KC_SPC"]),
            ],
        ),
        LayerInput::new(
            "lower",
            vec![
                row(&["KC_1", "KC_2", "KC_3", "KC_4", "KC_5"]),
                row(&["KC_TAB"]),
                row(&[]),
                row(&["KC_LGUI", "LOWER", "KC_SPC"]),
            ],
        ),
    ]
}

/// Answer script for the interactive prompts matching `corne_half_layers`.
pub fn corne_half_answers() -> String {
    "\
y
D4, C6, D7, E6
F4, F5, F6, F7, B1
y
default
KC_Q, KC_W, KC_E, KC_R, KC_T
KC_A, KC_S, KC_D, KC_F, KC_G
KC_Z, KC_X, KC_C, KC_V, KC_B
KC_LGUI, LOWER, KC_SPC
n
y
lower
KC_1, KC_2, KC_3, KC_4, KC_5
KC_TAB

KC_LGUI, LOWER, KC_SPC
NO
n
"
    .to_string()
}

/// Expected script for `corne_half_answers`.
pub const CORNE_HALF_SCRIPT: &str = "\
while !$mutex
  relinquish
end

kbd = Keyboard.new

kbd.split = true

kbd.init_pins(
  [ 4, 5, 6, 7 ],
  [ 29, 28, 27, 26, 22 ]
)

kbd.add_layer :default, %i[
  KC_Q KC_W KC_E KC_R KC_T
  KC_A KC_S KC_D KC_F KC_G
  KC_Z KC_X KC_C KC_V KC_B
  KC_NO KC_LGUI LOWER KC_SPC KC_NO
]

kbd.add_layer :lower, %i[
  KC_1 KC_2 KC_3 KC_4 KC_5
  KC_NO KC_NO KC_TAB KC_NO KC_NO
  KC_NO KC_NO KC_NO KC_NO KC_NO
  KC_NO KC_LGUI LOWER KC_SPC KC_NO
]

kbd.define_mod_key :LOWER, [ :KC_NO, :lower, 120, 150 ]

kbd.start!
";

/// Creates an isolated config directory, optionally with a config file.
///
/// Returns the directory path and the `TempDir` guard (keep it alive).
pub fn temp_config_dir(config: Option<&Config>) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

    if let Some(config) = config {
        config
            .save_to(&config_dir.join("config.toml"))
            .expect("Failed to write config");
    }

    (config_dir, temp_dir)
}
