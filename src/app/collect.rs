//! Interactive question sequence for a new keymap.

use std::io::{BufRead, Write};
use tracing::{debug, info};

use super::prompt::{split_list, PromptError, Prompter};
use crate::models::Row;
use crate::services::LayerInput;

const SPLIT_PROMPT: &str = "Is split keyboard? [y/N] : ";
const ROW_PINS_PROMPT: &str = "MATRIX_ROW_PINS in config.h : ";
const COL_PINS_PROMPT: &str = "MATRIX_COL_PINS in config.h : ";
const ADD_LAYER_PROMPT: &str = "add layer ? [y/N] : ";
const LAYER_NAME_PROMPT: &str = "layer name: ";
const ADD_ROW_PROMPT: &str = "add Row or n(o) : ";

/// Everything the user typed, before pins are resolved or rows padded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawKeymapInput {
    /// Answer to the split question
    pub is_split: bool,
    /// Row pin names as typed
    pub row_pins: Vec<String>,
    /// Column pin names as typed
    pub col_pins: Vec<String>,
    /// Layers in the order they were entered
    pub layers: Vec<LayerInput>,
}

fn parse_split_answer(answer: &str) -> Option<bool> {
    match answer {
        "y" | "Y" | "Yes" | "YES" => Some(true),
        "n" | "N" | "No" | "NO" => Some(false),
        _ => None,
    }
}

fn parse_add_layer_answer(answer: &str) -> Option<bool> {
    match answer {
        "y" | "Y" => Some(true),
        "n" | "N" => Some(false),
        _ => None,
    }
}

fn is_end_of_rows(answer: &str) -> bool {
    matches!(answer, "n" | "N" | "no" | "No" | "NO")
}

/// Runs the full question sequence.
pub fn collect_keymap<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<RawKeymapInput, PromptError> {
    let is_split = prompter.ask_until(SPLIT_PROMPT, parse_split_answer)?;
    let row_pins = prompter.ask_list(ROW_PINS_PROMPT)?;
    let col_pins = prompter.ask_list(COL_PINS_PROMPT)?;
    debug!(is_split, ?row_pins, ?col_pins, "collected matrix settings");

    let mut layers = Vec::new();
    while prompter.ask_until(ADD_LAYER_PROMPT, parse_add_layer_answer)? {
        let name = prompter.ask(LAYER_NAME_PROMPT)?;
        let rows = collect_rows(prompter)?;
        debug!(%name, rows = rows.len(), "collected layer");
        layers.push(LayerInput::new(name, rows));
    }
    info!(layers = layers.len(), "finished collecting keymap");

    Ok(RawKeymapInput {
        is_split,
        row_pins,
        col_pins,
        layers,
    })
}

fn collect_rows<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<Row>, PromptError> {
    let mut rows = Vec::new();
    loop {
        let answer = prompter.ask(ADD_ROW_PROMPT)?;
        if is_end_of_rows(&answer) {
            return Ok(rows);
        }
        rows.push(split_list(&answer));
    }
}
