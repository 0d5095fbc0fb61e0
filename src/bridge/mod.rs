//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod analysis_entry;
mod classifier_entry;
mod info;
mod poses;

pub use poses::{
    // WASM entry points
    begin_recording,
    push_pose_frame,
    recorded_frames,
    // Internal API
    with_recording,
    // Constants
    WIRE_FRAME_LEN,
};

pub use analysis_entry::{analyze_recording, set_analyzer_config, MISMATCH_ERROR};

pub use classifier_entry::{
    classifier_input, is_classifier_input_ready, process_classifier_frame,
    reset_classifier_buffer, set_classifier_ready,
};

pub use info::{exercise_info_message, set_seen_info_flags};
