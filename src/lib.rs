//! Liftcheck Web - barbell rep analysis from browser pose detection
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

pub mod analysis;
mod bridge;
pub mod classifier;

use wasm_bindgen::prelude::*;

// Re-export the JS-facing recording flow and the pure analysis API
pub use analysis::{
    analyze, analyze_named, AnalysisResult, AnalyzerConfig, Exercise, FramePose, Joint, Keypoint,
};
pub use bridge::{analyze_recording, begin_recording, push_pose_frame};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("Liftcheck analysis module loaded");
}
