//! First-use exercise info messages
//!
//! Each exercise shows a framing/countdown explainer the first time it is
//! selected. Persistence lives on the JS side; the flags are handed in once
//! at startup and tracked here for the session.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::analysis::Exercise;

const BENCH_INFO: &str = "Benvenuto, consiglio una ripresa dell'esercizio da dietro \
in modo da permettere un'analisi migliore. Dopo il countdown di 10 secondi inizia la \
registrazione dello schermo; finito l'esercizio attendi qualche secondo per la \
schermata di recap.";

const FRONTAL_INFO: &str = "Benvenuto, consiglio una ripresa dell'esercizio frontale \
in modo da permettere un'analisi migliore. Dopo il countdown di 10 secondi inizia la \
registrazione dello schermo; finito l'esercizio attendi qualche secondo per la \
schermata di recap.";

#[derive(Default)]
struct SeenFlags {
    bench: bool,
    squat: bool,
    deadlift: bool,
}

thread_local! {
    static SEEN: RefCell<SeenFlags> = RefCell::new(SeenFlags::default());
}

/// Seed the seen-flags from whatever JS has persisted
#[wasm_bindgen]
pub fn set_seen_info_flags(bench: bool, squat: bool, deadlift: bool) {
    SEEN.with(|seen| {
        *seen.borrow_mut() = SeenFlags {
            bench,
            squat,
            deadlift,
        };
    });
}

/// Info message for `exercise`, returned only the first time it is asked
/// for. Unknown names get no message.
#[wasm_bindgen]
pub fn exercise_info_message(exercise: &str) -> Option<String> {
    let kind = Exercise::parse(exercise)?;
    SEEN.with(|seen| {
        let mut seen = seen.borrow_mut();
        let (flag, message) = match kind {
            Exercise::Bench => (&mut seen.bench, BENCH_INFO),
            Exercise::Squat => (&mut seen.squat, FRONTAL_INFO),
            Exercise::Deadlift => (&mut seen.deadlift, FRONTAL_INFO),
        };
        if *flag {
            None
        } else {
            *flag = true;
            Some(message.to_string())
        }
    })
}
