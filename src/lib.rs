//! # adv-mode
//!
//! Offline annotation of visual novel scripts for ADV-mode rendering.
//!
//! A script is a sequence of lines mixing dialogue text runs (`^...^`) with pacing
//! markers (`@` click-wait, `\` page-wait, `/` newline suppression). The engine needs
//! to know, for every pacing marker, how much text follows it, whether it ends its line,
//! and which leading whitespace belongs to the next text run. Computing that at runtime
//! is expensive, so this crate precomputes it and writes the result back into the script.
//!
//! See [adv::pipeline] for the annotation passes and [adv::processor] for the
//! end-to-end conversion API.

pub mod adv;
