// ABOUTME: Fixed phrase lexicons for AI-slop, jargon, and engagement heuristics
// ABOUTME: All tables are immutable statics shared safely across concurrent requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

//! Phrase lexicons backing the quality heuristics.
//!
//! Matching is always case-insensitive substring search against the lowercased
//! input, and each phrase counts at most once. The lists are deliberately
//! short: they exist to catch the most recognizable tells, not to be a
//! comprehensive style guide.

/// Clichés and filler symptomatic of generic machine-generated prose
pub const SLOP_PHRASES: &[&str] = &[
    "delve",
    "tapestry",
    "embark",
    "unleash",
    "unlock",
    "game-changer",
    "game changer",
    "revolutionize",
    "elevate your",
    "in the realm of",
    "navigate the landscape",
    "it's important to note",
    "at the end of the day",
    "take it to the next level",
    "the possibilities are endless",
    "look no further",
    "in today's digital age",
];

/// Corporate buzzwords penalized separately (and more lightly) than slop
pub const JARGON_PHRASES: &[&str] = &[
    "synergy",
    "leverage",
    "paradigm",
    "circle back",
    "touch base",
    "low-hanging fruit",
    "move the needle",
    "thought leader",
    "value-add",
    "deep dive",
    "bandwidth",
    "core competency",
    "best-in-class",
    "win-win",
];

/// Canned openings that flag a post as generic regardless of length
pub const GENERIC_OPENERS: &[&str] = &[
    "in today's world",
    "in today's fast-paced world",
    "now more than ever",
    "we all know",
    "as we all know",
    "it goes without saying",
    "in this day and age",
    "since the dawn of time",
];

/// Markers that count as a concrete, specific example
pub const SPECIFIC_EXAMPLE_MARKERS: &[&str] = &[
    "for example",
    "for instance",
    "e.g.",
    "case study",
    "last week",
    "last month",
    "yesterday",
    "this morning",
    "specifically",
    "such as",
    "i tried",
    "we shipped",
];

/// Opening-hook patterns checked against the first line of a post
pub const HOOK_OPENERS: &[&str] = &[
    "how ",
    "why ",
    "what ",
    "imagine",
    "picture this",
    "here's",
    "stop ",
    "unpopular opinion",
    "hot take",
    "the secret",
    "i spent",
    "i learned",
    "most people",
];

/// Generic action verbs counted as an engagement signal
pub const ACTION_VERBS: &[&str] = &[
    "learn",
    "discover",
    "try",
    "start",
    "build",
    "join",
    "share",
    "grab",
    "check out",
    "download",
    "sign up",
    "save",
    "follow",
];
