//! Mindwell - Conversational mental wellbeing assistant
//!
//! A fixed six-step dialogue over pre-processed country statistics. The
//! dialogue engine in `session` is free of I/O; `repl` renders its utterances
//! on a blocking stdin/stdout loop.

pub mod datasets;
pub mod messages;
pub mod repl;
pub mod session;
