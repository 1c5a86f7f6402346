// Domain layer module exports
// Domain is independent of any host or presentation concerns

pub mod scoreboard;
