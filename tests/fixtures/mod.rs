//! Test fixtures shared by the integration tests

#![allow(dead_code)]

use elo_rank::{Rank, Rateable};

/// Host entity with its own rank field, as an application would define it
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub elo_rank: Option<Rank>,
    pub rank_writes: u32,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            elo_rank: None,
            rank_writes: 0,
        }
    }

    pub fn ranked(name: &str, rank: Rank) -> Self {
        Self {
            elo_rank: Some(rank),
            ..Self::new(name)
        }
    }
}

impl Rateable for Player {
    fn rank(&self) -> Option<Rank> {
        self.elo_rank
    }

    fn set_rank(&mut self, rank: Rank) {
        self.elo_rank = Some(rank);
        self.rank_writes += 1;
    }
}

/// Build a roster of players with the given ranks
pub fn roster(ranks: &[Rank]) -> Vec<Player> {
    ranks
        .iter()
        .enumerate()
        .map(|(i, rank)| Player::ranked(&format!("player{}", i + 1), *rank))
        .collect()
}
