use std::path::PathBuf;

use anyhow::ensure;
use blocky_player::AgentKind;
use blocky_stats::descriptive::DescriptiveStats;
use rand::Rng as _;
use serde::Serialize;

use crate::util::Output;

use super::game::{GameArg, GameSummary};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    #[clap(flatten)]
    game: GameArg,
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: usize,
    /// Seed of the first game; game `i` uses `seed + i` (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path for the JSON statistics (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
struct SimulationSummary {
    games: usize,
    first_seed: u64,
    players: Vec<PlayerStats>,
}

#[derive(Debug, Clone, Serialize)]
struct PlayerStats {
    id: usize,
    agent: AgentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    difficulty: Option<usize>,
    /// Games in which this player had the highest score, ties included.
    wins: usize,
    scores: DescriptiveStats,
}

pub(crate) fn run(arg: SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        game,
        games,
        seed,
        output,
    } = arg;
    game.validate()?;
    ensure!(games > 0, "--games must be at least 1");

    let first_seed = seed.unwrap_or_else(|| rand::rng().random());
    let summaries = (0..games as u64)
        .map(|i| {
            let seed = first_seed.wrapping_add(i);
            log::debug!("game {i}: seed {seed}");
            game.play(seed)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let summary = summarize(first_seed, &summaries);
    Output::save_json(&summary, output)
}

fn summarize(first_seed: u64, summaries: &[GameSummary]) -> SimulationSummary {
    let num_players = summaries.first().map_or(0, |s| s.players.len());
    let players = (0..num_players)
        .filter_map(|id| {
            let template = &summaries[0].players[id];
            let scores = summaries.iter().map(|s| s.players[id].score);
            Some(PlayerStats {
                id,
                agent: template.agent,
                difficulty: template.difficulty,
                wins: summaries.iter().filter(|s| s.winners.contains(&id)).count(),
                scores: DescriptiveStats::from_scores(scores)?,
            })
        })
        .collect();
    SimulationSummary {
        games: summaries.len(),
        first_seed,
        players,
    }
}
