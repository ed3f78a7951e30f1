use std::path::PathBuf;

use rand::Rng as _;

use crate::util::Output;

use super::game::GameArg;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AutoPlayArg {
    #[clap(flatten)]
    game: GameArg,
    /// Seed for the random number generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path for the JSON summary (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: AutoPlayArg) -> anyhow::Result<()> {
    let AutoPlayArg { game, seed, output } = arg;
    game.validate()?;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    log::info!("playing with seed {seed}");
    let summary = game.play(seed)?;
    for player in &summary.players {
        log::info!(
            "player {} ({}): {} -> {}",
            player.id,
            player.agent,
            player.description,
            player.score
        );
    }
    Output::save_json(&summary, output)
}
