use anyhow::{Context as _, ensure};
use blocky_engine::{Block, Colour, Palette};
use blocky_evaluator::goal::{GoalKind, generate_goals, generate_goals_of_kind};
use blocky_player::{Agent, AgentKind, GameSession, SessionConfig, assign_agents};
use rand::SeedableRng as _;
use rand_pcg::Pcg32;
use serde::Serialize;

/// Game setup shared by every subcommand.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GameArg {
    /// Maximum depth of the board; the board has 2^depth unit cells per side
    #[arg(long, default_value_t = 3)]
    max_depth: usize,
    /// Number of random players
    #[arg(long, default_value_t = 1)]
    random: usize,
    /// Add a smart player with the given difficulty (repeatable)
    #[arg(long = "smart", value_name = "DIFFICULTY")]
    smart: Vec<usize>,
    /// Number of rounds each player gets
    #[arg(long, default_value_t = SessionConfig::default().max_turns)]
    max_turns: usize,
    /// Goal kind shared by all players (random per game when omitted)
    #[arg(long)]
    goal: Option<GoalKind>,
    /// Comma-separated `#rrggbb` colours (the four game colours when omitted)
    #[arg(long)]
    palette: Option<Palette>,
}

impl GameArg {
    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.max_depth <= Block::DEPTH_LIMIT,
            "--max-depth {} exceeds the limit of {}",
            self.max_depth,
            Block::DEPTH_LIMIT
        );
        ensure!(
            self.num_players() > 0,
            "at least one --random or --smart player is required"
        );
        Ok(())
    }

    pub(crate) fn palette(&self) -> Palette {
        self.palette.clone().unwrap_or_default()
    }

    fn num_players(&self) -> usize {
        self.random + self.smart.len()
    }

    /// Plays one game to completion with a generator seeded by `seed`.
    pub(crate) fn play(&self, seed: u64) -> anyhow::Result<GameSummary> {
        let palette = self.palette();
        let mut rng = Pcg32::seed_from_u64(seed);
        let board = Block::random(self.max_depth, &palette, &mut rng);
        let goals = match self.goal {
            Some(kind) => generate_goals_of_kind(kind, self.num_players(), &palette, &mut rng),
            None => generate_goals(self.num_players(), &palette, &mut rng),
        }
        .context("Failed to assign goals")?;
        let players = assign_agents(goals, 0, self.random, &self.smart);
        let config = SessionConfig {
            max_turns: self.max_turns,
        };

        let mut session = GameSession::new(board, players, config);
        session.play_automated(&palette, &mut rng);
        Ok(GameSummary::new(seed, self.max_depth, &session))
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct GameSummary {
    pub seed: u64,
    pub max_depth: usize,
    pub rounds: usize,
    pub players: Vec<PlayerSummary>,
    /// Ids of the players with the highest score.
    pub winners: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct PlayerSummary {
    pub id: usize,
    pub agent: AgentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<usize>,
    pub goal: GoalKind,
    pub colour: Colour,
    pub description: String,
    pub score: usize,
    pub moves_made: usize,
    pub passes: usize,
}

impl GameSummary {
    fn new(seed: u64, max_depth: usize, session: &GameSession) -> Self {
        let scores = session.scores();
        let players = session
            .players()
            .iter()
            .map(|player| PlayerSummary {
                id: player.id(),
                agent: player.agent().kind(),
                difficulty: match player.agent() {
                    Agent::Smart(agent) => Some(agent.difficulty()),
                    Agent::Human(_) | Agent::Random(_) => None,
                },
                goal: player.goal().kind(),
                colour: player.colour(),
                description: player.goal().description(),
                score: scores[player.id()],
                moves_made: session.moves_made()[player.id()],
                passes: session.passes()[player.id()],
            })
            .collect::<Vec<_>>();
        let best = scores.iter().copied().max();
        let winners = players
            .iter()
            .filter(|player| Some(player.score) == best)
            .map(|player| player.id)
            .collect();
        Self {
            seed,
            max_depth,
            rounds: session.round(),
            players,
            winners,
        }
    }
}
