use std::iter;

use blocky_engine::{Block, Colour, Move, Palette};
use blocky_evaluator::{
    TooManyGoalsError,
    goal::{Goal, generate_goals},
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{HumanAgent, Input, RandomAgent, SmartAgent};

/// The kind of agent controlling a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    #[display("human")]
    Human,
    #[display("random")]
    Random,
    #[display("smart")]
    Smart,
}

/// The move-generation strategy of a player.
#[derive(Debug, Clone, derive_more::IsVariant)]
pub enum Agent {
    Human(HumanAgent),
    Random(RandomAgent),
    Smart(SmartAgent),
}

impl Agent {
    #[must_use]
    pub fn kind(&self) -> AgentKind {
        match self {
            Self::Human(_) => AgentKind::Human,
            Self::Random(_) => AgentKind::Random,
            Self::Smart(_) => AgentKind::Smart,
        }
    }
}

/// A participant in the game: an id, a goal and an agent.
#[derive(Debug, Clone)]
pub struct Player {
    id: usize,
    goal: Goal,
    agent: Agent,
}

impl Player {
    #[must_use]
    pub fn new(id: usize, goal: Goal, agent: Agent) -> Self {
        Self { id, goal, agent }
    }

    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    /// The colour this player paints with.
    #[must_use]
    pub fn colour(&self) -> Colour {
        self.goal.colour()
    }

    #[must_use]
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn agent_mut(&mut self) -> &mut Agent {
        &mut self.agent
    }

    #[must_use]
    pub fn score(&self, board: &Block) -> usize {
        self.goal.score(board)
    }

    /// Lets an automated agent produce its next move. No-op for humans.
    pub fn trigger(&mut self) {
        match &mut self.agent {
            Agent::Human(_) => {}
            Agent::Random(agent) => agent.trigger(),
            Agent::Smart(agent) => agent.trigger(),
        }
    }

    /// Routes a UI event to a human agent.
    ///
    /// Returns `false` and ignores the event for automated agents.
    pub fn process_input(&mut self, input: Input) -> bool {
        match &mut self.agent {
            Agent::Human(agent) => {
                agent.process_input(input);
                true
            }
            Agent::Random(_) | Agent::Smart(_) => false,
        }
    }

    /// Polls the agent for a move. `board` is never modified.
    ///
    /// `None` means the agent has no move yet: a human without a complete
    /// selection, or an automated agent that has not been triggered.
    pub fn generate_move<R>(
        &mut self,
        board: &Block,
        palette: &Palette,
        rng: &mut R,
    ) -> Option<Move>
    where
        R: Rng + ?Sized,
    {
        match &mut self.agent {
            Agent::Human(agent) => agent.generate_move(board),
            Agent::Random(agent) => agent.generate_move(board, &self.goal, palette, rng),
            Agent::Smart(agent) => agent.generate_move(board, &self.goal, palette, rng),
        }
    }
}

/// Creates the players of a game.
///
/// Goals are generated once for all players, so they share a goal kind and
/// have distinct colours. Players are ordered humans, then random agents, then
/// smart agents with the given difficulties, and numbered from 0 in that order.
///
/// # Example
///
/// ```
/// use blocky_engine::Palette;
/// use blocky_player::{AgentKind, create_players};
///
/// let mut rng = rand::rng();
/// let players = create_players(1, 1, &[3, 5], &Palette::default(), &mut rng).unwrap();
/// let kinds = players.iter().map(|p| p.agent().kind()).collect::<Vec<_>>();
/// assert_eq!(
///     kinds,
///     [AgentKind::Human, AgentKind::Random, AgentKind::Smart, AgentKind::Smart]
/// );
///
/// assert!(create_players(3, 2, &[], &Palette::default(), &mut rng).is_err());
/// ```
pub fn create_players<R>(
    num_human: usize,
    num_random: usize,
    smart_difficulties: &[usize],
    palette: &Palette,
    rng: &mut R,
) -> Result<Vec<Player>, TooManyGoalsError>
where
    R: Rng + ?Sized,
{
    let count = num_human + num_random + smart_difficulties.len();
    let goals = generate_goals(count, palette, rng)?;
    Ok(assign_agents(goals, num_human, num_random, smart_difficulties))
}

/// Pairs pre-generated goals with agents, in the order used by [`create_players`].
///
/// # Panics
///
/// Panics if the number of goals differs from the number of agents requested.
#[must_use]
pub fn assign_agents(
    goals: Vec<Goal>,
    num_human: usize,
    num_random: usize,
    smart_difficulties: &[usize],
) -> Vec<Player> {
    assert_eq!(
        goals.len(),
        num_human + num_random + smart_difficulties.len(),
        "one goal per player is required"
    );
    let agents = iter::repeat_with(|| Agent::Human(HumanAgent::new()))
        .take(num_human)
        .chain(iter::repeat_with(|| Agent::Random(RandomAgent::new())).take(num_random))
        .chain(
            smart_difficulties
                .iter()
                .map(|&difficulty| Agent::Smart(SmartAgent::new(difficulty))),
        );
    goals
        .into_iter()
        .zip(agents)
        .enumerate()
        .map(|(id, (goal, agent))| Player::new(id, goal, agent))
        .collect()
}
