use blocky_engine::{Block, Move, Palette};
use rand::Rng;

use crate::Player;

/// Session parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Number of full rounds before the game ends.
    pub max_turns: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { max_turns: 10 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    Playing,
    GameOver,
}

/// Result of polling the current player once.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum TurnOutcome {
    /// The player has no move yet; the turn stays with them.
    Waiting,
    /// The move was invalid on the board; the turn stays with the player.
    Rejected(Move),
    /// The move was applied and the turn passed to the next player.
    Applied(Move),
    /// The game is already over.
    Finished,
}

/// A game in progress: the authoritative board, the players and whose turn it is.
///
/// Players only ever see the board by shared reference; their moves are
/// applied here.
///
/// # Example
///
/// ```
/// use blocky_engine::{Block, Palette};
/// use blocky_player::{GameSession, SessionConfig, create_players};
///
/// let palette = Palette::default();
/// let mut rng = rand::rng();
/// let board = Block::random(3, &palette, &mut rng);
/// let players = create_players(0, 1, &[4], &palette, &mut rng).unwrap();
///
/// let mut session = GameSession::new(board, players, SessionConfig { max_turns: 3 });
/// session.play_automated(&palette, &mut rng);
/// assert!(session.state().is_game_over());
/// assert_eq!(session.round(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Block,
    players: Vec<Player>,
    config: SessionConfig,
    state: GameState,
    current: usize,
    round: usize,
    moves_made: Vec<usize>,
    passes: Vec<usize>,
}

impl GameSession {
    /// Starts a game. It is over immediately if there are no players or no turns.
    #[must_use]
    pub fn new(board: Block, players: Vec<Player>, config: SessionConfig) -> Self {
        let state = if players.is_empty() || config.max_turns == 0 {
            GameState::GameOver
        } else {
            GameState::Playing
        };
        log::info!(
            "starting game: {} players, max depth {}, {} rounds",
            players.len(),
            board.max_depth(),
            config.max_turns
        );
        Self {
            moves_made: vec![0; players.len()],
            passes: vec![0; players.len()],
            board,
            players,
            config,
            state,
            current: 0,
            round: 0,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Block {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Mutable access to a player, for routing UI input to human agents.
    pub fn player_mut(&mut self, id: usize) -> Option<&mut Player> {
        self.players.get_mut(id)
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The player whose turn it is, or `None` once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.state
            .is_playing()
            .then(|| &self.players[self.current])
    }

    /// Number of completed rounds.
    #[must_use]
    pub fn round(&self) -> usize {
        self.round
    }

    /// Applied non-pass moves, indexed by player id.
    #[must_use]
    pub fn moves_made(&self) -> &[usize] {
        &self.moves_made
    }

    /// Passes, indexed by player id.
    #[must_use]
    pub fn passes(&self) -> &[usize] {
        &self.passes
    }

    /// Each player's current goal score, indexed by player id.
    #[must_use]
    pub fn scores(&self) -> Vec<usize> {
        self.players
            .iter()
            .map(|player| player.score(&self.board))
            .collect()
    }

    /// Polls the current player once and applies the returned move.
    ///
    /// Only a successfully applied move (a pass included) advances the turn.
    pub fn play_turn<R>(&mut self, palette: &Palette, rng: &mut R) -> TurnOutcome
    where
        R: Rng + ?Sized,
    {
        if self.state.is_game_over() {
            return TurnOutcome::Finished;
        }
        let player = &mut self.players[self.current];
        let Some(mv) = player.generate_move(&self.board, palette, rng) else {
            return TurnOutcome::Waiting;
        };
        if !mv.apply(&mut self.board, player.colour(), palette, rng) {
            log::debug!("player {} move rejected: {mv}", player.id());
            return TurnOutcome::Rejected(mv);
        }
        log::debug!(
            "round {}: player {} ({}) played {mv}",
            self.round,
            player.id(),
            player.agent().kind()
        );
        if mv.action().is_pass() {
            self.passes[self.current] += 1;
        } else {
            self.moves_made[self.current] += 1;
        }
        self.advance();
        TurnOutcome::Applied(mv)
    }

    /// Plays until the game ends or a human player has to provide input.
    ///
    /// Automated players are triggered at the start of each of their turns.
    pub fn play_automated<R>(&mut self, palette: &Palette, rng: &mut R) -> GameState
    where
        R: Rng + ?Sized,
    {
        while self.state.is_playing() {
            let player = &mut self.players[self.current];
            if player.agent().is_human() {
                break;
            }
            player.trigger();
            if self.play_turn(palette, rng).is_waiting() {
                break;
            }
        }
        self.state
    }

    fn advance(&mut self) {
        self.current += 1;
        if self.current < self.players.len() {
            return;
        }
        self.current = 0;
        self.round += 1;
        if self.round >= self.config.max_turns {
            self.state = GameState::GameOver;
            log::info!("game over after {} rounds, scores {:?}", self.round, self.scores());
        }
    }
}

#[cfg(test)]
mod tests {
    use blocky_engine::{Action, BlockPath, Colour};
    use blocky_evaluator::goal::{Goal, GoalKind};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::{Agent, HumanAgent, Input, RandomAgent, SmartAgent, create_players};

    fn human_and_random() -> Vec<Player> {
        vec![
            Player::new(
                0,
                Goal::new(GoalKind::Blob, Colour::REAL_RED),
                Agent::Human(HumanAgent::new()),
            ),
            Player::new(
                1,
                Goal::new(GoalKind::Blob, Colour::OLD_OLIVE),
                Agent::Random(RandomAgent::new()),
            ),
        ]
    }

    #[test]
    fn test_empty_session_is_over() {
        let session = GameSession::new(
            Block::new(1, Colour::REAL_RED),
            Vec::new(),
            SessionConfig::default(),
        );
        assert!(session.state().is_game_over());
        assert!(session.current_player().is_none());
    }

    #[test]
    fn test_human_waits_then_plays() {
        let palette = Palette::default();
        let mut rng = Pcg32::seed_from_u64(0);
        let board = Block::new(1, Colour::PACIFIC_POINT);
        let mut session = GameSession::new(board, human_and_random(), SessionConfig::default());

        assert_eq!(session.play_turn(&palette, &mut rng), TurnOutcome::Waiting);
        assert_eq!(session.play_automated(&palette, &mut rng), GameState::Playing);
        assert_eq!(session.current_player().unwrap().id(), 0);

        let human = session.player_mut(0).unwrap();
        assert!(human.process_input(Input::Pointer((0, 0))));
        assert!(human.process_input(Input::Action(Action::Smash)));
        let outcome = session.play_turn(&palette, &mut rng);
        assert_eq!(
            outcome,
            TurnOutcome::Applied(Move::new(Action::Smash, BlockPath::root()))
        );
        assert!(!session.board().is_leaf());
        assert_eq!(session.moves_made(), [1, 0]);
        assert_eq!(session.current_player().unwrap().id(), 1);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let palette = Palette::default();
        let mut rng = Pcg32::seed_from_u64(0);
        let board = Block::new(1, Colour::PACIFIC_POINT);
        let mut session = GameSession::new(board, human_and_random(), SessionConfig::default());

        let human = session.player_mut(0).unwrap();
        human.process_input(Input::Pointer((0, 0)));
        human.process_input(Input::Action(Action::RotateClockwise));
        assert!(session.play_turn(&palette, &mut rng).is_rejected());
        assert_eq!(session.current_player().unwrap().id(), 0);
        assert_eq!(session.board(), &Block::new(1, Colour::PACIFIC_POINT));
    }

    #[test]
    fn test_automated_game_runs_all_rounds() {
        let palette = Palette::default();
        let mut rng = Pcg32::seed_from_u64(12);
        let board = Block::random(3, &palette, &mut rng);
        let players = create_players(0, 2, &[3, 6], &palette, &mut rng).unwrap();
        let config = SessionConfig { max_turns: 4 };
        let mut session = GameSession::new(board, players, config);

        assert_eq!(session.play_automated(&palette, &mut rng), GameState::GameOver);
        assert_eq!(session.round(), 4);
        assert_eq!(session.scores().len(), 4);
        for id in 0..4 {
            assert_eq!(session.moves_made()[id] + session.passes()[id], 4, "player {id}");
        }
        // Random agents never pass on a board this size.
        assert_eq!(session.passes()[..2], [0, 0]);
        assert_eq!(session.play_turn(&palette, &mut rng), TurnOutcome::Finished);
    }

    #[test]
    fn test_smart_pass_counts_as_turn() {
        let palette = Palette::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let board = Block::new(2, Colour::DAFFODIL_DELIGHT);
        let players = vec![Player::new(
            0,
            Goal::new(GoalKind::Blob, Colour::DAFFODIL_DELIGHT),
            Agent::Smart(SmartAgent::new(10)),
        )];
        let mut session = GameSession::new(board, players, SessionConfig { max_turns: 2 });
        assert!(session.play_automated(&palette, &mut rng).is_game_over());
        assert_eq!(session.passes(), [2]);
        assert_eq!(session.scores(), [16]);
    }
}
